use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ERROR_TEXT: &str = "Invalid phone number";

/// Which phone segments the template contains. Any combination is legal;
/// all three off disables masking. Flags missing from a config file are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SegmentConfig {
    #[serde(default)]
    pub with_country: bool,
    #[serde(default)]
    pub with_local: bool,
    #[serde(default)]
    pub with_subscriber: bool,
}

impl SegmentConfig {
    pub const SUBSCRIBER: u8 = 0x01;
    pub const LOCAL: u8 = 0x02;
    pub const COUNTRY: u8 = 0x04;

    pub fn new(with_country: bool, with_local: bool, with_subscriber: bool) -> Self {
        Self {
            with_country,
            with_local,
            with_subscriber,
        }
    }

    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    /// Bitmask adapter, e.g. `LOCAL | SUBSCRIBER`. Unknown bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            with_country: bits & Self::COUNTRY == Self::COUNTRY,
            with_local: bits & Self::LOCAL == Self::LOCAL,
            with_subscriber: bits & Self::SUBSCRIBER == Self::SUBSCRIBER,
        }
    }

    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.with_country {
            bits |= Self::COUNTRY;
        }
        if self.with_local {
            bits |= Self::LOCAL;
        }
        if self.with_subscriber {
            bits |= Self::SUBSCRIBER;
        }
        bits
    }

    pub fn is_disabled(&self) -> bool {
        !self.with_country && !self.with_local && !self.with_subscriber
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::from_bits(Self::LOCAL | Self::SUBSCRIBER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DigitMode {
    /// Switches between the 8- and 9-digit subscriber forms as the text grows.
    #[default]
    Auto,
    Fixed8,
    Fixed9,
}

impl DigitMode {
    /// Legacy ordinal codes: 0 = auto, 1 = eight digits, 2 = nine digits.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Fixed8),
            2 => Ok(Self::Fixed9),
            other => Err(Error::InvalidDigitMode(other.to_string())),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Auto => 0,
            Self::Fixed8 => 1,
            Self::Fixed9 => 2,
        }
    }
}

impl std::str::FromStr for DigitMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "both" => Ok(Self::Auto),
            "fixed8" | "8" => Ok(Self::Fixed8),
            "fixed9" | "9" => Ok(Self::Fixed9),
            _ => Err(Error::InvalidDigitMode(value.to_string())),
        }
    }
}

/// Everything the host hands the engine at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FieldConfig {
    pub segments: SegmentConfig,
    pub digit_mode: DigitMode,
    pub validate_on_exit: bool,
    pub error_text: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            segments: SegmentConfig::default(),
            digit_mode: DigitMode::default(),
            validate_on_exit: true,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

impl FieldConfig {
    pub fn with_segments(mut self, segments: SegmentConfig) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_digit_mode(mut self, digit_mode: DigitMode) -> Self {
        self.digit_mode = digit_mode;
        self
    }

    pub fn with_validate_on_exit(mut self, validate_on_exit: bool) -> Self {
        self.validate_on_exit = validate_on_exit;
        self
    }

    pub fn with_error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = error_text.into();
        self.normalized()
    }

    /// Falls back to the default error text when it is blank.
    pub fn normalized(mut self) -> Self {
        if self.error_text.trim().is_empty() {
            self.error_text = DEFAULT_ERROR_TEXT.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ERROR_TEXT, DigitMode, FieldConfig, SegmentConfig};

    #[test]
    fn bits_round_trip_every_combination() {
        for bits in 0u8..8 {
            assert_eq!(SegmentConfig::from_bits(bits).bits(), bits);
        }
        assert_eq!(
            SegmentConfig::from_bits(SegmentConfig::LOCAL | SegmentConfig::SUBSCRIBER),
            SegmentConfig::new(false, true, true)
        );
        assert!(SegmentConfig::from_bits(0).is_disabled());
    }

    #[test]
    fn defaults_match_local_subscriber_auto() {
        let config = FieldConfig::default();
        assert_eq!(config.segments, SegmentConfig::new(false, true, true));
        assert_eq!(config.digit_mode, DigitMode::Auto);
        assert!(config.validate_on_exit);
        assert_eq!(config.error_text, DEFAULT_ERROR_TEXT);
    }

    #[test]
    fn blank_error_text_falls_back_to_default() {
        let config = FieldConfig::default().with_error_text("  ");
        assert_eq!(config.error_text, DEFAULT_ERROR_TEXT);
    }

    #[test]
    fn rejects_unknown_digit_mode() {
        assert!("seven".parse::<DigitMode>().is_err());
        assert!(DigitMode::from_code(3).is_err());
    }

    #[test]
    fn digit_mode_codes() {
        for mode in [DigitMode::Auto, DigitMode::Fixed8, DigitMode::Fixed9] {
            assert_eq!(DigitMode::from_code(mode.code()).expect("code"), mode);
        }
        assert_eq!("FIXED8".parse::<DigitMode>().expect("mode"), DigitMode::Fixed8);
    }
}

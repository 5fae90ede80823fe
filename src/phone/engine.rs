use super::config::{DigitMode, FieldConfig, SegmentConfig};
use super::template::{build_template, raw_input_cap};
use crate::mask::{MaskedOutput, Template, apply_mask, strip_whitespace, unmasked_text};
use crate::text_edit;
use tracing::debug;

/// A pending edit: `removed` characters at `start` are about to be replaced by
/// `inserted` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextChange {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl TextChange {
    pub fn insert(start: usize, inserted: usize) -> Self {
        Self {
            start,
            removed: 0,
            inserted,
        }
    }

    pub fn remove(start: usize, removed: usize) -> Self {
        Self {
            start,
            removed,
            inserted: 0,
        }
    }

    pub fn replace_all(current_len: usize, inserted: usize) -> Self {
        Self {
            start: 0,
            removed: current_len,
            inserted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { message: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// True when `masked_text` is untouched or fills `template` exactly.
/// An empty template accepts anything.
pub fn is_complete(template: &Template, masked_text: &str) -> bool {
    if template.is_empty() {
        return true;
    }
    let len = text_edit::char_count(masked_text);
    len == 0 || len == template.len()
}

/// Masking state owned by one phone field. Every operation runs synchronously
/// on the caller's thread; edits must be fed in delivery order.
#[derive(Debug, Clone)]
pub struct MaskEngine {
    config: FieldConfig,
    template: Template,
    auto_change_threshold: usize,
    input_limit: Option<usize>,
    ignore_next_mask: bool,
}

impl MaskEngine {
    pub fn new(config: FieldConfig) -> Self {
        let mut engine = Self {
            config,
            template: Template::empty(),
            auto_change_threshold: 0,
            input_limit: None,
            ignore_next_mask: false,
        };
        engine.reconfigure();
        engine
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn auto_change_threshold(&self) -> usize {
        self.auto_change_threshold
    }

    /// Maximum number of characters the host should let into the field.
    /// `None` while masking is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        self.input_limit
    }

    pub fn is_masking_enabled(&self) -> bool {
        !self.template.is_empty()
    }

    pub fn is_mask_suppressed(&self) -> bool {
        self.ignore_next_mask
    }

    pub fn set_segments(&mut self, segments: SegmentConfig) {
        self.config.segments = segments;
        self.reconfigure();
    }

    pub fn set_digit_mode(&mut self, digit_mode: DigitMode) {
        self.config.digit_mode = digit_mode;
        self.reconfigure();
    }

    pub fn set_validate_on_exit(&mut self, validate_on_exit: bool) {
        self.config.validate_on_exit = validate_on_exit;
    }

    /// Makes the next `on_text_changed` pass the text through untouched.
    pub fn suppress_next_mask(&mut self) {
        self.ignore_next_mask = true;
    }

    /// Pre-edit hook. In auto mode, swaps between the 8- and 9-digit forms when
    /// the projected text length crosses the threshold. Returns whether the
    /// template changed.
    pub fn on_text_will_change(&mut self, current_len: usize, change: TextChange) -> bool {
        if self.template.is_empty() || self.config.digit_mode != DigitMode::Auto {
            return false;
        }

        let projected = current_len.saturating_sub(change.removed) + change.inserted;
        let threshold = self.auto_change_threshold;
        let template_len = self.template.len();

        let nine_digits = if projected > threshold && change.inserted > 0 && template_len <= threshold
        {
            true
        } else if projected <= threshold && change.removed > 0 && template_len != threshold {
            false
        } else {
            return false;
        };

        let next = build_template(self.config.segments, nine_digits);
        if next == self.template {
            return false;
        }
        debug!(
            start = change.start,
            projected,
            threshold,
            from = %self.template,
            to = %next,
            "switching phone template"
        );
        self.template = next;
        true
    }

    /// Post-edit hook. Returns the text the host should write back into the
    /// field, with the cursor placed at its end.
    pub fn on_text_changed(&mut self, raw_text: &str) -> MaskedOutput {
        if std::mem::take(&mut self.ignore_next_mask) {
            debug!("mask pass suppressed");
            return passthrough(raw_text);
        }
        if raw_text.is_empty() || self.template.is_empty() {
            return passthrough(raw_text);
        }

        let input = strip_whitespace(unmasked_text(raw_text).as_str());
        apply_mask(&self.template, input.as_str())
    }

    pub fn validate_complete(&self, masked_text: &str) -> bool {
        !self.config.validate_on_exit || is_complete(&self.template, masked_text)
    }

    /// Focus-lost hook. On `Invalid` the host clears the field and shows
    /// the message.
    pub fn on_focus_lost(&self, masked_text: &str) -> ValidationResult {
        if self.validate_complete(masked_text) {
            return ValidationResult::Valid;
        }
        debug!(
            len = text_edit::char_count(masked_text),
            expected = self.template.len(),
            "incomplete phone number"
        );
        ValidationResult::Invalid {
            message: self.config.error_text.clone(),
        }
    }

    fn reconfigure(&mut self) {
        let nine_digits = self.config.digit_mode == DigitMode::Fixed9;
        self.template = build_template(self.config.segments, nine_digits);
        self.auto_change_threshold = raw_input_cap(self.config.segments);
        self.input_limit = if self.template.is_empty() {
            // Unmasked free text; no one-character cap.
            None
        } else {
            Some(self.template.len() + 1)
        };
        debug!(
            template = %self.template,
            threshold = self.auto_change_threshold,
            digit_mode = ?self.config.digit_mode,
            "phone template configured"
        );
    }
}

impl Default for MaskEngine {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

fn passthrough(raw_text: &str) -> MaskedOutput {
    MaskedOutput {
        text: raw_text.to_string(),
        consumed_input_len: text_edit::char_count(raw_text),
    }
}

use super::config::{DigitMode, FieldConfig, SegmentConfig};
use super::engine::{MaskEngine, TextChange, ValidationResult};
use crate::mask::{Template, strip_whitespace, unmasked_text};
use crate::text_edit;
use crate::validators::{Validator, run_validators};
use tracing::debug;

/// A single-line phone field: owns the displayed text, the cursor and the
/// last error, and drives the [`MaskEngine`] hooks around every edit.
pub struct PhoneField {
    engine: MaskEngine,
    text: String,
    cursor: usize,
    error: Option<String>,
    validators: Vec<Validator>,
}

impl PhoneField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            engine: MaskEngine::new(config),
            text: String::new(),
            cursor: 0,
            error: None,
            validators: Vec::new(),
        }
    }

    /// Extra checks run on focus loss against empty or complete values.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn unmasked_text(&self) -> String {
        unmasked_text(self.text.as_str())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = text_edit::clamp_cursor(cursor, self.text.as_str());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    pub fn template(&self) -> &Template {
        self.engine.template()
    }

    pub fn config(&self) -> &FieldConfig {
        self.engine.config()
    }

    pub fn is_complete(&self) -> bool {
        super::engine::is_complete(self.engine.template(), self.text.as_str())
    }

    /// Types `input` at the cursor. Anything past the length limit is
    /// dropped; returns false when nothing was accepted.
    pub fn insert(&mut self, input: &str) -> bool {
        let current_len = text_edit::char_count(self.text.as_str());
        let room = self
            .engine
            .input_limit()
            .map_or(usize::MAX, |limit| limit.saturating_sub(current_len));
        let accepted = text_edit::truncate_chars(input, room);
        if accepted.is_empty() {
            return false;
        }

        let inserted = text_edit::char_count(accepted);
        self.engine
            .on_text_will_change(current_len, TextChange::insert(self.cursor, inserted));

        let mut next = self.text.clone();
        let mut cursor = self.cursor;
        text_edit::insert_str(&mut next, &mut cursor, accepted);
        self.commit(next.as_str());
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert(ch.encode_utf8(&mut buf))
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let current_len = text_edit::char_count(self.text.as_str());
        self.engine
            .on_text_will_change(current_len, TextChange::remove(self.cursor - 1, 1));

        let mut next = self.text.clone();
        let mut cursor = self.cursor;
        text_edit::backspace_char(&mut next, &mut cursor);
        self.commit(next.as_str());
        true
    }

    /// Replaces the whole content, masked like typed input.
    pub fn set_text(&mut self, text: &str) {
        let current_len = text_edit::char_count(self.text.as_str());
        let text = match self.engine.input_limit() {
            Some(limit) => text_edit::truncate_chars(text, limit),
            None => text,
        };
        self.engine.on_text_will_change(
            current_len,
            TextChange::replace_all(current_len, text_edit::char_count(text)),
        );
        self.commit(text);
    }

    /// Replaces the content, skipping exactly one masking pass.
    pub fn set_text_ignoring_mask(&mut self, text: &str) {
        self.engine.suppress_next_mask();
        self.set_text(text);
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Focus-lost handling. Validators see empty and complete values; a
    /// partial one fails before them. An invalid value clears the field and
    /// keeps the message in [`PhoneField::error`].
    pub fn blur(&mut self) -> ValidationResult {
        let mut result = self.engine.on_focus_lost(self.text.as_str());
        if result.is_valid()
            && self.config().validate_on_exit
            && let Err(message) = run_validators(&self.validators, self.text.as_str())
        {
            result = ValidationResult::Invalid { message };
        }

        if let ValidationResult::Invalid { message } = &result {
            debug!(text = %self.text, %message, "clearing invalid phone field");
            self.clear();
            self.error = Some(message.clone());
        }
        result
    }

    pub fn set_segments(&mut self, segments: SegmentConfig) {
        self.engine.set_segments(segments);
        self.remask();
    }

    pub fn set_segment_bits(&mut self, bits: u8) {
        self.set_segments(SegmentConfig::from_bits(bits));
    }

    pub fn set_digit_mode(&mut self, digit_mode: DigitMode) {
        self.engine.set_digit_mode(digit_mode);
        self.remask();
    }

    pub fn set_validate_on_exit(&mut self, validate_on_exit: bool) {
        self.engine.set_validate_on_exit(validate_on_exit);
    }

    fn remask(&mut self) {
        let raw = strip_whitespace(self.unmasked_text().as_str());
        self.set_text(raw.as_str());
    }

    fn commit(&mut self, next: &str) {
        let output = self.engine.on_text_changed(next);
        self.text = output.text;
        self.cursor = text_edit::char_count(self.text.as_str());
        self.error = None;
    }
}

impl Default for PhoneField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

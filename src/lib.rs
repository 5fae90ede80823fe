pub mod error;
pub mod mask;
pub mod phone;
pub mod text_edit;
pub mod validators;

pub use error::{Error, Result};
pub use mask::{MaskToken, MaskedOutput, PlaceholderKind, Template, apply_mask, unmasked_text};
pub use phone::{
    DigitMode, FieldConfig, MaskEngine, PhoneField, SegmentConfig, TextChange, ValidationResult,
    build_template, raw_input_cap,
};

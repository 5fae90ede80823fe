mod config;
mod engine;
mod field;
mod template;

pub use config::{DEFAULT_ERROR_TEXT, DigitMode, FieldConfig, SegmentConfig};
pub use engine::{MaskEngine, TextChange, ValidationResult, is_complete};
pub use field::PhoneField;
pub use template::{build_template, raw_input_cap, template_pattern};

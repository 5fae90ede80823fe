mod format;
mod model;
mod parser;

pub use format::{apply_mask, strip_whitespace, unmasked_text};
pub use model::{MaskToken, MaskedOutput, PlaceholderKind, Template};

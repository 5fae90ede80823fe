use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown digit mode `{0}` (expected auto, fixed8 or fixed9)")]
    InvalidDigitMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

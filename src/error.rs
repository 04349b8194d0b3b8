use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirError {
    #[error("{name} length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid sample value: {0}")]
    InvalidSample(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FirError>;

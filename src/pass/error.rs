//! Password generation errors.

use thiserror::Error;

use super::MAX_LENGTH;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("invalid length: must be positive")]
    InvalidLength,

    #[error("invalid length: must be less than or equal to {}", MAX_LENGTH)]
    LengthTooLong,

    #[error("unsupported password type: {0}")]
    UnsupportedType(String),

    #[error("custom character set is required for custom type")]
    MissingCustomCharset,

    #[error("charset cannot be empty")]
    EmptyCharset,

    #[error("secure random source failed: {0}")]
    RandomSourceFailure(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;

//! Password generation and output.

pub mod charset;
pub mod error;
mod generate;
mod generator;
pub mod output;

/// Longest password a [`Generator`] accepts.
pub const MAX_LENGTH: i64 = 256;

pub use error::GenError;
pub use generator::{Config, Generator};

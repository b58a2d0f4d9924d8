//! Configured password generator.

use super::charset;
use super::error::{GenError, Result};
use super::generate::generate;
use super::MAX_LENGTH;

/// Requested password shape. The type token is checked per generation, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: i64,
    pub password_type: String,
    pub custom_chars: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 12,
            password_type: String::from("complex"),
            custom_chars: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Result<Self> {
        if config.length <= 0 {
            return Err(GenError::InvalidLength);
        }
        if config.length > MAX_LENGTH {
            return Err(GenError::LengthTooLong);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produce one password. The charset is resolved again on every call.
    pub fn generate(&self) -> Result<String> {
        let charset = charset::resolve(&self.config.password_type, &self.config.custom_chars)?;
        log::trace!(
            "{} charset resolved to {} characters",
            self.config.password_type,
            charset.len()
        );
        generate(self.config.length, charset.as_str())
    }
}

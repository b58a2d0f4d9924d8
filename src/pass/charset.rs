//! Character set resolution for password types.

use std::fmt;
use std::str::FromStr;

use super::error::{GenError, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Password types with a charset table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordType {
    Basic,
    Alphanumeric,
    Complex,
    Pin,
    Custom,
}

impl PasswordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordType::Basic => "basic",
            PasswordType::Alphanumeric => "alphanumeric",
            PasswordType::Complex => "complex",
            PasswordType::Pin => "pin",
            PasswordType::Custom => "custom",
        }
    }
}

impl FromStr for PasswordType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(PasswordType::Basic),
            "alphanumeric" => Ok(PasswordType::Alphanumeric),
            "complex" => Ok(PasswordType::Complex),
            "pin" => Ok(PasswordType::Pin),
            "custom" => Ok(PasswordType::Custom),
            other => Err(GenError::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved character pool. Repeated characters are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(String);

impl Charset {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the pool.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Resolve a password type token to its character pool.
///
/// `custom_chars` is only consulted for the `custom` type, and is used verbatim.
pub fn resolve(password_type: &str, custom_chars: &str) -> Result<Charset> {
    let chars = match password_type.parse::<PasswordType>()? {
        PasswordType::Basic => [LOWERCASE, UPPERCASE].concat(),
        PasswordType::Alphanumeric => [LOWERCASE, UPPERCASE, DIGITS].concat(),
        PasswordType::Complex => [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat(),
        PasswordType::Pin => DIGITS.to_string(),
        PasswordType::Custom => {
            if custom_chars.is_empty() {
                return Err(GenError::MissingCustomCharset);
            }
            custom_chars.to_string()
        }
    };

    Ok(Charset(chars))
}

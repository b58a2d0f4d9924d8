//! Password generation settings.

use crate::pass::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: i64,
    pub password_type: String,
    pub number_of_passwords: i64,
    pub custom_chars: String,
}

impl Settings {
    pub fn generator_config(&self) -> Config {
        Config {
            length: self.pass_length,
            password_type: self.password_type.clone(),
            custom_chars: self.custom_chars.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            pass_length: config.length,
            password_type: config.password_type,
            number_of_passwords: 1,
            custom_chars: config.custom_chars,
        }
    }
}

//! Centralized warning and error messages for CLI output.

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// Print a warning message to stderr (yellow when stderr is a terminal).
pub fn warn(msg: &str) {
    if styled() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red when stderr is a terminal).
pub fn error(msg: &str) {
    if styled() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn usage_hint() {
    eprintln!("Run 'pwgen --help' for usage.");
}

pub fn generation_failed(err: &dyn std::error::Error) {
    error(&format!("Error generating password: {err}"));
}

pub fn chars_ignored(password_type: &str) {
    warn(&format!(
        "Warning: --chars is only used with --type custom, ignoring it for '{password_type}'"
    ));
}

fn styled() -> bool {
    std::io::stderr().is_tty()
}

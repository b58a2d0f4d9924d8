//! Help text.

use crate::pass::MAX_LENGTH;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn help_text() -> String {
    let mut out = String::new();

    box_top(&mut out, "pwgen");
    box_line_center(&mut out, "Random password generator");
    box_line(&mut out, "");
    box_line(&mut out, "USAGE:");
    box_line(&mut out, "  pwgen [OPTIONS]");
    box_line(&mut out, "");
    box_line(&mut out, "OPTIONS:");
    box_opt(
        &mut out,
        "  -l, --length <N>",
        &format!("Characters per password, 1 to {MAX_LENGTH} (default: 12)"),
    );
    box_opt(
        &mut out,
        "  -t, --type <TYPE>",
        "Password type: basic, alphanumeric, complex, memorable, pin, custom (default: complex)",
    );
    box_opt(&mut out, "  -n, --count <N>", "Number of passwords to generate (default: 1)");
    box_opt(&mut out, "      --chars <CHARS>", "Custom character set for --type custom");
    box_opt(&mut out, "  -h, --help", "Display this help message");
    box_opt(&mut out, "  -v, --version", "Display version");
    box_line(&mut out, "");
    box_line(&mut out, "TYPES:");
    box_opt(&mut out, "  basic", "a-z A-Z");
    box_opt(&mut out, "  alphanumeric", "a-z A-Z 0-9");
    box_opt(&mut out, "  complex", "a-z A-Z 0-9 !@#$%^&*()_+-=[]{}|;:,.<>?");
    box_opt(&mut out, "  pin", "0-9");
    box_opt(&mut out, "  custom", "The characters given with --chars, as is");
    box_opt(&mut out, "  memorable", "Reserved, not available yet");
    box_line(&mut out, "");
    box_line(&mut out, "Flags take one or two dashes, values may follow '='.");
    box_line(&mut out, "");
    box_line(&mut out, "EXAMPLES:");
    box_line(&mut out, "  pwgen                        One complex password, 12 characters");
    box_line(&mut out, "  pwgen -l 20 -n 3             Three passwords, 20 characters each");
    box_line(&mut out, "  pwgen --type pin -l 6        Six-digit PIN");
    box_line(&mut out, "  pwgen -type=custom -chars=ACGT -length=32");
    box_line(&mut out, "");
    box_bottom(&mut out);

    out
}

pub fn version_text() -> String {
    format!("pwgen {}", env!("CARGO_PKG_VERSION"))
}

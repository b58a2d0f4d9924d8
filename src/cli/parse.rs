use thiserror::Error;

use super::CliFlags;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Flag needs an argument: {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse command-line arguments (`args[0]` is the program name).
///
/// Flags may use one or two leading dashes, and take their value either as
/// the next argument or after `=`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        let (name, inline) = split_flag(arg).ok_or_else(|| ParseError::UnknownArg(arg.to_string()))?;

        match name {
            "h" | "help" => flags.help = true,
            "v" | "version" => flags.version = true,
            "l" | "length" => {
                let value = take_value(args, &mut i, inline, arg)?;
                flags.length = Some(number(arg, value)?);
            }
            "t" | "type" => {
                let value = take_value(args, &mut i, inline, arg)?;
                flags.password_type = Some(value.to_string());
            }
            "n" | "count" => {
                let value = take_value(args, &mut i, inline, arg)?;
                flags.count = Some(number(arg, value)?);
            }
            "chars" => {
                let value = take_value(args, &mut i, inline, arg)?;
                flags.chars = Some(value.to_string());
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Split `--name=value` / `-name value` into the bare name and any inline value.
fn split_flag(arg: &str) -> Option<(&str, Option<&str>)> {
    let body = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    if body.is_empty() || body.starts_with('-') {
        return None;
    }
    Some(match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    })
}

fn take_value<'a>(
    args: &'a [String],
    i: &mut usize,
    inline: Option<&'a str>,
    flag: &str,
) -> Result<&'a str, ParseError> {
    if let Some(value) = inline {
        return Ok(value);
    }
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number(flag: &str, value: &str) -> Result<i64, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

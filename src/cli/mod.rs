mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::exits;

/// Run the CLI and return the process exit status.
pub fn run(args: Vec<String>) -> u8 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return exits::USAGE;
        }
    };

    match ctx.run() {
        Ok(()) => exits::SUCCESS,
        Err(Done(code)) => code,
    }
}

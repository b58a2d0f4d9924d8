use std::env;
use std::process::ExitCode;

mod cli;
mod exits;
mod pass;
mod settings;
mod terminal;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
    exits::harden();

    let args: Vec<String> = env::args().collect();
    ExitCode::from(cli::run(args))
}

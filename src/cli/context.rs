//! CLI context - bundles settings and parsed flags.

use std::io::{self, Write};

use super::{CliFlags, ParseError, help, prompts};
use crate::exits;
use crate::pass::output::{self, SecureBufWriter, Summary};
use crate::pass::{GenError, Generator};
use crate::settings::Settings;

/// Early exit with a process status.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub u8);

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags();
        let generator = self.build_generator()?;

        let stdout = io::stdout();
        let mut out = SecureBufWriter::new(stdout.lock());
        match self.generate_output(&generator, &mut out) {
            Ok(_) => Ok(()),
            // reader went away (e.g. piped into `head`)
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => {
                prompts::error(&format!("Error writing passwords: {e}"));
                Err(Done(exits::FAILURE))
            }
        }
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print!("{}", help::help_text());
            return Err(Done(exits::SUCCESS));
        }
        if self.flags.version {
            println!("{}", help::version_text());
            return Err(Done(exits::SUCCESS));
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(ref password_type) = self.flags.password_type {
            self.settings.password_type = password_type.clone();
        }
        if let Some(count) = self.flags.count {
            self.settings.number_of_passwords = count;
        }
        if let Some(ref chars) = self.flags.chars {
            self.settings.custom_chars = chars.clone();
        }

        if !self.settings.custom_chars.is_empty() && self.settings.password_type != "custom" {
            prompts::chars_ignored(&self.settings.password_type);
        }
    }

    fn build_generator(&self) -> Result<Generator, Done> {
        Generator::new(self.settings.generator_config()).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Done(exits::FAILURE)
        })
    }

    /// Generate the requested number of passwords into `out`.
    pub fn generate_output<W: Write>(
        &self,
        generator: &Generator,
        out: &mut W,
    ) -> io::Result<Summary> {
        let count = self.settings.number_of_passwords;
        log::debug!(
            "generating {} password(s): length {}, type {}",
            count,
            generator.config().length,
            generator.config().password_type
        );

        let summary = output::write_batch(generator, count, out, |n, e: &GenError| {
            log::debug!("password {n} of {count} failed: {e:?}");
            prompts::generation_failed(e);
        })?;

        log::debug!(
            "{} password(s) generated, {} failed",
            summary.generated,
            summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("pwgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(&args).unwrap()
    }

    #[test]
    fn defaults_apply_without_flags() {
        let mut ctx = context(&[]);
        ctx.apply_flags();
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn flags_override_settings() {
        let mut ctx = context(&["-l", "8", "-t", "custom", "-n", "4", "--chars", "ABC123"]);
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 8);
        assert_eq!(ctx.settings.password_type, "custom");
        assert_eq!(ctx.settings.number_of_passwords, 4);
        assert_eq!(ctx.settings.custom_chars, "ABC123");
    }

    #[test]
    fn help_and_version_exit_early() {
        assert_eq!(context(&["--help"]).run(), Err(Done(exits::SUCCESS)));
        assert_eq!(context(&["--version"]).run(), Err(Done(exits::SUCCESS)));
    }

    #[test]
    fn construction_errors_abort() {
        assert_eq!(context(&["--length", "0"]).run(), Err(Done(exits::FAILURE)));
        assert_eq!(context(&["--length", "300"]).run(), Err(Done(exits::FAILURE)));
    }

    #[test]
    fn output_follows_settings() {
        let mut ctx = context(&["--type", "custom", "--chars", "ABC123", "-l", "8", "-n", "3"]);
        ctx.apply_flags();
        let generator = ctx.build_generator().unwrap();

        let mut out = Vec::new();
        let summary = ctx.generate_output(&generator, &mut out).unwrap();
        assert_eq!(summary, Summary { generated: 3, failed: 0 });

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        for line in text.lines() {
            assert_eq!(line.len(), 8);
            assert!(line.chars().all(|c| "ABC123".contains(c)));
        }
    }

    #[test]
    fn failed_generations_are_counted() {
        let mut ctx = context(&["--type", "memorable", "-n", "2"]);
        ctx.apply_flags();
        let generator = ctx.build_generator().unwrap();

        let mut out = Vec::new();
        let summary = ctx.generate_output(&generator, &mut out).unwrap();
        assert_eq!(summary, Summary { generated: 0, failed: 2 });
        assert!(out.is_empty());
    }
}

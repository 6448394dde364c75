//! Argument vector → command → parsed flags → handler.
//!
//! One dispatch is a single linear pass:
//! idle → command resolution → flag parsing → handler execution → terminal.
//! Every failure returns through `Error`; only `run`/`run_with` turn it into
//! printed diagnostics and an exit status.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{Config, DEFAULT_PROGRAM_NAME};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::usage::{write_diagnostic, write_usage};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub struct Dispatcher<'r> {
    registry: &'r Registry,
    config: Config,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve and run one command. `args` includes the program name.
    pub fn dispatch<I, S>(&self, args: I, out: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let _program = args.next();

        let Some(name) = args.next() else {
            log::debug!("no command given");
            return Err(Error::Usage);
        };

        log::debug!("resolving command '{}'", name);
        let spec = self
            .registry
            .lookup(&name)
            .ok_or_else(|| Error::UnknownCommand(name.clone()))?;

        let flags = spec.parser().parse(args)?;
        log::debug!(
            "parsed {} flag(s) for '{}': {:?}",
            flags.len(),
            name,
            flags.to_string_map()
        );

        match spec.invoke(&flags, out) {
            Ok(()) => {
                log::debug!("command '{}' completed", name);
                Ok(())
            }
            Err(err) => {
                log::debug!("command '{}' failed: {:?}", name, err);
                Err(err)
            }
        }
    }

    /// Dispatch and report: diagnostics go to `err`, usage listings to `out`.
    /// Returns the process exit status.
    pub fn run_with<I, S>(&self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> u8
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let program = self.program_name(args.first().map(String::as_str));

        match self.dispatch(args, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                if let Err(e) = self.report(&error, &program, out, err) {
                    log::warn!("failed to write diagnostic: {}", e);
                }
                EXIT_FAILURE
            }
        }
    }

    /// Dispatch the process arguments against stdout/stderr.
    pub fn run(&self) -> ExitCode {
        let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();

        let status = self.run_with(args, &mut out, &mut err);
        if let Err(e) = out.flush() {
            log::warn!("failed to flush stdout: {}", e);
        }
        ExitCode::from(status)
    }

    fn report(
        &self,
        error: &Error,
        program: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        write_diagnostic(err, error, self.config.error_format, self.config.color.enabled())?;
        if error.shows_usage() {
            write_usage(out, program, self.registry)?;
        }
        Ok(())
    }

    fn program_name(&self, argv0: Option<&str>) -> String {
        if let Some(name) = &self.config.program_name {
            return name.clone();
        }
        argv0
            .and_then(|arg| Path::new(arg).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_from_argv0() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new(&registry);

        assert_eq!(dispatcher.program_name(Some("/usr/local/bin/tool")), "tool");
        assert_eq!(dispatcher.program_name(Some("")), DEFAULT_PROGRAM_NAME);
        assert_eq!(dispatcher.program_name(None), DEFAULT_PROGRAM_NAME);
    }

    #[test]
    fn test_configured_program_name_wins() {
        let registry = Registry::new();
        let dispatcher =
            Dispatcher::new(&registry).with_config(Config::default().with_program_name("verbs"));

        assert_eq!(dispatcher.program_name(Some("/usr/bin/other")), "verbs");
    }
}

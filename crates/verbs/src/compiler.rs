//! Compiles a command's flag schemas into a parser.
//!
//! Token grammar is delegated to a `clap::Command` built from the schemas,
//! so `--name=value`, `--name value`, bare boolean switches, `--` and
//! repeated flags behave the way clap users expect. The resulting matches
//! are mapped back into `ParsedFlags` and clap's failures into `Error`.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use crate::error::{Error, Result};
use crate::flags::ParsedFlags;
use crate::schema::{FlagKind, FlagSchema, FlagValue, is_valid_flag_name};

/// Id of the positional catch-all. Brackets can never appear in a flag name.
const ARGS_ID: &str = "[args]";

pub struct SchemaCompiler;

impl SchemaCompiler {
    /// Validate `flags` and build the parser for `command`.
    pub fn compile(command: &str, flags: &[FlagSchema]) -> Result<FlagParser> {
        let mut seen = HashSet::new();
        for flag in flags {
            if !is_valid_flag_name(&flag.name) {
                return Err(Error::InvalidFlagName {
                    command: command.to_string(),
                    flag: flag.name.clone(),
                });
            }
            if !seen.insert(flag.name.as_str()) {
                return Err(Error::DuplicateFlag {
                    command: command.to_string(),
                    flag: flag.name.clone(),
                });
            }
            if flag.default.kind() != flag.kind {
                return Err(Error::KindMismatch {
                    flag: flag.name.clone(),
                    expected: flag.kind,
                    actual: flag.default.kind(),
                });
            }
        }

        log::debug!("compiled {} flag(s) for command '{}'", flags.len(), command);
        Ok(Self::build(command, flags))
    }

    /// Build without validation; callers guarantee `flags` is well-formed.
    pub(crate) fn build(command: &str, flags: &[FlagSchema]) -> FlagParser {
        let cmd = flags
            .iter()
            .fold(
                clap::Command::new(command.to_string())
                    .no_binary_name(true)
                    .disable_help_flag(true)
                    .disable_version_flag(true)
                    .args_override_self(true),
                |cmd, flag| cmd.arg(flag_arg(flag)),
            )
            .arg(
                Arg::new(ARGS_ID)
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String)),
            );

        FlagParser {
            command: command.to_string(),
            flags: flags.to_vec(),
            cmd,
        }
    }
}

fn flag_arg(flag: &FlagSchema) -> Arg {
    let arg = Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .help(flag.description.clone())
        .action(ArgAction::Set);

    match flag.kind {
        FlagKind::String => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String)),
        FlagKind::Int => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(value_parser!(i64)),
        // A bool only takes an `=`-attached value; a bare switch means true.
        FlagKind::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(BoolishValueParser::new()),
    }
}

/// Parser for one command's flag tokens.
#[derive(Debug, Clone)]
pub struct FlagParser {
    command: String,
    flags: Vec<FlagSchema>,
    cmd: clap::Command,
}

impl FlagParser {
    pub fn flags(&self) -> &[FlagSchema] {
        &self.flags
    }

    /// Parse the tokens that follow the command name.
    pub fn parse<I, T>(&self, tokens: I) -> Result<ParsedFlags>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .cmd
            .clone()
            .try_get_matches_from(tokens)
            .map_err(|err| self.map_error(err))?;

        Ok(self.resolve(&matches))
    }

    fn resolve(&self, matches: &ArgMatches) -> ParsedFlags {
        let mut supplied = BTreeMap::new();
        let mut defaults = BTreeMap::new();

        for flag in &self.flags {
            defaults.insert(flag.name.clone(), flag.default.clone());

            let value = match flag.kind {
                FlagKind::String => matches
                    .get_one::<String>(&flag.name)
                    .map(|s| FlagValue::Str(s.clone())),
                FlagKind::Int => matches.get_one::<i64>(&flag.name).map(|n| FlagValue::Int(*n)),
                FlagKind::Bool => matches
                    .get_one::<bool>(&flag.name)
                    .map(|b| FlagValue::Bool(*b)),
            };
            if let Some(value) = value {
                supplied.insert(flag.name.clone(), value);
            }
        }

        let args = matches
            .get_many::<String>(ARGS_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        ParsedFlags::new(supplied, defaults, args)
    }

    fn map_error(&self, err: clap::Error) -> Error {
        let command = self.command.clone();
        let token = context_string(&err, ContextKind::InvalidArg);
        let flag = token.and_then(flag_name_from_display);
        let value = context_string(&err, ContextKind::InvalidValue);

        match (err.kind(), flag) {
            (ErrorKind::UnknownArgument, Some(flag)) => Error::UnknownFlag { command, flag },
            (ErrorKind::UnknownArgument, None) => match token {
                Some(token) => Error::Parse {
                    command,
                    message: format!("malformed flag '{}' (flags are written --<name>)", token),
                },
                None => parse_error(command, &err),
            },
            (ErrorKind::InvalidValue, Some(flag)) if value.is_none_or(str::is_empty) => {
                Error::MissingValue { command, flag }
            }
            (ErrorKind::InvalidValue | ErrorKind::ValueValidation, Some(flag)) => {
                match self.flags.iter().find(|f| f.name == flag) {
                    Some(schema) => Error::TypeCoercion {
                        command,
                        flag,
                        kind: schema.kind,
                        value: value.unwrap_or_default().to_string(),
                    },
                    None => parse_error(command, &err),
                }
            }
            _ => parse_error(command, &err),
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<&str> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// `--times <times>`, `--upper[=<upper>]` or `--zzz` back to the bare flag name.
/// Anything not spelled `--<name>` (`-n`, `---n`, `--`) has none.
fn flag_name_from_display(display: &str) -> Option<String> {
    let name = display
        .strip_prefix("--")?
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .next()
        .unwrap_or_default();
    is_valid_flag_name(name).then(|| name.to_string())
}

fn parse_error(command: String, err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    Error::Parse { command, message }
}

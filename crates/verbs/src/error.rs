use std::fmt;

use crate::schema::FlagKind;

/// Result type for verbs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the registry, the flag parser or a handler can surface.
///
/// All of them travel through the dispatcher's single error channel, which is
/// the only place that decides what gets printed and which exit code is used.
#[derive(Debug)]
pub enum Error {
    /// No command name was given on the command line
    Usage,

    /// The command name is not in the registry
    UnknownCommand(String),

    /// A command was registered with an empty name
    InvalidCommandName(String),

    /// A command name was registered twice under `DuplicatePolicy::Reject`
    DuplicateCommand(String),

    /// A supplied flag is not declared in the command's schema
    UnknownFlag { command: String, flag: String },

    /// A supplied value cannot be coerced to the flag's declared kind
    TypeCoercion {
        command: String,
        flag: String,
        kind: FlagKind,
        value: String,
    },

    /// A String or Int flag was given without a value
    MissingValue { command: String, flag: String },

    /// Any other token the flag grammar rejects
    Parse { command: String, message: String },

    /// A declared flag name is empty or malformed
    InvalidFlagName { command: String, flag: String },

    /// A flag name was declared twice for the same command
    DuplicateFlag { command: String, flag: String },

    /// A typed accessor or declared default disagrees with the flag's kind
    KindMismatch {
        flag: String,
        expected: FlagKind,
        actual: FlagKind,
    },

    /// A handler asked for a flag its command never declared
    UndeclaredFlag(String),

    /// The command's handler returned an error
    Handler {
        command: String,
        source: anyhow::Error,
    },
}

impl Error {
    /// Stable snake_case tag, used by machine-readable diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Usage => "usage",
            Error::UnknownCommand(_) => "unknown_command",
            Error::InvalidCommandName(_) => "invalid_command_name",
            Error::DuplicateCommand(_) => "duplicate_command",
            Error::UnknownFlag { .. } => "unknown_flag",
            Error::TypeCoercion { .. } => "type_coercion",
            Error::MissingValue { .. } => "missing_value",
            Error::Parse { .. } => "parse",
            Error::InvalidFlagName { .. } => "invalid_flag_name",
            Error::DuplicateFlag { .. } => "duplicate_flag",
            Error::KindMismatch { .. } => "kind_mismatch",
            Error::UndeclaredFlag(_) => "undeclared_flag",
            Error::Handler { .. } => "handler",
        }
    }

    /// The command the error belongs to, when there is one.
    pub fn command(&self) -> Option<&str> {
        match self {
            Error::UnknownCommand(name)
            | Error::InvalidCommandName(name)
            | Error::DuplicateCommand(name) => Some(name),
            Error::UnknownFlag { command, .. }
            | Error::TypeCoercion { command, .. }
            | Error::MissingValue { command, .. }
            | Error::Parse { command, .. }
            | Error::InvalidFlagName { command, .. }
            | Error::DuplicateFlag { command, .. }
            | Error::Handler { command, .. } => Some(command),
            Error::Usage | Error::KindMismatch { .. } | Error::UndeclaredFlag(_) => None,
        }
    }

    /// Whether the usage listing should follow the diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Error::Usage | Error::UnknownCommand(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "no command given"),
            Error::UnknownCommand(name) => write!(f, "Unknown command '{}'", name),
            Error::InvalidCommandName(name) => {
                write!(f, "invalid command name '{}': must not be empty", name)
            }
            Error::DuplicateCommand(name) => {
                write!(f, "command '{}' is already registered", name)
            }
            Error::UnknownFlag { command, flag } => {
                write!(f, "unknown flag '--{}' for command '{}'", flag, command)
            }
            Error::TypeCoercion {
                command,
                flag,
                kind,
                value,
            } => write!(
                f,
                "invalid value '{}' for flag '--{}' of command '{}': expected {}",
                value, flag, command, kind
            ),
            Error::MissingValue { command, flag } => {
                write!(f, "flag '--{}' of command '{}' requires a value", flag, command)
            }
            Error::Parse { command, message } => {
                write!(f, "failed to parse flags for command '{}': {}", command, message)
            }
            Error::InvalidFlagName { command, flag } => {
                write!(f, "invalid flag name '{}' for command '{}'", flag, command)
            }
            Error::DuplicateFlag { command, flag } => {
                write!(f, "flag '--{}' is declared twice for command '{}'", flag, command)
            }
            Error::KindMismatch {
                flag,
                expected,
                actual,
            } => write!(
                f,
                "flag '--{}' holds a {} value, not {}",
                flag, actual, expected
            ),
            Error::UndeclaredFlag(flag) => write!(f, "flag '--{}' is not declared", flag),
            Error::Handler { command, source } => {
                write!(f, "Error executing command '{}': {:#}", command, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Handler { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_message_embeds_command_name() {
        let err = Error::Handler {
            command: "hello".to_string(),
            source: anyhow::anyhow!("disk full"),
        };

        assert_eq!(err.to_string(), "Error executing command 'hello': disk full");
        assert_eq!(err.kind(), "handler");
        assert!(!err.shows_usage());
    }

    #[test]
    fn test_handler_error_message_includes_context_chain() {
        let source = anyhow::anyhow!("permission denied").context("cannot open greeting file");
        let err = Error::Handler {
            command: "hello".to_string(),
            source,
        };

        assert_eq!(
            err.to_string(),
            "Error executing command 'hello': cannot open greeting file: permission denied"
        );
    }

    #[test]
    fn test_resolution_errors_show_usage() {
        assert!(Error::Usage.shows_usage());
        assert!(Error::UnknownCommand("nope".to_string()).shows_usage());
        assert!(
            !Error::UnknownFlag {
                command: "hello".to_string(),
                flag: "zzz".to_string(),
            }
            .shows_usage()
        );
    }

    #[test]
    fn test_type_coercion_message() {
        let err = Error::TypeCoercion {
            command: "repeat".to_string(),
            flag: "times".to_string(),
            kind: FlagKind::Int,
            value: "abc".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid value 'abc' for flag '--times' of command 'repeat': expected int"
        );
        assert_eq!(err.command(), Some("repeat"));
    }
}

//! Usage listing and error diagnostics.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::ErrorFormat;
use crate::error::Error;
use crate::registry::Registry;

/// The usage banner followed by one `name<TAB>description` line per command.
pub fn render_usage(program: &str, registry: &Registry) -> String {
    let mut text = format!("Usage: {} <command> [options]\nAvailable commands:\n", program);
    for spec in registry.all() {
        text.push_str(&format!("  {}\t{}\n", spec.name(), spec.description()));
    }
    text
}

pub fn write_usage(out: &mut dyn Write, program: &str, registry: &Registry) -> io::Result<()> {
    out.write_all(render_usage(program, registry).as_bytes())
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    error: &'static str,
    command: Option<&'a str>,
    message: String,
}

/// Render one diagnostic line for `error` (without trailing newline).
pub fn render_diagnostic(error: &Error, format: ErrorFormat, color: bool) -> String {
    match format {
        ErrorFormat::Json => {
            let diagnostic = JsonDiagnostic {
                error: error.kind(),
                command: error.command(),
                message: message_of(error),
            };
            serde_json::to_string(&diagnostic).unwrap_or_else(|_| {
                format!(r#"{{"error":"{}","command":null,"message":null}}"#, error.kind())
            })
        }
        ErrorFormat::Text => match error {
            Error::Handler { command, source } => format!(
                "{} {:#}",
                paint(&format!("Error executing command '{}':", command), color),
                source
            ),
            other => format!("{} {}", paint("Error:", color), other),
        },
    }
}

pub fn write_diagnostic(
    out: &mut dyn Write,
    error: &Error,
    format: ErrorFormat,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{}", render_diagnostic(error, format, color))
}

/// The bare message, without the handler's `Error executing command` header.
fn message_of(error: &Error) -> String {
    match error {
        Error::Handler { source, .. } => format!("{:#}", source),
        other => other.to_string(),
    }
}

fn paint(text: &str, color: bool) -> String {
    if color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ParsedFlags;

    fn noop(_: &ParsedFlags, _: &mut dyn Write) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn test_usage_lists_commands_sorted() {
        let mut registry = Registry::new();
        registry.register("hello", "Print hello world", noop).unwrap();
        registry.register("bye", "Print goodbye", noop).unwrap();

        assert_eq!(
            render_usage("mytool", &registry),
            "Usage: mytool <command> [options]\n\
             Available commands:\n  \
             bye\tPrint goodbye\n  \
             hello\tPrint hello world\n"
        );
    }

    #[test]
    fn test_usage_with_empty_registry() {
        let registry = Registry::new();

        assert_eq!(
            render_usage("mytool", &registry),
            "Usage: mytool <command> [options]\nAvailable commands:\n"
        );
    }

    #[test]
    fn test_text_diagnostics() {
        let unknown = Error::UnknownCommand("nope".to_string());
        assert_eq!(
            render_diagnostic(&unknown, ErrorFormat::Text, false),
            "Error: Unknown command 'nope'"
        );

        let handler = Error::Handler {
            command: "hello".to_string(),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(
            render_diagnostic(&handler, ErrorFormat::Text, false),
            "Error executing command 'hello': boom"
        );
    }

    #[test]
    fn test_colored_diagnostic_keeps_message() {
        let rendered = render_diagnostic(&Error::Usage, ErrorFormat::Text, true);

        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.ends_with("no command given"));
    }

    #[test]
    fn test_json_diagnostic() {
        let err = Error::UnknownFlag {
            command: "hello".to_string(),
            flag: "zzz".to_string(),
        };

        let rendered = render_diagnostic(&err, ErrorFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["error"], "unknown_flag");
        assert_eq!(value["command"], "hello");
        assert_eq!(value["message"], "unknown flag '--zzz' for command 'hello'");
    }

    #[test]
    fn test_json_handler_diagnostic_has_bare_message() {
        let err = Error::Handler {
            command: "hello".to_string(),
            source: anyhow::anyhow!("boom"),
        };

        let value: serde_json::Value =
            serde_json::from_str(&render_diagnostic(&err, ErrorFormat::Json, false)).unwrap();
        assert_eq!(value["error"], "handler");
        assert_eq!(value["message"], "boom");
    }
}

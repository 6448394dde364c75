use std::str::FromStr;

use is_terminal::IsTerminal;

/// Environment variable selecting the diagnostic format (`text` or `json`).
pub const ERROR_FORMAT_ENV: &str = "VERBS_ERROR_FORMAT";
/// Environment variable selecting colour output (`auto`, `always`, `never`).
pub const COLOR_ENV: &str = "VERBS_COLOR";
/// When set to any non-empty value, colour is disabled.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Program name used in the usage banner when `argv[0]` is unusable.
pub const DEFAULT_PROGRAM_NAME: &str = "mytool";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ErrorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(ErrorFormat::Text),
            "json" => Ok(ErrorFormat::Json),
            _ => Err(format!("unknown error format '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Auto,
    Always,
    #[default]
    Never,
}

impl ColorMode {
    /// Whether diagnostics written to stderr should be coloured.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_terminal(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!("unknown color mode '{}'", s)),
        }
    }
}

/// Dispatcher settings. Files are never read; values come from code or the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Name shown in the usage banner; derived from `argv[0]` when `None`.
    pub program_name: Option<String>,
    pub error_format: ErrorFormat,
    pub color: ColorMode,
}

impl Config {
    /// Resolve settings from the process environment.
    ///
    /// Priority for colour: `NO_COLOR` > `VERBS_COLOR` > auto-detection.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let error_format = lookup(ERROR_FORMAT_ENV)
            .and_then(|raw| parse_or_warn(ERROR_FORMAT_ENV, &raw))
            .unwrap_or_default();

        let color = if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            ColorMode::Never
        } else {
            lookup(COLOR_ENV)
                .and_then(|raw| parse_or_warn(COLOR_ENV, &raw))
                .unwrap_or(ColorMode::Auto)
        };

        Self {
            program_name: None,
            error_format,
            color,
        }
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    pub fn with_error_format(mut self, format: ErrorFormat) -> Self {
        self.error_format = format;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

fn parse_or_warn<T: FromStr<Err = String>>(key: &str, raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring {}: {}", key, e);
            None
        }
    }
}

//! Flag declarations: the primitive kinds, typed values and per-flag schema.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The primitive kind a flag is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    String,
    Int,
    Bool,
}

impl FlagKind {
    /// Zero value used when a schema does not declare its own default.
    pub fn zero(self) -> FlagValue {
        match self {
            FlagKind::String => FlagValue::Str(String::new()),
            FlagKind::Int => FlagValue::Int(0),
            FlagKind::Bool => FlagValue::Bool(false),
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::String => write!(f, "string"),
            FlagKind::Int => write!(f, "int"),
            FlagKind::Bool => write!(f, "bool"),
        }
    }
}

impl FromStr for FlagKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(FlagKind::String),
            "int" => Ok(FlagKind::Int),
            "bool" => Ok(FlagKind::Bool),
            _ => Err(format!(
                "unknown flag kind '{}' (expected string, int or bool)",
                s
            )),
        }
    }
}

/// A resolved flag value, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Str(_) => FlagKind::String,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Bool(_) => FlagKind::Bool,
        }
    }

    /// Borrow the string payload; `flag` only labels the error.
    pub fn as_str(&self, flag: &str) -> Result<&str> {
        match self {
            FlagValue::Str(s) => Ok(s),
            other => Err(other.mismatch(flag, FlagKind::String)),
        }
    }

    pub fn as_int(&self, flag: &str) -> Result<i64> {
        match self {
            FlagValue::Int(n) => Ok(*n),
            other => Err(other.mismatch(flag, FlagKind::Int)),
        }
    }

    pub fn as_bool(&self, flag: &str) -> Result<bool> {
        match self {
            FlagValue::Bool(b) => Ok(*b),
            other => Err(other.mismatch(flag, FlagKind::Bool)),
        }
    }

    fn mismatch(&self, flag: &str, expected: FlagKind) -> Error {
        Error::KindMismatch {
            flag: flag.to_string(),
            expected,
            actual: self.kind(),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Str(s) => write!(f, "{}", s),
            FlagValue::Int(n) => write!(f, "{}", n),
            FlagValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Str(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

/// One declared flag of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    pub name: String,
    pub kind: FlagKind,
    pub description: String,
    pub default: FlagValue,
}

impl FlagSchema {
    pub fn new(name: impl Into<String>, kind: FlagKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            default: kind.zero(),
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FlagKind::String, description)
    }

    pub fn int(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Int, description)
    }

    pub fn bool(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Bool, description)
    }

    /// Replace the zero default. Kind agreement is checked at compile time.
    pub fn with_default(mut self, value: impl Into<FlagValue>) -> Self {
        self.default = value.into();
        self
    }
}

/// Flag names are ASCII alphanumerics plus `-`, `_` and `.`, and never start with `-`.
pub(crate) fn is_valid_flag_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

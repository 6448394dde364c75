use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::schema::FlagValue;

/// Flag values resolved for a single dispatch.
///
/// The map view (`get`, `iter`, `len`) only contains flags that were
/// explicitly supplied on the command line. `value` and the typed helpers
/// fall back to the declared default, so every declared flag has exactly one
/// well-defined value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFlags {
    supplied: BTreeMap<String, FlagValue>,
    defaults: BTreeMap<String, FlagValue>,
    args: Vec<String>,
}

impl ParsedFlags {
    pub(crate) fn new(
        supplied: BTreeMap<String, FlagValue>,
        defaults: BTreeMap<String, FlagValue>,
        args: Vec<String>,
    ) -> Self {
        Self {
            supplied,
            defaults,
            args,
        }
    }

    /// Value supplied on the command line, `None` when the flag was omitted.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.supplied.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.supplied.contains_key(name)
    }

    /// Supplied value, or the declared default when omitted.
    pub fn value(&self, name: &str) -> Result<&FlagValue> {
        self.supplied
            .get(name)
            .or_else(|| self.defaults.get(name))
            .ok_or_else(|| Error::UndeclaredFlag(name.to_string()))
    }

    pub fn string(&self, name: &str) -> Result<&str> {
        self.value(name)?.as_str(name)
    }

    pub fn int(&self, name: &str) -> Result<i64> {
        self.value(name)?.as_int(name)
    }

    pub fn bool(&self, name: &str) -> Result<bool> {
        self.value(name)?.as_bool(name)
    }

    /// Number of supplied flags.
    pub fn len(&self) -> usize {
        self.supplied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplied.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.supplied.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.supplied.keys().map(String::as_str)
    }

    /// Positional tokens left after flag parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Supplied flags rendered back to strings, keyed by flag name.
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.supplied
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

//! Command registry.
//!
//! Commands are registered by name before dispatch starts. Registration takes
//! `&mut self` and dispatch takes `&self`, so a registry cannot be modified
//! while a dispatcher borrows it.

use std::collections::BTreeMap;
use std::io::Write;

use crate::command::CommandSpec;
use crate::error::{Error, Result};
use crate::flags::ParsedFlags;
use crate::schema::FlagSchema;

/// What `register` does when the name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last registration wins; the overwrite is logged.
    #[default]
    Replace,
    /// Fail with `Error::DuplicateCommand`.
    Reject,
}

#[derive(Debug, Default)]
pub struct Registry {
    commands: BTreeMap<String, CommandSpec>,
    policy: DuplicatePolicy,
}

impl Registry {
    /// Create an empty registry where re-registering a name redefines it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            commands: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a command without flags; declare them with `declare_flags`.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<()>
    where
        F: Fn(&ParsedFlags, &mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        self.insert(CommandSpec::new(name, description, handler))
    }

    /// Register a fully built command.
    pub fn insert(&mut self, spec: CommandSpec) -> Result<()> {
        if spec.name().is_empty() {
            return Err(Error::InvalidCommandName(spec.name().to_string()));
        }

        if self.commands.contains_key(spec.name()) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateCommand(spec.name().to_string()));
                }
                DuplicatePolicy::Replace => {
                    log::warn!("command '{}' registered twice; last one wins", spec.name());
                }
            }
        }

        log::debug!("registered command '{}'", spec.name());
        self.commands.insert(spec.name().to_string(), spec);
        Ok(())
    }

    /// Replace the flag schema of an already registered command.
    pub fn declare_flags(&mut self, command: &str, flags: Vec<FlagSchema>) -> Result<()> {
        let spec = self
            .commands
            .get_mut(command)
            .ok_or_else(|| Error::UnknownCommand(command.to_string()))?;
        spec.set_flags(flags)
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All commands, ordered by name.
    pub fn all(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

use std::fmt;
use std::io::Write;

use crate::compiler::{FlagParser, SchemaCompiler};
use crate::error::{Error, Result};
use crate::flags::ParsedFlags;
use crate::schema::FlagSchema;

/// Business logic of a command. Output goes to `out`, never straight to stdout.
pub type Handler = Box<dyn Fn(&ParsedFlags, &mut dyn Write) -> anyhow::Result<()>>;

/// A named command: description, ordered flag schemas and handler.
///
/// The flag parser is compiled whenever the schemas change, so an invalid
/// schema is reported at registration rather than on first dispatch.
pub struct CommandSpec {
    name: String,
    description: String,
    handler: Handler,
    parser: FlagParser,
}

impl CommandSpec {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ParsedFlags, &mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        let parser = SchemaCompiler::build(&name, &[]);
        Self {
            name,
            description: description.into(),
            handler: Box::new(handler),
            parser,
        }
    }

    /// Append one flag and recompile.
    pub fn flag(self, flag: FlagSchema) -> Result<Self> {
        self.flags([flag])
    }

    /// Append several flags and recompile.
    pub fn flags(mut self, flags: impl IntoIterator<Item = FlagSchema>) -> Result<Self> {
        let mut schemas = self.parser.flags().to_vec();
        schemas.extend(flags);
        self.parser = SchemaCompiler::compile(&self.name, &schemas)?;
        Ok(self)
    }

    /// Replace the whole flag list.
    pub(crate) fn set_flags(&mut self, flags: Vec<FlagSchema>) -> Result<()> {
        self.parser = SchemaCompiler::compile(&self.name, &flags)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn flag_schemas(&self) -> &[FlagSchema] {
        self.parser.flags()
    }

    pub fn parser(&self) -> &FlagParser {
        &self.parser
    }

    /// Run the handler, tagging any failure with this command's name.
    pub fn invoke(&self, flags: &ParsedFlags, out: &mut dyn Write) -> Result<()> {
        (self.handler)(flags, out).map_err(|source| Error::Handler {
            command: self.name.clone(),
            source,
        })
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("flags", &self.parser.flags())
            .finish_non_exhaustive()
    }
}

use std::io::Write;

use anyhow::Result;
use verbs::{FlagSchema, ParsedFlags, Registry};

pub fn register(registry: &mut Registry) -> verbs::Result<()> {
    registry.register("hello", "Print hello world", handle)?;
    registry.declare_flags("hello", vec![FlagSchema::string("name", "Tell your Name")])
}

fn handle(flags: &ParsedFlags, out: &mut dyn Write) -> Result<()> {
    let name = match flags.get("name") {
        Some(value) => value.as_str("name")?,
        None => "world",
    };
    writeln!(out, "Hello, {}!", name)?;
    Ok(())
}

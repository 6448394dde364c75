use std::io::Write;

use anyhow::{Result, bail};
use verbs::{CommandSpec, FlagSchema, ParsedFlags, Registry};

pub fn register(registry: &mut Registry) -> verbs::Result<()> {
    let spec = CommandSpec::new("repeat", "Print a text several times", handle).flags([
        FlagSchema::string("text", "Text to print").with_default("echo"),
        FlagSchema::int("times", "How many times to print it").with_default(1i64),
        FlagSchema::bool("upper", "Upper-case the text"),
    ])?;
    registry.insert(spec)
}

fn handle(flags: &ParsedFlags, out: &mut dyn Write) -> Result<()> {
    let times = flags.int("times")?;
    if times < 0 {
        bail!("--times must not be negative (got {})", times);
    }

    let text = flags.string("text")?;
    let text = if flags.bool("upper")? {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    for _ in 0..times {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

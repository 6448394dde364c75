mod hello;
mod repeat;

use verbs::Registry;

/// Register every command this tool ships.
pub fn register_all(registry: &mut Registry) -> verbs::Result<()> {
    hello::register(registry)?;
    repeat::register(registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let mut registry = Registry::new();
        register_all(&mut registry).unwrap();

        let names: Vec<_> = registry.all().map(|spec| spec.name()).collect();
        assert_eq!(names, vec!["hello", "repeat"]);
    }
}

use crate::registry::ParserRegistry;

pub fn execute() -> anyhow::Result<()> {
    let registry = ParserRegistry::default();
    for id in registry.tool_ids() {
        println!("{}", id);
    }
    Ok(())
}

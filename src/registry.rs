use crate::error::RegistryError;
use crate::parser::{EclipseParser, Gcc4Parser, IssueParser, JavacParser};
use std::collections::BTreeMap;

type ParserFactory = fn() -> Box<dyn IssueParser>;

/// Maps tool identifiers to parser factories. Parsers are registered
/// explicitly at startup; every `create` call returns a fresh instance so
/// concurrent parses never share state.
pub struct ParserRegistry {
    factories: BTreeMap<&'static str, ParserFactory>,
}

impl ParserRegistry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, factory: ParserFactory) {
        let id = factory().id();
        self.factories.insert(id, factory);
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.factories.contains_key(tool_id)
    }

    /// Creates a new parser for the given tool.
    pub fn create(&self, tool_id: &str) -> Result<Box<dyn IssueParser>, RegistryError> {
        self.factories
            .get(tool_id)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::UnknownTool(tool_id.to_string()))
    }

    /// The registered tool identifiers, sorted.
    pub fn tool_ids(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for ParserRegistry {
    /// Registers the built-in parser catalog.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(|| Box::new(JavacParser::new()));
        registry.register(|| Box::new(EclipseParser::new()));
        registry.register(|| Box::new(Gcc4Parser::new()));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_parsers_are_registered() {
        let registry = ParserRegistry::default();

        assert_eq!(registry.tool_ids(), ["eclipse", "gcc4", "javac"]);
        assert!(registry.contains("javac"));
        assert!(!registry.contains("pmd"));
    }

    #[test]
    fn create_returns_a_parser_with_the_requested_id() {
        let registry = ParserRegistry::default();

        let parser = registry.create("gcc4").expect("gcc4 is registered");
        assert_eq!(parser.id(), "gcc4");
    }

    #[test]
    fn create_fails_for_unknown_tool() {
        let registry = ParserRegistry::default();

        let error = registry.create("clang-tidy").err().unwrap();
        assert_eq!(error.to_string(), "unknown tool 'clang-tidy'");
    }

    #[test]
    fn created_parsers_are_independent_instances() {
        let registry = ParserRegistry::default();

        let first = registry.create("javac").unwrap();
        let second = registry.create("javac").unwrap();

        let issues = first.parse_str("[WARNING] /a.java:[1] deprecated call\n").unwrap();
        assert_eq!(issues.size(), 1);
        assert!(second.parse_str("").unwrap().is_empty());
    }
}

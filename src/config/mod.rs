mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::registry::ParserRegistry;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            target: default_target(),
            concurrency: default_concurrency(),
            report_dir: default_report_dir(),
            tools: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config against the parser registry
    pub fn validate(&self, registry: &ParserRegistry) -> Result<(), ConfigError> {
        for tool in &self.tools {
            if !registry.contains(&tool.id) {
                return Err(ConfigError::UnknownTool(tool.id.clone()));
            }
        }

        let enabled_count = self.tools.iter().filter(|t| t.enabled).count();
        if enabled_count == 0 {
            return Err(ConfigError::NoToolsEnabled);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml() {
        let yaml = concat!(
            "target: build\n",
            "tools:\n",
            "  - id: javac\n",
            "    logs:\n",
            "      - \"logs/maven-*.txt\"\n",
        );
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.version, 1);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.tools.len(), 1);
        assert!(config.tools[0].enabled);
        assert_eq!(config.tools[0].id, "javac");
    }

    #[test]
    fn validate_rejects_unknown_tool() {
        let mut config = Config::default();
        config.tools.push(ToolConfig {
            id: "clang-tidy".to_string(),
            enabled: true,
            logs: vec!["*.log".to_string()],
            exclude: Vec::new(),
        });

        let error = config.validate(&ParserRegistry::default()).unwrap_err();
        assert!(matches!(error, ConfigError::UnknownTool(id) if id == "clang-tidy"));
    }

    #[test]
    fn validate_requires_an_enabled_tool() {
        let mut config = Config::default();
        config.tools.push(ToolConfig {
            id: "javac".to_string(),
            enabled: false,
            logs: vec!["*.log".to_string()],
            exclude: Vec::new(),
        });

        let error = config.validate(&ParserRegistry::default()).unwrap_err();
        assert!(matches!(error, ConfigError::NoToolsEnabled));
    }
}

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum WarnsiftError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("no issue found with id {0}")]
    NotFound(Uuid),
}

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown tool '{0}' configured")]
    UnknownTool(String),

    #[error("No tools enabled")]
    NoToolsEnabled,
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to build glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No tools matched filters")]
    NoToolsMatched,

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Failed to acquire semaphore: {0}")]
    Semaphore(#[from] tokio::sync::AcquireError),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads, CPU cores when unset
    #[serde(default)]
    pub workers: Option<usize>,
}

/// What is served and where
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Filesystem root of the served tree
    pub directory: PathBuf,
    /// URL prefix as given by the user, normalized when the pipeline is built
    pub prefix: String,
    /// Let clients cache responses (otherwise no-cache headers are forced)
    pub caching: bool,
}

/// Logger configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Threshold: debug, info, warning or error
    pub level: String,
    /// Log file path (optional, stderr if not set)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Values given on the command line. Only fields that are set override
/// the file and environment layers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub port: Option<u16>,
    pub prefix: Option<String>,
    pub directory: Option<String>,
    pub caching: bool,
    pub verbose: bool,
}

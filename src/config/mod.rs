// Configuration module entry point
// Layered configuration: defaults, optional file, environment, command line

mod types;

use std::net::SocketAddr;
use std::path::Path;

use crate::error::ServerError;
use crate::logger::LogLevel;

// Re-export public types
pub use types::{Config, FilesConfig, LoggingConfig, Overrides, ServerConfig};

/// Config file looked up (with any supported extension) when none is given
pub const DEFAULT_CONFIG_NAME: &str = "file-server";

/// Prefix of environment variables, e.g. `FILE_SERVER_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "FILE_SERVER";

impl Config {
    /// Load configuration. An explicitly given file must exist; the default
    /// `file-server.{toml,yaml,json,...}` is optional.
    pub fn load(
        config_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self, config::ConfigError> {
        let file_source = match config_path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8100)?
            .set_default("files.directory", ".")?
            .set_default("files.prefix", "")?
            .set_default("files.caching", false)?
            .set_default("logging.level", "info")?
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(port) = overrides.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(prefix) = &overrides.prefix {
            builder = builder.set_override("files.prefix", prefix.as_str())?;
        }
        if let Some(directory) = &overrides.directory {
            builder = builder.set_override("files.directory", directory.as_str())?;
        }
        if overrides.caching {
            builder = builder.set_override("files.caching", true)?;
        }
        if overrides.verbose {
            builder = builder.set_override("logging.level", "debug")?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }

    pub fn log_level(&self) -> Result<LogLevel, ServerError> {
        Ok(self.logging.level.parse()?)
    }
}

//! Startup errors
//!
//! Request handling never fails at the type level; everything that can go
//! wrong happens while the server is being set up.

use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

use crate::logger::ParseLevelError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    LogLevel(#[from] ParseLevelError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

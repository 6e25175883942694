//! Static file server
//!
//! Serves a local directory over HTTP under a URL prefix. Requests pass
//! through a fixed pipeline: request logging, optional cache suppression,
//! prefix stripping and finally the file server.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod pipeline;
pub mod prefix;
pub mod server;

#[cfg(test)]
mod testing;

pub use error::ServerError;
pub use logger::{LogLevel, Logger};
pub use pipeline::build_pipeline;
pub use prefix::normalize_prefix;

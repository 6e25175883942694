//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;

/// Program name as printed by `-v`
pub const PROGRAM_NAME: &str = "file-server";

/// Serve a directory over HTTP
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, disable_version_flag = true)]
pub struct Cli {
    /// Port to serve on [default: 8100]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Path under which files should be exposed (e.g. /files/img)
    #[arg(short = 'f', long)]
    pub prefix: Option<String>,

    /// Directory of static files on host (e.g. ./documents) [default: .]
    #[arg(short = 'd', long)]
    pub directory: Option<String>,

    /// Enable client caching headers
    #[arg(short = 'c', long)]
    pub caching: bool,

    /// Enable detailed logs
    #[arg(short = 'l', long)]
    pub verbose: bool,

    /// Display the version
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            prefix: self.prefix.clone(),
            directory: self.directory.clone(),
            caching: self.caching,
            verbose: self.verbose,
        }
    }
}

/// Version banner printed by `-v`
pub fn version_text(version: &str, built_on: &str) -> String {
    format!("{PROGRAM_NAME}\nVersion:  {version}\nBuilt on: {built_on}\n")
}

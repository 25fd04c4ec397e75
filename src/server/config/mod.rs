//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub mod package;
pub mod server;
pub mod telemetry;

pub use package::{parse_package_section, PackageSection, RawPackageSection};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub package: PackageSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    package: Option<RawPackageSection>,
}

impl ServerConfig {
    /// Load configuration from a specific path that must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::load(path, true)
    }

    /// Load configuration from `path`; a missing optional file yields defaults.
    pub fn load(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        telemetry::log_load_started(&path, required);
        let config = Self::read(path.clone(), required).inspect_err(|err| {
            telemetry::log_load_failed(&path, err);
        })?;
        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn read(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        let document = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required))
            .build()
            .map_err(|err| ConfigError::from_read_error(path.clone(), err))?;
        let raw: RawServerConfig = document
            .try_deserialize()
            .map_err(|err| ConfigError::from_parse_error(path.clone(), err))?;

        let server = parse_server_section(raw.server, &path)?;
        let package = parse_package_section(raw.package, &path)?;
        Ok(Self {
            server,
            package,
            source_path: path,
        })
    }
}

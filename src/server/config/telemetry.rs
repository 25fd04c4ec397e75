use std::path::Path;

use tracing::{error, info};

use super::ServerConfig;
use crate::lib::errors::ConfigError;

pub fn log_load_started(path: &Path, required: bool) {
    info!(
        target: "photoshop_mcp::config",
        path = %path.display(),
        required,
        "Starting configuration load"
    );
}

pub fn log_load_failed(path: &Path, err: &ConfigError) {
    let stage = match err {
        ConfigError::FileRead { .. } => "read",
        ConfigError::Parse { .. } => "parse",
        ConfigError::InvalidField { .. } => "validate",
    };
    error!(
        target: "photoshop_mcp::config",
        path = %path.display(),
        stage,
        reason = %err,
        "Failed to load configuration file"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "photoshop_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        package = %config.package.name,
        manifest_path = ?config.package.manifest_path,
        "Configuration loaded"
    );
}

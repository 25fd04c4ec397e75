//! CLI entrypoint module structure.
use anyhow::{Context, Result};

use crate::{
    app::ServerIdentity,
    server::config::ServerConfig,
    tools::server_info::ServerInfoResponse,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{
    build_launch_args, resolve_config_path, ConfigSource, LaunchProfile, TransportMode,
};

/// Load the config named by `profile` the same way server mode does.
pub fn load_config(profile: &LaunchProfile) -> Result<ServerConfig> {
    ServerConfig::load(
        profile.config_path.clone(),
        profile.config_source.is_required(),
    )
    .with_context(|| format!("failed to load {}", profile.config_path.display()))
}

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(profile: &LaunchProfile, command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Version => {
            let config = load_config(profile)?;
            let identity = register_identity(&config);
            render_identity(&identity)
        }
    }
}

/// Register the server identity using the metadata source chosen by `config`.
pub fn register_identity(config: &ServerConfig) -> ServerIdentity {
    let metadata = config.package.metadata_source();
    ServerIdentity::register_package(&*metadata, &config.package.name)
}

fn render_identity(identity: &ServerIdentity) -> Result<String> {
    let payload = ServerInfoResponse::from(identity);
    Ok(serde_json::to_string_pretty(&payload)?)
}

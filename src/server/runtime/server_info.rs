use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};

use crate::{app::ServerIdentity, cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(
    identity: &ServerIdentity,
    profile: &LaunchProfile,
    config: &ServerConfig,
) -> String {
    format!(
        "{description}. Loaded config {path}; waiting in {transport} mode (host={host}, port={port}).",
        description = identity.description(),
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port
    )
}

/// Map the registered identity onto the MCP `initialize` result.
pub fn build_server_info(identity: &ServerIdentity, instructions: &str) -> ServerInfo {
    ServerInfo {
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        server_info: Implementation {
            name: identity.name().to_string(),
            version: identity.version().to_string(),
            ..Implementation::from_build_env()
        },
        instructions: Some(instructions.to_string()),
        ..ServerInfo::default()
    }
}

//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    Cli(LaunchProfile, CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Copy, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the server identity (name, description, resolved version) as JSON.
    #[command(about = "Print the server identity advertised to MCP clients")]
    Version,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "photoshop-mcp-server",
    author,
    version,
    about = "Photoshop MCP server",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Select stdio (default) or tcp.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        let launch_args = build_launch_args(self.transport, &config_path);

        Ok(LaunchProfile {
            config_path,
            config_source,
            transport: self.transport,
            launch_args,
        })
    }

    /// Parse CLI args into either server launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let command = self.command;
        let profile = self.build()?;
        match command {
            Some(command) => Ok(ParsedCommand::Cli(profile, command)),
            None => Ok(ParsedCommand::RunServer(profile)),
        }
    }
}

//! Entry point for the Photoshop MCP server.
use std::process::ExitCode;

use clap::Parser;
use photoshop_mcp_server::{
    cli::{self, execute_cli_command, CliCommand, LaunchProfile, LaunchProfileArgs, ParsedCommand},
    lib::telemetry,
    server::runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => run_server(profile).await,
        ParsedCommand::Cli(profile, command) => handle_cli_command(&profile, command),
    }
}

async fn run_server(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let config = cli::load_config(&profile).map_err(RuntimeExit::from_error)?;
    let identity = cli::register_identity(&config);
    runtime::run_server(profile, config, identity).await
}

fn handle_cli_command(profile: &LaunchProfile, command: CliCommand) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(profile, command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}

use std::process::ExitCode;

use anyhow::{Context, Error};
use rmcp::ServiceExt;
use tokio::net::TcpListener;

use crate::{
    app::{ServerIdentity, APP_NAME},
    cli::{LaunchProfile, TransportMode},
    lib::telemetry::{self, RuntimeModeTelemetry},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, PhotoshopServer},
    },
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self::new(format!("{err:?}"), ExitCode::FAILURE)
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Start the MCP server and select stdio/TCP based on the launch profile.
pub async fn run_server(
    profile: LaunchProfile,
    config: ServerConfig,
    identity: ServerIdentity,
) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&identity, &profile, &config);

    telemetry::emit_runtime_mode(&RuntimeModeTelemetry {
        app: APP_NAME,
        transport: profile.transport.as_str(),
        host: Some(config.server.host.as_str()),
        port: Some(config.server.port),
        config_path: config.source_path.to_string_lossy().as_ref(),
        server_name: identity.name(),
        server_version: identity.version(),
        version_source: identity.version_source().as_str(),
        launch_args: &profile.launch_args,
    });

    let server = PhotoshopServer::new(identity, instructions);
    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Tcp => run_tcp(server, &config).await,
    }
}

async fn run_stdio(server: PhotoshopServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: PhotoshopServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "photoshop_mcp::runtime",
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );
    serve_tcp(server, listener).await
}

/// Serve accepted connections one at a time until `accept` itself fails.
///
/// A client that drops or fails the handshake only ends its own session.
pub async fn serve_tcp(server: PhotoshopServer, listener: TcpListener) -> Result<(), RuntimeExit> {
    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("failed to accept TCP connection")
            .map_err(RuntimeExit::from_error)?;
        tracing::info!(
            target: "photoshop_mcp::runtime",
            peer = %peer,
            "Accepted connection from MCP client"
        );

        let running = match server.clone().serve(stream).await {
            Ok(running) => running,
            Err(err) => {
                tracing::warn!(
                    target: "photoshop_mcp::runtime",
                    peer = %peer,
                    error = %err,
                    "MCP handshake failed; waiting for the next client"
                );
                continue;
            }
        };
        match running.waiting().await {
            Ok(reason) => tracing::info!(
                target: "photoshop_mcp::runtime",
                peer = %peer,
                reason = ?reason,
                "MCP client session ended"
            ),
            Err(err) => tracing::warn!(
                target: "photoshop_mcp::runtime",
                peer = %peer,
                error = %err,
                "MCP client session aborted"
            ),
        }
    }
}

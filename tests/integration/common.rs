use std::{path::PathBuf, process::Stdio};

use anyhow::{Context, Result};
use tokio::{
    io::AsyncReadExt,
    process::{Child, ChildStdin, ChildStdout, Command},
    task::JoinHandle,
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_photoshop-mcp-server");

/// Child stdio as an MCP client transport (read from stdout, write to stdin).
pub type ChildTransport = (ChildStdout, ChildStdin);

pub async fn spawn_server_process(
    config_fixture: &str,
) -> Result<(Child, ChildTransport, Option<JoinHandle<()>>)> {
    let mut child = Command::new(BINARY_PATH)
        .env("MCP_CONFIG_PATH", fixture(config_fixture))
        .stdout(Stdio::piped())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn server process")?;
    let stdout = child.stdout.take().context("child stdout")?;
    let stdin = child.stdin.take().context("child stdin")?;
    let stderr_drain = child.stderr.take().map(|mut stderr| {
        tokio::spawn(async move {
            let mut sink = Vec::new();
            let _ = stderr.read_to_end(&mut sink).await;
        })
    });
    Ok((child, (stdout, stdin), stderr_drain))
}

pub fn fixture(relative: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(relative)
        .display()
        .to_string()
}

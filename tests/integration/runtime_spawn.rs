use std::{
    process::{Command as StdCommand, Stdio},
    time::Duration,
};

use anyhow::Result;
use rmcp::{model::ClientInfo, serve_client};
use tokio::time::timeout;

use crate::common::{fixture, spawn_server_process, BINARY_PATH};

#[tokio::test]
async fn inspector_style_spawn_reports_identity_and_tools() -> Result<()> {
    let (mut child, transport, stderr_task) =
        spawn_server_process("tests/fixtures/config_valid.toml").await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let info = client
        .peer_info()
        .cloned()
        .expect("initialize result should be recorded");
    assert_eq!(info.server_info.name, "Photoshop");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));

    let list = client.list_tools(None).await?;
    assert!(
        list.tools
            .iter()
            .any(|tool| tool.name.as_ref() == "get_server_info"),
        "list_tools should include get_server_info: {:?}",
        list.tools
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[test]
fn invalid_config_exits_with_failure() {
    let status = StdCommand::new(BINARY_PATH)
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_invalid_port.toml"),
        )
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(1), "config errors exit with code 1");
}

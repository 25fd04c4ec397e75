use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client, ServiceExt,
};

use photoshop_mcp_server::{
    app::{ResolvedVersion, ServerIdentity, VersionSource, PACKAGE_NAME},
    server::runtime::PhotoshopServer,
};

pub fn test_server(version: &str, source: VersionSource) -> PhotoshopServer {
    let identity = ServerIdentity::new(
        PACKAGE_NAME,
        ResolvedVersion {
            value: version.to_string(),
            source,
        },
    );
    PhotoshopServer::new(identity, "test instructions".to_string())
}

#[tokio::test]
async fn fallback_identity_is_advertised_on_initialize() -> Result<()> {
    let server = test_server("0.1.0", VersionSource::Fallback);
    assert_eq!(server.identity().version_source(), VersionSource::Fallback);
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;

    let info = client.peer_info().cloned();
    let _ = client.cancel().await;
    let _ = server_task.await;

    let info = info.expect("initialize result should be recorded");
    assert_eq!(info.server_info.name, "Photoshop");
    assert_eq!(info.server_info.version, "0.1.0");
    assert_eq!(info.instructions.as_deref(), Some("test instructions"));
    Ok(())
}

#[tokio::test]
async fn get_server_info_returns_structured_identity() -> Result<()> {
    let server = test_server("2.0.1", VersionSource::Metadata);
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;

    let call_result = client
        .call_tool(CallToolRequestParam {
            name: "get_server_info".into(),
            arguments: None,
        })
        .await;

    let _ = client.cancel().await;
    let _ = server_task.await;

    let response = call_result.expect("get_server_info should succeed");
    let payload = response
        .structured_content
        .expect("structured_content should exist");
    assert_eq!(
        payload.get("name").and_then(|v| v.as_str()),
        Some("Photoshop")
    );
    assert_eq!(
        payload.get("description").and_then(|v| v.as_str()),
        Some("MCP Server for Photoshop integration using photoshop-python-api")
    );
    assert_eq!(payload.get("version").and_then(|v| v.as_str()), Some("2.0.1"));
    assert_eq!(
        payload.get("version_source").and_then(|v| v.as_str()),
        Some("metadata")
    );
    Ok(())
}

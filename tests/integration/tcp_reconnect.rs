use std::time::Duration;

use anyhow::Result;
use rmcp::{model::ClientInfo, serve_client};
use tokio::{
    net::{TcpListener, TcpStream},
    time::{sleep, timeout},
};

use photoshop_mcp_server::{app::VersionSource, server::runtime::serve_tcp};

use crate::identity_handshake::test_server;

#[tokio::test]
async fn dropped_client_does_not_stop_tcp_server() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server_task = tokio::spawn(serve_tcp(
        test_server("0.1.0", VersionSource::Fallback),
        listener,
    ));

    let abandoned = TcpStream::connect(addr).await?;
    drop(abandoned);
    sleep(Duration::from_millis(100)).await;
    assert!(
        !server_task.is_finished(),
        "server must keep accepting after a client drops mid-handshake"
    );

    let stream = TcpStream::connect(addr).await?;
    let client = timeout(
        Duration::from_secs(5),
        serve_client(ClientInfo::default(), stream),
    )
    .await??;
    let info = client.peer_info().cloned();
    let _ = client.cancel().await;

    let info = info.expect("second client should complete the handshake");
    assert_eq!(info.server_info.name, "Photoshop");
    assert_eq!(info.server_info.version, "0.1.0");

    server_task.abort();
    Ok(())
}

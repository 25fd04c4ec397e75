use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, ServerHandler},
    model::{ErrorData, ServerInfo},
    tool, tool_handler, tool_router, Json,
};

use crate::{
    app::ServerIdentity, server::runtime::build_server_info,
    tools::server_info::ServerInfoResponse,
};

/// MCP handler advertising the registered Photoshop identity.
#[derive(Clone)]
pub struct PhotoshopServer {
    identity: Arc<ServerIdentity>,
    instructions: Arc<String>,
    tool_router: ToolRouter<Self>,
}

impl PhotoshopServer {
    pub fn new(identity: ServerIdentity, instructions: String) -> Self {
        Self {
            identity: Arc::new(identity),
            instructions: Arc::new(instructions),
            tool_router: Self::tool_router(),
        }
    }

    pub fn identity(&self) -> &ServerIdentity {
        &self.identity
    }
}

#[tool_router(router = tool_router)]
impl PhotoshopServer {
    #[tool(
        name = "get_server_info",
        description = "Return the Photoshop MCP server name, description, and version"
    )]
    async fn get_server_info(&self) -> Result<Json<ServerInfoResponse>, ErrorData> {
        tracing::debug!(
            target: "photoshop_mcp::runtime",
            version = %self.identity.version(),
            "Serving get_server_info"
        );
        Ok(Json(ServerInfoResponse::from(self.identity.as_ref())))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PhotoshopServer {
    fn get_info(&self) -> ServerInfo {
        build_server_info(&self.identity, &self.instructions)
    }
}

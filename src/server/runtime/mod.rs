//! MCP server startup and tool registration.
mod server_info;
mod startup;
mod tool_registry;

pub use server_info::{build_instructions, build_server_info};
pub use startup::{run_server, serve_tcp, RuntimeExit};
pub use tool_registry::PhotoshopServer;

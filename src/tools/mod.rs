//! Payloads returned by the MCP tools registered on the server.

pub mod server_info;

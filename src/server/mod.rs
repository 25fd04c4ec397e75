//! Server configuration and the MCP runtime.
pub mod config;
pub mod runtime;

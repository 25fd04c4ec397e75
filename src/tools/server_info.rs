//! `get_server_info` tool payload.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::app::ServerIdentity;

/// Output of `get_server_info`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServerInfoResponse {
    pub name: String,
    pub description: String,
    pub version: String,
    /// `metadata` when read from the installed package, `fallback` otherwise.
    pub version_source: String,
    pub package: String,
}

impl From<&ServerIdentity> for ServerInfoResponse {
    fn from(identity: &ServerIdentity) -> Self {
        Self {
            name: identity.name().to_string(),
            description: identity.description().to_string(),
            version: identity.version().to_string(),
            version_source: identity.version_source().as_str().to_string(),
            package: identity.package().to_string(),
        }
    }
}

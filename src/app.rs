//! Application identity: fixed names plus the version resolved at startup.
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::lib::metadata::PackageMetadata;

/// Internal application name used for logs and CLI output.
pub const APP_NAME: &str = "photoshop_mcp_server";
/// Name advertised to MCP clients.
pub const SERVER_NAME: &str = "Photoshop";
/// Description advertised to MCP clients.
pub const APP_DESCRIPTION: &str = "MCP Server for Photoshop integration using photoshop-python-api";
/// Package whose installed metadata carries the server version.
pub const PACKAGE_NAME: &str = "photoshop-mcp-server";
/// Version reported when the package metadata cannot be found.
pub const FALLBACK_VERSION: &str = "0.1.0";

/// Where the advertised version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    Metadata,
    Fallback,
}

impl VersionSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            VersionSource::Metadata => "metadata",
            VersionSource::Fallback => "fallback",
        }
    }
}

/// A non-empty version string together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub value: String,
    pub source: VersionSource,
}

/// Look up `package` and fall back to [`FALLBACK_VERSION`] on any lookup failure.
pub fn resolve_version<M>(metadata: &M, package: &str) -> ResolvedVersion
where
    M: PackageMetadata + ?Sized,
{
    match metadata.version(package) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(
                target: "photoshop_mcp::version",
                package,
                version = %value,
                "Resolved version from package metadata"
            );
            ResolvedVersion {
                value,
                source: VersionSource::Metadata,
            }
        }
        Ok(_) => {
            warn!(
                target: "photoshop_mcp::version",
                package,
                fallback = FALLBACK_VERSION,
                "Package metadata returned an empty version; using fallback"
            );
            fallback()
        }
        Err(err) if err.is_not_found() => {
            debug!(
                target: "photoshop_mcp::version",
                package,
                fallback = FALLBACK_VERSION,
                "Package is not installed; using fallback version"
            );
            fallback()
        }
        Err(err) => {
            warn!(
                target: "photoshop_mcp::version",
                package,
                fallback = FALLBACK_VERSION,
                reason = %err,
                "Package metadata lookup failed; using fallback version"
            );
            fallback()
        }
    }
}

fn fallback() -> ResolvedVersion {
    ResolvedVersion {
        value: FALLBACK_VERSION.to_string(),
        source: VersionSource::Fallback,
    }
}

/// Process-wide server registration record. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerIdentity {
    name: String,
    description: String,
    version: String,
    version_source: VersionSource,
    package: String,
}

impl ServerIdentity {
    /// Resolve the version of [`PACKAGE_NAME`] and build the registration.
    pub fn register<M: PackageMetadata + ?Sized>(metadata: &M) -> Self {
        Self::register_package(metadata, PACKAGE_NAME)
    }

    /// Same as [`ServerIdentity::register`] for a configured package name.
    pub fn register_package<M: PackageMetadata + ?Sized>(metadata: &M, package: &str) -> Self {
        let resolved = resolve_version(metadata, package);
        let identity = Self::new(package, resolved);
        info!(
            target: "photoshop_mcp::version",
            name = %identity.name,
            version = %identity.version,
            version_source = identity.version_source.as_str(),
            "Registered server identity"
        );
        identity
    }

    pub fn new(package: &str, version: ResolvedVersion) -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            description: APP_DESCRIPTION.to_string(),
            version: version.value,
            version_source: version.source,
            package: package.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_source(&self) -> VersionSource {
        self.version_source
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

//! Package metadata lookup used to resolve the advertised server version.
use std::{fs, io, path::PathBuf};

use serde::Deserialize;

use crate::lib::errors::MetadataError;

/// A source that can answer "which version of `package` is installed?".
pub trait PackageMetadata {
    fn version(&self, package: &str) -> Result<String, MetadataError>;
}

/// Package identity compiled into this binary by Cargo.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    name: &'static str,
    version: &'static str,
}

impl BuildMetadata {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for BuildMetadata {
    fn default() -> Self {
        Self::current()
    }
}

impl PackageMetadata for BuildMetadata {
    fn version(&self, package: &str) -> Result<String, MetadataError> {
        if package != self.name {
            return Err(MetadataError::not_found(package));
        }
        Ok(self.version.to_string())
    }
}

/// Installed package manifest (`[package] name/version`) on disk.
#[derive(Debug, Clone)]
pub struct ManifestMetadata {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    package: Option<RawManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct RawManifestPackage {
    name: Option<String>,
    version: Option<String>,
}

impl ManifestMetadata {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_manifest(&self, package: &str) -> Result<RawManifest, MetadataError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(MetadataError::not_found(package));
            }
            Err(source) => {
                return Err(MetadataError::ManifestRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| MetadataError::ManifestParse {
            path: self.path.clone(),
            source,
        })
    }
}

impl PackageMetadata for ManifestMetadata {
    fn version(&self, package: &str) -> Result<String, MetadataError> {
        let manifest = self.read_manifest(package)?;
        let entry = manifest
            .package
            .filter(|entry| entry.name.as_deref() == Some(package))
            .ok_or_else(|| MetadataError::not_found(package))?;

        entry
            .version
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| MetadataError::MissingVersion {
                package: package.to_string(),
            })
    }
}

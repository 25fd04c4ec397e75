use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    app::PACKAGE_NAME,
    lib::{
        errors::ConfigError,
        metadata::{BuildMetadata, ManifestMetadata, PackageMetadata},
    },
};

/// Where to look up the advertised package version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSection {
    pub name: String,
    pub manifest_path: Option<PathBuf>,
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            name: PACKAGE_NAME.to_string(),
            manifest_path: None,
        }
    }
}

impl PackageSection {
    /// Metadata source selected by this section.
    pub fn metadata_source(&self) -> Box<dyn PackageMetadata + Send + Sync> {
        match &self.manifest_path {
            Some(path) => Box::new(ManifestMetadata::new(path.clone())),
            None => Box::new(BuildMetadata::current()),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPackageSection {
    pub name: Option<String>,
    pub manifest_path: Option<PathBuf>,
}

pub fn parse_package_section(
    raw: Option<RawPackageSection>,
    path: &Path,
) -> Result<PackageSection, ConfigError> {
    let package_raw = raw.unwrap_or_default();

    let name = package_raw
        .name
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| PACKAGE_NAME.to_string());
    validate_name(&name, path)?;

    if let Some(manifest) = &package_raw.manifest_path {
        validate_manifest_path(manifest, path)?;
    }

    Ok(PackageSection {
        name,
        manifest_path: package_raw.manifest_path,
    })
}

fn validate_name(name: &str, path: &Path) -> Result<(), ConfigError> {
    if name.is_empty() || name.chars().count() > 64 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "package.name",
            message: "Provide a 1-64 character package name".into(),
        });
    }
    Ok(())
}

fn validate_manifest_path(manifest: &Path, path: &Path) -> Result<(), ConfigError> {
    if manifest.as_os_str().is_empty() || !manifest.is_absolute() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "package.manifest_path",
            message: format!("Only absolute paths are allowed: {}", manifest.display()),
        });
    }
    Ok(())
}

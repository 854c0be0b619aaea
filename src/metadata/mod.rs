//! Project manifest loading from a single Cargo.toml

use crate::error::{BundlerError, CliError, Result};
use std::{path::Path, str::FromStr};

/// Key of the bundle configuration block under `[package.metadata]`.
pub const BUNDLE_METADATA_KEY: &str = "inno_bundle";

/// Fallback values from the `[package]` section.
///
/// Every field is optional here; which ones are required is decided during
/// configuration resolution.
#[derive(Clone, Debug, Default)]
pub struct PackageMetadata {
    /// Package name from Cargo.toml
    pub name: Option<String>,

    /// Package description from Cargo.toml
    pub description: Option<String>,

    /// Package version from Cargo.toml (e.g., "0.1.0")
    pub version: Option<String>,

    /// List of package authors from Cargo.toml
    pub authors: Vec<String>,

    /// Homepage URL if specified in Cargo.toml
    pub homepage: Option<String>,
}

/// Parsed project manifest.
#[derive(Clone, Debug, Default)]
pub struct ProjectManifest {
    /// `[package]` section, if present
    pub package: Option<PackageMetadata>,

    /// Primary binary name (from the first [[bin]] or package.name)
    pub binary_name: Option<String>,

    /// Raw `[package.metadata.inno_bundle]` block, if present
    pub bundle: Option<toml::Value>,
}

impl FromStr for ProjectManifest {
    type Err = toml::de::Error;

    fn from_str(manifest: &str) -> std::result::Result<Self, Self::Err> {
        let toml_value: toml::Value = toml::from_str(manifest)?;
        Ok(Self::from_value(&toml_value))
    }
}

impl ProjectManifest {
    /// Extract manifest data from a parsed TOML document.
    pub fn from_value(toml_value: &toml::Value) -> Self {
        let package = toml_value.get("package");

        let text = |key: &str| {
            package
                .and_then(|p| p.get(key))
                .and_then(|v| v.as_str())
                .map(String::from)
        };

        let metadata = package.map(|p| PackageMetadata {
            name: text("name"),
            description: text("description"),
            // `version.workspace = true` is not a string and is treated as absent
            version: text("version"),
            authors: p
                .get("authors")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default(),
            homepage: text("homepage"),
        });

        // Try [[bin]] section first, then fall back to the package name
        let binary_name = toml_value
            .get("bin")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first())
            .and_then(|first| first.get("name"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .or_else(|| text("name"));

        let bundle = package
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.get(BUNDLE_METADATA_KEY))
            .cloned();

        Self {
            package: metadata,
            binary_name,
            bundle,
        }
    }
}

/// Load the project manifest from Cargo.toml (single read + parse)
pub fn load_manifest(cargo_toml_path: &Path) -> Result<ProjectManifest> {
    let manifest = std::fs::read_to_string(cargo_toml_path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_cargo_toml".to_string(),
            reason: format!("Failed to read {}: {}", cargo_toml_path.display(), e),
        })
    })?;

    let manifest = manifest.parse::<ProjectManifest>()?;
    log::debug!(
        "Loaded manifest {} (bundle section present: {})",
        cargo_toml_path.display(),
        manifest.bundle.is_some()
    );
    Ok(manifest)
}

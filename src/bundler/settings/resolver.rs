//! Configuration resolution.
//!
//! Merges the manifest's bundle block, the `[package]` fallbacks and the
//! command line overrides into a validated [`Config`]. Any violation is fatal.

use super::{
    AdminMode, AdminValue, BuildArch, BuildVariant, Config, ConfigError, InstallerIcon, Language,
    RawBundleConfig,
    sign_tool::{self, SignToolOverrides},
};
use crate::metadata::ProjectManifest;
use path_absolutize::Absolutize;
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};
use uuid::Uuid;

/// License file looked up when `license_file` is not configured.
const DEFAULT_LICENSE_FILE: &str = "LICENSE";

/// Characters Windows refuses in file names, plus control characters.
static DISPLAY_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^<>:"/\\|?*\x00-\x1F]+$"#).expect("display name regex is valid")
});

/// Values supplied on the command line.
///
/// Empty strings are treated as absent.
#[derive(Clone, Debug)]
pub struct Overrides {
    /// Build variant.
    pub variant: BuildVariant,
    /// Extra arguments for the application build.
    pub build_args: Option<String>,
    /// Version that takes precedence over the manifest.
    pub app_version: Option<String>,
    /// Signing tool name.
    pub sign_tool_name: Option<String>,
    /// Signing tool command.
    pub sign_tool_command: Option<String>,
    /// Signing tool parameters.
    pub sign_tool_params: Option<String>,
    /// Build the application before synthesis.
    pub include_app: bool,
    /// Compile the installer after synthesis.
    pub include_installer: bool,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            variant: BuildVariant::default(),
            build_args: None,
            app_version: None,
            sign_tool_name: None,
            sign_tool_command: None,
            sign_tool_params: None,
            include_app: true,
            include_installer: true,
        }
    }
}

impl Overrides {
    fn sign_tool(&self) -> SignToolOverrides<'_> {
        SignToolOverrides {
            name: self.sign_tool_name.as_deref(),
            command: self.sign_tool_command.as_deref(),
            params: self.sign_tool_params.as_deref(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Resolve the configuration.
    ///
    /// Relative paths in the manifest are resolved against `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn resolve(
        manifest: &ProjectManifest,
        overrides: &Overrides,
        project_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let package = manifest.package.clone().ok_or(ConfigError::MissingPackage)?;
        let block = manifest.bundle.as_ref().ok_or(ConfigError::MissingSection)?;
        let raw = RawBundleConfig::from_value(block)?;

        let id = resolve_id(raw.id.as_deref())?;

        let declared_name = manifest
            .binary_name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::MissingDeclaredName)?;

        let display_name = match non_empty(raw.name) {
            Some(name) => validate_display_name(&name)?,
            None => {
                log::debug!("`name` not set, using executable name \"{declared_name}\"");
                declared_name.clone()
            }
        };

        let version = non_empty(overrides.app_version.clone())
            .or(non_empty(raw.version))
            .or(non_empty(package.version))
            .ok_or(ConfigError::MissingField {
                key: "version",
                fallback: "[package].version or --app-version",
            })?;

        let description = non_empty(raw.description)
            .or(non_empty(package.description))
            .ok_or(ConfigError::MissingField {
                key: "description",
                fallback: "[package].description",
            })?;

        let publisher = non_empty(raw.publisher)
            .or(non_empty(package.authors.first().map(|a| author_name(a))))
            .ok_or(ConfigError::MissingField {
                key: "publisher",
                fallback: "the first entry of [package].authors",
            })?;

        let homepage_url = non_empty(raw.url)
            .or(non_empty(package.homepage))
            .unwrap_or_default();
        let support_url = non_empty(raw.support_url).unwrap_or_else(|| homepage_url.clone());
        let updates_url = non_empty(raw.updates_url).unwrap_or_else(|| homepage_url.clone());

        let installer_icon = match raw.installer_icon {
            Some(path) => {
                let path = absolutize("installer_icon", &path, project_dir)?;
                if !path.is_file() {
                    return Err(ConfigError::IconNotFound { path });
                }
                InstallerIcon::File(path)
            }
            None => InstallerIcon::Default,
        };

        let languages = resolve_languages(raw.languages)?;
        let admin = resolve_admin(raw.admin)?;

        let license_path = raw
            .license_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LICENSE_FILE));
        let license_path = absolutize("license_file", &license_path, project_dir)?;
        let license_file = if license_path.is_file() {
            Some(license_path)
        } else {
            log::debug!(
                "License file {} not found, the installer has no license page",
                license_path.display()
            );
            None
        };

        sign_tool::validate(raw.sign_tool.as_ref(), overrides.sign_tool())?;
        let sign_tool = sign_tool::build(raw.sign_tool.as_ref(), overrides.sign_tool());

        let arch = match raw.arch {
            Some(arch) => arch.parse::<BuildArch>()?,
            None => BuildArch::default(),
        };

        Ok(Self {
            id,
            declared_name,
            display_name,
            description,
            version,
            publisher,
            homepage_url,
            support_url,
            updates_url,
            installer_icon,
            license_file,
            sign_tool,
            arch,
            languages,
            admin,
            variant: overrides.variant,
            include_app: overrides.include_app,
            include_installer: overrides.include_installer,
            build_args: non_empty(overrides.build_args.clone()),
            run_args: raw.run_args,
            run_on_silent: raw.run_on_silent.unwrap_or(false),
            silent_run_args: raw.silent_run_args,
            code: non_empty(raw.code),
            project_dir: project_dir.to_path_buf(),
        })
    }
}

fn resolve_id(id: Option<&str>) -> Result<Uuid, ConfigError> {
    let id = id.map(str::trim).filter(|id| !id.is_empty());
    let id = id.ok_or(ConfigError::MissingId)?;
    Uuid::try_parse(id).map_err(|_| ConfigError::InvalidId {
        value: id.to_string(),
    })
}

fn validate_display_name(name: &str) -> Result<String, ConfigError> {
    if !DISPLAY_NAME_PATTERN.is_match(name) {
        return Err(ConfigError::InvalidDisplayName {
            value: name.to_string(),
        });
    }
    Ok(name.to_string())
}

/// Strip a trailing `<email>` from a Cargo author entry.
fn author_name(author: &str) -> String {
    match author.find('<') {
        Some(index) => author[..index].trim().to_string(),
        None => author.trim().to_string(),
    }
}

fn resolve_languages(languages: Option<Vec<String>>) -> Result<Vec<Language>, ConfigError> {
    let Some(names) = languages.filter(|names| !names.is_empty()) else {
        log::debug!("`languages` not set, using all {} languages", Language::ALL.len());
        return Ok(Language::ALL.to_vec());
    };

    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        let language = name.parse::<Language>()?;
        if !resolved.contains(&language) {
            resolved.push(language);
        }
    }
    Ok(resolved)
}

fn resolve_admin(admin: Option<AdminValue>) -> Result<AdminMode, ConfigError> {
    match admin {
        None => Ok(AdminMode::default()),
        Some(AdminValue::Bool(admin)) => Ok(AdminMode::from(admin)),
        Some(AdminValue::Text(text)) => text.parse(),
    }
}

fn absolutize(key: &'static str, path: &Path, base: &Path) -> Result<PathBuf, ConfigError> {
    path.absolutize_from(base)
        .map(|p| p.into_owned())
        .map_err(|e| ConfigError::InvalidPath {
            key,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

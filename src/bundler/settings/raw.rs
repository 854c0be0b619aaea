//! Typed intermediate representation of the configuration block.

use super::{ConfigError, SignToolOption};
use serde::Deserialize;
use std::path::PathBuf;

/// `[package.metadata.inno_bundle]` exactly as written in the manifest.
///
/// Nothing here is validated beyond its TOML type; [`Config::resolve`](super::Config::resolve)
/// applies defaults, fallbacks and the semantic checks.
///
/// ```toml
/// [package.metadata.inno_bundle]
/// id = "f887d5f0-4690-1e07-8efc-d16ea7711bfb"
/// name = "Demo App"
/// publisher = "Acme"
/// languages = ["english", "french"]
/// admin = "auto"
/// sign_tool = { name = "acme", command = "signtool.exe sign /a $f" }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBundleConfig {
    /// Application UUID (`AppId`).
    pub id: Option<String>,

    /// Display name; must be a valid file name.
    pub name: Option<String>,

    /// Application description.
    pub description: Option<String>,

    /// Application version.
    pub version: Option<String>,

    /// Publisher shown in "Apps & features".
    pub publisher: Option<String>,

    /// Homepage URL.
    pub url: Option<String>,

    /// Support URL. Defaults to `url`.
    pub support_url: Option<String>,

    /// Updates URL. Defaults to `url`.
    pub updates_url: Option<String>,

    /// Path to the installer `.ico` file.
    pub installer_icon: Option<PathBuf>,

    /// Installer languages by name.
    pub languages: Option<Vec<String>>,

    /// `true`, `false` or `"auto"`.
    pub admin: Option<AdminValue>,

    /// Path to the license file shown by the wizard.
    pub license_file: Option<PathBuf>,

    /// External signing tool.
    pub sign_tool: Option<SignToolOption>,

    /// `"x64"` or `"x64_compatible"`.
    pub arch: Option<String>,

    /// Arguments for launching the application after a normal install.
    pub run_args: Option<Vec<String>>,

    /// Launch the application after a silent install as well.
    pub run_on_silent: Option<bool>,

    /// Arguments for launching the application after a silent install.
    pub silent_run_args: Option<Vec<String>>,

    /// Raw Pascal script appended to the `[Code]` section.
    pub code: Option<String>,
}

/// Raw value of the `admin` key.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum AdminValue {
    /// `admin = true` / `admin = false`
    Bool(bool),
    /// `admin = "auto"` (any other string is rejected during resolution)
    Text(String),
}

impl RawBundleConfig {
    /// Deserialize the configuration block from its TOML value.
    pub fn from_value(value: &toml::Value) -> Result<Self, ConfigError> {
        value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<RawBundleConfig, ConfigError> {
        let value: toml::Value = toml::from_str(text).unwrap();
        RawBundleConfig::from_value(&value)
    }

    #[test]
    fn test_admin_accepts_bool_and_text() {
        assert_eq!(parse("admin = false").unwrap().admin, Some(AdminValue::Bool(false)));
        assert_eq!(
            parse("admin = \"auto\"").unwrap().admin,
            Some(AdminValue::Text("auto".into()))
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse("publsher = \"Acme\"").unwrap_err();
        assert!(err.to_string().contains("publsher"));
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        assert!(matches!(parse("languages = \"english\""), Err(ConfigError::Malformed(_))));
        assert!(matches!(parse("run_on_silent = \"yes\""), Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn test_empty_block() {
        let raw = parse("").unwrap();
        assert!(raw.id.is_none());
        assert!(raw.sign_tool.is_none());
    }
}

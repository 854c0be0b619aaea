//! Configuration resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors raised while resolving a [`Config`](super::Config).
///
/// Every variant names the offending key and the shape it expects.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The manifest has no `[package]` table.
    #[error("no [package] section in the project manifest")]
    MissingPackage,

    /// The `[package.metadata.inno_bundle]` table is absent.
    #[error(
        "no [package.metadata.inno_bundle] section in the project manifest. \
         Add one with at least an `id` key (run `inno_bundle id` to generate one)"
    )]
    MissingSection,

    /// The configuration block does not match the expected schema.
    #[error("malformed [package.metadata.inno_bundle] section: {0}")]
    Malformed(String),

    /// `id` is absent.
    #[error(
        "`id` is required in [package.metadata.inno_bundle] and must be a UUID. \
         Run `inno_bundle id` to generate one"
    )]
    MissingId,

    /// `id` is not a UUID.
    #[error(
        "`id` must be a valid UUID such as \"f887d5f0-4690-1e07-8efc-d16ea7711bfb\", got \"{value}\". \
         Run `inno_bundle id` to generate one"
    )]
    InvalidId {
        /// Value found in the configuration
        value: String,
    },

    /// Neither `[[bin]]` nor `[package].name` names the executable.
    #[error("`name` is required in [package] to locate the application executable")]
    MissingDeclaredName,

    /// `name` contains characters that are not allowed in a file name.
    #[error(
        "`name` must be usable as a file name: no path separators, <>:\"|?* or control \
         characters; got \"{value}\""
    )]
    InvalidDisplayName {
        /// Value found in the configuration
        value: String,
    },

    /// A required text field has no value anywhere.
    #[error("`{key}` is required: set it in [package.metadata.inno_bundle] or as {fallback}")]
    MissingField {
        /// Key in the configuration block
        key: &'static str,
        /// Where else the value may come from
        fallback: &'static str,
    },

    /// A configured path cannot be made absolute.
    #[error("`{key}` path \"{path}\" cannot be resolved: {reason}")]
    InvalidPath {
        /// Key in the configuration block
        key: &'static str,
        /// Path as configured
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// `installer_icon` points at a file that does not exist.
    #[error("`installer_icon` file not found at {path}. Point it at an existing .ico file or remove it to use the default icon")]
    IconNotFound {
        /// Resolved absolute path
        path: PathBuf,
    },

    /// A requested language is not part of the catalog.
    #[error("`languages` contains unsupported language \"{value}\". Supported languages: {supported}")]
    UnknownLanguage {
        /// Value found in the configuration
        value: String,
        /// Comma separated catalog
        supported: String,
    },

    /// `admin` is neither a boolean nor `"auto"`.
    #[error("`admin` must be true, false or \"auto\", got \"{value}\"")]
    InvalidAdmin {
        /// Value found in the configuration
        value: String,
    },

    /// `sign_tool` is present but unusable.
    #[error("`sign_tool` {reason}")]
    InvalidSignTool {
        /// What is wrong with it
        reason: String,
    },

    /// `arch` is not one of the accepted values.
    #[error("`arch` must be one of \"x64\" or \"x64_compatible\", got \"{value}\"")]
    InvalidArch {
        /// Value found in the configuration
        value: String,
    },

    /// The build variant is not debug, profile or release.
    #[error("build variant must be one of \"debug\", \"profile\" or \"release\", got \"{value}\"")]
    InvalidVariant {
        /// Value supplied
        value: String,
    },
}

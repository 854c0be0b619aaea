//! Resolved bundle configuration.

use super::{AdminMode, BuildArch, BuildVariant, Language, SignTool};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name of the generated installer script.
pub const SCRIPT_FILE_NAME: &str = "inno-script.iss";

/// Icon used for the installer executable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InstallerIcon {
    /// Use the bundled default icon, written out during synthesis.
    Default,
    /// Absolute path to an existing `.ico` file.
    File(PathBuf),
}

/// Fully resolved, immutable bundle configuration.
///
/// Produced once by [`Config::resolve`] and only borrowed afterwards. All
/// invariants are checked during resolution:
///
/// - `id` is a UUID
/// - the display name is a valid file name
/// - `languages` is never empty
/// - the license file and a custom installer icon existed at resolution time
///
/// # See Also
///
/// - [`Overrides`](super::Overrides) - Command line values merged during resolution
/// - [`RawBundleConfig`](super::RawBundleConfig) - The unvalidated input
#[derive(Clone, Debug)]
pub struct Config {
    pub(super) id: Uuid,
    pub(super) declared_name: String,
    pub(super) display_name: String,
    pub(super) description: String,
    pub(super) version: String,
    pub(super) publisher: String,
    pub(super) homepage_url: String,
    pub(super) support_url: String,
    pub(super) updates_url: String,
    pub(super) installer_icon: InstallerIcon,
    pub(super) license_file: Option<PathBuf>,
    pub(super) sign_tool: Option<SignTool>,
    pub(super) arch: BuildArch,
    pub(super) languages: Vec<Language>,
    pub(super) admin: AdminMode,
    pub(super) variant: BuildVariant,
    pub(super) include_app: bool,
    pub(super) include_installer: bool,
    pub(super) build_args: Option<String>,
    pub(super) run_args: Option<Vec<String>>,
    pub(super) run_on_silent: bool,
    pub(super) silent_run_args: Option<Vec<String>>,
    pub(super) code: Option<String>,
    pub(super) project_dir: PathBuf,
}

impl Config {
    /// Application UUID.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name the upstream build gave the primary executable (without `.exe`).
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// User-facing application name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Application description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Application version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Publisher name.
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Homepage URL, possibly empty.
    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    /// Support URL, defaulting to the homepage.
    pub fn support_url(&self) -> &str {
        &self.support_url
    }

    /// Updates URL, defaulting to the homepage.
    pub fn updates_url(&self) -> &str {
        &self.updates_url
    }

    /// Installer icon source.
    pub fn installer_icon(&self) -> &InstallerIcon {
        &self.installer_icon
    }

    /// License file, if one exists.
    pub fn license_file(&self) -> Option<&Path> {
        self.license_file.as_deref()
    }

    /// Signing tool, if signing is enabled.
    pub fn sign_tool(&self) -> Option<&SignTool> {
        self.sign_tool.as_ref()
    }

    /// Target architecture.
    pub fn arch(&self) -> BuildArch {
        self.arch
    }

    /// Installer languages, never empty.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Privilege mode.
    pub fn admin(&self) -> AdminMode {
        self.admin
    }

    /// Build variant.
    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// Whether the application itself is built before synthesis.
    pub fn include_app(&self) -> bool {
        self.include_app
    }

    /// Whether the installer compiler runs after synthesis.
    pub fn include_installer(&self) -> bool {
        self.include_installer
    }

    /// Extra arguments passed to the application build.
    pub fn build_args(&self) -> Option<&str> {
        self.build_args.as_deref()
    }

    /// Whether the wizard offers to launch the application when it finishes.
    pub fn launch_on_normal_completion(&self) -> bool {
        self.run_args.is_some()
    }

    /// Arguments for the post-install launch.
    pub fn run_args(&self) -> Option<&[String]> {
        self.run_args.as_deref()
    }

    /// Whether the application is launched after a silent install.
    pub fn run_on_silent(&self) -> bool {
        self.run_on_silent
    }

    /// Arguments for the post-install launch during a silent install.
    pub fn silent_run_args(&self) -> Option<&[String]> {
        self.silent_run_args.as_deref()
    }

    /// Raw `[Code]` appendix.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Directory holding the project manifest.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// File name of the executable produced by the upstream build.
    pub fn declared_exe_name(&self) -> String {
        format!("{}.exe", self.declared_name)
    }

    /// File name of the installed executable.
    pub fn exe_name(&self) -> String {
        format!("{}.exe", self.display_name)
    }

    /// Default location of the application build output for this variant.
    pub fn default_app_dir(&self) -> PathBuf {
        self.project_dir
            .join("target")
            .join(self.variant.target_dir_name())
    }

    /// Directory the script and the compiled installer are written to.
    pub fn installer_build_dir(&self) -> PathBuf {
        self.project_dir
            .join("target")
            .join("installer")
            .join(self.variant.dir_name())
    }

    /// Path of the generated installer script.
    pub fn script_path(&self) -> PathBuf {
        self.installer_build_dir().join(SCRIPT_FILE_NAME)
    }

    /// Base file name of the compiled installer, without extension.
    ///
    /// `{display-name}-{cpu}-{version}-Installer`, with the display name and
    /// the version reduced to characters safe in any file name.
    pub fn installer_base_name(&self) -> String {
        format!(
            "{}-{}-{}-Installer",
            sanitize_file_stem(&self.display_name),
            self.arch.cpu(),
            sanitize_file_stem(&self.version)
        )
    }
}

/// Replace whitespace with `_` and drop anything outside `[A-Za-z0-9._-]`.
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("Demo App"), "Demo_App");
        assert_eq!(sanitize_file_stem("Tom & Jerry (beta)"), "Tom__Jerry_beta");
        assert_eq!(sanitize_file_stem("plain-name_1.2"), "plain-name_1.2");
        assert_eq!(sanitize_file_stem("1.0/beta"), "1.0beta");
    }
}

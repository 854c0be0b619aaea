//! Inno Setup script generation.
//!
//! Renders the resolved [`Config`] and the application build output into an
//! `.iss` script with handlebars, staging the assets the script refers to.

use super::{
    template::ISS_TEMPLATE,
    utils::{custom_message_arg, escape_constants, join_arguments, quote, single_line},
};
use crate::bundler::{
    error::{Context, Error, ErrorExt, Result},
    resources,
    settings::{Config, InstallerIcon},
    utils::fs,
};
use handlebars::Handlebars;
use path_absolutize::Absolutize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Desktop shortcut task name.
const DESKTOP_ICON_TASK: &str = "desktopicon";

/// Generated script and where it was written.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptArtifact {
    /// Path of the written `.iss` file.
    pub path: PathBuf,
    /// Script text (without the byte order mark).
    pub text: String,
}

/// Where synthesis stages assets and looks for runtime libraries.
#[derive(Clone, Debug)]
pub struct SynthesisOptions {
    /// Directory receiving the default icon and the redistributables.
    pub staging_dir: PathBuf,
    /// Directories searched for redistributable libraries.
    pub library_dirs: Vec<PathBuf>,
}

impl SynthesisOptions {
    /// Staging under the system temp directory, keyed by the application id,
    /// and the system library directories.
    pub fn for_config(config: &Config) -> Self {
        Self {
            staging_dir: std::env::temp_dir()
                .join("inno_bundle")
                .join(config.id().hyphenated().to_string()),
            library_dirs: resources::system_library_dirs(),
        }
    }
}

/// One `[Files]` entry.
#[derive(Clone, Debug, Eq, PartialEq)]
struct FileEntry {
    source: PathBuf,
    name: String,
    dest_dir: String,
    dest_name: Option<String>,
    recursive: bool,
}

impl FileEntry {
    fn file(source: &Path, name: &str) -> Self {
        Self {
            source: source.to_path_buf(),
            name: name.to_string(),
            dest_dir: "{app}".to_string(),
            dest_name: None,
            recursive: false,
        }
    }

    fn directory(source: &Path, name: &str) -> Self {
        Self {
            source: source.join("*"),
            name: name.to_string(),
            dest_dir: format!("{{app}}\\{}", escape_constants(name)),
            dest_name: None,
            recursive: true,
        }
    }

    /// File name inside `{app}` for top-level files.
    fn installed_name(&self) -> Option<&str> {
        if self.recursive {
            None
        } else {
            Some(self.dest_name.as_deref().unwrap_or(&self.name))
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            "Source: {}; DestDir: {}",
            quote(&path_value(&self.source)),
            quote(&self.dest_dir)
        );
        if let Some(dest_name) = &self.dest_name {
            line.push_str(&format!("; DestName: {}", quote(&escape_constants(dest_name))));
        }
        if self.recursive {
            line.push_str("; Flags: ignoreversion recursesubdirs createallsubdirs");
        } else {
            line.push_str("; Flags: ignoreversion");
        }
        line
    }
}

/// Path with braces escaped so the compiler reads it literally.
fn path_value(path: &Path) -> String {
    escape_constants(&path.display().to_string())
}

/// Section bodies fed to the template.
#[derive(Debug, Serialize)]
struct ScriptData {
    setup: String,
    install_delete: String,
    languages: String,
    tasks: String,
    files: String,
    icons: String,
    run: String,
    code_section: String,
}

/// Generate the installer script and write it next to the installer output.
///
/// Stages the default icon (when no icon is configured) and any
/// redistributable libraries found on the system, then writes the script to
/// [`Config::script_path`]. The script is written only once fully rendered.
pub async fn synthesize(config: &Config, app_dir: &Path) -> Result<ScriptArtifact> {
    synthesize_with(config, app_dir, &SynthesisOptions::for_config(config)).await
}

/// [`synthesize`] with explicit staging and library locations.
pub async fn synthesize_with(
    config: &Config,
    app_dir: &Path,
    options: &SynthesisOptions,
) -> Result<ScriptArtifact> {
    if !app_dir.is_dir() {
        return Err(Error::GenericError(format!(
            "application build directory not found: {}. Build the application first or pass --app-dir",
            app_dir.display()
        )));
    }

    fs::create_dir_all(&options.staging_dir, true).await?;

    let icon_path = match config.installer_icon() {
        InstallerIcon::File(path) => path.clone(),
        InstallerIcon::Default => resources::persist_default_icon(&options.staging_dir).await?,
    };

    let redistributables =
        resources::stage_redistributables(&options.staging_dir, &options.library_dirs).await?;

    let text = render_script(config, app_dir, &icon_path, &redistributables)
        .context("rendering installer script")?;

    let path = config.script_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating installer build directory", parent)?;
    }
    fs::write_utf8_bom(&path, &text).await?;

    log::info!("Wrote installer script: {}", path.display());

    Ok(ScriptArtifact { path, text })
}

/// Render the script text.
///
/// Reads the top level of `app_dir`; performs no writes.
pub fn render_script(
    config: &Config,
    app_dir: &Path,
    icon_path: &Path,
    redistributables: &[PathBuf],
) -> Result<String> {
    let app_dir = app_dir
        .absolutize()
        .fs_context("resolving application build directory", app_dir)?;

    let mut files = collect_files(config, &app_dir)?;
    append_redistributables(&mut files, redistributables);

    let data = ScriptData {
        setup: setup_section(config, icon_path).join("\n"),
        install_delete: "Type: filesandordirs; Name: \"{app}\\*\"".to_string(),
        languages: languages_section(config).join("\n"),
        tasks: format!(
            "Name: {}; Description: \"{{cm:CreateDesktopIcon}}\"; GroupDescription: \"{{cm:AdditionalIcons}}\"; Flags: unchecked",
            quote(DESKTOP_ICON_TASK)
        ),
        files: files.iter().map(FileEntry::line).collect::<Vec<_>>().join("\n"),
        icons: icons_section(config).join("\n"),
        run: run_section(config).join("\n"),
        code_section: config
            .code()
            .map(|code| format!("\n[Code]\n{}\n", code.trim_end()))
            .unwrap_or_default(),
    };

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("inno-script.iss", ISS_TEMPLATE)?;

    Ok(handlebars.render("inno-script.iss", &data)?)
}

fn setup_section(config: &Config, icon_path: &Path) -> Vec<String> {
    let name = single_line(config.display_name());
    let mut lines = vec![
        format!("AppId={}", config.id().hyphenated()),
        format!("AppName={}", escape_constants(&name)),
        format!("UninstallDisplayName={}", escape_constants(&name)),
        format!(
            "UninstallDisplayIcon={{app}}\\{}",
            escape_constants(&config.exe_name())
        ),
        format!("AppVersion={}", single_line(config.version())),
        format!("AppComments={}", escape_constants(&single_line(config.description()))),
        format!("AppPublisher={}", escape_constants(&single_line(config.publisher()))),
        format!("AppPublisherURL={}", config.homepage_url()),
        format!("AppSupportURL={}", config.support_url()),
        format!("AppUpdatesURL={}", config.updates_url()),
        format!("DefaultDirName={{autopf}}\\{}", escape_constants(&name)),
        "DisableProgramGroupPage=yes".to_string(),
        format!("OutputDir={}", path_value(&config.installer_build_dir())),
        format!("OutputBaseFilename={}", config.installer_base_name()),
        format!("SetupIconFile={}", path_value(icon_path)),
    ];

    if let Some(license) = config.license_file() {
        lines.push(format!("LicenseFile={}", path_value(license)));
    }

    lines.extend([
        "Compression=lzma2/max".to_string(),
        "SolidCompression=yes".to_string(),
        "WizardStyle=modern".to_string(),
        format!("PrivilegesRequired={}", config.admin().privileges_required()),
    ]);
    if let Some(allowed) = config.admin().overrides_allowed() {
        lines.push(format!("PrivilegesRequiredOverridesAllowed={allowed}"));
    }

    lines.extend([
        format!("ArchitecturesAllowed={}", config.arch().token()),
        format!("ArchitecturesInstallIn64BitMode={}", config.arch().token()),
    ]);

    if let Some(sign_tool) = config.sign_tool() {
        lines.extend([
            format!("SignTool={}", sign_tool.directive()),
            format!("SignToolRetryCount={}", sign_tool.retry_count()),
            format!("SignToolRetryDelay={}", sign_tool.retry_delay_ms()),
        ]);
    }

    lines
}

fn languages_section(config: &Config) -> Vec<String> {
    config
        .languages()
        .iter()
        .map(|language| {
            format!(
                "Name: {}; MessagesFile: {}",
                quote(language.name()),
                quote(language.messages_file())
            )
        })
        .collect()
}

/// Entries for the direct children of the application build directory.
fn collect_files(config: &Config, app_dir: &Path) -> Result<Vec<FileEntry>> {
    let declared_exe = config.declared_exe_name();
    let exe_name = config.exe_name();
    let mut entries = Vec::new();
    let mut found_exe = false;

    for entry in walkdir::WalkDir::new(app_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy();

        if path.is_dir() {
            entries.push(FileEntry::directory(path, &file_name));
            continue;
        }

        let mut file = FileEntry::file(path, &file_name);
        if file_name.eq_ignore_ascii_case(&declared_exe) {
            found_exe = true;
            if declared_exe != exe_name {
                log::info!("Renaming {declared_exe} to {exe_name} in the installer");
                file.dest_name = Some(exe_name.clone());
            }
        }
        entries.push(file);
    }

    if !found_exe {
        log::warn!(
            "Executable {} not found in {}; shortcuts will point at a missing file",
            declared_exe,
            app_dir.display()
        );
    }

    Ok(entries)
}

/// Append staged libraries the application does not already ship.
fn append_redistributables(files: &mut Vec<FileEntry>, redistributables: &[PathBuf]) {
    for path in redistributables {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let shipped = files
            .iter()
            .filter_map(FileEntry::installed_name)
            .any(|installed| installed.eq_ignore_ascii_case(&name));
        if shipped {
            log::info!("{name} is part of the application files, not adding the system copy");
            continue;
        }
        files.push(FileEntry::file(path, &name));
    }
}

fn icons_section(config: &Config) -> Vec<String> {
    let name = escape_constants(&single_line(config.display_name()));
    let target = quote(&format!("{{app}}\\{}", escape_constants(&config.exe_name())));
    vec![
        format!(
            "Name: {}; Filename: {}",
            quote(&format!("{{autoprograms}}\\{name}")),
            target
        ),
        format!(
            "Name: {}; Filename: {}; Tasks: {}",
            quote(&format!("{{autodesktop}}\\{name}")),
            target,
            DESKTOP_ICON_TASK
        ),
    ]
}

fn run_section(config: &Config) -> Vec<String> {
    let target = quote(&format!("{{app}}\\{}", escape_constants(&config.exe_name())));
    let parameters = |args: &[String]| {
        if args.is_empty() {
            String::new()
        } else {
            format!("; Parameters: {}", quote(&join_arguments(args)))
        }
    };

    let mut lines = Vec::new();

    if let Some(args) = config.run_args() {
        let description = format!(
            "{{cm:LaunchProgram,{}}}",
            custom_message_arg(&single_line(config.display_name()))
        );
        lines.push(format!(
            "Filename: {}{}; Description: {}; Flags: nowait postinstall skipifsilent",
            target,
            parameters(args),
            quote(&description)
        ));
    }

    if config.run_on_silent() {
        if let Some(args) = config.silent_run_args() {
            lines.push(format!(
                "Filename: {}{}; Flags: nowait; Check: WizardSilent",
                target,
                parameters(args)
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_values_escape_braces() {
        assert_eq!(
            path_value(Path::new("/work/{app}/installer.ico")),
            "/work/{{app}/installer.ico"
        );

        let entry = FileEntry::file(Path::new("/out/{tmp}.dat"), "{tmp}.dat");
        assert_eq!(
            entry.line(),
            "Source: \"/out/{{tmp}.dat\"; DestDir: \"{app}\"; Flags: ignoreversion"
        );
        assert_eq!(entry.installed_name(), Some("{tmp}.dat"));
    }
}

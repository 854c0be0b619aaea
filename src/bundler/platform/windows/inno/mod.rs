//! Windows installers built with Inno Setup.
//!
//! # Module Organization
//!
//! - `template` - `.iss` script template
//! - `script` - Script generation and asset staging
//! - `utils` - Quoting and escaping helpers
//! - `toolset` - ISCC discovery
//! - `build` - ISCC execution

mod build;
mod script;
mod template;
mod toolset;
mod utils;

pub use script::{ScriptArtifact, SynthesisOptions, render_script, synthesize, synthesize_with};

use crate::bundler::{error::Result, settings::Config};
use std::path::Path;

/// Result of an installer build.
#[derive(Clone, Debug)]
pub struct InnoBundle {
    /// Generated script.
    pub script: ScriptArtifact,
    /// ISCC exit code, when the compiler ran.
    pub exit_code: Option<i32>,
}

/// Bundle the application in `app_dir` as an Inno Setup installer.
///
/// # Process
///
/// 1. Stage assets and generate the `.iss` script
/// 2. Compile the script with ISCC if the installer step is enabled
pub async fn bundle_project(config: &Config, app_dir: &Path) -> Result<InnoBundle> {
    log::info!(
        "Building Inno Setup installer for {} {}",
        config.display_name(),
        config.version()
    );

    let script = synthesize(config, app_dir).await?;

    if !config.include_installer() {
        log::info!("Skipping installer compilation");
        return Ok(InnoBundle {
            script,
            exit_code: None,
        });
    }

    let iscc = toolset::find_iscc()?;
    let exit_code = build::run_iscc(&iscc, &script.path, config.sign_tool()).await?;

    if exit_code == 0 {
        log::info!(
            "✓ Created installer: {}",
            config
                .installer_build_dir()
                .join(format!("{}.exe", config.installer_base_name()))
                .display()
        );
    }

    Ok(InnoBundle {
        script,
        exit_code: Some(exit_code),
    })
}

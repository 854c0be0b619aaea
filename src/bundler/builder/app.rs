//! Application build step.
//!
//! Builds the application with Cargo for the configured variant before the
//! installer script is generated.

use crate::bundler::{
    Config,
    error::{Error, Result},
};

/// Run `cargo build` for the configured variant in the project directory.
///
/// `build_args` are split on whitespace and appended.
pub async fn build_application(config: &Config) -> Result<()> {
    let args = cargo_args(config);
    log::info!("Building application: cargo {}", args.join(" "));

    let status = tokio::process::Command::new("cargo")
        .args(&args)
        .current_dir(config.project_dir())
        .status()
        .await
        .map_err(|e| Error::CommandFailed {
            command: "cargo build".to_string(),
            error: e,
        })?;

    if !status.success() {
        return Err(Error::GenericError(format!(
            "application build failed (exit code: {:?})",
            status.code()
        )));
    }

    Ok(())
}

fn cargo_args(config: &Config) -> Vec<String> {
    let mut args = vec![
        "build".to_string(),
        "--profile".to_string(),
        config.variant().cargo_profile().to_string(),
    ];
    if let Some(extra) = config.build_args() {
        args.extend(extra.split_whitespace().map(String::from));
    }
    args
}

//! Inno Setup compilation.
//!
//! Compiles the generated script into the installer executable using ISCC.

use crate::bundler::{
    error::{Error, Result},
    settings::SignTool,
};
use std::path::Path;

/// Run ISCC on the script and return its exit code.
///
/// When signing is configured the tool named in the script is registered on
/// the command line (`/S<name>=<command>`); a tool without a command must
/// already be registered in the Inno Setup IDE.
pub async fn run_iscc(iscc: &Path, script: &Path, sign_tool: Option<&SignTool>) -> Result<i32> {
    log::info!("Running ISCC...");

    let mut command = tokio::process::Command::new(iscc);
    command.arg("/Qp");

    if let Some(tool) = sign_tool.filter(|tool| !tool.command().is_empty()) {
        command.arg(format!("/S{}={}", tool.name(), tool.command()));
    }

    command.arg(script);

    let status = command.status().await.map_err(|e| Error::CommandFailed {
        command: iscc.display().to_string(),
        error: e,
    })?;

    let code = status.code().unwrap_or(1);
    if status.success() {
        log::info!("ISCC finished successfully");
    } else {
        log::error!("ISCC failed with exit code {code}");
    }

    Ok(code)
}

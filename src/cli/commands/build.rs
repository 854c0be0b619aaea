//! `inno_bundle build` command.

use crate::{
    bundler::{Bundler, Config, Overrides},
    cli::args::BuildArgs,
    error::{CliError, Result},
    metadata::load_manifest,
};
use path_absolutize::Absolutize;
use std::path::Path;

/// Resolve the configuration and run the bundling pipeline.
///
/// Returns the ISCC exit code, or 0 when the installer step is skipped.
pub async fn execute_build(args: &BuildArgs) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let manifest_path = args.manifest_path.absolutize()?.into_owned();
    let project_dir = manifest_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let manifest = load_manifest(&manifest_path)?;
    let overrides = Overrides::from(args);
    let config = Config::resolve(&manifest, &overrides, &project_dir)?;

    log::info!(
        "Bundling {} {} ({} build)",
        config.display_name(),
        config.version(),
        config.variant()
    );

    // Relative to the working directory, like --manifest-path
    let app_dir = match &args.app_dir {
        Some(dir) => Some(dir.absolutize()?.into_owned()),
        None => None,
    };

    let bundler = Bundler::new(config);
    let result = bundler.bundle(app_dir.as_deref()).await?;

    println!("{}", result.script.path.display());

    Ok(result.exit_code.unwrap_or(0))
}

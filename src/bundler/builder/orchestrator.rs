//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the installer
//! pipeline in order: application build, script synthesis, compilation.

use crate::bundler::{
    Config, Context, Result,
    platform::windows::inno::{self, InnoBundle},
};
use std::path::{Path, PathBuf};

use super::app::build_application;

/// Main bundler orchestrator.
///
/// Owns the resolved [`Config`] and runs each step sequentially.
///
/// # Examples
///
/// ```no_run
/// use inno_bundle::bundler::{Bundler, Config, Overrides};
/// use inno_bundle::metadata::load_manifest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest = load_manifest(Path::new("Cargo.toml"))?;
/// let config = Config::resolve(&manifest, &Overrides::default(), Path::new("."))?;
///
/// let bundler = Bundler::new(config);
/// let result = bundler.bundle(None).await?;
/// println!("Script: {}", result.script.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    config: Config,
}

impl Bundler {
    /// Creates a new bundler for the resolved configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pipeline.
    ///
    /// `app_dir` overrides the application build directory and is used as
    /// given; by default the Cargo output directory of the configured variant
    /// is used.
    pub async fn bundle(&self, app_dir: Option<&Path>) -> Result<InnoBundle> {
        if self.config.include_app() {
            build_application(&self.config)
                .await
                .context("building application")?;
        } else {
            log::info!("Skipping application build");
        }

        let app_dir = self.app_dir(app_dir);
        log::debug!("Using application files from {}", app_dir.display());

        inno::bundle_project(&self.config, &app_dir).await
    }

    /// Returns a reference to the resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn app_dir(&self, app_dir: Option<&Path>) -> PathBuf {
        app_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.default_app_dir())
    }
}

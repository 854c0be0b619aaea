//! Shared helpers for integration tests.

#![allow(dead_code)]

use inno_bundle::bundler::{Config, Overrides, SynthesisOptions};
use inno_bundle::metadata::ProjectManifest;
use std::path::Path;
use tempfile::TempDir;

pub const DEMO_ID: &str = "f887d5f0-4690-1e07-8efc-d16ea7711bfb";

/// Manifest of a package named `demo` with the given bundle block body.
pub fn manifest_with(bundle: &str) -> ProjectManifest {
    format!(
        r#"
[package]
name = "demo"
version = "0.3.0"
description = "Package description"
authors = ["Acme Corp <dev@acme.test>"]
homepage = "https://acme.test"

[package.metadata.inno_bundle]
{bundle}
"#
    )
    .parse()
    .unwrap()
}

/// The end-to-end demo block.
pub fn demo_manifest() -> ProjectManifest {
    manifest_with(&format!(
        r#"
id = "{DEMO_ID}"
name = "Demo App"
version = "1.0.0"
publisher = "Acme"
description = "Demo"
languages = []
"#
    ))
}

pub fn resolve(manifest: &ProjectManifest, project: &Path) -> Config {
    Config::resolve(manifest, &Overrides::default(), project).unwrap()
}

/// Project directory with an application build directory holding `files`.
pub struct Project {
    pub root: TempDir,
    pub staging: TempDir,
}

impl Project {
    pub fn new(files: &[&str]) -> Self {
        let root = tempfile::tempdir().unwrap();
        let app_dir = root.path().join("target").join("release");
        std::fs::create_dir_all(&app_dir).unwrap();
        for file in files {
            let path = app_dir.join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, b"payload").unwrap();
        }
        Self {
            root,
            staging: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn app_dir(&self) -> std::path::PathBuf {
        self.root.path().join("target").join("release")
    }

    /// Staging in a private directory and no system libraries.
    pub fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            staging_dir: self.staging.path().join("stage"),
            library_dirs: Vec::new(),
        }
    }
}

/// Lines of the `[name]` section, up to the next blank line.
pub fn section<'a>(script: &'a str, name: &str) -> Vec<&'a str> {
    let header = format!("[{name}]");
    script
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

//! Inno Setup installer bundling.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`settings`] - resolve the manifest block and overrides into a [`Config`]
//! 2. [`builder`] - build the application (optional)
//! 3. [`platform::windows::inno`] - stage assets, write the `.iss` script and
//!    compile it with ISCC (optional)

pub mod builder;
pub mod error;
pub mod platform;
pub mod resources;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Context, Error, ErrorExt, Result};
pub use platform::windows::inno::{InnoBundle, ScriptArtifact, SynthesisOptions};
pub use settings::{
    AdminMode, BuildArch, BuildVariant, Config, ConfigError, InstallerIcon, Language, Overrides,
    SignTool,
};

//! Configuration structures for installer bundling.
//!
//! Raw `[package.metadata.inno_bundle]` input is deserialized into a strict
//! intermediate representation ([`RawBundleConfig`]) and then resolved, together
//! with command line [`Overrides`], into an immutable [`Config`].

mod admin;
mod arch;
mod core;
mod error;
mod language;
mod raw;
mod resolver;
pub mod sign_tool;
mod variant;

pub use admin::AdminMode;
pub use arch::BuildArch;
pub use core::{Config, InstallerIcon};
pub use error::ConfigError;
pub use language::Language;
pub use raw::{AdminValue, RawBundleConfig};
pub use resolver::Overrides;
pub use sign_tool::{SignTool, SignToolOption, SignToolTable};
pub use variant::BuildVariant;

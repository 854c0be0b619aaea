//! Inno Setup installer bundler library
//!
//! This library turns the `[package.metadata.inno_bundle]` block of a
//! Cargo.toml into an Inno Setup script and, when ISCC is available, a
//! Windows installer executable.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};

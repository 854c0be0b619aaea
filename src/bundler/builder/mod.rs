//! Bundle orchestration.
//!
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`app`] - Application build step

mod app;
mod orchestrator;

pub use orchestrator::Bundler;

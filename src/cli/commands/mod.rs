//! Command execution functions for bundler operations.
//!
//! - [`build`] - Build the application, script and installer
//! - [`id`] - Generate an application id

mod build;
mod id;

pub use build::execute_build;
pub use id::{execute_id, generate_id};

//! Command line interface for inno_bundle.
//!
//! This module provides argument parsing and dispatch to the `build` and `id`
//! commands.

mod args;
pub mod commands;

pub use args::{Args, BuildArgs, Command, IdArgs};

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Execute already parsed arguments
pub async fn execute(args: &Args) -> Result<i32> {
    match &args.command {
        Command::Build(build) => commands::execute_build(build).await,
        Command::Id(id) => commands::execute_id(id),
    }
}

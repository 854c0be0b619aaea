//! inno_bundle - Inno Setup installer bundler for Rust applications.
//!
//! This binary generates an Inno Setup script from Cargo.toml metadata and
//! compiles it into a Windows installer.

use env_logger::Env;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match inno_bundle::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

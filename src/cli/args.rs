//! Command line argument parsing and validation.
//!
//! This module provides the CLI surface using clap derive, and converts the
//! parsed `build` arguments into bundler [`Overrides`].

use crate::bundler::{BuildVariant, ConfigError, Overrides};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Inno Setup installer bundler for Rust applications
#[derive(Parser, Debug)]
#[command(
    name = "inno_bundle",
    version,
    about = "Inno Setup installer bundler for Rust applications",
    long_about = "Generates an Inno Setup script from the [package.metadata.inno_bundle] block of a
Cargo.toml and compiles it into a Windows installer.

Usage:
  inno_bundle build --release
  inno_bundle build --manifest-path app/Cargo.toml --no-installer
  inno_bundle id --ns com.example.app

Exit code 0 = script written and, unless --no-installer, ISCC succeeded."
)]
pub struct Args {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the application and its installer
    Build(BuildArgs),

    /// Print a new application id
    Id(IdArgs),
}

/// Arguments of `inno_bundle build`
#[derive(ClapArgs, Debug, Default)]
#[command(group(
    clap::ArgGroup::new("build_variant").args(["release", "profile", "debug", "variant"])
))]
pub struct BuildArgs {
    /// Path to the project's Cargo.toml
    #[arg(long, value_name = "PATH", default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Build with the release profile (default)
    #[arg(long)]
    pub release: bool,

    /// Build with the `profiling` profile
    #[arg(long)]
    pub profile: bool,

    /// Build with the dev profile
    #[arg(long)]
    pub debug: bool,

    /// Build variant by name: debug, profile or release
    #[arg(long, value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<BuildVariant>,

    /// Directory holding the built application files
    ///
    /// Defaults to `target/<debug|profiling|release>` next to the manifest.
    #[arg(long, value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Extra arguments passed to `cargo build`
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub build_args: Option<String>,

    /// Application version, overrides the manifest
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Name of the Inno Setup sign tool
    #[arg(long, value_name = "NAME")]
    pub sign_tool_name: Option<String>,

    /// Command of the sign tool
    #[arg(long, value_name = "COMMAND", allow_hyphen_values = true)]
    pub sign_tool_command: Option<String>,

    /// Parameters passed to the sign tool
    #[arg(long, value_name = "PARAMS", allow_hyphen_values = true)]
    pub sign_tool_params: Option<String>,

    /// Skip building the application
    #[arg(long)]
    pub no_app: bool,

    /// Write the script without compiling the installer
    #[arg(long)]
    pub no_installer: bool,
}

/// Arguments of `inno_bundle id`
#[derive(ClapArgs, Debug, Default)]
pub struct IdArgs {
    /// Derive a stable id from this name instead of a random one
    #[arg(long, value_name = "NAME")]
    pub ns: Option<String>,
}

fn parse_variant(value: &str) -> Result<BuildVariant, String> {
    value.parse().map_err(|e: ConfigError| e.to_string())
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl BuildArgs {
    /// Selected build variant.
    pub fn build_variant(&self) -> BuildVariant {
        if let Some(variant) = self.variant {
            variant
        } else if self.debug {
            BuildVariant::Debug
        } else if self.profile {
            BuildVariant::Profile
        } else {
            BuildVariant::Release
        }
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.no_app && self.build_args.is_some() {
            return Err("--build-args has no effect together with --no-app".to_string());
        }
        Ok(())
    }
}

impl From<&BuildArgs> for Overrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            variant: args.build_variant(),
            build_args: args.build_args.clone(),
            app_version: args.app_version.clone(),
            sign_tool_name: args.sign_tool_name.clone(),
            sign_tool_command: args.sign_tool_command.clone(),
            sign_tool_params: args.sign_tool_params.clone(),
            include_app: !args.no_app,
            include_installer: !args.no_installer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("inno_bundle").chain(args.iter().copied()))
    }

    #[test]
    fn test_build_defaults() {
        let Command::Build(build) = parse(&["build"]).unwrap().command else {
            panic!("expected build command");
        };
        assert_eq!(build.manifest_path, PathBuf::from("Cargo.toml"));
        assert_eq!(build.build_variant(), BuildVariant::Release);

        let overrides = Overrides::from(&build);
        assert!(overrides.include_app);
        assert!(overrides.include_installer);
    }

    #[test]
    fn test_variant_flags_conflict() {
        assert!(parse(&["build", "--debug", "--release"]).is_err());

        let Command::Build(build) = parse(&["build", "--profile"]).unwrap().command else {
            panic!("expected build command");
        };
        assert_eq!(build.build_variant(), BuildVariant::Profile);
    }

    #[test]
    fn test_variant_by_name() {
        let Command::Build(build) = parse(&["build", "--variant", "Debug"]).unwrap().command else {
            panic!("expected build command");
        };
        assert_eq!(build.build_variant(), BuildVariant::Debug);

        let err = parse(&["build", "--variant", "nightly"]).unwrap_err();
        assert!(err.to_string().contains("\"debug\", \"profile\" or \"release\""));
        assert!(parse(&["build", "--variant", "debug", "--release"]).is_err());
    }

    #[test]
    fn test_overrides_from_flags() {
        let Command::Build(build) = parse(&[
            "build",
            "--no-app",
            "--no-installer",
            "--app-version",
            "2.0.0",
            "--sign-tool-command",
            "signtool.exe sign /a $f",
        ])
        .unwrap()
        .command
        else {
            panic!("expected build command");
        };
        let overrides = Overrides::from(&build);
        assert!(!overrides.include_app);
        assert!(!overrides.include_installer);
        assert_eq!(overrides.app_version.as_deref(), Some("2.0.0"));
        assert_eq!(
            overrides.sign_tool_command.as_deref(),
            Some("signtool.exe sign /a $f")
        );
    }

    #[test]
    fn test_build_args_require_app_build() {
        let Command::Build(build) = parse(&["build", "--no-app", "--build-args", "--locked"])
            .unwrap()
            .command
        else {
            panic!("expected build command");
        };
        assert!(build.validate().is_err());
    }
}

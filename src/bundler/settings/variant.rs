//! Build variants.

use super::ConfigError;
use std::{fmt, str::FromStr};

/// Build variant of the application being packaged.
///
/// Only affects directory naming: where the application build output is read
/// from and where the installer script is written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BuildVariant {
    /// Unoptimized development build
    Debug,
    /// Optimized build used for profiling
    Profile,
    /// Optimized distribution build
    #[default]
    Release,
}

impl BuildVariant {
    /// Directory name under the installer build root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Profile => "Profile",
            Self::Release => "Release",
        }
    }

    /// Cargo profile used to build the application.
    pub fn cargo_profile(self) -> &'static str {
        match self {
            Self::Debug => "dev",
            Self::Profile => "profiling",
            Self::Release => "release",
        }
    }

    /// Directory under `target/` holding the build output for this variant.
    pub fn target_dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Profile => "profiling",
            Self::Release => "release",
        }
    }
}

impl FromStr for BuildVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "profile" => Ok(Self::Profile),
            "release" => Ok(Self::Release),
            _ => Err(ConfigError::InvalidVariant {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!("debug".parse::<BuildVariant>().unwrap(), BuildVariant::Debug);
        assert_eq!("Release".parse::<BuildVariant>().unwrap(), BuildVariant::Release);
        assert!("nightly".parse::<BuildVariant>().is_err());
        assert_eq!(BuildVariant::default(), BuildVariant::Release);
        assert_eq!(BuildVariant::Release.to_string(), "Release");
        assert_eq!(BuildVariant::Profile.dir_name(), "Profile");
        assert_eq!(BuildVariant::Debug.cargo_profile(), "dev");
        assert_eq!(BuildVariant::Debug.target_dir_name(), "debug");
        assert_eq!(BuildVariant::Profile.cargo_profile(), "profiling");
    }
}

//! CPU architecture types.

use super::ConfigError;
use std::{fmt, str::FromStr};

/// CPU architecture the installer targets.
///
/// Only 64-bit x86 targets are accepted. The two variants differ in how the
/// installer compiler checks the machine it runs on:
///
/// - [`BuildArch::X64`] requires a native x64 Windows.
/// - [`BuildArch::X64Compatible`] also accepts systems able to run x64 code
///   (Windows 11 on Arm).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BuildArch {
    /// Native x64 only
    X64,
    /// x64 or any system capable of running x64 binaries
    #[default]
    X64Compatible,
}

impl BuildArch {
    /// Token used by `ArchitecturesAllowed` and `ArchitecturesInstallIn64BitMode`.
    pub fn token(self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::X64Compatible => "x64compatible",
        }
    }

    /// CPU family used in the installer file name.
    pub fn cpu(self) -> &'static str {
        match self {
            Self::X64 | Self::X64Compatible => "x86_64",
        }
    }
}

impl FromStr for BuildArch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x64" => Ok(Self::X64),
            "x64_compatible" => Ok(Self::X64Compatible),
            other => Err(ConfigError::InvalidArch {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_values() {
        assert_eq!("x64".parse::<BuildArch>().unwrap(), BuildArch::X64);
        assert_eq!(
            "x64_compatible".parse::<BuildArch>().unwrap(),
            BuildArch::X64Compatible
        );
    }

    #[test]
    fn test_parse_rejects_other_targets() {
        for value in ["arm64", "x86", "X64", "x64compatible", ""] {
            assert!(
                matches!(value.parse::<BuildArch>(), Err(ConfigError::InvalidArch { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_is_compatible_mode() {
        assert_eq!(BuildArch::default().token(), "x64compatible");
        assert_eq!(BuildArch::default().cpu(), "x86_64");
    }
}

//! Installer privilege modes.

use super::ConfigError;
use std::str::FromStr;

/// Privileges the installer asks for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AdminMode {
    /// Always install with administrative rights (`admin = true`).
    #[default]
    Admin,
    /// Never request elevation (`admin = false`).
    NonAdmin,
    /// Request elevation but let the user pick a per-user install (`admin = "auto"`).
    Auto,
}

impl AdminMode {
    /// Literal accepted for [`AdminMode::Auto`].
    pub const AUTO_TOKEN: &'static str = "auto";

    /// Value of the `PrivilegesRequired` directive.
    pub fn privileges_required(self) -> &'static str {
        match self {
            Self::NonAdmin => "lowest",
            Self::Admin | Self::Auto => "admin",
        }
    }

    /// Value of the `PrivilegesRequiredOverridesAllowed` directive, if any.
    pub fn overrides_allowed(self) -> Option<&'static str> {
        match self {
            Self::Auto => Some("dialog commandline"),
            Self::Admin | Self::NonAdmin => None,
        }
    }
}

impl From<bool> for AdminMode {
    fn from(admin: bool) -> Self {
        if admin { Self::Admin } else { Self::NonAdmin }
    }
}

impl FromStr for AdminMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::AUTO_TOKEN => Ok(Self::Auto),
            other => Err(ConfigError::InvalidAdmin {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_mapping() {
        assert_eq!(AdminMode::NonAdmin.privileges_required(), "lowest");
        assert_eq!(AdminMode::NonAdmin.overrides_allowed(), None);
        assert_eq!(AdminMode::Admin.privileges_required(), "admin");
        assert_eq!(AdminMode::Admin.overrides_allowed(), None);
        assert_eq!(AdminMode::Auto.privileges_required(), "admin");
        assert_eq!(
            AdminMode::Auto.overrides_allowed(),
            Some("dialog commandline")
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(AdminMode::from(true), AdminMode::Admin);
        assert_eq!(AdminMode::from(false), AdminMode::NonAdmin);
        assert_eq!("auto".parse::<AdminMode>().unwrap(), AdminMode::Auto);
        assert!("sometimes".parse::<AdminMode>().is_err());
        assert!("true".parse::<AdminMode>().is_err());
        assert!("AUTO".parse::<AdminMode>().is_err());
    }
}

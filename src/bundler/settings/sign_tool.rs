//! Signing tool configuration.
//!
//! The installer compiler runs the signing tool itself: the generated script
//! only names the tool and its parameters, and the compiler is told which
//! command backs that name. Signing is configured either in the manifest or
//! entirely from the command line.
//!
//! ```toml
//! [package.metadata.inno_bundle]
//! # shorthand: the command, registered under the default tool name
//! sign_tool = "signtool.exe sign /fd sha256 /a $f"
//!
//! # or structured
//! [package.metadata.inno_bundle.sign_tool]
//! name = "acme"
//! command = "signtool.exe sign /fd sha256 $p $f"
//! params = "/n Acme"
//! retry_count = 3
//! retry_delay = 1000
//! ```

use super::ConfigError;
use serde::Deserialize;

/// Name the signing tool is registered under when none is given.
pub const DEFAULT_SIGN_TOOL_NAME: &str = "InnoBundleTool";

/// Default number of signing retries.
pub const DEFAULT_RETRY_COUNT: u32 = 2;

/// Default delay between signing retries, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Raw value of the `sign_tool` key.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum SignToolOption {
    /// Shorthand: the signing command.
    Command(String),
    /// Structured form.
    Detailed(SignToolTable),
}

/// Structured `sign_tool` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SignToolTable {
    /// Name the tool is registered under.
    pub name: Option<String>,
    /// Command line run by the compiler for each file to sign.
    pub command: Option<String>,
    /// Parameters substituted for `$p` in the command.
    pub params: Option<String>,
    /// Retries before the build fails.
    pub retry_count: Option<u32>,
    /// Delay between retries, in milliseconds.
    pub retry_delay: Option<u64>,
}

/// Fully resolved signing tool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignTool {
    name: String,
    command: String,
    params: String,
    retry_count: u32,
    retry_delay_ms: u64,
}

impl SignTool {
    /// Name the tool is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command run by the compiler; may be empty when the tool is registered elsewhere.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Extra parameters.
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Retry count.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Retry delay in milliseconds.
    pub fn retry_delay_ms(&self) -> u64 {
        self.retry_delay_ms
    }

    /// Value of the `SignTool` directive: the tool name followed by its parameters.
    pub fn directive(&self) -> String {
        if self.params.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.params)
        }
    }
}

/// Command line overrides for signing. Empty strings count as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignToolOverrides<'a> {
    /// `--sign-tool-name`
    pub name: Option<&'a str>,
    /// `--sign-tool-command`
    pub command: Option<&'a str>,
    /// `--sign-tool-params`
    pub params: Option<&'a str>,
}

impl SignToolOverrides<'_> {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.command.is_none() && self.params.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Check that the configured option, once overrides apply, can identify a tool.
pub fn validate(
    option: Option<&SignToolOption>,
    overrides: SignToolOverrides<'_>,
) -> Result<(), ConfigError> {
    match option {
        None => Ok(()),
        Some(SignToolOption::Command(command)) => {
            if non_empty(Some(command)).is_none()
                && non_empty(overrides.name).is_none()
                && non_empty(overrides.command).is_none()
            {
                return Err(ConfigError::InvalidSignTool {
                    reason: "must not be an empty command".to_string(),
                });
            }
            Ok(())
        }
        Some(SignToolOption::Detailed(table)) => {
            let has_name = non_empty(overrides.name)
                .or(non_empty(table.name.as_deref()))
                .is_some();
            let has_command = non_empty(overrides.command)
                .or(non_empty(table.command.as_deref()))
                .is_some();
            if !has_name && !has_command {
                return Err(ConfigError::InvalidSignTool {
                    reason: "table needs a non-empty `name` or `command`".to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Build the signing tool from the manifest option and the overrides.
///
/// Overrides always win over the manifest, which wins over the defaults.
/// Overrides alone are enough to enable signing; with neither, there is no
/// signing at all.
pub fn build(option: Option<&SignToolOption>, overrides: SignToolOverrides<'_>) -> Option<SignTool> {
    let overrides = SignToolOverrides {
        name: non_empty(overrides.name),
        command: non_empty(overrides.command),
        params: non_empty(overrides.params),
    };

    if option.is_none() && overrides.is_empty() {
        return None;
    }

    let table = match option {
        Some(SignToolOption::Detailed(table)) => table.clone(),
        Some(SignToolOption::Command(command)) => SignToolTable {
            command: Some(command.clone()),
            ..Default::default()
        },
        None => SignToolTable::default(),
    };

    let name = overrides
        .name
        .or(non_empty(table.name.as_deref()))
        .unwrap_or(DEFAULT_SIGN_TOOL_NAME);
    let command = overrides
        .command
        .or(non_empty(table.command.as_deref()))
        .unwrap_or_default();
    let params = overrides
        .params
        .or(non_empty(table.params.as_deref()))
        .unwrap_or_default();

    Some(SignTool {
        name: name.to_string(),
        command: command.to_string(),
        params: params.to_string(),
        retry_count: table.retry_count.unwrap_or(DEFAULT_RETRY_COUNT),
        retry_delay_ms: table.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY_MS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: Option<&str>, command: Option<&str>) -> SignToolOption {
        SignToolOption::Detailed(SignToolTable {
            name: name.map(String::from),
            command: command.map(String::from),
            ..Default::default()
        })
    }

    #[test]
    fn test_command_override_keeps_table_name() {
        let option = table(Some("A"), None);
        let overrides = SignToolOverrides {
            command: Some("B"),
            ..Default::default()
        };
        validate(Some(&option), overrides).unwrap();
        let tool = build(Some(&option), overrides).unwrap();
        assert_eq!(tool.name(), "A");
        assert_eq!(tool.command(), "B");
    }

    #[test]
    fn test_shorthand_is_command() {
        let option = SignToolOption::Command("signtool.exe sign $f".into());
        let tool = build(Some(&option), SignToolOverrides::default()).unwrap();
        assert_eq!(tool.name(), DEFAULT_SIGN_TOOL_NAME);
        assert_eq!(tool.command(), "signtool.exe sign $f");
        assert_eq!(tool.params(), "");
        assert_eq!(tool.retry_count(), 2);
        assert_eq!(tool.retry_delay_ms(), 500);
    }

    #[test]
    fn test_overrides_alone_enable_signing() {
        let overrides = SignToolOverrides {
            name: Some("ci"),
            ..Default::default()
        };
        let tool = build(None, overrides).unwrap();
        assert_eq!(tool.name(), "ci");
        assert_eq!(tool.command(), "");
    }

    #[test]
    fn test_nothing_configured_means_no_signing() {
        assert!(build(None, SignToolOverrides::default()).is_none());
        let blank = SignToolOverrides {
            name: Some("  "),
            command: Some(""),
            params: None,
        };
        assert!(build(None, blank).is_none());
    }

    #[test]
    fn test_table_without_name_or_command_is_invalid() {
        let option = SignToolOption::Detailed(SignToolTable {
            params: Some("/v".into()),
            ..Default::default()
        });
        assert!(matches!(
            validate(Some(&option), SignToolOverrides::default()),
            Err(ConfigError::InvalidSignTool { .. })
        ));

        let rescued = SignToolOverrides {
            command: Some("sign.cmd $f"),
            ..Default::default()
        };
        assert!(validate(Some(&option), rescued).is_ok());
    }

    #[test]
    fn test_retry_settings_and_directive() {
        let option = SignToolOption::Detailed(SignToolTable {
            name: Some("acme".into()),
            params: Some("/n Acme".into()),
            retry_count: Some(0),
            retry_delay: Some(1500),
            ..Default::default()
        });
        let tool = build(Some(&option), SignToolOverrides::default()).unwrap();
        assert_eq!(tool.retry_count(), 0);
        assert_eq!(tool.retry_delay_ms(), 1500);
        assert_eq!(tool.directive(), "acme /n Acme");
    }
}

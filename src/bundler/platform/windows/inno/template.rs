//! Inno Setup script template.
//!
//! Each placeholder receives a fully rendered section body; sections are
//! always emitted, even when empty.

/// Template for `inno-script.iss`.
pub const ISS_TEMPLATE: &str = r#"; Generated by inno_bundle. Manual changes are overwritten on the next build.

[Setup]
{{setup}}

[InstallDelete]
{{install_delete}}

[Languages]
{{languages}}

[Tasks]
{{tasks}}

[Files]
{{files}}

[Icons]
{{icons}}

[Run]
{{run}}
{{code_section}}"#;

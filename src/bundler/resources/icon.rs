//! Bundled default installer icon.
//!
//! Used when `installer_icon` is not configured. The icon is embedded as
//! base64, decoded once per process and written to the staging directory so
//! the installer compiler can reference it by path.

use crate::bundler::error::{ErrorExt, Result};
use base64::Engine;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// File name the default icon is written under.
pub const DEFAULT_ICON_FILE_NAME: &str = "installer-icon.ico";

/// 16x16 32-bit ICO, base64 encoded.
const DEFAULT_ICON_BASE64: &str = concat!(
    "AAABAAEAEBAAAAEAIABoBAAAFgAAACgAAAAQAAAAIAAAAAEAIAAAAAAAQAQAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAAADWeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/W",
    "eB7/1nge/9Z4Hv8AAAAAAAAAAAAAAADWeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4",
    "Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/wAAAAAAAAAA1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge",
    "/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv8AAAAAAAAAANZ4Hv/WeB7/1nge////////////",
    "////////////////////////////////1nge/9Z4Hv/WeB7/AAAAAAAAAADWeB7/1nge/9Z4Hv//",
    "////1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7//////9Z4Hv/WeB7/1nge/wAAAAAAAAAA1nge/9Z4",
    "Hv/WeB7//////9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge///////WeB7/1nge/9Z4Hv8AAAAAAAAA",
    "ANZ4Hv/WeB7/1nge///////WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv//////1nge/9Z4Hv/WeB7/",
    "AAAAAAAAAADWeB7/1nge/9Z4Hv//////1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7//////9Z4Hv/W",
    "eB7/1nge/wAAAAAAAAAA1nge/9Z4Hv/WeB7//////9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge////",
    "///WeB7/1nge/9Z4Hv8AAAAAAAAAANZ4Hv/WeB7/1nge////////////////////////////////",
    "////////////1nge/9Z4Hv/WeB7/AAAAAAAAAADWeB7/1nge/9Z4Hv//////////////////////",
    "/////////////////////9Z4Hv/WeB7/1nge/wAAAAAAAAAA1nge/9Z4Hv/WeB7/////////////",
    "///////////////////////////////WeB7/1nge/9Z4Hv8AAAAAAAAAANZ4Hv/WeB7/1nge/9Z4",
    "Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/AAAAAAAAAAAAAAAA1nge",
    "/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/1nge/9Z4Hv/WeB7/AAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAA==",
);

static DEFAULT_ICON: LazyLock<std::result::Result<Vec<u8>, base64::DecodeError>> =
    LazyLock::new(|| base64::engine::general_purpose::STANDARD.decode(DEFAULT_ICON_BASE64));

/// Decoded default icon bytes.
pub fn default_icon_bytes() -> Result<&'static [u8]> {
    DEFAULT_ICON
        .as_deref()
        .map_err(|e| crate::bundler::Error::Decode(e.clone()))
}

/// Write the default icon into `dir` and return the absolute path of the file.
///
/// Overwrites any icon left by a previous run.
pub async fn persist_default_icon(dir: &Path) -> Result<PathBuf> {
    let bytes = default_icon_bytes()?;

    tokio::fs::create_dir_all(dir)
        .await
        .fs_context("creating staging directory", dir)?;

    let icon_path = dir.join(DEFAULT_ICON_FILE_NAME);
    tokio::fs::write(&icon_path, bytes)
        .await
        .fs_context("writing default installer icon", &icon_path)?;

    let icon_path = std::path::absolute(&icon_path)
        .fs_context("resolving default installer icon path", &icon_path)?;
    log::info!("Using default installer icon: {}", icon_path.display());

    Ok(icon_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icon_is_an_ico() {
        let bytes = default_icon_bytes().unwrap();
        // ICONDIR: reserved = 0, type = 1 (icon), one image
        assert_eq!(&bytes[..6], &[0, 0, 1, 0, 1, 0]);
        assert_eq!(bytes.len(), 1150);
    }

    #[tokio::test]
    async fn test_persist_default_icon() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staging");

        let path = persist_default_icon(&staging).await.unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, staging.join(DEFAULT_ICON_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), default_icon_bytes().unwrap());

        // Second run overwrites in place
        let again = persist_default_icon(&staging).await.unwrap();
        assert_eq!(again, path);
    }
}

//! Inno Setup compiler discovery.

use crate::{bail, bundler::error::Result};
use std::path::PathBuf;

/// Install directory names of supported Inno Setup releases.
const INNO_SETUP_DIRS: [&str; 1] = ["Inno Setup 6"];

/// Locate `ISCC`.
///
/// Looks on `PATH` first, then in the default install locations under
/// `%ProgramFiles(x86)%` and `%ProgramFiles%`.
pub fn find_iscc() -> Result<PathBuf> {
    for name in ["ISCC", "iscc"] {
        if let Ok(path) = which::which(name) {
            log::debug!("Found {} at: {}", name, path.display());
            return Ok(path);
        }
    }

    let candidates = ["ProgramFiles(x86)", "ProgramFiles"]
        .into_iter()
        .filter_map(std::env::var_os)
        .map(PathBuf::from)
        .flat_map(|root| INNO_SETUP_DIRS.map(|dir| root.join(dir).join("ISCC.exe")));

    for candidate in candidates {
        if candidate.is_file() {
            log::debug!("Found ISCC at: {}", candidate.display());
            return Ok(candidate);
        }
    }

    bail!(
        "ISCC not found. Install Inno Setup 6 (https://jrsoftware.org/isinfo.php) \
         or add ISCC to PATH, or pass --no-installer to only generate the script"
    )
}

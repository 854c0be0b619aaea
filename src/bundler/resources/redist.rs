//! Redistributable runtime libraries.
//!
//! Applications built with the MSVC toolchain need the Visual C++ runtime.
//! When the build machine has the libraries installed they are copied into the
//! staging directory and shipped next to the executable. A missing library is
//! skipped.

use crate::bundler::{error::Result, utils::fs};
use std::path::{Path, PathBuf};

/// Runtime libraries shipped with the application when available.
pub const REDISTRIBUTABLES: [&str; 3] = ["msvcp140.dll", "vcruntime140.dll", "vcruntime140_1.dll"];

/// Well-known directories holding the system's runtime libraries.
///
/// `%SystemRoot%\System32`, then `%windir%\System32`, then `C:\Windows\System32`.
pub fn system_library_dirs() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = ["SystemRoot", "windir"]
        .into_iter()
        .filter_map(std::env::var_os)
        .map(PathBuf::from)
        .collect();
    roots.push(PathBuf::from(r"C:\Windows"));

    let mut dirs = Vec::new();
    for root in roots {
        let dir = root.join("System32");
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Copy every redistributable found in `search_dirs` into `staging_dir`.
///
/// The first directory containing a library wins. Returns the staged paths in
/// catalog order.
pub async fn stage_redistributables(
    staging_dir: &Path,
    search_dirs: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let mut staged = Vec::new();

    for name in REDISTRIBUTABLES {
        let Some(source) = search_dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
        else {
            log::debug!("Redistributable {name} not found, skipping");
            continue;
        };

        let target = staging_dir.join(name);
        fs::copy_file(&source, &target).await?;
        log::info!("Staged redistributable {}", source.display());
        staged.push(target);
    }

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stages_found_libraries_in_catalog_order() {
        let system = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        std::fs::write(system.path().join("vcruntime140_1.dll"), b"one").unwrap();
        std::fs::write(system.path().join("msvcp140.dll"), b"cpp").unwrap();

        let staged = stage_redistributables(staging.path(), &[system.path().to_path_buf()])
            .await
            .unwrap();

        assert_eq!(
            staged,
            vec![
                staging.path().join("msvcp140.dll"),
                staging.path().join("vcruntime140_1.dll"),
            ]
        );
        assert_eq!(std::fs::read(&staged[0]).unwrap(), b"cpp");
    }

    #[tokio::test]
    async fn test_missing_libraries_are_skipped() {
        let empty = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        let missing_dir = empty.path().join("does-not-exist");

        let staged = stage_redistributables(staging.path(), &[missing_dir]).await.unwrap();
        assert!(staged.is_empty());
    }

    #[test]
    fn test_system_library_dirs_end_with_fallback() {
        let dirs = system_library_dirs();
        assert_eq!(
            dirs.last(),
            Some(&PathBuf::from(r"C:\Windows").join("System32"))
        );
    }
}

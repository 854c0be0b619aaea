//! Default assets supplied to the installer.
//!
//! - [`icon`] - Bundled fallback icon for the installer executable
//! - [`redist`] - Visual C++ runtime libraries copied from the system

pub mod icon;
pub mod redist;

pub use icon::persist_default_icon;
pub use redist::{REDISTRIBUTABLES, stage_redistributables, system_library_dirs};

//! Platform-specific installer formats.
//!
//! Only Windows installers produced by Inno Setup are supported.

pub mod windows;

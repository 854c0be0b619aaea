//! Windows installer support.
//!
//! # Build Requirements
//!
//! | Format | Required Tools | Download |
//! |--------|----------------|----------|
//! | .exe (Inno Setup) | Inno Setup 6 (`ISCC`) | https://jrsoftware.org/isdl.php |
//!
//! # Output Location
//!
//! Scripts and installers are written to `target/installer/<Variant>/`.

pub mod inno;

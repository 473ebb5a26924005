//! Post-install hook for `puphpet-release` packages.
//!
//! When a dependency manager finishes materializing a package of type
//! `puphpet-release`, this crate copies the allow-listed contents of the
//! package's `release/` folder into the consuming project's root, overlays
//! the project's own `puphpet.yaml` onto `puphpet/config.yaml`, and appends
//! the required entries to the project's `.gitignore`.

pub mod api;
pub mod errors;
pub mod ignore;
pub mod manifest;
pub mod overlay;
pub mod plan;
pub mod release;

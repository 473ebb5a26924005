use crate::{
    ignore,
    manifest::{self, PackageManifest, MANIFEST_FILE},
    overlay, release,
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InstallerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] manifest::ManifestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Release(#[from] release::ReleaseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Overlay(#[from] overlay::OverlayError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ignore(#[from] ignore::IgnoreError),
}

/// Reports whether this installer applies to the given package type.
///
/// True only for the exact string `puphpet-release`; the host dependency
/// manager is expected to probe this before handing a package over.
pub fn supports(package_type: &str) -> bool {
    manifest::supports(package_type)
}

/// Runs the three post-install steps against an already-materialized
/// package: copy the allow-listed release items into `destination`, overlay
/// the user's `puphpet.yaml` if present, and merge the required entries into
/// the destination's `.gitignore`.
///
/// The sequence is fail-fast: the first I/O failure aborts it and later
/// steps do not run. Files copied before the failure stay in place.
///
/// # Errors
///
/// Returns an [`InstallerError`] if:
///
/// - The package has no `release/` folder or its tree cannot be read.
/// - A directory or file cannot be created or written at the destination.
/// - The `.gitignore` rewrite fails.
pub fn install(source_root: &Path, destination: &Path) -> Result<(), InstallerError> {
    log::debug!(
        "installing release items from {} into {}",
        source_root.display(),
        destination.display()
    );

    release::copy_release_items(source_root, destination)?;

    overlay::copy_config_file(destination)?;

    ignore::check_gitignore(destination)?;

    Ok(())
}

/// Reads the package manifest at `package_dir` and runs [`install`] only
/// when the declared type is `puphpet-release`.
///
/// Packages of any other type, and packages without a manifest, are skipped
/// without error so a host can invoke the hook unconditionally.
///
/// # Errors
///
/// Returns an [`InstallerError`] if:
///
/// - A manifest is present but cannot be parsed.
/// - The package applies and any install step fails.
pub fn install_package(package_dir: &Path, destination: &Path) -> Result<(), InstallerError> {
    let manifest_path = package_dir.join(MANIFEST_FILE);

    if !manifest_path.is_file() {
        log::debug!(
            "no {} in {}, not a puphpet-release package",
            MANIFEST_FILE,
            package_dir.display()
        );
        return Ok(());
    }

    let manifest = PackageManifest::from_file(&manifest_path)?;

    if !supports(manifest.package_type()) {
        log::debug!(
            "package type '{}' does not activate this installer, skipping",
            manifest.package_type()
        );
        return Ok(());
    }

    install(package_dir, destination)
}

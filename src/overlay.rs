use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

/// User-authored configuration looked up in the project root.
pub const CONFIG_FILE: &str = "puphpet.yaml";

/// Where the configuration lands inside the copied release tree.
pub const CONFIG_TARGET: &str = "config.yaml";

#[derive(Debug, Error, Diagnostic)]
pub enum OverlayError {
    #[error("I/O error within overlay domain")]
    #[diagnostic(code(puphpet_release::overlay::io))]
    Io(#[from] IoError),
}

/// Copies `puphpet.yaml` from the project root over `puphpet/config.yaml`,
/// letting the consuming project supply its own configuration post-install.
///
/// A missing or unreadable `puphpet.yaml` is a no-op: the overlay is
/// optional. The contents are not parsed or validated, just copied.
///
/// # Errors
///
/// Returns an [`OverlayError`] if the copy itself fails, which includes the
/// `puphpet/` folder being absent from the destination. The release copier
/// is expected to have created it first.
pub fn copy_config_file(destination: &Path) -> Result<(), OverlayError> {
    let config_path = destination.join(CONFIG_FILE);
    let target_path = destination.join("puphpet").join(CONFIG_TARGET);

    if fs::File::open(&config_path).is_err() {
        log::debug!(
            "no readable {} in {}, skipping overlay",
            CONFIG_FILE,
            destination.display()
        );
        return Ok(());
    }

    fs::copy(&config_path, &target_path)
        .map_err(|error| IoError::new(FileOperation::Copy, target_path.clone(), error))?;

    log::debug!(
        "overlaid {} onto {}",
        config_path.display(),
        target_path.display()
    );

    Ok(())
}

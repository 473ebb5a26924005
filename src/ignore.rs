use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

/// Version-control ignore file maintained in the project root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Lines that must be present so the copied release items stay untracked.
const REQUIRED_ENTRIES: [&str; 2] = ["/Vagrantfile", "/puphpet/"];

const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[derive(Debug, Error, Diagnostic)]
pub enum IgnoreError {
    #[error("I/O error within ignore domain")]
    #[diagnostic(code(puphpet_release::ignore::io))]
    Io(#[from] IoError),
}

/// Ensures the required ignore entries exist in the project's `.gitignore`,
/// appending any that are missing at the end in their defined order.
///
/// Existing lines keep their position; nothing is removed or deduplicated.
/// The file is only rewritten when an entry was actually appended, so a
/// second run leaves it byte-identical. A missing or unreadable ignore file
/// is a no-op: this step is a convenience, not a correctness guarantee.
///
/// # Errors
///
/// Returns an [`IgnoreError`] if the rewrite fails.
pub fn check_gitignore(destination: &Path) -> Result<(), IgnoreError> {
    let gitignore_path = destination.join(IGNORE_FILE);

    let Ok(content) = fs::read_to_string(&gitignore_path) else {
        log::debug!(
            "unable to read {}, skipping ignore merge",
            gitignore_path.display()
        );
        return Ok(());
    };

    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let added = linemerge::merge_missing(&mut lines, &REQUIRED_ENTRIES);

    if added == 0 {
        log::debug!("all required ignore entries already present");
        return Ok(());
    }

    fs::write(&gitignore_path, lines.join(LINE_SEPARATOR))
        .map_err(|error| IoError::new(FileOperation::Write, gitignore_path.clone(), error))?;

    log::debug!(
        "appended {} ignore entries to {}",
        added,
        gitignore_path.display()
    );

    Ok(())
}

use crate::{
    errors::{FileOperation, IoError},
    plan::{CopyEntry, CopyPlan},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Component, Path},
};
use thiserror::Error;
use walkdir::WalkDir;

/// Subfolder of an installed package whose contents belong in the project root.
pub const RELEASE_DIR: &str = "release";

/// Top-level names inside `release/` that are copied into the project root.
/// Everything else in the release tree is skipped, descendants included.
const ACCEPT_LIST: [&str; 2] = ["Vagrantfile", "puphpet"];

#[derive(Debug, Error, Diagnostic)]
pub enum ReleaseError {
    #[error("I/O error within release domain")]
    #[diagnostic(code(puphpet_release::release::io))]
    Io(#[from] IoError),

    #[error("release folder not found at '{path}'")]
    #[diagnostic(
        code(puphpet_release::release::missing_release_dir),
        help("A puphpet-release package must ship its files under a top-level release/ folder")
    )]
    MissingReleaseDir { path: std::path::PathBuf },

    #[error("unable to strip prefix from directory")]
    #[diagnostic(code(puphpet_release::release::strip_prefix))]
    StripPrefix {
        path: std::path::PathBuf,
        dir: std::path::PathBuf,
        source: std::path::StripPrefixError,
    },
}

/// An entry is eligible when the first component of its release-relative path
/// is on the accept list. Children inherit eligibility from their top-level
/// ancestor since they share that first component.
fn is_accepted(relative: &Path) -> bool {
    let Some(Component::Normal(first)) = relative.components().next() else {
        return false;
    };

    ACCEPT_LIST.iter().any(|name| first == *name)
}

/// Walks the release folder pre-order and stages every allow-listed entry
/// into a [`CopyPlan`].
fn build_plan(release_dir: &Path) -> Result<CopyPlan, ReleaseError> {
    let mut plan = CopyPlan::new();

    for entry in WalkDir::new(release_dir).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or_else(|| Path::new(""));

                Err(IoError::new(
                    FileOperation::Read,
                    path.to_path_buf(),
                    error.into(),
                ))?
            }
        };

        let full_path = entry.path();
        let relative = match full_path.strip_prefix(release_dir) {
            Ok(r) => r,
            Err(error) => Err(ReleaseError::StripPrefix {
                path: full_path.to_path_buf(),
                dir: release_dir.to_path_buf(),
                source: error,
            })?,
        };

        if !is_accepted(relative) {
            continue;
        }

        plan.entries.push(CopyEntry {
            source: full_path.to_path_buf(),
            relative: relative.to_path_buf(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(plan)
}

/// Creates a directory at the specified path if it does not already exist.
///
/// Re-installs run over an existing tree, so "already exists" is success.
fn create_directory(path: &Path) -> Result<(), ReleaseError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    Ok(())
}

/// Copies a file byte-for-byte, silently overwriting any existing file at
/// the destination, and prints a progress line.
fn copy_file(source: &Path, destination: &Path) -> Result<(), ReleaseError> {
    fs::copy(source, destination)
        .map_err(|error| IoError::new(FileOperation::Copy, destination.to_path_buf(), error))?;

    let msg = format!("{} {}", "create".green(), destination.display());

    println!("{}", &msg);

    Ok(())
}

/// Copies the allow-listed items from the package's `release/` folder into
/// the destination root, preserving relative paths.
///
/// The walk is applied in pre-order, so a directory is always created before
/// anything beneath it is copied. The sequence stops at the first failing
/// filesystem operation; files copied up to that point stay in place.
///
/// # Errors
///
/// Returns a [`ReleaseError`] if:
///
/// - The package has no `release/` folder.
/// - The release tree cannot be read.
/// - A directory cannot be created or a file cannot be copied at the
///   destination.
pub fn copy_release_items(source_root: &Path, destination: &Path) -> Result<(), ReleaseError> {
    let release_dir = source_root.join(RELEASE_DIR);

    if !release_dir.is_dir() {
        return Err(ReleaseError::MissingReleaseDir { path: release_dir });
    }

    let plan = build_plan(&release_dir)?;

    log::debug!(
        "staged {} release entries from {}",
        plan.entries.len(),
        release_dir.display()
    );

    for entry in &plan.entries {
        let final_path = destination.join(&entry.relative);

        if entry.is_dir {
            create_directory(&final_path)?;
        } else {
            copy_file(&entry.source, &final_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_copies_only_allow_listed_subtrees() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let release = package.path().join(RELEASE_DIR);

        write(&release.join("Vagrantfile"), "vagrant config");
        write(&release.join("puphpet").join("a.yaml"), "a: 1");
        write(&release.join("README.md"), "docs");
        write(&release.join("docs").join("guide.md"), "guide");

        copy_release_items(package.path(), project.path()).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("Vagrantfile")).unwrap(),
            "vagrant config"
        );
        assert_eq!(
            fs::read_to_string(project.path().join("puphpet/a.yaml")).unwrap(),
            "a: 1"
        );
        assert!(!project.path().join("README.md").exists());
        assert!(!project.path().join("docs").exists());
    }

    #[test]
    fn test_deep_subtrees_are_copied_wholesale() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let release = package.path().join(RELEASE_DIR);

        write(&release.join("puphpet/files/dot/.bashrc"), "alias ll='ls -l'");
        write(&release.join("puphpet/shell/exec-once/setup.sh"), "#!/bin/sh");

        copy_release_items(package.path(), project.path()).unwrap();

        assert!(project.path().join("puphpet/files/dot/.bashrc").is_file());
        assert!(project.path().join("puphpet/shell/exec-once/setup.sh").is_file());
    }

    #[test]
    fn test_existing_destination_files_are_overwritten() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let release = package.path().join(RELEASE_DIR);

        write(&release.join("Vagrantfile"), "new contents");
        write(&project.path().join("Vagrantfile"), "old contents");

        copy_release_items(package.path(), project.path()).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("Vagrantfile")).unwrap(),
            "new contents"
        );
    }

    #[test]
    fn test_reinstall_over_existing_tree_succeeds() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let release = package.path().join(RELEASE_DIR);

        write(&release.join("puphpet/config.yaml"), "a: 1");

        copy_release_items(package.path(), project.path()).unwrap();
        copy_release_items(package.path(), project.path()).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("puphpet/config.yaml")).unwrap(),
            "a: 1"
        );
    }

    #[test]
    fn test_missing_release_dir_is_an_error() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        let result = copy_release_items(package.path(), project.path());

        assert!(matches!(
            result,
            Err(ReleaseError::MissingReleaseDir { .. })
        ));
    }

    #[test]
    fn test_accept_list_matches_whole_first_segment() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let release = package.path().join(RELEASE_DIR);

        write(&release.join("Vagrantfile.dist"), "not the Vagrantfile");
        write(&release.join("puphpet-extras/x.yaml"), "x: 1");

        copy_release_items(package.path(), project.path()).unwrap();

        assert!(!project.path().join("Vagrantfile.dist").exists());
        assert!(!project.path().join("puphpet-extras").exists());
    }
}

use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

/// The package `type` a manifest must declare to activate this installer.
pub const PUPHPET_RELEASE_TYPE: &str = "puphpet-release";

/// Name of the manifest file expected at an installed package's root.
pub const MANIFEST_FILE: &str = "package.toml";

#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    #[error("I/O error within manifest domain")]
    #[diagnostic(code(puphpet_release::manifest::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(puphpet_release::manifest::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct PackageInfo {
    pub name: Option<String>,
    pub r#type: String,
}

/// The subset of an installed package's `package.toml` this installer reads.
#[derive(Debug, Deserialize, Clone)]
pub struct PackageManifest {
    pub package: PackageInfo,
}
impl PackageManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed = toml::from_str(&content).map_err(|err| ManifestError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?;

        Ok(parsed)
    }

    pub fn package_type(&self) -> &str {
        &self.package.r#type
    }
}

/// True only for the exact type string this installer handles.
pub fn supports(package_type: &str) -> bool {
    package_type == PUPHPET_RELEASE_TYPE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_exact_type_only() {
        assert!(supports("puphpet-release"));

        assert!(!supports("Puphpet-Release"));
        assert!(!supports("puphpet-release "));
        assert!(!supports("puphpet"));
        assert!(!supports("release"));
        assert!(!supports(""));
    }

    #[test]
    fn test_manifest_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(
            &path,
            "[package]\nname = \"acme/vm-release\"\ntype = \"puphpet-release\"\n",
        )
        .unwrap();

        let manifest = PackageManifest::from_file(&path).unwrap();

        assert_eq!(manifest.package_type(), "puphpet-release");
        assert_eq!(manifest.package.name.as_deref(), Some("acme/vm-release"));
    }

    #[test]
    fn test_manifest_without_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "[package]\ntype = \"library\"\n").unwrap();

        let manifest = PackageManifest::from_file(&path).unwrap();

        assert!(!supports(manifest.package_type()));
    }

    #[test]
    fn test_missing_manifest_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = PackageManifest::from_file(dir.path().join(MANIFEST_FILE));

        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "not toml at all [").unwrap();

        let result = PackageManifest::from_file(&path);

        assert!(matches!(result, Err(ManifestError::ParseToml { .. })));
    }
}

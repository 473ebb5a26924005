/// A single file or directory staged for copying out of a package's
/// `release/` folder.
#[derive(Debug, Clone)]
pub struct CopyEntry {
    /// Absolute path of the entry inside the installed package.
    pub source: std::path::PathBuf,
    /// Path relative to the release root, preserved at the destination.
    pub relative: std::path::PathBuf,
    /// Indicates whether this entry is a directory (`true`) or a file (`false`).
    pub is_dir: bool,
}
/// The outcome of a release walk: every allow-listed entry in pre-order,
/// so a directory always precedes its children.
#[derive(Debug, Clone, Default)]
pub struct CopyPlan {
    pub entries: Vec<CopyEntry>,
}
impl CopyPlan {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

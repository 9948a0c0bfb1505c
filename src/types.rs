use std::path::PathBuf;

/// A file selected for output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileEntry {
    /// Path relative to the root, always `/`-separated.
    ///
    /// Declared first so the derived ordering sorts by it.
    pub relative: String,
    /// Absolute path used for reading.
    pub path: PathBuf,
}

/// What a file's bytes turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    /// The bytes are not valid UTF-8; contents are skipped.
    Binary,
}

/// The complete result of a concatenate run.
#[derive(Debug)]
pub struct ProjcatResult {
    /// Canonical root directory that was scanned.
    pub root: PathBuf,
    /// Output file that was written.
    pub output: PathBuf,
    /// Included files, in output order.
    pub files: Vec<FileEntry>,
    /// Relative paths of included files whose contents were skipped as binary.
    pub binary_files: Vec<String>,
}

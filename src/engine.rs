use crate::error::ProjcatError;
use crate::filter::{FileFilter, is_excluded_segment};
use crate::options::ProjcatOptions;
use crate::output;
use crate::types::{FileContent, FileEntry, ProjcatResult};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    /// Walks every file under `root`. With `prune`, directories that can only
    /// hold rejected files (hidden or venv-named) are not descended.
    fn new(root: &Path, prune: bool) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        if prune {
            builder.filter_entry(|entry| entry.depth() == 0 || !is_prunable_dir(entry));
        }
        Self {
            inner: builder.build(),
        }
    }
    fn into_files(self) -> impl Iterator<Item = Result<PathBuf, ProjcatError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 && is_file(&entry) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(ProjcatError::Walk(e.to_string()))),
        })
    }
}
fn is_prunable_dir(entry: &DirEntry) -> bool {
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    if is_dir && is_excluded_segment(&entry.file_name().to_string_lossy()) {
        debug!("Pruning {}", entry.path().display());
        return true;
    }
    false
}
fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}
fn relative_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
fn resolve_root(root: &Path) -> Result<PathBuf, ProjcatError> {
    fs::canonicalize(root).map_err(|e| ProjcatError::io(root, e))
}
/// Relative path of `output` under `root`, when it lies inside it.
fn output_within(root: &Path, output: &Path) -> Option<String> {
    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let parent = fs::canonicalize(parent).ok()?;
    let absolute = parent.join(name);
    absolute.strip_prefix(root).ok().map(relative_string)
}
fn select_files(
    root: &Path,
    filter: &FileFilter,
    exclude: Option<&str>,
) -> Result<Vec<FileEntry>, ProjcatError> {
    let mut files = Vec::new();
    for path in Walker::new(root, true).into_files() {
        let path = path?;
        let relative = match path.strip_prefix(root) {
            Ok(rel) => relative_string(rel),
            Err(_) => continue,
        };
        if exclude == Some(relative.as_str()) {
            debug!("Skipping output file {}", relative);
            continue;
        }
        if filter.is_included(&relative) {
            files.push(FileEntry { relative, path });
        } else {
            debug!("Excluded {}", relative);
        }
    }
    files.sort();
    Ok(files)
}
fn scan(options: &ProjcatOptions) -> Result<(PathBuf, Vec<FileEntry>), ProjcatError> {
    let filter = FileFilter::new(
        &options.include_patterns,
        &options.effective_ignore_patterns(),
    )?;
    let root = resolve_root(&options.root)?;
    info!("Scanning {}", root.display());
    let exclude = output_within(&root, &options.output);
    let files = select_files(&root, &filter, exclude.as_deref())?;
    info!("Selected {} files", files.len());
    Ok((root, files))
}
/// Walks `options.root` and returns every included file, sorted by relative path.
///
/// The output file is never selected, even when it lies under the root.
pub fn collect_files(options: &ProjcatOptions) -> Result<Vec<FileEntry>, ProjcatError> {
    scan(options).map(|(_, files)| files)
}
/// Reads a file fully. Bytes that are not valid UTF-8 yield [`FileContent::Binary`].
pub fn read_file_content(path: &Path) -> Result<FileContent, ProjcatError> {
    let bytes = fs::read(path).map_err(|e| ProjcatError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(FileContent::Text(text)),
        Err(_) => {
            debug!("Binary file detected: {}", path.display());
            Ok(FileContent::Binary)
        }
    }
}
/// Runs the full pipeline and writes the combined file to `options.output`.
///
/// Patterns are validated before the output file is created. Any later
/// failure leaves the partially written output in place.
pub fn projcat(options: &ProjcatOptions) -> Result<ProjcatResult, ProjcatError> {
    let (root, files) = scan(options)?;

    let output_path = &options.output;
    let write_err = |e: std::io::Error| ProjcatError::io(output_path, e);
    let file = File::create(output_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    if options.show_structure {
        let project = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        output::write_structure(&mut writer, &project, &files).map_err(write_err)?;
    }

    let mut binary_files = Vec::new();
    for entry in &files {
        let content = read_file_content(&entry.path)?;
        if content == FileContent::Binary {
            binary_files.push(entry.relative.clone());
        }
        output::write_entry(&mut writer, entry, &content).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    info!(
        "Wrote {} files ({} binary) to {}",
        files.len(),
        binary_files.len(),
        output_path.display()
    );

    Ok(ProjcatResult {
        root,
        output: output_path.clone(),
        files,
        binary_files,
    })
}
/// Collects the distinct extensions (with leading dot) of every file under
/// `root`. No include, ignore or hidden-path rules apply.
pub fn list_extensions(root: impl AsRef<Path>) -> Result<BTreeSet<String>, ProjcatError> {
    let root = root.as_ref();
    let mut extensions = BTreeSet::new();
    for path in Walker::new(root, false).into_files() {
        let path = path?;
        if let Some(ext) = path.extension() {
            extensions.insert(format!(".{}", ext.to_string_lossy()));
        }
    }
    Ok(extensions)
}

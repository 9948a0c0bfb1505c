//! Per-file inclusion decision.

use crate::error::ProjcatError;
use crate::patterns::build_glob_set;
use globset::GlobSet;
use std::path::MAIN_SEPARATOR;

/// Decides whether a relative path belongs in the output.
///
/// Rules apply in order and the first one that fires wins:
///
/// 1. any segment starting with `.` rejects the path;
/// 2. any segment containing `venv` (any case) rejects it;
/// 3. a trailing `~` rejects it;
/// 4. a match against any ignore pattern rejects it;
/// 5. with no include patterns, the path is accepted;
/// 6. otherwise it is accepted only if some include pattern matches.
///
/// Ignore rules therefore always win over include patterns.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Option<GlobSet>,
    ignore: GlobSet,
}
impl FileFilter {
    pub fn new<I, X>(include_patterns: &[I], ignore_patterns: &[X]) -> Result<Self, ProjcatError>
    where
        I: AsRef<str>,
        X: AsRef<str>,
    {
        let include = if include_patterns.is_empty() {
            None
        } else {
            Some(build_glob_set(include_patterns)?)
        };
        Ok(Self {
            include,
            ignore: build_glob_set(ignore_patterns)?,
        })
    }
    pub fn is_included(&self, relative: &str) -> bool {
        let path = normalize_separators(relative);
        if path.split('/').any(is_excluded_segment) {
            return false;
        }
        if path.ends_with('~') {
            return false;
        }
        if self.ignore.is_match(path.as_str()) {
            return false;
        }
        match &self.include {
            None => true,
            Some(include) => include.is_match(path.as_str()),
        }
    }
}

/// True for a hidden segment or one that names a virtual environment.
pub(crate) fn is_excluded_segment(segment: &str) -> bool {
    segment.starts_with('.') || segment.to_lowercase().contains("venv")
}

pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/")
}

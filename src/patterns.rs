//! Built-in ignore patterns and glob compilation.
//!
//! Patterns are shell globs matched against the forward-slash relative path of
//! a file. Matching is case-sensitive and path-unaware: `*` and `?` cross `/`,
//! and a leading `**/` also matches zero directories, so `**/target/*` covers
//! both `target/x` and `crates/a/target/x`.

use crate::error::ProjcatError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Virtual environments
    "**/venv/**",
    "**/*venv/**",
    "**/env/**",
    "**/*.env/**",
    "**/virtualenv/**",
    "**/.virtualenvs/**",
    "**/.venv/**",
    "**/ENV/**",
    "**/python?env/**",
    // Hidden paths
    "**/.*",
    // Backup, swap and auto-save files
    "**/*~",
    "**/*.~*~",
    "**/*.swp",
    "**/*.swo",
    "**/*.swn",
    "**/*.bak",
    "**/*#",
    // Build and cache directories
    "**/__pycache__/*",
    "**/node_modules/*",
    "**/build/*",
    "**/dist/*",
    "**/target/*",
    "**/bin/*",
    "**/obj/*",
    // Compiled binaries
    "**/*.pyc",
    "**/*.class",
    "**/*.o",
    "**/*.exe",
    "**/*.dll",
    "**/*.so",
    "**/*.dylib",
    // Packages and archives
    "**/*.jar",
    "**/*.war",
    "**/*.ear",
    "**/*.zip",
    "**/*.tar",
    "**/*.gz",
    "**/*.rar",
    // projcat itself
    "**/projcat.rs",
    "**/projcat/**",
];

/// Returns a fresh copy of the built-in ignore patterns.
///
/// Callers own the returned list and may extend it freely; every call yields
/// the same patterns in the same order.
pub fn default_ignore_patterns() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()).collect()
}

/// Compiles `patterns` into a single matcher.
///
/// # Errors
///
/// Returns [`ProjcatError::Pattern`] naming the first pattern that fails to parse.
pub fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, ProjcatError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .case_insensitive(false)
            .build()
            .map_err(|source| ProjcatError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ProjcatError::Pattern {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}

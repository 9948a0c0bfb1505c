use crate::patterns::default_ignore_patterns;
use std::path::PathBuf;

/// Output file written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "project_combined.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjcatOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub include_patterns: Vec<String>,
    /// Extra ignore patterns, applied on top of [`default_ignore_patterns`].
    pub ignore_patterns: Vec<String>,
    pub show_structure: bool,
}
impl Default for ProjcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
            show_structure: true,
        }
    }
}
impl ProjcatOptions {
    /// Built-in ignore patterns followed by the user's additions.
    pub fn effective_ignore_patterns(&self) -> Vec<String> {
        let mut patterns = default_ignore_patterns();
        patterns.extend(self.ignore_patterns.iter().cloned());
        patterns
    }
}
#[derive(Debug, Default)]
pub struct ProjcatBuilder {
    options: ProjcatOptions,
}
impl ProjcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ProjcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn show_structure(mut self, yes: bool) -> Self {
        self.options.show_structure = yes;
        self
    }
    pub fn build(self) -> ProjcatOptions {
        self.options
    }
}

//! # Projcat
//!
//! `projcat` flattens a project directory into a single text file: an optional
//! directory-structure block followed by the contents of every selected file,
//! each under a `# File: <path>` header.
//!
//! Files are selected by path. Hidden paths, anything under a virtual
//! environment, backup files ending in `~`, and paths matching an ignore glob
//! are always skipped; when include globs are given, a file must also match one
//! of them. Output order is the lexicographic order of relative paths, so an
//! unchanged tree always produces the same bytes.
//!
//! Library code logs through `tracing`; install a subscriber to see it.
//!
//! # Example
//!
//! ```no_run
//! use projcat::{ProjcatBuilder, projcat};
//!
//! let options = ProjcatBuilder::new(".")
//!     .output("combined.txt")
//!     .include_patterns(vec!["**.rs".into()])
//!     .ignore_patterns(vec!["**/generated/**".into()])
//!     .build();
//!
//! let result = projcat(&options).expect("Failed to combine project");
//! println!("{} files written to {}", result.files.len(), result.output.display());
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod patterns;
mod tree;
mod types;

pub use engine::{collect_files, list_extensions, projcat, read_file_content};
pub use error::ProjcatError;
pub use filter::FileFilter;
pub use options::{DEFAULT_OUTPUT, ProjcatBuilder, ProjcatOptions};
pub use patterns::{build_glob_set, default_ignore_patterns};
pub use tree::render_structure;
pub use types::{FileContent, FileEntry, ProjcatResult};

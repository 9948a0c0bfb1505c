//! Output artifact formatting.
//!
//! The artifact is an optional structure block followed by one block per file:
//!
//! ```text
//! Project: <root name>
//! Directory Structure:
//! ├── src/
//!     ├── main.rs
//!
//! File Contents:
//! ================================================================================
//!
//!
//! # File: src/main.rs
//! ================================================================================
//! <contents>
//! --------------------------------------------------------------------------------
//! ```
//!
//! File contents are written verbatim; nothing is escaped or re-encoded.

use crate::tree::render_structure;
use crate::types::{FileContent, FileEntry};
use std::io::{self, Write};

const WIDTH: usize = 80;

fn heavy_rule() -> String {
    "=".repeat(WIDTH)
}

fn light_rule() -> String {
    "-".repeat(WIDTH)
}

/// Writes the `Project:` header, the directory tree and the `File Contents:` banner.
pub fn write_structure<W: Write>(
    out: &mut W,
    project: &str,
    files: &[FileEntry],
) -> io::Result<()> {
    let paths: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
    writeln!(out, "Project: {}", project)?;
    writeln!(out, "Directory Structure:")?;
    out.write_all(render_structure(&paths).as_bytes())?;
    writeln!(out, "\nFile Contents:")?;
    writeln!(out, "{}\n", heavy_rule())?;
    Ok(())
}

/// Writes one file block: header, rule, verbatim contents, closing rule.
pub fn write_text_entry<W: Write>(out: &mut W, relative: &str, content: &str) -> io::Result<()> {
    writeln!(out, "\n# File: {}", relative)?;
    writeln!(out, "{}", heavy_rule())?;
    out.write_all(content.as_bytes())?;
    writeln!(out, "\n{}", light_rule())?;
    Ok(())
}

/// Writes the placeholder block for a file whose contents were skipped.
pub fn write_binary_entry<W: Write>(out: &mut W, relative: &str) -> io::Result<()> {
    writeln!(out, "\n# File: {} (binary file - contents skipped)", relative)?;
    writeln!(out, "{}", light_rule())?;
    Ok(())
}

/// Dispatches on the decoded content of `entry`.
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &FileEntry,
    content: &FileContent,
) -> io::Result<()> {
    match content {
        FileContent::Text(text) => write_text_entry(out, &entry.relative, text),
        FileContent::Binary => write_binary_entry(out, &entry.relative),
    }
}

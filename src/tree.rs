//! Internal module for rendering the directory-structure block.

const INDENT: &str = "    ";
const BRANCH: &str = "├── ";

/// Renders sorted relative paths as an indented tree.
///
/// A `name/` line is printed when a directory first appears at its depth or
/// differs from the last directory seen at that depth. Only that depth's memo
/// slot is updated; deeper slots keep their previous names. Every path ends
/// with its file-name line.
pub fn render_structure<S: AsRef<str>>(paths: &[S]) -> String {
    let mut out = String::new();
    let mut open: Vec<&str> = Vec::new();

    for path in paths {
        let parts: Vec<&str> = path.as_ref().split('/').collect();
        let Some((name, dirs)) = parts.split_last() else {
            continue;
        };
        for (depth, &dir) in dirs.iter().enumerate() {
            if open.get(depth) == Some(&dir) {
                continue;
            }
            if depth < open.len() {
                open[depth] = dir;
            } else {
                open.push(dir);
            }
            out.push_str(&format!("{}{}{}/\n", INDENT.repeat(depth), BRANCH, dir));
        }
        out.push_str(&format!("{}{}{}\n", INDENT.repeat(dirs.len()), BRANCH, name));
    }

    out
}

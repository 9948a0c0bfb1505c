use projcat::{
    default_ignore_patterns,
    output,
    render_structure,
    FileContent,
    FileEntry,
    FileFilter,
    ProjcatBuilder,
    ProjcatError,
};
use std::path::PathBuf;
fn defaults_with(include: &[&str]) -> FileFilter {
    FileFilter::new(include, &default_ignore_patterns()).unwrap()
}
#[test]
fn test_default_patterns_are_fresh() {
    let mut first = default_ignore_patterns();
    first.push("*.log".into());
    let second = default_ignore_patterns();
    assert!(!second.contains(&"*.log".to_string()));
    assert_eq!(second, default_ignore_patterns());
}
#[test]
fn test_extra_ignores_append_to_defaults() {
    let options = ProjcatBuilder::new(".")
        .ignore_patterns(vec!["*.log".into()])
        .build();
    let effective = options.effective_ignore_patterns();
    let defaults = default_ignore_patterns();
    assert_eq!(&effective[..defaults.len()], &defaults[..]);
    assert_eq!(effective.last().map(String::as_str), Some("*.log"));
}
#[test]
fn test_empty_include_accepts_everything_not_ignored() {
    let filter = defaults_with(&[]);
    assert!(filter.is_included("main.py"));
    assert!(filter.is_included("src/lib.rs"));
    assert!(filter.is_included("build.rs"));
    assert!(!filter.is_included("target/debug/app"));
    assert!(!filter.is_included("web/node_modules/left-pad/index.js"));
    assert!(!filter.is_included("src/module.o"));
}
#[test]
fn test_leading_double_star_matches_top_level() {
    // `**/` also matches zero directories, so top-level build dirs and
    // artifacts are ignored along with nested ones.
    let filter = defaults_with(&[]);
    assert!(!filter.is_included("target/debug/app"));
    assert!(!filter.is_included("build/out.txt"));
    assert!(!filter.is_included("dist/bundle.js"));
    assert!(!filter.is_included("bin/tool"));
    assert!(!filter.is_included("node_modules/pkg/index.js"));
    assert!(!filter.is_included("m.pyc"));
    assert!(!filter.is_included("a#"));
    assert!(filter.is_included("crates/core/src/lib.rs"));
}
#[test]
fn test_hidden_segments_never_included() {
    let filter = defaults_with(&["**"]);
    assert!(!filter.is_included(".env"));
    assert!(!filter.is_included("a/.hidden"));
    assert!(!filter.is_included(".github/workflows/ci.yml"));
    assert!(!filter.is_included("src/.cache/data.py"));
}
#[test]
fn test_venv_segments_never_included() {
    let filter = FileFilter::new(&["**"], &[] as &[&str]).unwrap();
    assert!(!filter.is_included("venv/lib/site.py"));
    assert!(!filter.is_included("MyVenv/x.py"));
    assert!(!filter.is_included("tools/project-VENV-old/readme.md"));
    assert!(filter.is_included("tools/env_setup.py"));
}
#[test]
fn test_tilde_backup_excluded_even_when_included() {
    let filter = FileFilter::new(&["**~", "**"], &[] as &[&str]).unwrap();
    assert!(!filter.is_included("notes.txt~"));
    assert!(filter.is_included("notes.txt"));
}
#[test]
fn test_include_pattern_crosses_directories() {
    let filter = defaults_with(&["**.py"]);
    assert!(filter.is_included("b.py"));
    assert!(filter.is_included("a/b.py"));
    assert!(filter.is_included("a/deep/nested/c.py"));
    assert!(!filter.is_included("a/c.txt"));
    assert!(!filter.is_included("a/b.pyc"));
}
#[test]
fn test_ignore_wins_over_include() {
    let filter = defaults_with(&["**.pyc", "**.py"]);
    assert!(!filter.is_included("mod.pyc"));
    assert!(!filter.is_included("pkg/__pycache__/mod.py"));
    let filter = FileFilter::new(&["**.py"], &["**/generated/**"]).unwrap();
    assert!(!filter.is_included("src/generated/schema.py"));
    assert!(filter.is_included("src/schema.py"));
}
#[test]
fn test_matching_is_case_sensitive() {
    let filter = FileFilter::new(&["**.py"], &[] as &[&str]).unwrap();
    assert!(!filter.is_included("README.PY"));
}
#[test]
fn test_invalid_pattern_is_reported() {
    let err = FileFilter::new(&["src/[a-"], &[] as &[&str]).unwrap_err();
    match err {
        ProjcatError::Pattern { pattern, .. } => assert_eq!(pattern, "src/[a-"),
        other => panic!("unexpected error: {other}"),
    }
}
#[test]
fn test_structure_single_level() {
    let tree = render_structure(&["Cargo.toml", "README.md"]);
    assert_eq!(tree, "├── Cargo.toml\n├── README.md\n");
}
#[test]
fn test_structure_nested() {
    let tree = render_structure(&[
        "README.md",
        "a/b.py",
        "a/x/y.rs",
        "a/z.rs",
        "b/x/z.rs",
    ]);
    let expected = "\
├── README.md
├── a/
    ├── b.py
    ├── x/
        ├── y.rs
    ├── z.rs
├── b/
        ├── z.rs
";
    assert_eq!(tree, expected);
}
#[test]
fn test_structure_reuses_memo_slot_across_branches() {
    // depth 1 still remembers `x` from `a/x`, so no second header is printed
    let tree = render_structure(&["a/x/1", "b/2", "b/x/3"]);
    let expected = "\
├── a/
    ├── x/
        ├── 1
├── b/
    ├── 2
        ├── 3
";
    assert_eq!(tree, expected);
}
#[test]
fn test_structure_changed_segment_prints_header() {
    let tree = render_structure(&["a/x/1", "b/y/2"]);
    let expected = "\
├── a/
    ├── x/
        ├── 1
├── b/
    ├── y/
        ├── 2
";
    assert_eq!(tree, expected);
}
#[test]
fn test_structure_empty() {
    assert_eq!(render_structure::<&str>(&[]), "");
}
#[test]
fn test_text_entry_format() {
    let mut out = Vec::new();
    output::write_text_entry(&mut out, "src/a.txt", "hello").unwrap();
    let expected = format!(
        "\n# File: src/a.txt\n{}\nhello\n{}\n",
        "=".repeat(80),
        "-".repeat(80)
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
#[test]
fn test_binary_entry_format() {
    let entry = FileEntry {
        relative: "img/logo.dat".into(),
        path: PathBuf::from("/tmp/img/logo.dat"),
    };
    let mut out = Vec::new();
    output::write_entry(&mut out, &entry, &FileContent::Binary).unwrap();
    let expected = format!(
        "\n# File: img/logo.dat (binary file - contents skipped)\n{}\n",
        "-".repeat(80)
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
#[test]
fn test_structure_block_format() {
    let files = vec![FileEntry {
        relative: "a/b.py".into(),
        path: PathBuf::from("/p/a/b.py"),
    }];
    let mut out = Vec::new();
    output::write_structure(&mut out, "demo", &files).unwrap();
    let expected = format!(
        "Project: demo\nDirectory Structure:\n├── a/\n    ├── b.py\n\nFile Contents:\n{}\n\n",
        "=".repeat(80)
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

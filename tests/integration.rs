//! Integration tests for ptree


use harness::{TestTree, entry_lines, run_ptree};

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_ptree(tree.path(), &["foo"]);
    assert!(success, "ptree should succeed");
    assert_eq!(
        stdout,
        "📁 foo\n\
         ├── 📄 bar.ts\n\
         ├── 📁 baz\n\
         │   └── 📄 hello\n\
         └── 📄 meow\n\
         \n\
         1 directory, 3 files\n"
    );
}

#[test]
fn test_defaults_to_current_directory() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_ptree(&tree.path().join("foo"), &[]);
    assert!(success);
    assert!(stdout.starts_with("📁 .\n"), "header should be '.': {}", stdout);
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_ptree(tree.path(), &["foo", "-l", "1"]);
    assert!(success);
    assert!(!stdout.contains("hello"), "should not descend: {}", stdout);
    assert!(stdout.ends_with("\n1 directory, 2 files\n"), "{}", stdout);
}

#[test]
fn test_depth_never_exceeds_bound() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/deep.txt", "");

    for level in 1..=4usize {
        let (stdout, _stderr, success) = run_ptree(tree.path(), &["-l", &level.to_string()]);
        assert!(success);
        // One entry per level in a single chain; the last sibling's
        // descendants are indented by three columns each.
        let lines = entry_lines(&stdout);
        assert_eq!(lines.len(), level, "level {}: {}", level, stdout);
        let last = lines.last().unwrap();
        assert_eq!(
            last.chars().take_while(|c| *c == ' ').count(),
            3 * (level - 1),
            "{}",
            stdout
        );
        assert!(!stdout.contains("deep.txt"));
    }
}

#[test]
fn test_dirs_only_is_subset() {
    let tree = TestTree::sample();
    tree.add_file("foo/baz/inner/leaf.rs", "");

    let (full, _, _) = run_ptree(tree.path(), &["foo"]);
    let (dirs, _, success) = run_ptree(tree.path(), &["foo", "-d"]);
    assert!(success);

    let full_lines = entry_lines(&full);
    for line in entry_lines(&dirs) {
        assert!(line.contains("📁"), "only directories expected: {}", line);
        let name = line.rsplit(' ').next().unwrap();
        assert!(
            full_lines.iter().any(|l| l.ends_with(name)),
            "{} missing from full listing",
            name
        );
    }
    assert!(dirs.ends_with("\n2 directories\n"), "{}", dirs);
}

#[test]
fn test_hidden_files() {
    let tree = TestTree::new();
    tree.add_file(".env", "");
    tree.add_file(".config/settings.json", "");
    tree.add_file("visible.txt", "");

    let (stdout, _, success) = run_ptree(tree.path(), &[]);
    assert!(success);
    assert!(!stdout.contains(".env"));
    assert!(!stdout.contains(".config"));
    assert!(stdout.contains("visible.txt"));
    assert!(stdout.ends_with("\n0 directories, 1 file\n"), "{}", stdout);

    let (stdout, _, success) = run_ptree(tree.path(), &["-a"]);
    assert!(success);
    assert!(stdout.contains(".env"));
    assert!(stdout.contains("settings.json"));
    // The empty-home directory from the harness is never created.
    assert!(stdout.ends_with("\n1 directory, 3 files\n"), "{}", stdout);
}

#[test]
fn test_include_pattern() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "");
    tree.add_file("notes.md", "");
    tree.add_file("src/lib.rs", "");
    tree.add_file("src/readme.txt", "");

    let (stdout, _, success) = run_ptree(tree.path(), &["-i", "*.rs"]);
    assert!(success);
    assert!(stdout.contains("main.rs"));
    assert!(stdout.contains("src"), "directories survive include");
    assert!(stdout.contains("lib.rs"));
    assert!(!stdout.contains("notes.md"));
    assert!(!stdout.contains("readme.txt"));
}

#[test]
fn test_exclude_pattern() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "");
    tree.add_file("debug.log", "");
    tree.add_file("logs/today.log", "");

    let (stdout, _, success) = run_ptree(tree.path(), &["-x", "*.log"]);
    assert!(success);
    assert!(stdout.contains("main.rs"));
    assert!(stdout.contains("logs"), "directories survive exclude");
    assert!(!stdout.contains("debug.log"));
    assert!(!stdout.contains("today.log"));
    assert!(stdout.ends_with("\n1 directory, 1 file\n"), "{}", stdout);
}

#[test]
fn test_emoji_flag() {
    let tree = TestTree::sample();

    let (stdout, _, success) = run_ptree(tree.path(), &["foo", "-e", r#"{".ts": "🟦"}"#]);
    assert!(success);
    assert!(stdout.contains("├── 🟦 bar.ts\n"), "{}", stdout);
    assert!(stdout.contains("└── 📄 meow\n"));
}

#[test]
fn test_config_file_emojis() {
    let tree = TestTree::sample();
    tree.add_file(".home/.ptree.json", r#"{"emojis": {".ts": "🟦"}}"#);

    let (stdout, _, success) = run_ptree(tree.path(), &["foo"]);
    assert!(success);
    assert!(stdout.contains("├── 🟦 bar.ts\n"), "{}", stdout);
}

#[test]
fn test_flag_emojis_override_config() {
    let tree = TestTree::sample();
    tree.add_file(".home/.ptree.json", r#"{"emojis": {".ts": "🟦", ".md": "📝"}}"#);

    let (stdout, _, success) = run_ptree(tree.path(), &["foo", "-e", r#"{".ts": "🔷"}"#]);
    assert!(success);
    assert!(stdout.contains("├── 🔷 bar.ts\n"), "{}", stdout);
}

#[test]
fn test_explicit_config_path() {
    let tree = TestTree::sample();
    let config = tree.add_file("custom.json", r#"{"emojis": {".ts": "🟦"}}"#);

    let (stdout, _, success) = run_ptree(
        tree.path(),
        &["foo", "--config", config.to_str().unwrap()],
    );
    assert!(success);
    assert!(stdout.contains("🟦 bar.ts"), "{}", stdout);
}

#[test]
fn test_no_color_when_piped() {
    let tree = TestTree::sample();

    let (stdout, _, success) = run_ptree(tree.path(), &["foo"]);
    assert!(success);
    assert!(!stdout.contains('\x1b'), "piped output must be plain");
}

#[test]
fn test_color_always() {
    let tree = TestTree::sample();

    let (stdout, _, success) = run_ptree(tree.path(), &["foo", "--color", "always"]);
    assert!(success);
    assert!(stdout.contains('\x1b'), "expected escape codes: {:?}", stdout);
    assert!(stdout.contains("1 directory, 3 files"));
}

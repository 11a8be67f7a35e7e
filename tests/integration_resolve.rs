// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for descriptor resolution.
//!
//! Exercises the walker against real descriptor trees in a tempdir.

use libtool_rs::config::ConfigState;
use libtool_rs::error::{DocumentError, IncludeError};
use libtool_rs::library::NoopLibraryResolver;
use libtool_rs::walker::DocumentWalker;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(root: &Path, config: ConfigState) -> anyhow::Result<libtool_rs::walker::WalkStats> {
    let libraries = NoopLibraryResolver;
    let mut walker = DocumentWalker::new(&libraries);
    walker.run(root, &config)?;
    Ok(*walker.stats())
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn resolve_root_path_and_in_root_include() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "libs/b.xml", "<Project><NothingForUs/></Project>");
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool>
            <Config><RootPath Create="True">libs</RootPath></Config>
            <Include><File InRoot="True">b.xml</File></Include>
        </LibTool>"#,
    );

    let stats = run(&root, ConfigState::new(dir.path())).unwrap();

    assert!(dir.path().join("libs").is_dir());
    assert_eq!(stats.files_visited, 2);
    assert_eq!(stats.includes_resolved, 1);
    assert_eq!(stats.warnings, 0);
}

#[test]
fn resolve_creates_missing_root_path() {
    let dir = TempDir::new().unwrap();
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Config><RootPath Create="True">made/up/dirs</RootPath></Config></LibTool>"#,
    );

    assert!(!dir.path().join("made").exists());
    run(&root, ConfigState::new(dir.path())).unwrap();
    assert!(dir.path().join("made/up/dirs").is_dir());
}

#[test]
fn resolve_missing_root_path_without_create_fails() {
    let dir = TempDir::new().unwrap();
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Config><RootPath Create="False">nowhere</RootPath></Config></LibTool>"#,
    );

    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    assert!(err.to_string().contains("a.xml"), "error should name the file: {err:#}");
}

#[test]
fn resolve_directory_include_scans_recursively() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "deps/one.libtool", "<LibTool><Library Name=\"one\"/></LibTool>");
    write(dir.path(), "deps/sub/two.libtool", "<LibTool><Library Name=\"two\"/></LibTool>");
    write(dir.path(), "deps/skip.txt", "not a descriptor");
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include>
            <Directory InRoot="True"><Path>deps</Path><Filter>*.libtool</Filter></Directory>
        </Include></LibTool>"#,
    );

    let stats = run(&root, ConfigState::new(dir.path())).unwrap();
    assert_eq!(stats.files_visited, 3);
    assert_eq!(stats.includes_resolved, 2);
    assert_eq!(stats.library_requests, 2);
}

#[test]
fn resolve_nested_includes_follow_each_files_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "nested/deep/leaf.xml", "<Unrelated/>");
    write(
        dir.path(),
        "nested/mid.xml",
        r#"<LibTool><Include><File InRoot="False">deep/leaf.xml</File></Include></LibTool>"#,
    );
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include><File InRoot="False">nested/mid.xml</File></Include></LibTool>"#,
    );

    let stats = run(&root, ConfigState::new(dir.path())).unwrap();
    assert_eq!(stats.files_visited, 3);
}

// =============================================================================
// Skips and warnings
// =============================================================================

#[test]
fn document_without_marker_is_silently_skipped() {
    let dir = TempDir::new().unwrap();
    let root = write(
        dir.path(),
        "plain.xml",
        "<Project><Whatever>content</Whatever></Project>",
    );

    let stats = run(&root, ConfigState::new(dir.path())).unwrap();
    assert_eq!(stats.files_visited, 1);
    assert_eq!(stats.includes_resolved, 0);
    assert_eq!(stats.library_requests, 0);
    assert_eq!(stats.warnings, 0);
}

#[test]
fn unknown_tags_warn_once_each_and_continue() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dep.xml", "<Unrelated/>");
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool>
            <Sparkle/>
            <Include><File InRoot="True">dep.xml</File></Include>
            <Glitter>more</Glitter>
        </LibTool>"#,
    );

    let stats = run(&root, ConfigState::new(dir.path())).unwrap();
    assert_eq!(stats.warnings, 2);
    assert_eq!(stats.includes_resolved, 1);
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn missing_root_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir.path().join("ghost.xml"), ConfigState::new(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DocumentError>(),
        Some(DocumentError::FileNotFound { .. })
    ));
}

#[test]
fn malformed_document_fails() {
    let dir = TempDir::new().unwrap();
    let root = write(dir.path(), "bad.xml", "<LibTool><Include></LibTool>");
    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DocumentError>(),
        Some(DocumentError::Malformed { .. })
    ));
}

#[test]
fn missing_include_aborts_the_whole_traversal() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "after.xml", "<Unrelated/>");
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include>
            <File InRoot="True">ghost.xml</File>
            <File InRoot="True">after.xml</File>
        </Include></LibTool>"#,
    );

    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IncludeError>(),
        Some(IncludeError::FileNotFound { .. })
    ));
}

#[test]
fn direct_self_include_fails() {
    let dir = TempDir::new().unwrap();
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include><File InRoot="True">a.xml</File></Include></LibTool>"#,
    );

    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IncludeError>(),
        Some(IncludeError::SelfInclude { .. })
    ));
}

#[test]
fn indirect_cycle_fails_naming_the_chain() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "b.xml",
        r#"<LibTool><Include><File InRoot="True">a.xml</File></Include></LibTool>"#,
    );
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include><File InRoot="True">b.xml</File></Include></LibTool>"#,
    );

    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    match err.downcast_ref::<IncludeError>() {
        Some(IncludeError::Cycle { chain }) => {
            assert!(chain.contains("a.xml"));
            assert!(chain.contains("b.xml"));
            assert!(chain.matches("a.xml").count() >= 2, "chain: {chain}");
        }
        other => panic!("expected Cycle, got {other:?}"),
    }
}

#[test]
fn directory_include_missing_filter_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("deps")).unwrap();
    let root = write(
        dir.path(),
        "a.xml",
        r#"<LibTool><Include><Directory><Path>deps</Path></Directory></Include></LibTool>"#,
    );

    let err = run(&root, ConfigState::new(dir.path())).unwrap_err();
    match err.downcast_ref::<IncludeError>() {
        Some(IncludeError::MissingField { field, .. }) => assert_eq!(field, "Filter"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_host::{dirname, extension, join_paths, resolve_path};
use std::path::PathBuf;

#[test]
fn test_join_paths_basic() {
    assert_eq!(join_paths(["a", "b", "c"]), PathBuf::from("a/b/c"));
}

#[test]
fn test_join_paths_removes_cur_dir_segments() {
    assert_eq!(join_paths(["a", ".", "b", "."]), PathBuf::from("a/b"));
}

#[test]
fn test_join_paths_folds_parent_segments() {
    assert_eq!(join_paths(["a", "b", "..", "c"]), PathBuf::from("a/c"));
    assert_eq!(join_paths(["a", "..", "..", "b"]), PathBuf::from("../b"));
}

#[test]
fn test_join_paths_never_climbs_above_root() {
    assert_eq!(join_paths(["/", "..", "etc"]), PathBuf::from("/etc"));
    assert_eq!(join_paths(["/a", "..", ".."]), PathBuf::from("/"));
}

#[test]
fn test_join_paths_empty_yields_dot() {
    assert_eq!(join_paths(Vec::<&str>::new()), PathBuf::from("."));
    assert_eq!(join_paths(["."]), PathBuf::from("."));
}

#[test]
fn test_join_paths_absolute_segment_restarts() {
    assert_eq!(join_paths(["a", "/b", "c"]), PathBuf::from("/b/c"));
}

#[test]
fn test_resolve_path_absolute_input_is_normalized() -> anyhow::Result<()> {
    assert_eq!(
        resolve_path("/var/log/../lib/./pacer")?,
        PathBuf::from("/var/lib/pacer")
    );
    Ok(())
}

#[test]
fn test_resolve_path_relative_input_uses_cwd() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let resolved = resolve_path("some/dir")?;

    assert!(resolved.is_absolute());
    assert_eq!(resolved, cwd.join("some").join("dir"));
    Ok(())
}

#[test]
fn test_resolve_path_folds_relative_traversal() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    let resolved = resolve_path("a/../b")?;

    assert_eq!(resolved, cwd.join("b"));
    Ok(())
}

#[test]
fn test_dirname_of_nested_path() {
    assert_eq!(dirname("/var/log/syslog"), PathBuf::from("/var/log"));
    assert_eq!(dirname("a/b/c.txt"), PathBuf::from("a/b"));
}

#[test]
fn test_dirname_of_bare_file_name_is_dot() {
    assert_eq!(dirname("notes.txt"), PathBuf::from("."));
    assert_eq!(dirname(""), PathBuf::from("."));
}

#[test]
fn test_dirname_of_root_is_root() {
    assert_eq!(dirname("/"), PathBuf::from("/"));
}

#[test]
fn test_extension_plain() {
    assert_eq!(extension("photo.jpeg").as_deref(), Some("jpeg"));
}

#[test]
fn test_extension_takes_final_extension() {
    assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
}

#[test]
fn test_extension_absent() {
    assert_eq!(extension("README"), None);
    assert_eq!(extension(".bashrc"), None);
    assert_eq!(extension("trailing."), None);
}

#[test]
fn test_extension_ignores_dots_in_directories() {
    assert_eq!(extension("some.dir/file"), None);
    assert_eq!(extension("some.dir/file.txt").as_deref(), Some("txt"));
}

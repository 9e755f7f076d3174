//! File-system helper tests
//!
//! Run: cargo test --test fs_utils

use std::fs;

use pretty_assertions::assert_eq;
use primitive_ext::utils::delete_recursively;

#[test]
fn empties_nested_directory_but_keeps_root() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(root.path().join("top.txt"), b"top").unwrap();
    fs::write(root.path().join("a").join("mid.txt"), b"mid").unwrap();
    fs::write(nested.join("deep.bin"), [0u8; 16]).unwrap();

    delete_recursively(root.path()).unwrap();

    assert!(root.path().is_dir());
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn missing_directory_is_a_no_op() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");
    delete_recursively(&missing).unwrap();
    assert!(!missing.exists());
}

#[test]
fn file_path_is_left_alone() {
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("keep.txt");
    fs::write(&file, b"keep").unwrap();

    delete_recursively(&file).unwrap();
    assert_eq!(fs::read(&file).unwrap(), b"keep");
}

#[test]
fn empty_directory_stays_empty() {
    let root = tempfile::tempdir().unwrap();
    delete_recursively(root.path()).unwrap();
    assert!(root.path().is_dir());
}

/*!
 * Tests for file and directory utilities
 */

use std::fs;

use subgrep::file_utils::FileManager;

use crate::common;

#[test]
fn test_dir_exists_shouldDistinguishFilesAndDirs() {
    let temp_dir = common::create_temp_dir().unwrap();
    let file = common::create_test_file(temp_dir.path(), "a.srt", "x").unwrap();

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
}

#[test]
fn test_find_srt_files_shouldFilterByExtension() {
    let temp_dir = common::create_temp_dir().unwrap();
    common::create_test_file(temp_dir.path(), "one-en.srt", "x").unwrap();
    common::create_test_file(temp_dir.path(), "two-de.srt", "x").unwrap();
    common::create_test_file(temp_dir.path(), "notes.txt", "x").unwrap();
    common::create_test_file(temp_dir.path(), "noext", "x").unwrap();

    let files = FileManager::find_srt_files(temp_dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["one-en.srt", "two-de.srt"]);
}

#[test]
fn test_find_srt_files_shouldMatchExtensionCaseInsensitively() {
    let temp_dir = common::create_temp_dir().unwrap();
    common::create_test_file(temp_dir.path(), "upper-en.SRT", "x").unwrap();

    let files = FileManager::find_srt_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_find_srt_files_shouldNotRecurse() {
    let temp_dir = common::create_temp_dir().unwrap();
    common::create_test_file(temp_dir.path(), "top-en.srt", "x").unwrap();

    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    common::create_test_file(&nested, "deep-en.srt", "x").unwrap();

    let files = FileManager::find_srt_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top-en.srt"));
}

#[test]
fn test_find_srt_files_shouldReturnSortedPaths() {
    let temp_dir = common::create_temp_dir().unwrap();
    common::create_test_file(temp_dir.path(), "zzz-en.srt", "x").unwrap();
    common::create_test_file(temp_dir.path(), "aaa-en.srt", "x").unwrap();
    common::create_test_file(temp_dir.path(), "mmm-en.srt", "x").unwrap();

    let files = FileManager::find_srt_files(temp_dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["aaa-en.srt", "mmm-en.srt", "zzz-en.srt"]);
}

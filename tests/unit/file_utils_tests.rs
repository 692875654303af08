/*!
 * Tests for file utility functionality
 */

use std::path::Path;
use tempfile::tempdir;

use doctwai::file_utils::FileManager;

#[test]
fn test_writeToFile_thenRead_shouldRoundTrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    FileManager::write_to_file(&path, "translated content\n").unwrap();
    let content = FileManager::read_to_string(&path).unwrap();

    assert_eq!(content, "translated content\n");
}

#[test]
fn test_writeToFile_withExistingFile_shouldOverwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    FileManager::write_to_file(&path, "first").unwrap();
    FileManager::write_to_file(&path, "second").unwrap();

    assert_eq!(FileManager::read_to_string(&path).unwrap(), "second");
}

#[test]
fn test_writeToFile_withMissingParentDir_shouldCreateIt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("out.txt");

    FileManager::write_to_file(&path, "content").unwrap();

    assert!(FileManager::file_exists(&path));
}

#[test]
fn test_readToString_withMissingFile_shouldFail() {
    let dir = tempdir().unwrap();
    let result = FileManager::read_to_string(dir.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_generateOutputPath_shouldInsertLanguageSuffix() {
    let path = FileManager::generate_output_path("book.txt", Path::new("/out"), "es");
    assert_eq!(path, Path::new("/out/book.es.txt"));
}

#[test]
fn test_generateOutputPath_withoutExtension_shouldDefaultToTxt() {
    let path = FileManager::generate_output_path("notes", Path::new("."), "fr");
    assert_eq!(path, Path::new("./notes.fr.txt"));
}

#[test]
fn test_findFiles_shouldMatchExtensionRecursively() {
    let dir = tempdir().unwrap();
    FileManager::write_to_file(dir.path().join("a.txt"), "a").unwrap();
    FileManager::write_to_file(dir.path().join("b.md"), "b").unwrap();
    FileManager::write_to_file(dir.path().join("sub").join("c.txt"), "c").unwrap();

    let found = FileManager::find_files(dir.path(), "txt").unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().unwrap() == "txt"));
}

#[test]
fn test_findFiles_withDotPrefixedExtension_shouldNormalize() {
    let dir = tempdir().unwrap();
    FileManager::write_to_file(dir.path().join("a.txt"), "a").unwrap();

    let found = FileManager::find_files(dir.path(), ".txt").unwrap();

    assert_eq!(found.len(), 1);
}

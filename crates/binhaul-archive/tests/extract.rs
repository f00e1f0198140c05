use std::fs::File;
use std::path::Path;

use binhaul_archive::extract::{untar_gz, unzip};
use binhaul_archive::Error;

#[test]
fn untar_gz_places_the_tool_in_the_target_directory() {
    let mut file = File::open("tests/fixtures/tool.tar.gz").expect("failed to open tool.tar.gz");

    let temp = tempfile::Builder::new()
        .prefix("binhaul-test-tar-")
        .tempdir()
        .expect("failed to create temp dir");

    untar_gz(&mut file, temp.path()).expect("extraction of tool.tar.gz failed");

    let tool = temp.path().join("tool");
    assert!(tool.exists(), "tool missing after extraction");
    let content = std::fs::read_to_string(&tool).unwrap();
    assert!(content.contains("echo tool"));

    #[cfg(unix)]
    assert_executable(&tool);
}

#[test]
fn unzip_places_the_tool_in_the_target_directory() {
    let mut file = File::open("tests/fixtures/tool.zip").expect("failed to open tool.zip");

    let temp = tempfile::Builder::new()
        .prefix("binhaul-test-zip-")
        .tempdir()
        .expect("failed to create temp dir");

    unzip(&mut file, temp.path()).expect("extraction of tool.zip failed");

    let tool = temp.path().join("tool");
    assert!(tool.exists(), "tool missing after extraction");
    let content = std::fs::read_to_string(&tool).unwrap();
    assert!(content.contains("echo tool"));

    #[cfg(unix)]
    assert_executable(&tool);
}

#[test]
fn unzip_rejects_entries_escaping_the_target_directory() {
    let mut file = File::open("tests/fixtures/escape.zip").expect("failed to open escape.zip");

    let temp = tempfile::Builder::new()
        .prefix("binhaul-test-escape-")
        .tempdir()
        .expect("failed to create temp dir");

    let result = unzip(&mut file, temp.path());
    assert!(matches!(result, Err(Error::EntryEscapes(_))));

    let escaped = temp.path().parent().unwrap().join("escape.txt");
    assert!(!escaped.exists(), "entry escaped the extraction directory");
}

#[cfg(unix)]
fn assert_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111, "extracted tool is not executable");
}

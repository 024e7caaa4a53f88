use std::fs;
use std::io::Cursor;

use contentprint::engine::fingerprint::{
    FingerprintMode, fingerprint_bytes, fingerprint_file, fingerprint_file_with_mode,
    fingerprint_normalized, fingerprint_reader,
};
use contentprint::FingerprintError;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn buffer_reader_and_file_agree() {
    let data = b"{\n  \"name\": \"example\",\r\n  \"version\": 3\n}\n";
    let mut file = NamedTempFile::new().expect("temp file");
    std::io::Write::write_all(&mut file, data).expect("write temp file");

    let from_buffer = fingerprint_bytes(data);
    let from_reader = fingerprint_reader(Cursor::new(data)).expect("reader");
    let from_file = fingerprint_file(file.path()).expect("file");

    assert_eq!(from_reader, from_buffer);
    assert_eq!(from_file, from_buffer);
}

#[test]
fn normalized_file_matches_normalized_buffer() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("crlf.txt");
    fs::write(&path, b"a\r\nb\rc").expect("write");

    assert_eq!(
        fingerprint_file_with_mode(&path, FingerprintMode::Normalized).expect("file"),
        fingerprint_normalized(b"a\r\nb\rc")
    );
}

#[test]
fn binary_content_round_trips_through_file() {
    let data: Vec<u8> = (0..=255u8).rev().collect();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("blob.bin");
    fs::write(&path, &data).expect("write");

    assert_eq!(fingerprint_file(&path).expect("file"), fingerprint_bytes(&data));
}

#[test]
fn missing_file_reports_open_error_with_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.jar");

    let err = fingerprint_file(&path).expect_err("missing file must fail");
    match err {
        FingerprintError::Open { path: reported, source } => {
            assert_eq!(reported, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn directory_path_fails_instead_of_hashing_nothing() {
    let dir = tempdir().expect("tempdir");
    assert!(fingerprint_file(dir.path()).is_err());
}

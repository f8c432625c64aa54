//! Integration test: digest-file verification end to end.
//!
//! Builds a fixture directory with a digest file and target files, then
//! drives `verify` through every outcome kind: success, parse failure with
//! line context, missing index entry, hash mismatch, short-circuit ordering,
//! and missing digest file surfacing as an I/O error.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xsum_core::{verify, DigestEncoding, HashAlgorithm, Verifier, VerifyError, VerifyOptions};

const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

struct Fixture {
    dir: TempDir,
    digest: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tests-checksum-good"), b"hello\n").unwrap();
        fs::write(dir.path().join("tests-checksum-bad"), b"tampered\n").unwrap();
        fs::write(dir.path().join("tests-checksum.bin"), b"hello\n").unwrap();

        let digest = dir.path().join("tests-checksum.digest");
        let body = format!(
            "{h}  tests-checksum-good\n{h}  tests-checksum-bad\n{h} *tests-checksum.bin\n",
            h = HELLO_SHA256
        );
        fs::write(&digest, body).unwrap();
        Self { dir, digest }
    }

    fn base(&self) -> &Path {
        self.dir.path()
    }

    fn run(&self, files: &[&str]) -> Result<(), VerifyError> {
        verify("sha256", &self.digest, self.base(), files)
    }
}

#[test]
fn normal_file_verifies() {
    let fx = Fixture::new();
    fx.run(&["tests-checksum-good"]).unwrap();
}

#[test]
fn binary_marker_file_verifies() {
    let fx = Fixture::new();
    fx.run(&["tests-checksum.bin"]).unwrap();
}

#[test]
fn missing_digest_file_is_io_not_found() {
    let fx = Fixture::new();
    let missing = fx.base().join("fake.sha256sum");
    let err = verify("sha256", &missing, fx.base(), &["tests-checksum-good"]).unwrap_err();
    match err {
        VerifyError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn unparseable_digest_reports_first_bad_line() {
    let fx = Fixture::new();
    let bad_digest = fx.base().join("tests-checksum-invalid");
    fs::write(&bad_digest, "invalid\n").unwrap();

    let err = verify("sha256", &bad_digest, fx.base(), &["tests-checksum-good"]).unwrap_err();
    match &err {
        VerifyError::Parse { line_num, line } => {
            assert_eq!(*line_num, 1);
            assert_eq!(line, "invalid");
        }
        other => panic!("expected Parse, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Could not parse checksum file at line #1: invalid"
    );
}

#[test]
fn file_absent_from_digest_is_no_match() {
    let fx = Fixture::new();
    let err = fx.run(&["fake"]).unwrap_err();
    match &err {
        VerifyError::NoMatch { file } => assert_eq!(file, "fake"),
        other => panic!("expected NoMatch, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "No checksum found in digest for file: \"fake\"."
    );
}

#[test]
fn content_mismatch_is_mismatch_error() {
    let fx = Fixture::new();
    let err = fx.run(&["tests-checksum-bad"]).unwrap_err();
    match &err {
        VerifyError::Mismatch { file } => assert_eq!(file, "tests-checksum-bad"),
        other => panic!("expected Mismatch, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "\"tests-checksum-bad\" does not have matching checksum"
    );
}

#[test]
fn batch_short_circuits_at_first_failure() {
    let fx = Fixture::new();
    let err = fx
        .run(&["tests-checksum-good", "tests-checksum-bad"])
        .unwrap_err();
    match err {
        VerifyError::Mismatch { file } => assert_eq!(file, "tests-checksum-bad"),
        other => panic!("expected Mismatch, got {:?}", other),
    }
}

#[test]
fn batch_failure_hides_later_files() {
    // The file after the mismatch does not even exist; it must never be opened.
    let fx = Fixture::new();
    let err = fx
        .run(&["tests-checksum-bad", "file-that-does-not-exist"])
        .unwrap_err();
    match err {
        VerifyError::Mismatch { file } => assert_eq!(file, "tests-checksum-bad"),
        other => panic!("expected Mismatch, got {:?}", other),
    }
}

#[test]
fn missing_target_file_is_io_not_found() {
    let fx = Fixture::new();
    fs::remove_file(fx.base().join("tests-checksum-good")).unwrap();
    let err = fx.run(&["tests-checksum-good"]).unwrap_err();
    match err {
        VerifyError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn verify_is_idempotent() {
    let fx = Fixture::new();
    fx.run(&["tests-checksum-good"]).unwrap();
    fx.run(&["tests-checksum-good"]).unwrap();

    let first = fx.run(&["tests-checksum-bad"]).unwrap_err();
    let second = fx.run(&["tests-checksum-bad"]).unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn encode_defaults_to_utf8() {
    let verifier = Verifier::new(HashAlgorithm::Sha256, "fake.sha256sum");
    assert_eq!(verifier.encode(false), DigestEncoding::Utf8);
}

#[test]
fn encode_returns_configured_override() {
    let verifier = Verifier::with_options(
        HashAlgorithm::Sha256,
        "fake.sha256sum",
        VerifyOptions {
            encoding: Some(DigestEncoding::Hex),
        },
    );
    assert_eq!(verifier.encode(false), DigestEncoding::Hex);
    assert_eq!(verifier.encode(true), DigestEncoding::Hex);
}

#[test]
fn uppercase_digest_entries_still_match() {
    let fx = Fixture::new();
    let digest = fx.base().join("upper.digest");
    fs::write(
        &digest,
        format!("{}  tests-checksum-good\n", HELLO_SHA256.to_uppercase()),
    )
    .unwrap();
    verify("sha256", &digest, fx.base(), &["tests-checksum-good"]).unwrap();
}

#[test]
fn sha512_digest_verifies() {
    let fx = Fixture::new();
    let digest = fx.base().join("sha512.digest");
    let h = "e7c22b994c59d9cf2b48e549b1e24666636045930d3da7c1acb299d1c3b7f931\
             f94aae41edda2c2b207a36e10f8bcb8d45223e54878f5b316e7ce3b6bc019629";
    fs::write(&digest, format!("{}  tests-checksum-good\n", h)).unwrap();
    verify("sha512", &digest, fx.base(), &["tests-checksum-good"]).unwrap();
}

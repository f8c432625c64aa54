//! Checksum verification orchestration.
//!
//! A `Verifier` holds only immutable configuration and is reusable across
//! calls; the digest index is rebuilt from disk on every `verify` so results
//! always reflect the current file contents.

use std::path::{Path, PathBuf};

use crate::algorithm::HashAlgorithm;
use crate::digest::DigestIndex;
use crate::error::VerifyError;
use crate::hasher;
use crate::options::{DigestEncoding, VerifyOptions};

#[derive(Debug, Clone)]
pub struct Verifier {
    algorithm: HashAlgorithm,
    digest_path: PathBuf,
    options: VerifyOptions,
}

impl Verifier {
    pub fn new(algorithm: HashAlgorithm, digest_path: impl Into<PathBuf>) -> Self {
        Self::with_options(algorithm, digest_path, VerifyOptions::default())
    }

    pub fn with_options(
        algorithm: HashAlgorithm,
        digest_path: impl Into<PathBuf>,
        options: VerifyOptions,
    ) -> Self {
        Self {
            algorithm,
            digest_path: digest_path.into(),
            options,
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Digest-string encoding in effect (configured override, else utf8).
    pub fn encode(&self, use_override: bool) -> DigestEncoding {
        self.options.encode(use_override)
    }

    /// Verify `files` (in order) against the digest file, resolving each name
    /// under `base_dir`.
    ///
    /// Strictly sequential with first-failure abort: a lookup miss, an I/O
    /// failure, or a hash mismatch stops the run immediately and files after
    /// it are never opened. The caller therefore always learns about exactly
    /// one concrete failing file or digest line.
    pub fn verify<S: AsRef<str>>(&self, base_dir: &Path, files: &[S]) -> Result<(), VerifyError> {
        let index = DigestIndex::load(&self.digest_path)?;

        for file in files {
            let file = file.as_ref();
            let expected = index.lookup(file).ok_or_else(|| VerifyError::NoMatch {
                file: file.to_string(),
            })?;

            let computed = hasher::hash_file(&base_dir.join(file), self.algorithm)?;
            if !computed.eq_ignore_ascii_case(expected) {
                return Err(VerifyError::Mismatch {
                    file: file.to_string(),
                });
            }
            tracing::debug!(file, algorithm = %self.algorithm, "checksum ok");
        }
        Ok(())
    }

    /// Single-filename form of [`Verifier::verify`].
    pub fn verify_one(&self, base_dir: &Path, file: &str) -> Result<(), VerifyError> {
        self.verify(base_dir, &[file])
    }
}

/// Entry function: validate the algorithm name, then verify `files` against
/// the digest file at `digest_path`, resolving names under `base_dir`.
pub fn verify<S: AsRef<str>>(
    algorithm: &str,
    digest_path: &Path,
    base_dir: &Path,
    files: &[S],
) -> Result<(), VerifyError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Verifier::new(algorithm, digest_path).verify(base_dir, files)
}

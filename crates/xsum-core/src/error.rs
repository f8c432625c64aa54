//! Verification error taxonomy.
//!
//! One sum type so callers can match on the failure kind instead of
//! string-matching diagnostics. The first failure encountered aborts the
//! whole verification and is returned unchanged.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// A digest-file line did not match the `<hash><sep><filename>` shape.
    /// Carries the 1-based line number and the raw line text.
    #[error("Could not parse checksum file at line #{line_num}: {line}")]
    Parse { line_num: usize, line: String },

    /// Filesystem operation failed on the digest file or a target file.
    /// The underlying error (and its kind, e.g. NotFound) stays inspectable
    /// through `source`.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested file has no entry in the digest index.
    #[error("No checksum found in digest for file: \"{file}\".")]
    NoMatch { file: String },

    /// The file's computed hash differs from its digest-file entry.
    #[error("\"{file}\" does not have matching checksum")]
    Mismatch { file: String },

    /// The caller named a hash algorithm this build does not support.
    #[error("unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
}

impl VerifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VerifyError::Io {
            path: path.into(),
            source,
        }
    }
}

//! Streaming file hashing.
//!
//! Files are read in fixed-size chunks so memory stays bounded regardless of
//! file size; raw bytes are hashed directly.

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::algorithm::HashAlgorithm;
use crate::error::VerifyError;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the digest of the file at `path` with the given algorithm and
/// return it as lowercase hex. I/O failures carry the path and the
/// underlying error so "file missing" stays distinguishable.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> Result<String, VerifyError> {
    let file = File::open(path).map_err(|e| VerifyError::io(path, e))?;
    let digest = match algorithm {
        HashAlgorithm::Sha224 => hash_reader::<Sha224>(file),
        HashAlgorithm::Sha256 => hash_reader::<Sha256>(file),
        HashAlgorithm::Sha384 => hash_reader::<Sha384>(file),
        HashAlgorithm::Sha512 => hash_reader::<Sha512>(file),
    };
    digest.map_err(|e| VerifyError::io(path, e))
}

fn hash_reader<D: Digest>(mut reader: impl Read) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

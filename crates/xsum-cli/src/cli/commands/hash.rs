//! Hash command: compute the digest of a single file.

use anyhow::Result;
use std::path::Path;
use xsum_core::config::XsumConfig;
use xsum_core::{hasher, HashAlgorithm};

/// Compute and print the file's digest in `sha256sum` output format.
pub fn run_hash(cfg: &XsumConfig, path: &Path, algorithm: Option<&str>) -> Result<()> {
    let algorithm: HashAlgorithm = match algorithm {
        Some(name) => name.parse()?,
        None => cfg.algorithm,
    };
    let digest = hasher::hash_file(path, algorithm)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}

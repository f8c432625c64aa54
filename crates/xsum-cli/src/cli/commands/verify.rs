//! Verify command: check files against a digest file.

use anyhow::Result;
use std::path::Path;
use xsum_core::config::XsumConfig;
use xsum_core::{HashAlgorithm, Verifier, VerifyOptions};

/// Verify `files` (resolved under `base_dir`) against the digest file.
/// Flags override config; the run stops at the first failing file.
pub fn run_verify(
    cfg: &XsumConfig,
    digest: &Path,
    base_dir: &Path,
    files: &[String],
    algorithm: Option<&str>,
    encoding: Option<&str>,
) -> Result<()> {
    let algorithm: HashAlgorithm = match algorithm {
        Some(name) => name.parse()?,
        None => cfg.algorithm,
    };
    let encoding = match encoding {
        Some(name) => Some(name.parse().map_err(anyhow::Error::msg)?),
        None => cfg.encoding,
    };

    let verifier = Verifier::with_options(algorithm, digest, VerifyOptions { encoding });
    verifier.verify(base_dir, files)?;

    println!("OK: {} file(s) verified", files.len());
    Ok(())
}

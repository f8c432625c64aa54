//! CLI for the xsum checksum verifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xsum_core::config;

use commands::{run_hash, run_verify};

/// Top-level CLI for the xsum checksum verifier.
#[derive(Debug, Parser)]
#[command(name = "xsum")]
#[command(about = "xsum: verify files against a sha256sum-style digest file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify files against a digest file.
    Verify {
        /// Path to the digest file (sha256sum-style lines).
        digest: PathBuf,

        /// File names to verify, as recorded in the digest file.
        #[arg(required = true)]
        files: Vec<String>,

        /// Hash algorithm (sha224, sha256, sha384, sha512). Defaults to the
        /// configured algorithm.
        #[arg(long)]
        algorithm: Option<String>,

        /// Directory the file names are resolved under (default: current dir).
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// Digest-encoding override (utf8, hex, base64, ascii).
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Compute and print the digest of a single file.
    Hash {
        /// Path to the file.
        path: PathBuf,

        /// Hash algorithm (sha224, sha256, sha384, sha512). Defaults to the
        /// configured algorithm.
        #[arg(long)]
        algorithm: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify {
                digest,
                files,
                algorithm,
                base_dir,
                encoding,
            } => {
                let base_dir = match base_dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_verify(&cfg, &digest, &base_dir, &files, algorithm.as_deref(), encoding.as_deref())?;
            }
            CliCommand::Hash { path, algorithm } => {
                run_hash(&cfg, &path, algorithm.as_deref())?;
            }
        }

        Ok(())
    }
}

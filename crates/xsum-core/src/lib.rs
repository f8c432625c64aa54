pub mod config;
pub mod logging;

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod options;
pub mod verify;

pub use algorithm::HashAlgorithm;
pub use digest::{DigestEntry, DigestIndex};
pub use error::VerifyError;
pub use options::{DigestEncoding, VerifyOptions};
pub use verify::{verify, Verifier};

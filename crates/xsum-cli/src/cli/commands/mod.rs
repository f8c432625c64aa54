//! One module per CLI command.

mod hash;
mod verify;

pub use hash::run_hash;
pub use verify::run_verify;

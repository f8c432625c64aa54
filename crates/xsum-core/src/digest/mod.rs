//! Digest-file index: filename -> expected hash.

mod parse;

pub use parse::DigestEntry;
pub(crate) use parse::parse_line;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::VerifyError;

/// Read-only mapping from filename to expected lowercase-hex hash,
/// built once per verification run.
#[derive(Debug)]
pub struct DigestIndex {
    entries: HashMap<String, String>,
}

impl DigestIndex {
    /// Loads and parses the digest file at `path`.
    ///
    /// Lines are fed to the parser in order starting at line 1; the first
    /// malformed line aborts the load with its `Parse` error. A file that
    /// cannot be read surfaces as `Io` so a missing digest file is never
    /// mistaken for a parse failure. Duplicate filenames: last line wins.
    pub fn load(path: &Path) -> Result<Self, VerifyError> {
        let text = fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;

        let mut entries = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            if let Some(entry) = parse_line(line, idx + 1)? {
                entries.insert(entry.filename, entry.hash);
            }
        }
        tracing::debug!(path = %path.display(), entries = entries.len(), "digest index loaded");
        Ok(Self { entries })
    }

    /// Exact-key lookup; no normalization or fuzzy matching.
    pub fn lookup(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

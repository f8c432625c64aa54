//! Parse one digest-file line into a `(hash, filename)` entry.

use crate::error::VerifyError;

/// One parsed digest-file entry. Hash is lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub hash: String,
    pub filename: String,
}

/// Parses a single digest line (`<hash><sep><filename>`, no trailing newline).
///
/// The separator is one or more ASCII whitespace characters; a `*` directly
/// before the filename marks binary mode and is stripped. Blank lines yield
/// `Ok(None)` and are skipped by the caller. Anything else that does not fit
/// the shape (no separator, empty or non-hex hash, empty filename) fails with
/// the 1-based line number and the verbatim line text.
///
/// Hash length is not validated here; a wrong-length digest simply fails the
/// comparison later.
pub(crate) fn parse_line(line: &str, line_num: usize) -> Result<Option<DigestEntry>, VerifyError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fail = || VerifyError::Parse {
        line_num,
        line: line.to_string(),
    };

    let (hash, rest) = line
        .split_once(|c: char| c.is_ascii_whitespace())
        .ok_or_else(fail)?;

    if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(fail());
    }

    let filename = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let filename = filename.strip_prefix('*').unwrap_or(filename);
    if filename.is_empty() {
        return Err(fail());
    }

    Ok(Some(DigestEntry {
        hash: hash.to_ascii_lowercase(),
        filename: filename.to_string(),
    }))
}

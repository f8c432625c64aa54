//! Per-verifier options: digest-string encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text representation used when presenting digest strings for comparison.
/// File bytes are always hashed raw; this only governs digest formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestEncoding {
    #[default]
    Utf8,
    Hex,
    Base64,
    Ascii,
}

impl DigestEncoding {
    pub fn name(self) -> &'static str {
        match self {
            DigestEncoding::Utf8 => "utf8",
            DigestEncoding::Hex => "hex",
            DigestEncoding::Base64 => "base64",
            DigestEncoding::Ascii => "ascii",
        }
    }
}

impl fmt::Display for DigestEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(DigestEncoding::Utf8),
            "hex" => Ok(DigestEncoding::Hex),
            "base64" => Ok(DigestEncoding::Base64),
            "ascii" => Ok(DigestEncoding::Ascii),
            _ => Err(format!("unknown encoding: {}", s)),
        }
    }
}

/// Immutable options attached to a verifier instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Encoding override; `None` means the utf8 default.
    pub encoding: Option<DigestEncoding>,
}

impl VerifyOptions {
    /// Encoding in effect. A configured override wins; otherwise the default.
    /// `use_override` short-circuits to the default when no override exists,
    /// mirroring the original accessor contract.
    pub fn encode(&self, use_override: bool) -> DigestEncoding {
        if use_override && self.encoding.is_none() {
            return DigestEncoding::default();
        }
        self.encoding.unwrap_or_default()
    }
}

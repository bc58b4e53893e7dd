//! Core stream types.
//!
//! Plain data, serializable, no references into the store — designed
//! so a host adapter layer can project them into its own shapes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumString;

use crate::error::{StreamError, StreamResult};

/// Open mode, resolved once at open time.
///
/// The canonical forms mirror the C `fopen` taxonomy. Binary/text
/// markers (`b`, `t`) and surrounding whitespace are stripped before
/// matching; anything left over that is not one of the six canonical
/// forms is an invalid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
pub enum Mode {
    /// Read-only; the path must already exist.
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    Read,
    /// Read/write; the path must already exist.
    #[serde(rename = "r+")]
    #[strum(serialize = "r+")]
    ReadWrite,
    /// Write-only; truncates or creates at open.
    #[serde(rename = "w")]
    #[strum(serialize = "w")]
    Write,
    /// Write/read; truncates or creates at open.
    #[serde(rename = "w+")]
    #[strum(serialize = "w+")]
    WriteRead,
    /// Append-only; creates if absent, content preserved.
    #[serde(rename = "a")]
    #[strum(serialize = "a")]
    Append,
    /// Append/read; creates if absent, content preserved.
    #[serde(rename = "a+")]
    #[strum(serialize = "a+")]
    AppendRead,
}

impl Mode {
    /// Parse a mode string.
    ///
    /// Strips the `b`/`t` markers anywhere in the string ("rb+" and
    /// "r+b" both resolve to `r+`) and surrounding whitespace, then
    /// matches against the canonical forms.
    pub fn parse(raw: &str) -> StreamResult<Self> {
        let canonical: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, 'b' | 't'))
            .collect();
        <Self as FromStr>::from_str(&canonical).map_err(|_| StreamError::invalid_mode(raw))
    }

    /// True if reads return data in this mode.
    pub fn readable(&self) -> bool {
        !matches!(self, Mode::Write | Mode::Append)
    }

    /// True if writes mutate the buffer in this mode.
    pub fn writable(&self) -> bool {
        !matches!(self, Mode::Read)
    }

    /// True if writes always target the buffer end, ignoring the
    /// cursor.
    pub fn is_append(&self) -> bool {
        matches!(self, Mode::Append | Mode::AppendRead)
    }

    /// Canonical mode string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Read => "r",
            Mode::ReadWrite => "r+",
            Mode::Write => "w",
            Mode::WriteRead => "w+",
            Mode::Append => "a",
            Mode::AppendRead => "a+",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seek origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Whence {
    /// Absolute offset from the start of the buffer.
    Set,
    /// Relative to the current cursor.
    Cur,
    /// Relative to the end of the buffer.
    End,
}

/// Stream metadata.
///
/// A single structured shape with a named `size` field; boundary
/// adapters project it into whatever keyed stat layout their host
/// convention needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Buffer length in bytes.
    pub size: u64,
}

impl Stat {
    /// Stat for a buffer of the given length.
    pub fn of_len(len: usize) -> Self {
        Self { size: len as u64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_canonical() {
        assert_eq!(Mode::parse("r").unwrap(), Mode::Read);
        assert_eq!(Mode::parse("r+").unwrap(), Mode::ReadWrite);
        assert_eq!(Mode::parse("w").unwrap(), Mode::Write);
        assert_eq!(Mode::parse("w+").unwrap(), Mode::WriteRead);
        assert_eq!(Mode::parse("a").unwrap(), Mode::Append);
        assert_eq!(Mode::parse("a+").unwrap(), Mode::AppendRead);
    }

    #[test]
    fn test_mode_parse_strips_markers() {
        assert_eq!(Mode::parse("rb").unwrap(), Mode::Read);
        assert_eq!(Mode::parse("rt").unwrap(), Mode::Read);
        assert_eq!(Mode::parse("rb+").unwrap(), Mode::ReadWrite);
        assert_eq!(Mode::parse("r+b").unwrap(), Mode::ReadWrite);
        assert_eq!(Mode::parse("wb+").unwrap(), Mode::WriteRead);
        assert_eq!(Mode::parse(" a+ ").unwrap(), Mode::AppendRead);
    }

    #[test]
    fn test_mode_parse_invalid() {
        for raw in ["", "x", "rw", "a++", "r+w"] {
            assert!(
                matches!(Mode::parse(raw), Err(StreamError::InvalidMode(_))),
                "{raw:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_mode_predicates() {
        assert!(Mode::Read.readable() && !Mode::Read.writable());
        assert!(Mode::ReadWrite.readable() && Mode::ReadWrite.writable());
        assert!(!Mode::Write.readable() && Mode::Write.writable());
        assert!(Mode::WriteRead.readable());
        assert!(!Mode::Append.readable() && Mode::Append.is_append());
        assert!(Mode::AppendRead.readable() && Mode::AppendRead.is_append());
        assert!(!Mode::Write.is_append());
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in [
            Mode::Read,
            Mode::ReadWrite,
            Mode::Write,
            Mode::WriteRead,
            Mode::Append,
            Mode::AppendRead,
        ] {
            assert_eq!(Mode::parse(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn test_whence_parse() {
        use std::str::FromStr;
        assert_eq!(Whence::from_str("set").unwrap(), Whence::Set);
        assert_eq!(Whence::from_str("CUR").unwrap(), Whence::Cur);
        assert_eq!(Whence::from_str("End").unwrap(), Whence::End);
        assert!(Whence::from_str("begin").is_err());
    }

    #[test]
    fn test_stat_serializes_named_size() {
        let json = serde_json::to_value(Stat::of_len(42)).unwrap();
        assert_eq!(json["size"], 42);
    }
}

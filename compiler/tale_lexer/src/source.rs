//! Scanner input decoded from raw bytes.
//!
//! The scanner works on `&str`. `SourceText` is the step before it for
//! callers holding bytes: it rejects input that is not UTF-8, strips a
//! UTF-8 byte order mark so it does not shift columns, and records
//! non-fatal oddities as [`EncodingIssue`]s for the caller to report.

use thiserror::Error;

use crate::Scanner;

/// Input that cannot be scanned at all.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("source is UTF-16 (little-endian byte order mark), expected UTF-8")]
    Utf16Le,
    #[error("source is UTF-16 (big-endian byte order mark), expected UTF-8")]
    Utf16Be,
    #[error("source is not valid UTF-8 (first invalid byte at offset {pos})")]
    InvalidUtf8 { pos: usize },
}

/// Non-fatal encoding issue found while preparing the source.
///
/// `pos` is a byte offset into [`SourceText::as_str`], except for
/// [`EncodingIssueKind::Utf8Bom`] which always reports the stripped
/// prefix at offset 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    pub pos: u32,
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`EF BB BF`) at start. Stripped before scanning.
    Utf8Bom,
    /// NUL byte in the content. Scanned as ordinary text.
    InteriorNull,
}

const UTF8_BOM: char = '\u{FEFF}';
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Owned, validated scanner input.
#[derive(Clone, Debug)]
pub struct SourceText {
    text: String,
    encoding_issues: Vec<EncodingIssue>,
}

impl SourceText {
    /// Prepare already-decoded text.
    pub fn new(source: &str) -> Self {
        let mut encoding_issues = Vec::new();
        let text = match source.strip_prefix(UTF8_BOM) {
            Some(rest) => {
                encoding_issues.push(EncodingIssue {
                    kind: EncodingIssueKind::Utf8Bom,
                    pos: 0,
                    len: 3,
                });
                rest
            }
            None => source,
        };
        detect_interior_nulls(text.as_bytes(), &mut encoding_issues);
        Self {
            text: text.to_owned(),
            encoding_issues,
        }
    }

    /// Decode raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        if bytes.starts_with(&UTF16_LE_BOM) {
            return Err(SourceError::Utf16Le);
        }
        if bytes.starts_with(&UTF16_BE_BOM) {
            return Err(SourceError::Utf16Be);
        }
        let text = std::str::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            pos: e.valid_up_to(),
        })?;
        Ok(Self::new(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the scanned text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// Create a [`Scanner`] over the text.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.text)
    }
}

/// Record every NUL byte. `memchr` finds them without a per-byte loop.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

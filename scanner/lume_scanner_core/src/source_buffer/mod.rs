//! Sentinel-terminated source buffer backing the reference cursor.
//!
//! The buffer appends a `0x00` sentinel after the source content and
//! zero-pads to the next 64-byte boundary, so the cursor can detect end of
//! input without bounds checks and peek near the end without reading past
//! the allocation.
//!
//! # Encoding Detection
//!
//! Construction scans the source for encoding problems the scanner itself
//! must not trip over:
//! - UTF-8 BOM at the start (the grammar forbids it),
//! - UTF-16 BOMs (wrong encoding entirely),
//! - interior null bytes (legal cursor input, but worth surfacing).
//!
//! Problems are recorded as [`EncodingIssue`] values for the embedder to
//! turn into diagnostics; they never fail construction.

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the source.
    Utf8Bom,
    /// UTF-16 little-endian BOM (`0xFF 0xFE`) at the start.
    Utf16LeBom,
    /// UTF-16 big-endian BOM (`0xFE 0xFF`) at the start.
    Utf16BeBom,
    /// Null byte (U+0000) inside the source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated, cache-line-padded buffer
    /// and record any encoding issues found.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; inputs
    /// that size are the embedder's problem to reject upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum one sentinel byte).
        let padded_len = (source_len + CACHE_LINE) & !(CACHE_LINE - 1);

        // Zero-filled allocation: sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_bom(source_bytes, &mut encoding_issues);
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    } else if source.starts_with(&[0xFF, 0xFE]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf16LeBom,
            pos: 0,
            len: 2,
        });
    } else if source.starts_with(&[0xFE, 0xFF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf16BeBom,
            pos: 0,
            len: 2,
        });
    }
}

/// Detect null bytes (U+0000) inside the source content.
///
/// Uses `memchr` rather than byte-at-a-time iteration; interior nulls are
/// rare, so the search is effectively one SIMD sweep.
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
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

//! Borrowed view over the caller's input buffer
//!
//! Every token and node produced by this crate borrows from the buffer behind a
//! [`Source`], so the buffer must outlive the whole parse result.

/// Maximum number of bytes quoted in diagnostics
pub const SNIPPET_LEN: usize = 20;

/// Non-owning view over an input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    bytes: &'a [u8],
}

impl<'a> Source<'a> {
    /// Create a view over `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The underlying buffer
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `offset`, if in range
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Sub-slice `[start, end)` of the buffer
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.bytes[start..end]
    }

    /// Check if the buffer holds `pattern` starting at `offset`
    pub fn matches_at(&self, offset: usize, pattern: &[u8]) -> bool {
        self.bytes
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(pattern))
    }

    /// Up to [`SNIPPET_LEN`] bytes starting at `offset`, lossily decoded
    pub fn snippet(&self, offset: usize) -> String {
        snippet(self.bytes.get(offset..).unwrap_or_default())
    }

    /// 1-indexed line and column of `offset`, counting bytes
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let prefix = &self.bytes[..offset.min(self.bytes.len())];
        let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);
        (line, offset - line_start + 1)
    }
}

/// Lossy rendering of at most [`SNIPPET_LEN`] leading bytes of `bytes`
pub(crate) fn snippet(bytes: &[u8]) -> String {
    let end = bytes.len().min(SNIPPET_LEN);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

//! Tokens and the forward-only token cursor
//!
//! Tokens are `(kind, slice)` pairs that borrow their text from the input
//! buffer. The lexer appends them to a [`TokenStream`], which the parser then
//! consumes front to back with one token of lookahead.

use std::fmt;

use smallvec::SmallVec;

use crate::{Error, Result};

/// The lexical class of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// A quoted string, quotes and escapes kept
    String,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// A run of ASCII digits
    Number,
    /// Placeholder kind; the lexer reports failures as [`Error`] values
    /// and never emits it
    #[default]
    Error,
}

impl TokenKind {
    /// Short human-readable name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::String => "string",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Number => "number",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    slice: &'a [u8],
    offset: usize,
}

impl<'a> Token<'a> {
    /// Create a token of `kind` covering `slice`, which starts at `offset`
    pub fn new(kind: TokenKind, slice: &'a [u8], offset: usize) -> Self {
        Self {
            kind,
            slice,
            offset,
        }
    }

    /// Token kind
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact source text of the token
    pub fn slice(&self) -> &'a [u8] {
        self.slice
    }

    /// Byte offset of the token in the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset one past the token's last byte
    pub fn end(&self) -> usize {
        self.offset + self.slice.len()
    }

    /// Bounded, lossily decoded token text for diagnostics
    pub fn snippet(&self) -> String {
        crate::source::snippet(self.slice)
    }
}

/// Forward-only cursor over a lexed token sequence
#[derive(Debug, Clone, Default)]
pub struct TokenStream<'a> {
    tokens: SmallVec<[Token<'a>; 16]>,
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `capacity` tokens
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: SmallVec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Append a token; only the lexer builds streams
    pub(crate) fn push(&mut self, token: Token<'a>) {
        self.tokens.push(token);
    }

    /// Current token without advancing
    pub fn peek(&self) -> Result<Token<'a>> {
        self.tokens
            .get(self.cursor)
            .copied()
            .ok_or_else(|| Error::unexpected_end("reading the token stream"))
    }

    /// Current token, advancing past it
    pub fn take(&mut self) -> Result<Token<'a>> {
        let token = self.peek()?;
        self.cursor += 1;
        Ok(token)
    }

    /// Rewind to the first token
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Check if tokens remain past the cursor
    pub fn has_more(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Cursor position, counted in tokens
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of tokens, consumed or not
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in source order, regardless of the cursor
    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.tokens
    }
}

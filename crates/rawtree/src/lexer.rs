//! Byte-level JSON lexer
//!
//! Scans the input once, left to right, and appends one [`Token`] per lexeme
//! to a [`TokenStream`]. Payload bytes are never copied: every token borrows
//! its slice from the input buffer. A lexical failure aborts the whole scan,
//! there is no partial token sequence.

use crate::limits::validate_input_size;
use crate::source::Source;
use crate::token::{Token, TokenKind, TokenStream};
use crate::{Error, ParseConfig, Result};

/// JSON lexer over a borrowed buffer
pub struct Lexer<'a> {
    source: Source<'a>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer without input size checks
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            source: Source::new(input),
            pos: 0,
        }
    }

    /// Create a lexer, rejecting input larger than `config` allows
    pub fn with_config(input: &'a [u8], config: &ParseConfig) -> Result<Self> {
        validate_input_size(input.len(), config)?;
        Ok(Self::new(input))
    }

    /// Current scan position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scan the whole input into a token stream
    pub fn tokenize(mut self) -> Result<TokenStream<'a>> {
        // Rough guess: one token per four bytes of typical JSON
        let mut tokens = TokenStream::with_capacity(self.source.len() / 4);

        while let Some(byte) = self.source.byte_at(self.pos) {
            let token = match byte {
                b'[' => self.single(TokenKind::LBracket),
                b']' => self.single(TokenKind::RBracket),
                b'{' => self.single(TokenKind::LBrace),
                b'}' => self.single(TokenKind::RBrace),
                b':' => self.single(TokenKind::Colon),
                b',' => self.single(TokenKind::Comma),
                b't' => self.literal(TokenKind::Boolean, "true")?,
                b'f' => self.literal(TokenKind::Boolean, "false")?,
                b'n' => self.literal(TokenKind::Null, "null")?,
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.pos += 1;
                    continue;
                }
                b'0'..=b'9' => self.number(),
                b'"' => self.string()?,
                _ => {
                    return Err(Error::UnexpectedInput {
                        offset: self.pos,
                        snippet: self.source.snippet(self.pos),
                    });
                }
            };
            tokens.push(token);
        }

        tracing::trace!(
            bytes = self.source.len(),
            tokens = tokens.len(),
            "tokenized JSON input"
        );
        Ok(tokens)
    }

    /// Emit a token for `len` bytes at the cursor and advance past them
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        Token::new(kind, self.source.slice(start, self.pos), start)
    }

    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.emit(kind, 1)
    }

    fn literal(&mut self, kind: TokenKind, literal: &'static str) -> Result<Token<'a>> {
        if !self.source.matches_at(self.pos, literal.as_bytes()) {
            return Err(Error::InvalidLiteral {
                offset: self.pos,
                expected: literal,
                snippet: self.source.snippet(self.pos),
            });
        }
        Ok(self.emit(kind, literal.len()))
    }

    /// Maximal run of ASCII digits; sign, fraction and exponent are not
    /// part of the number grammar and end the run
    fn number(&mut self) -> Token<'a> {
        let len = self.source.as_bytes()[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.emit(TokenKind::Number, len)
    }

    /// Quoted string up to the first unescaped `"`. A backslash skips the
    /// byte after it without checking which escape it forms.
    fn string(&mut self) -> Result<Token<'a>> {
        let start = self.pos;
        let mut cursor = start + 1;

        loop {
            match self.source.byte_at(cursor) {
                Some(b'"') => break,
                Some(b'\\') => cursor += 2,
                Some(_) => cursor += 1,
                None => {
                    return Err(Error::UnmatchedString {
                        offset: start,
                        snippet: self.source.snippet(start),
                    });
                }
            }
        }

        Ok(self.emit(TokenKind::String, cursor + 1 - start))
    }
}

/// Tokenize `input` without size limits
pub fn tokenize(input: &[u8]) -> Result<TokenStream<'_>> {
    Lexer::new(input).tokenize()
}

//! Error types for rawtree operations

use crate::ast::NodeKind;
use crate::token::TokenKind;

/// Result type alias for rawtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure class of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The byte stream could not be split into tokens
    Lex,
    /// The tokens do not form a document of the grammar
    Syntax,
    /// The document is well formed but violates a tree invariant,
    /// or a typed access did not match the tree
    Semantic,
    /// A configured resource limit rejected the input
    Resource,
}

/// Main error type for rawtree operations
///
/// Positional variants carry the byte offset into the original buffer and a
/// snippet of at most [`SNIPPET_LEN`](crate::source::SNIPPET_LEN) bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A byte that cannot start any token
    #[error("Unexpected input at byte {offset}: [{snippet}]")]
    UnexpectedInput {
        /// Offset of the offending byte
        offset: usize,
        /// Input starting at the offending byte
        snippet: String,
    },

    /// A string literal without a closing quote
    #[error("Unmatched string started at byte {offset}: [{snippet}]")]
    UnmatchedString {
        /// Offset of the opening quote
        offset: usize,
        /// Input starting at the opening quote
        snippet: String,
    },

    /// A `t`/`f`/`n` prefix that does not spell `true`/`false`/`null`
    #[error("Invalid literal at byte {offset}, expected `{expected}`: [{snippet}]")]
    InvalidLiteral {
        /// Offset of the literal's first byte
        offset: usize,
        /// The literal the lead byte announced
        expected: &'static str,
        /// Input starting at the literal
        snippet: String,
    },

    /// A token that the grammar does not allow at this position
    #[error("{context} at byte {offset}: found {found} [{snippet}]")]
    UnexpectedToken {
        /// Offset of the offending token
        offset: usize,
        /// Grammar position that rejected the token
        context: &'static str,
        /// Kind of the offending token
        found: TokenKind,
        /// Source text of the offending token
        snippet: String,
    },

    /// An object key not followed by `:`
    #[error("Expecting colon after key at byte {offset}: [{key}]")]
    MissingColon {
        /// Offset of the key token
        offset: usize,
        /// Raw key text
        key: String,
    },

    /// Something other than `,` or `}` after an object entry
    #[error("Invalid token {found} after object entry {key} at byte {offset}")]
    InvalidEntrySeparator {
        /// Offset of the key token of the entry
        offset: usize,
        /// Raw key text of the entry
        key: String,
        /// Kind of the token found instead of a separator
        found: TokenKind,
    },

    /// Tokens left over after the root value
    #[error("Extra tokens after valid value, starting at byte {offset}: [{snippet}]")]
    TrailingTokens {
        /// Offset of the first extra token
        offset: usize,
        /// Source text of the first extra token
        snippet: String,
    },

    /// The token stream ran out
    #[error("End of input while {context}")]
    UnexpectedEnd {
        /// What the parser was doing when input ended
        context: &'static str,
    },

    /// A key inserted twice into the same object
    #[error("Duplicate key {key} at byte {offset}")]
    DuplicateKey {
        /// Offset of the second occurrence of the key
        offset: usize,
        /// Raw key text
        key: String,
    },

    /// A typed downcast on a node of a different variant
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Requested variant
        expected: NodeKind,
        /// Variant of the node
        actual: NodeKind,
    },

    /// Object lookup of an absent key
    #[error("Key not found in object: {key}")]
    MissingKey {
        /// Key that was looked up
        key: String,
    },

    /// Array lookup past the last element
    #[error("Index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Array length
        len: usize,
    },

    /// UTF-8 conversion of a raw slice failed
    #[error("UTF-8 conversion failed: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Arrays/objects nested deeper than the configured limit
    #[error("Nesting depth would exceed maximum allowed {max_depth} at byte {offset}")]
    DepthLimitExceeded {
        /// Offset of the opening bracket that crossed the limit
        offset: usize,
        /// Configured limit
        max_depth: usize,
    },

    /// Input larger than the configured limit
    #[error("Input size {size} exceeds maximum allowed {max} bytes")]
    InputTooLarge {
        /// Input length in bytes
        size: usize,
        /// Configured limit
        max: usize,
    },
}

impl Error {
    /// Create an unexpected-token error from the offending token
    pub fn unexpected_token(token: &crate::token::Token<'_>, context: &'static str) -> Self {
        Self::UnexpectedToken {
            offset: token.offset(),
            context,
            found: token.kind(),
            snippet: token.snippet(),
        }
    }

    /// Create an end-of-input error
    pub fn unexpected_end(context: &'static str) -> Self {
        Self::UnexpectedEnd { context }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: NodeKind, actual: NodeKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Create a missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedInput { .. }
            | Self::UnmatchedString { .. }
            | Self::InvalidLiteral { .. } => ErrorKind::Lex,
            Self::UnexpectedToken { .. }
            | Self::MissingColon { .. }
            | Self::InvalidEntrySeparator { .. }
            | Self::TrailingTokens { .. }
            | Self::UnexpectedEnd { .. } => ErrorKind::Syntax,
            Self::DuplicateKey { .. }
            | Self::TypeMismatch { .. }
            | Self::MissingKey { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::Utf8(_) => ErrorKind::Semantic,
            Self::DepthLimitExceeded { .. } | Self::InputTooLarge { .. } => ErrorKind::Resource,
        }
    }

    /// Byte offset into the source buffer, when the error has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedInput { offset, .. }
            | Self::UnmatchedString { offset, .. }
            | Self::InvalidLiteral { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::MissingColon { offset, .. }
            | Self::InvalidEntrySeparator { offset, .. }
            | Self::TrailingTokens { offset, .. }
            | Self::DuplicateKey { offset, .. }
            | Self::DepthLimitExceeded { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

//! # rawtree
//!
//! Zero-copy JSON lexer and recursive-descent parser. [`parse`] turns a
//! caller-owned byte buffer into a typed, owned tree whose textual payloads
//! are slices of that buffer:
//!
//! - strings keep their quotes and escape sequences, undecoded
//! - numbers keep their digits, unconverted
//! - objects keep insertion order and reject duplicate keys
//!
//! The [`access`] layer narrows nodes to a variant with [`cast`] and looks up
//! keys through a hash index.
//!
//! ```
//! use rawtree::{Number, Object, Str};
//!
//! let input = br#"{"id": "42", "reason": "comment", "subject": {"title": "hi"}}"#;
//! let root = rawtree::parse(input).unwrap();
//!
//! let notification = root.cast::<Object<'_>>().unwrap();
//! assert_eq!(notification.get("id").unwrap().cast::<Str<'_>>().unwrap().raw(), br#""42""#);
//! assert!(notification.get("subject").unwrap().cast::<Object<'_>>().is_ok());
//! assert!(notification.get("id").unwrap().cast::<Number<'_>>().is_err());
//! ```
//!
//! The accepted grammar is a subset of JSON: numbers are unsigned digit runs,
//! and a comma directly before `]` or `}` is accepted unless
//! [`ParseConfig::allow_trailing_commas`] is turned off.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod access;
pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod source;
pub mod token;

pub use access::{Variant, cast};
pub use ast::{Array, Node, NodeKind, Null, Number, Object, ObjectIter, Str};
pub use config::ParseConfig;
pub use error::{Error, ErrorKind, Result};
pub use lexer::{Lexer, tokenize};
pub use parser::Parser;
pub use source::Source;
pub use token::{Token, TokenKind, TokenStream};

/// Parse `input` with the default configuration
pub fn parse(input: &[u8]) -> Result<Node<'_>> {
    Parser::new().parse(input)
}

/// Parse `input` with a custom configuration
pub fn parse_with_config<'a>(input: &'a [u8], config: &ParseConfig) -> Result<Node<'a>> {
    Parser::with_config(config.clone()).parse(input)
}

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        Array, Error, ErrorKind, Node, NodeKind, Null, Number, Object, ParseConfig, Parser,
        Result, Str, Variant, cast, parse,
    };
}

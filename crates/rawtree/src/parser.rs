//! Recursive-descent JSON parser
//!
//! Grammar, with the lexer's token kinds as terminals:
//!
//! ```text
//! value  ::= object | array | string | boolean | number | null
//! object ::= '{' ( string ':' value ( ',' string ':' value )* )? '}'
//! array  ::= '[' ( value ( ',' value )* )? ']'
//! ```
//!
//! Each nonterminal is one function; recursion depth equals nesting depth and
//! is bounded by [`ParseConfig::max_depth`]. A comma directly before the
//! closing bracket is accepted unless
//! [`ParseConfig::allow_trailing_commas`] is off.

use crate::ast::{Array, Node, Number, Object, Str};
use crate::lexer::Lexer;
use crate::limits::DepthTracker;
use crate::token::{Token, TokenKind, TokenStream};
use crate::{Error, ParseConfig, Result};

/// JSON parser producing a borrowed syntax tree
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    /// Create new parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parser with custom configuration
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Tokenize and parse `input` into a tree borrowing from it
    pub fn parse<'a>(&self, input: &'a [u8]) -> Result<Node<'a>> {
        let mut tokens = Lexer::with_config(input, &self.config)?.tokenize()?;
        let root = self.parse_tokens(&mut tokens)?;

        tracing::debug!(
            bytes = input.len(),
            tokens = tokens.len(),
            root = %root.kind(),
            "parsed JSON document"
        );
        Ok(root)
    }

    /// Parse an already lexed stream. The stream is rewound first and must be
    /// fully consumed by exactly one value.
    pub fn parse_tokens<'a>(&self, tokens: &mut TokenStream<'a>) -> Result<Node<'a>> {
        tokens.reset();

        let mut descent = Descent {
            tokens,
            depth: DepthTracker::from_config(&self.config),
            allow_trailing_commas: self.config.allow_trailing_commas,
        };
        let root = descent.parse_value()?;

        if descent.tokens.has_more() {
            let extra = descent.tokens.peek()?;
            return Err(Error::TrailingTokens {
                offset: extra.offset(),
                snippet: extra.snippet(),
            });
        }
        Ok(root)
    }
}

/// State of one parse: the cursor plus nesting bookkeeping
struct Descent<'t, 'a> {
    tokens: &'t mut TokenStream<'a>,
    depth: DepthTracker,
    allow_trailing_commas: bool,
}

impl<'a> Descent<'_, 'a> {
    fn peek(&self, context: &'static str) -> Result<Token<'a>> {
        if !self.tokens.has_more() {
            return Err(Error::unexpected_end(context));
        }
        self.tokens.peek()
    }

    fn take(&mut self, context: &'static str) -> Result<Token<'a>> {
        if !self.tokens.has_more() {
            return Err(Error::unexpected_end(context));
        }
        self.tokens.take()
    }

    fn parse_value(&mut self) -> Result<Node<'a>> {
        let token = self.take("awaiting a value")?;

        match token.kind() {
            TokenKind::LBrace => {
                self.depth.enter(token.offset())?;
                let object = self.parse_object()?;
                self.depth.exit();
                Ok(Node::Object(object))
            }
            TokenKind::LBracket => {
                self.depth.enter(token.offset())?;
                let array = self.parse_array()?;
                self.depth.exit();
                Ok(Node::Array(array))
            }
            TokenKind::Boolean => Ok(Node::Boolean(token.slice() == b"true")),
            TokenKind::Number => Ok(Node::Number(Number::new(token.slice()))),
            TokenKind::String => Ok(Node::String(Str::new(token.slice()))),
            TokenKind::Null => Ok(Node::Null),
            _ => Err(Error::unexpected_token(&token, "Token in invalid position")),
        }
    }

    /// Called after `[` was taken
    fn parse_array(&mut self) -> Result<Array<'a>> {
        let mut array = Array::new();

        loop {
            let next = self.peek("parsing array")?;
            if next.kind() == TokenKind::RBracket {
                if !array.is_empty() && !self.allow_trailing_commas {
                    return Err(Error::unexpected_token(&next, "Trailing comma before ']'"));
                }
                self.take("parsing array")?;
                return Ok(array);
            }

            array.push(self.parse_value()?);

            let separator = self.take("parsing array")?;
            match separator.kind() {
                TokenKind::Comma => continue,
                TokenKind::RBracket => return Ok(array),
                _ => {
                    return Err(Error::unexpected_token(
                        &separator,
                        "Invalid token while parsing array",
                    ));
                }
            }
        }
    }

    /// Called after `{` was taken
    fn parse_object(&mut self) -> Result<Object<'a>> {
        let mut object = Object::new();

        loop {
            let next = self.peek("parsing object")?;
            if next.kind() == TokenKind::RBrace {
                if !object.is_empty() && !self.allow_trailing_commas {
                    return Err(Error::unexpected_token(&next, "Trailing comma before '}'"));
                }
                self.take("parsing object")?;
                return Ok(object);
            }

            let key = self.take("parsing object")?;
            if key.kind() != TokenKind::String {
                return Err(Error::unexpected_token(
                    &key,
                    "Invalid token while parsing object, expected string key",
                ));
            }

            let colon = self.take("parsing object")?;
            if colon.kind() != TokenKind::Colon {
                return Err(Error::MissingColon {
                    offset: key.offset(),
                    key: key.snippet(),
                });
            }

            let value = self.parse_value()?;
            object.insert(Str::new(key.slice()), value, key.offset())?;

            let separator = self.take("parsing object")?;
            match separator.kind() {
                TokenKind::Comma => continue,
                TokenKind::RBrace => return Ok(object),
                found => {
                    return Err(Error::InvalidEntrySeparator {
                        offset: key.offset(),
                        key: key.snippet(),
                        found,
                    });
                }
            }
        }
    }
}

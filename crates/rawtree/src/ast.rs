//! Borrowed JSON syntax tree
//!
//! Nodes own their children and borrow every textual payload from the input
//! buffer: strings keep their quotes and escapes, numbers keep their digits.
//! Containers preserve insertion order.

use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;

use crate::{Error, Result};

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// `{ ... }` with unique keys
    Object(Object<'a>),
    /// `[ ... ]`
    Array(Array<'a>),
    /// Raw quoted string
    String(Str<'a>),
    /// Raw digit run
    Number(Number<'a>),
    /// `true` or `false`
    Boolean(bool),
    /// `null`
    Null,
}

/// Variant tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Node::Object`]
    Object,
    /// [`Node::Array`]
    Array,
    /// [`Node::String`]
    String,
    /// [`Node::Number`]
    Number,
    /// [`Node::Boolean`]
    Boolean,
    /// [`Node::Null`]
    Null,
}

impl NodeKind {
    /// Lowercase name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Node<'a> {
    /// Variant tag of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Boolean(_) => NodeKind::Boolean,
            Node::Null => NodeKind::Null,
        }
    }

    /// Get value as object if it's an object
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Get value as array if it's an array
    pub fn as_array(&self) -> Option<&Array<'a>> {
        match self {
            Node::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Get value as raw string if it's a string
    pub fn as_string(&self) -> Option<&Str<'a>> {
        match self {
            Node::String(string) => Some(string),
            _ => None,
        }
    }

    /// Get value as raw number if it's a number
    pub fn as_number(&self) -> Option<&Number<'a>> {
        match self {
            Node::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Get value as bool if it's a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }
}

/// Raw string slice, surrounding quotes and escapes included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Str<'a> {
    raw: &'a [u8],
}

impl<'a> Str<'a> {
    /// Wrap a raw quoted slice
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Source text with quotes
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Text between the quotes, escapes left as written
    pub fn inner(&self) -> &'a [u8] {
        self.raw
            .strip_prefix(b"\"")
            .and_then(|rest| rest.strip_suffix(b"\""))
            .unwrap_or(self.raw)
    }

    /// Text between the quotes as `&str`
    pub fn to_str(&self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.inner())?)
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.raw))
    }
}

/// Raw number slice, kept unconverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number<'a> {
    raw: &'a [u8],
}

impl<'a> Number<'a> {
    /// Wrap a raw digit slice
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Source text of the number
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Source text as `&str`
    pub fn to_str(&self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.raw)?)
    }

    /// Convert to any type parseable from text, e.g. `u64` or `f64`
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        self.to_str().ok()?.parse().ok()
    }

    /// Get value as u64 if it fits
    pub fn as_u64(&self) -> Option<u64> {
        self.parse()
    }

    /// Get value as f64
    pub fn as_f64(&self) -> Option<f64> {
        self.parse()
    }
}

impl fmt::Display for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.raw))
    }
}

/// Marker payload for [`Node::Null`], returned by typed casts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

/// Array node: ordered children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array<'a> {
    items: Vec<Node<'a>>,
}

impl<'a> Array<'a> {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: Node<'a>) {
        self.items.push(node);
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if array is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&Node<'a>> {
        self.items.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Element at `index`, if present
    pub fn try_get(&self, index: usize) -> Option<&Node<'a>> {
        self.items.get(index)
    }

    /// Elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Node<'a>> {
        self.items.iter()
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[Node<'a>] {
        &self.items
    }
}

impl<'a> From<Vec<Node<'a>>> for Array<'a> {
    fn from(items: Vec<Node<'a>>) -> Self {
        Self { items }
    }
}

impl<'n, 'a> IntoIterator for &'n Array<'a> {
    type Item = &'n Node<'a>;
    type IntoIter = std::slice::Iter<'n, Node<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Object node: ordered entries with a key index
///
/// Entries keep raw keys (quotes included). The index maps the text between
/// the quotes to the entry position, so lookups by `&str` never scan.
#[derive(Clone, Default)]
pub struct Object<'a> {
    entries: Vec<(Str<'a>, Node<'a>)>,
    index: AHashMap<&'a [u8], usize>,
}

impl<'a> Object<'a> {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; `offset` locates the key for diagnostics
    pub(crate) fn insert(&mut self, key: Str<'a>, value: Node<'a>, offset: usize) -> Result<()> {
        match self.index.entry(key.inner()) {
            Entry::Occupied(_) => Err(Error::DuplicateKey {
                offset,
                key: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push((key, value));
                Ok(())
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if object is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key` (compared with the unquoted raw key text)
    pub fn get(&self, key: &str) -> Result<&Node<'a>> {
        self.try_get(key).ok_or_else(|| Error::missing_key(key))
    }

    /// Value stored under `key`, if present
    pub fn try_get(&self, key: &str) -> Option<&Node<'a>> {
        let position = *self.index.get(key.as_bytes())?;
        self.entries.get(position).map(|(_, value)| value)
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key.as_bytes())
    }

    /// Entries in insertion order
    pub fn iter(&self) -> ObjectIter<'_, 'a> {
        ObjectIter {
            inner: self.entries.iter(),
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = Str<'a>> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Node<'a>> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

// The index is derived from the entries, so only entries take part
impl PartialEq for Object<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

/// Iterator over object entries in insertion order
#[derive(Debug, Clone)]
pub struct ObjectIter<'n, 'a> {
    inner: std::slice::Iter<'n, (Str<'a>, Node<'a>)>,
}

impl<'n, 'a> Iterator for ObjectIter<'n, 'a> {
    type Item = (Str<'a>, &'n Node<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ObjectIter<'_, '_> {}

impl<'n, 'a> IntoIterator for &'n Object<'a> {
    type Item = (Str<'a>, &'n Node<'a>);
    type IntoIter = ObjectIter<'n, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

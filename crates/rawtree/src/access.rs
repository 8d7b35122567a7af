//! Checked navigation of a parsed tree
//!
//! [`cast`] narrows a [`Node`] to one variant's payload and reports the actual
//! variant on mismatch. `Node::get`, `Node::at` and `Node::pointer` combine a
//! cast with a key or index lookup.

use crate::ast::{Array, Node, NodeKind, Null, Number, Object, Str};
use crate::{Error, Result};

/// A payload type that a [`Node`] can be narrowed to
pub trait Variant<'a>: Sized {
    /// Variant tag this payload belongs to
    const KIND: NodeKind;

    /// The payload, if `node` carries this variant
    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self>;
}

impl<'a> Variant<'a> for Object<'a> {
    const KIND: NodeKind = NodeKind::Object;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        node.as_object()
    }
}

impl<'a> Variant<'a> for Array<'a> {
    const KIND: NodeKind = NodeKind::Array;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        node.as_array()
    }
}

impl<'a> Variant<'a> for Str<'a> {
    const KIND: NodeKind = NodeKind::String;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        node.as_string()
    }
}

impl<'a> Variant<'a> for Number<'a> {
    const KIND: NodeKind = NodeKind::Number;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        node.as_number()
    }
}

impl<'a> Variant<'a> for bool {
    const KIND: NodeKind = NodeKind::Boolean;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        match node {
            Node::Boolean(value) => Some(value),
            _ => None,
        }
    }
}

impl<'a> Variant<'a> for Null {
    const KIND: NodeKind = NodeKind::Null;

    fn from_node<'n>(node: &'n Node<'a>) -> Option<&'n Self> {
        node.is_null().then_some(&Null)
    }
}

/// Narrow `node` to the payload of variant `V`
pub fn cast<'n, 'a, V: Variant<'a>>(node: &'n Node<'a>) -> Result<&'n V> {
    V::from_node(node).ok_or_else(|| Error::type_mismatch(V::KIND, node.kind()))
}

impl<'a> Node<'a> {
    /// Narrow this node to the payload of variant `V`
    pub fn cast<V: Variant<'a>>(&self) -> Result<&V> {
        cast(self)
    }

    /// Look up `key`, failing if this node is not an object or lacks the key
    pub fn get(&self, key: &str) -> Result<&Node<'a>> {
        self.cast::<Object<'a>>()?.get(key)
    }

    /// Element `index`, failing if this node is not an array or is too short
    pub fn at(&self, index: usize) -> Result<&Node<'a>> {
        self.cast::<Array<'a>>()?.get(index)
    }

    /// Follow a `/`-separated path of keys and indices (RFC 6901 syntax;
    /// `~1` and `~0` unescape to `/` and `~`). The empty path is the node
    /// itself.
    pub fn pointer(&self, path: &str) -> Result<&Node<'a>> {
        if path.is_empty() {
            return Ok(self);
        }
        let Some(rest) = path.strip_prefix('/') else {
            return Err(Error::missing_key(path));
        };

        rest.split('/').try_fold(self, |node, segment| {
            let segment = segment.replace("~1", "/").replace("~0", "~");
            match node {
                Node::Array(array) => match segment.parse::<usize>() {
                    Ok(index) => array.get(index),
                    Err(_) => Err(Error::type_mismatch(NodeKind::Object, NodeKind::Array)),
                },
                _ => node.get(&segment),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_cast_matching_variants() {
        let root = parse(br#"[{}, [], "s", 7, true, null]"#).unwrap();
        let array = cast::<Array<'_>>(&root).unwrap();

        assert!(array.get(0).unwrap().cast::<Object<'_>>().is_ok());
        assert!(array.get(1).unwrap().cast::<Array<'_>>().is_ok());
        assert_eq!(array.get(2).unwrap().cast::<Str<'_>>().unwrap().raw(), br#""s""#);
        assert_eq!(array.get(3).unwrap().cast::<Number<'_>>().unwrap().as_u64(), Some(7));
        assert!(*array.get(4).unwrap().cast::<bool>().unwrap());
        assert_eq!(array.get(5).unwrap().cast::<Null>().unwrap(), &Null);
    }

    #[test]
    fn test_cast_mismatch_names_both_kinds() {
        let root = parse(br#""text""#).unwrap();
        let err = cast::<Number<'_>>(&root).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: NodeKind::Number,
                actual: NodeKind::String
            }
        );

        let err = root.cast::<Null>().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: NodeKind::Null, .. }));
    }

    #[test]
    fn test_get_and_at() {
        let root = parse(br#"{"list": [1, 2, 3]}"#).unwrap();
        let second = root.get("list").unwrap().at(1).unwrap();
        assert_eq!(second.cast::<Number<'_>>().unwrap().raw(), b"2");

        assert!(matches!(root.at(0), Err(Error::TypeMismatch { .. })));
        assert!(matches!(root.get("nope"), Err(Error::MissingKey { .. })));
        assert!(matches!(
            root.get("list").unwrap().at(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_pointer() {
        let root = parse(br#"{"a": {"b/c": [10, {"d~e": null}]}}"#).unwrap();
        assert_eq!(root.pointer("").unwrap(), &root);
        assert_eq!(
            root.pointer("/a/b~1c/0").unwrap().cast::<Number<'_>>().unwrap().raw(),
            b"10"
        );
        assert!(root.pointer("/a/b~1c/1/d~0e").unwrap().is_null());
        assert!(matches!(root.pointer("/a/x"), Err(Error::MissingKey { .. })));
        assert!(matches!(root.pointer("/a/b~1c/x"), Err(Error::TypeMismatch { .. })));
        assert!(root.pointer("a").is_err());
    }
}

//! Property-based tests for parser invariants
//!
//! Generates arbitrary documents in the accepted grammar, renders them, and
//! checks that parsing reproduces the generated structure exactly. Arbitrary
//! byte soup must never panic, and diagnostics stay bounded.

use proptest::prelude::*;
use rawtree::source::SNIPPET_LEN;
use rawtree::{Node, parse, tokenize};

/// Generated document model
#[derive(Debug, Clone)]
enum Doc {
    Null,
    Bool(bool),
    Num(u64),
    Text(String),
    List(Vec<Doc>),
    Map(Vec<(String, Doc)>),
}

fn doc_strategy() -> impl Strategy<Value = Doc> {
    let leaf = prop_oneof![
        Just(Doc::Null),
        any::<bool>().prop_map(Doc::Bool),
        any::<u64>().prop_map(Doc::Num),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Doc::Text),
    ];
    leaf.prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Doc::List),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|map| Doc::Map(map.into_iter().collect())),
        ]
    })
}

fn render(doc: &Doc, out: &mut String) {
    match doc {
        Doc::Null => out.push_str("null"),
        Doc::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        Doc::Num(value) => out.push_str(&value.to_string()),
        Doc::Text(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Doc::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(item, out);
            }
            out.push(']');
        }
        Doc::Map(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&format!("\"{key}\": "));
                render(value, out);
            }
            out.push('}');
        }
    }
}

fn assert_matches(node: &Node<'_>, doc: &Doc) {
    match (node, doc) {
        (Node::Null, Doc::Null) => {}
        (Node::Boolean(actual), Doc::Bool(expected)) => assert_eq!(actual, expected),
        (Node::Number(actual), Doc::Num(expected)) => {
            assert_eq!(actual.as_u64(), Some(*expected));
        }
        (Node::String(actual), Doc::Text(expected)) => {
            assert_eq!(actual.to_str().unwrap(), expected);
        }
        (Node::Array(actual), Doc::List(expected)) => {
            assert_eq!(actual.len(), expected.len());
            for (node, doc) in actual.iter().zip(expected) {
                assert_matches(node, doc);
            }
        }
        (Node::Object(actual), Doc::Map(expected)) => {
            assert_eq!(actual.len(), expected.len());
            for ((key, node), (expected_key, doc)) in actual.iter().zip(expected) {
                assert_eq!(key.to_str().unwrap(), expected_key);
                assert_matches(node, doc);
                assert_eq!(actual.get(expected_key).unwrap(), node);
            }
        }
        (node, doc) => panic!("shape mismatch: {:?} vs {doc:?}", node.kind()),
    }
}

proptest! {
    /// Rendered documents parse back to the generated structure
    #[test]
    fn generated_documents_parse(doc in doc_strategy()) {
        let mut text = String::new();
        render(&doc, &mut text);
        let root = parse(text.as_bytes()).unwrap();
        assert_matches(&root, &doc);
    }

    /// Parsing the same buffer twice yields identical trees
    #[test]
    fn parsing_is_deterministic(doc in doc_strategy()) {
        let mut text = String::new();
        render(&doc, &mut text);
        prop_assert_eq!(parse(text.as_bytes()).unwrap(), parse(text.as_bytes()).unwrap());
    }

    /// Tokens cover the input exactly, in order, without overlap
    #[test]
    fn tokens_are_ordered_slices(doc in doc_strategy()) {
        let mut text = String::new();
        render(&doc, &mut text);
        let stream = tokenize(text.as_bytes()).unwrap();

        let mut previous_end = 0;
        for token in stream.as_slice() {
            prop_assert!(token.offset() >= previous_end);
            prop_assert_eq!(token.slice(), &text.as_bytes()[token.offset()..token.end()]);
            previous_end = token.end();
        }
    }

    /// Arbitrary bytes either parse or fail with a bounded snippet
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Err(err) = parse(&bytes) {
            prop_assert!(err.to_string().chars().count() < 200);
            if let rawtree::Error::UnexpectedInput { snippet, .. }
            | rawtree::Error::UnmatchedString { snippet, .. }
            | rawtree::Error::InvalidLiteral { snippet, .. } = err
            {
                prop_assert!(snippet.chars().count() <= SNIPPET_LEN);
            }
        }
    }

    /// A trailing comma never adds an element
    #[test]
    fn trailing_comma_keeps_length(values in prop::collection::vec(any::<u32>(), 1..10)) {
        let body: Vec<String> = values.iter().map(u32::to_string).collect();
        let text = format!("[{},]", body.join(","));
        let root = parse(text.as_bytes()).unwrap();
        prop_assert_eq!(root.as_array().unwrap().len(), values.len());
    }
}

//! Structural agreement with serde_json
//!
//! For documents inside the accepted grammar, rawtree must see the same
//! shape serde_json does: same kinds, lengths, key order and scalar values.

use rawtree::{Node, parse};
use serde_json::Value;

const CORPUS: &[&str] = &[
    "{}",
    "[]",
    "null",
    "true",
    "0",
    "18446744073709551615",
    r#""plain""#,
    r#"[1, 2, 3]"#,
    r#"{"id": "42", "reason": "comment", "subject": {"title": "hi"}}"#,
    r#"[{"a": [true, false, null]}, {"b": {"c": {"d": []}}}]"#,
    r#"{"z": 1, "a": 2, "m": {"y": [], "b": {}}}"#,
    r#"[[[[[[[[[["deep"]]]]]]]]]]"#,
    r#"{"unicode": "héllo wörld", "empty": ""}"#,
    "  \n\t[ 1 ,\r\n 2 ]  ",
];

fn assert_same_shape(node: &Node<'_>, value: &Value) {
    match (node, value) {
        (Node::Null, Value::Null) => {}
        (Node::Boolean(actual), Value::Bool(expected)) => assert_eq!(actual, expected),
        (Node::Number(actual), Value::Number(expected)) => {
            assert_eq!(actual.as_u64(), expected.as_u64());
        }
        (Node::String(actual), Value::String(expected)) => {
            assert_eq!(actual.to_str().unwrap(), expected);
        }
        (Node::Array(actual), Value::Array(expected)) => {
            assert_eq!(actual.len(), expected.len());
            for (node, value) in actual.iter().zip(expected) {
                assert_same_shape(node, value);
            }
        }
        (Node::Object(actual), Value::Object(expected)) => {
            assert_eq!(actual.len(), expected.len());
            for (key, value) in expected {
                assert_same_shape(actual.get(key).unwrap(), value);
            }
        }
        (node, value) => panic!("kind mismatch: {} vs {value}", node.kind()),
    }
}

#[test]
fn test_corpus_matches_serde_json() {
    for document in CORPUS {
        let expected: Value = serde_json::from_str(document).unwrap();
        let root = parse(document.as_bytes())
            .unwrap_or_else(|err| panic!("failed on {document}: {err}"));
        assert_same_shape(&root, &expected);
    }
}

#[test]
fn test_key_order_is_document_order() {
    let document = r#"{"z": 1, "a": 2, "m": 3}"#;
    let root = parse(document.as_bytes()).unwrap();
    let keys: Vec<&str> = root
        .as_object()
        .unwrap()
        .keys()
        .map(|key| key.to_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_both_reject_malformed_documents() {
    for document in ["[1 2]", r#"{"a" 1}"#, "[", r#"{"a": }"#, r#""open"#, "nul"] {
        assert!(serde_json::from_str::<Value>(document).is_err());
        assert!(parse(document.as_bytes()).is_err(), "accepted {document}");
    }
}

#[test]
fn test_subset_rejections() {
    // valid JSON outside the accepted grammar
    for document in ["-1", "1.5", "1e3", "[0.25]"] {
        assert!(serde_json::from_str::<Value>(document).is_ok());
        assert!(parse(document.as_bytes()).is_err(), "accepted {document}");
    }
}

//! rawtree benchmarking suite
//!
//! Document generators shared by the benches. Generated text stays inside the
//! grammar rawtree accepts: integers only, no exponents or signs.

pub use rawtree::{Error, Node, Parser, Result};

/// Small notification object
pub const SMALL_JSON: &str = r#"{"id": "1", "reason": "mention", "unread": true}"#;

/// Notification with a nested subject and repository
pub const MEDIUM_JSON: &str = r#"{
  "id": "12345",
  "unread": false,
  "reason": "review_requested",
  "updated_at": "2024-01-15T12:00:00Z",
  "subject": {
    "title": "Fix lexer edge case",
    "url": "https://example.com/pulls/42",
    "type": "PullRequest"
  },
  "repository": {
    "id": 1296269,
    "name": "rawtree",
    "private": false,
    "owner": {"login": "octocat", "id": 1, "site_admin": null}
  }
}"#;

/// A feed of `count` notifications
pub fn notification_feed(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{
            "id": "{i}",
            "unread": {unread},
            "reason": "comment",
            "subject": {{"title": "Item {i}", "comments": {comments}}},
            "tags": ["tag1", "tag2", "tag3"]
        }}"#,
                unread = i % 2 == 0,
                comments = i * 3,
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// `depth` nested arrays around a single number
pub fn nested_arrays(depth: usize) -> String {
    format!("{}0{}", "[".repeat(depth), "]".repeat(depth))
}

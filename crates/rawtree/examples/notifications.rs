//! Walk a notification feed and log each field's kind
//!
//! Run with: `cargo run --example notifications -- path/to/feed.json`
//! Set `RUST_LOG=rawtree=debug` to see parser diagnostics.

use rawtree::{Array, Object, cast};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        error!("usage: notifications <feed.json>");
        std::process::exit(2);
    };

    let bytes = std::fs::read(&path)?;
    let root = match rawtree::parse(&bytes) {
        Ok(root) => root,
        Err(err) => {
            if let Some(offset) = err.offset() {
                let (line, column) = rawtree::Source::new(&bytes).line_column(offset);
                error!(%path, line, column, "{err}");
            } else {
                error!(%path, "{err}");
            }
            std::process::exit(1);
        }
    };

    let notifications = cast::<Array<'_>>(&root)?;
    info!(count = notifications.len(), "parsed notification feed");

    for (i, notification) in notifications.iter().enumerate() {
        let fields = cast::<Object<'_>>(notification)?;
        for (key, value) in fields {
            info!(notification = i, key = %key, kind = %value.kind());
        }
    }

    Ok(())
}

//! Tracing initialization.
//!
//! Generated modules go to stdout, so every log line goes to stderr.
//!
//! - `RUST_LOG=lang_casegen=debug`: one line per written fixture.
//! - `LANG_CASEGEN_LOG_TREE=1`: indented span tree instead of flat lines.

use std::sync::Once;

/// Set to any value to get hierarchical output from `tracing-tree`.
pub const LOG_TREE_ENV: &str = "LANG_CASEGEN_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let result = if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init()
        };

        if let Err(e) = result {
            eprintln!("warning: tracing already initialized: {e}");
        }
    });
}

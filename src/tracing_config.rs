//! Opt-in tracing for the traversal utilities.
//!
//! `TSV_LOG` (or `RUST_LOG`) holds the filter, `TSV_LOG_FORMAT` picks the
//! output: `text` (default), `tree` or `json`. Everything goes to stderr.
//!
//! ```bash
//! TSV_LOG=tsv_parser=debug TSV_LOG_FORMAT=tree cargo test
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognized is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `TSV_LOG` wins over `RUST_LOG`; `None` when neither is set.
fn filter_from_env() -> Option<EnvFilter> {
    match std::env::var("TSV_LOG") {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) => std::env::var("RUST_LOG")
            .is_ok()
            .then(EnvFilter::from_default_env),
    }
}

/// Install the global subscriber if logging was requested. Safe to call
/// more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let Some(filter) = filter_from_env() else {
        return;
    };
    let format = LogFormat::parse(&std::env::var("TSV_LOG_FORMAT").unwrap_or_default());

    let installed = match format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).try_init().is_ok()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).try_init().is_ok()
        }
    };

    if installed {
        tracing::debug!(?format, "tracing initialised");
    }
}

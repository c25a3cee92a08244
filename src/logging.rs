//! `tracing` subscriber setup shared by the binaries. `RUST_LOG` overrides
//! the configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to a file. The terminal UI owns stdout and stderr, so this is its only
/// sink. A subscriber installed earlier is left in place.
pub fn init_file(path: &Path, level: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Log to stderr, for headless runs.
pub fn init_stderr(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init();
}

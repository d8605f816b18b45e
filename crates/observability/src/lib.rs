//! Tracing/logging setup shared by theater binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging (tracing subscriber, `RUST_LOG` filter).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

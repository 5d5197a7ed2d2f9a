//! Tracing/logging setup shared by every Commerce Central process.

/// Initialize process-wide logging.
///
/// Output format comes from `COMMERCE_LOG_FORMAT` (`json` by default).
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{init_with, LogFormat};

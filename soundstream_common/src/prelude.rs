//! Prelude module for common re-exports.
//!
//! ```rust
//! use soundstream_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SegmentConfig, SharedConfig};

// ─── Shared Memory Defaults ─────────────────────────────────────────
pub use crate::consts::{DEFAULT_CONFIG_PATH, DEFAULT_SHM_MODE, DEFAULT_SHM_NAME};

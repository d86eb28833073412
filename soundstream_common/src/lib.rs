//! Soundstream Common Library
//!
//! This crate provides shared constants and configuration loading utilities
//! for all soundstream workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Default segment name, permission mode and paths
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Add to your `Cargo.toml` with alias for shorter imports:
//! ```toml
//! [dependencies]
//! ss = { package = "soundstream_common", path = "../soundstream_common" }
//! ```
//!
//! Then import:
//! ```rust
//! use soundstream_common::consts::*;
//! use soundstream_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod consts;
pub mod prelude;

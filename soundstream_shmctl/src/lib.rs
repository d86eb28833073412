//! # shmctl
//!
//! Shell front end for the soundstream shared-memory bridge: create or open a
//! segment, unlink it, or reset it the way the capture helper does at start-up
//! (unlink whatever is left over, then create-or-open read/write).
//!
//! ```bash
//! # Create the audio segment (defaults from /etc/soundstream/shmctl.toml)
//! shmctl open --create
//!
//! # Sole-creator check with explicit permissions
//! shmctl open --name /soundstream2_audio --create --exclusive --mode 0o600
//!
//! # Remove the name
//! shmctl unlink --name /soundstream2_audio
//!
//! # Helper start-up sequence
//! shmctl -v reset
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod error;

pub use args::{Args, Command, NameArgs, OpenArgs, ResetArgs};
pub use config::ShmctlConfig;
pub use error::CtlError;

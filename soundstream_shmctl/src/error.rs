//! Errors surfaced by `shmctl`

use soundstream_common::config::ConfigError;
use soundstream_shm::ShmError;
use thiserror::Error;

/// Anything that makes `shmctl` exit non-zero.
#[derive(Debug, Error)]
pub enum CtlError {
    /// Config file missing, unparsable or invalid.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// `--mode` is not an octal number.
    #[error("invalid mode {0:?}: expected octal such as 0o600 or 600")]
    ModeSyntax(String),

    /// Host call or local argument check failed.
    #[error(transparent)]
    Shm(#[from] ShmError),
}

impl CtlError {
    /// Host errno, when the failure came from the host.
    pub fn errno(&self) -> Option<soundstream_shm::Errno> {
        match self {
            Self::Shm(e) => e.errno(),
            _ => None,
        }
    }
}

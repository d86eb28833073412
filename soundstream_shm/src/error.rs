//! Error types for shared memory operations

use nix::errno::Errno;
use thiserror::Error;

/// Host call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShmOp {
    /// `shm_open`
    Open,
    /// `shm_unlink`
    Unlink,
    /// `close`
    Close,
}

impl ShmOp {
    /// Name of the underlying system call.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "shm_open",
            Self::Unlink => "shm_unlink",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for ShmOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during shared memory operations
///
/// Every host failure keeps the `errno` it was built from, see
/// [`ShmError::errno`].
#[derive(Error, Debug)]
pub enum ShmError {
    /// Name rejected, either locally (interior NUL) or by the host namespace
    #[error("Invalid segment name: {name:?}")]
    NameInvalid {
        /// Segment name
        name: String,
        /// Host error, `None` when rejected before reaching the host
        errno: Option<Errno>,
    },

    /// Exclusive create on a name that already exists
    #[error("Segment already exists: {name}")]
    AlreadyExists {
        /// Segment name
        name: String,
    },

    /// Segment not found
    #[error("Segment not found: {name}")]
    NotFound {
        /// Segment name
        name: String,
    },

    /// Permission denied
    #[error("Permission denied accessing segment: {name}")]
    PermissionDenied {
        /// Segment name
        name: String,
        /// `EACCES` or `EPERM`
        errno: Errno,
    },

    /// System-wide or per-process limits reached
    #[error("System resource exhausted opening {name}: {errno}")]
    ResourceExhausted {
        /// Segment name
        name: String,
        /// Host error
        errno: Errno,
    },

    /// Permission mode does not fit the host `mode_t`
    #[error("Permission mode {value:#o} does not fit in mode_t")]
    ModeOutOfRange {
        /// Value supplied by the caller
        value: i64,
    },

    /// Any other host failure, forwarded untranslated
    #[error("{op}({name}) failed: {errno}")]
    Os {
        /// Failing call
        op: ShmOp,
        /// Segment name, empty for descriptor operations
        name: String,
        /// Host error
        errno: Errno,
    },

    /// IO error
    #[error("IO error: {source}")]
    Io {
        /// Source IO error
        #[from]
        source: std::io::Error,
    },
}

impl ShmError {
    /// Classify a host error captured right after `op` failed on `name`.
    pub fn from_errno(op: ShmOp, name: &str, errno: Errno) -> Self {
        let name = name.to_string();
        match errno {
            Errno::EINVAL | Errno::ENAMETOOLONG => Self::NameInvalid {
                name,
                errno: Some(errno),
            },
            Errno::EEXIST => Self::AlreadyExists { name },
            Errno::ENOENT => Self::NotFound { name },
            Errno::EACCES | Errno::EPERM => Self::PermissionDenied { name, errno },
            Errno::EMFILE | Errno::ENFILE | Errno::ENOSPC | Errno::ENOMEM => {
                Self::ResourceExhausted { name, errno }
            }
            errno => Self::Os { op, name, errno },
        }
    }

    /// Host error behind this failure, if it came from the host.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::NameInvalid { errno, .. } => *errno,
            Self::AlreadyExists { .. } => Some(Errno::EEXIST),
            Self::NotFound { .. } => Some(Errno::ENOENT),
            Self::PermissionDenied { errno, .. }
            | Self::ResourceExhausted { errno, .. }
            | Self::Os { errno, .. } => Some(*errno),
            Self::Io { source } => source.raw_os_error().map(Errno::from_raw),
            Self::ModeOutOfRange { .. } => None,
        }
    }
}

/// Result type for shared memory operations
pub type ShmResult<T> = Result<T, ShmError>;

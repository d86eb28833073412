//! # Soundstream Shared Memory Bridge
//!
//! Two POSIX shared-memory primitives, creating/opening a named segment and
//! unlinking it, exposed twice:
//!
//! - **Typed API** ([`segment_open`], [`segment_unlink`]): host errors are
//!   captured at the call site into [`ShmError`], descriptors come back as an
//!   owned [`SegmentHandle`].
//! - **C ABI** ([`ffi::shm_open_bridge`], [`ffi::shm_unlink_bridge`]): the raw
//!   integer contract for callers that cannot call the host directly. Linked
//!   as a static library, declared in `include/soundstream_shm.h`.
//!
//! Mapping the segment, its layout and any synchronization over its contents
//! belong to the caller. Nothing here retries, reference-counts or cleans up
//! on exit.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use soundstream_shm::{OpenFlags, PermissionMode, SegmentName, segment_open, segment_unlink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let name = SegmentName::new("/soundstream2_audio")?;
//!
//! // Start from a clean name, then create.
//! let _ = segment_unlink(&name);
//! let handle = segment_open(&name, OpenFlags::create_or_open(), PermissionMode::from_bits(0o666))?;
//!
//! let file = std::fs::File::from(handle);
//! file.set_len(4096)?;
//! // map `file` with the mapping facility of your choice
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use soundstream_shm::{OpenFlags, PermissionMode, SegmentName, ShmError, segment_open};
//!
//! # fn main() -> Result<(), ShmError> {
//! let name = SegmentName::new("/soundstream2_audio")?;
//! match segment_open(&name, OpenFlags::create_exclusive(), PermissionMode::default()) {
//!     Ok(handle) => { /* sole creator */ }
//!     Err(ShmError::AlreadyExists { name }) => {
//!         eprintln!("'{}' is owned by another process", name);
//!     }
//!     Err(e) => eprintln!("open failed ({:?}): {}", e.errno(), e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Permission Mode Narrowing
//!
//! The host `mode_t` is narrower than a C `int` on some platforms.
//! [`PermissionMode::wrapping`] and the C ABI wrap silently, as a C cast
//! would; `PermissionMode::try_from(i64)` returns
//! [`ShmError::ModeOutOfRange`] instead.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ffi;
pub mod flags;
pub mod handle;
pub mod mode;
pub mod name;
pub mod platform;
pub mod segment;

pub use error::{ShmError, ShmOp, ShmResult};
pub use nix::errno::Errno;
pub use flags::OpenFlags;
pub use handle::SegmentHandle;
pub use mode::{MODE_BITS, PermissionMode};
pub use name::SegmentName;
pub use segment::{segment_open, segment_unlink};


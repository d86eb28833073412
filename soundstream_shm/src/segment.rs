//! Open and unlink, typed
//!
//! Each function issues exactly one host call and captures `errno` before
//! doing anything else. Exclusive creation stays a single
//! `shm_open(O_CREAT | O_EXCL)` so the host's atomicity carries through.

use crate::error::{ShmError, ShmOp, ShmResult};
use crate::flags::OpenFlags;
use crate::handle::SegmentHandle;
use crate::mode::PermissionMode;
use crate::name::SegmentName;
use crate::platform;
use nix::errno::Errno;
use std::os::fd::{FromRawFd, OwnedFd};
use tracing::debug;

/// Create or open `name` and return an owned handle.
///
/// `mode` only matters when `flags` contains [`OpenFlags::CREATE`] and the
/// object does not exist yet.
///
/// # Errors
///
/// The host's cause, classified by [`ShmError::from_errno`]: for example
/// [`ShmError::AlreadyExists`] for an exclusive create on a taken name, or
/// [`ShmError::NotFound`] when opening a missing name without `CREATE`.
pub fn segment_open(
    name: &SegmentName,
    flags: OpenFlags,
    mode: PermissionMode,
) -> ShmResult<SegmentHandle> {
    let raw = Errno::result(platform::shm_open(
        name.as_c_str(),
        flags.bits(),
        mode.bits(),
    ))
    .map_err(|errno| {
        debug!(%name, ?flags, %mode, %errno, "shm_open failed");
        ShmError::from_errno(ShmOp::Open, name.as_str(), errno)
    })?;

    debug!(%name, ?flags, %mode, fd = raw, "shm_open");
    // SAFETY: `raw` was just returned by shm_open and nothing else owns it.
    Ok(SegmentHandle::from(unsafe { OwnedFd::from_raw_fd(raw) }))
}

/// Remove `name` from the namespace.
///
/// Open handles stay valid; the object goes away with the last one.
/// A second unlink of the same name fails with [`ShmError::NotFound`].
pub fn segment_unlink(name: &SegmentName) -> ShmResult<()> {
    Errno::result(platform::shm_unlink(name.as_c_str()))
        .map_err(|errno| {
            debug!(%name, %errno, "shm_unlink failed");
            ShmError::from_errno(ShmOp::Unlink, name.as_str(), errno)
        })?;

    debug!(%name, "shm_unlink");
    Ok(())
}

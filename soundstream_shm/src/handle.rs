//! Owned descriptor for an open shared-memory object

use crate::error::{ShmError, ShmOp, ShmResult};
use nix::errno::Errno;
use std::fs::File;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, IntoRawFd, OwnedFd, RawFd};

/// Descriptor returned by [`segment_open`](crate::segment_open).
///
/// Closed on drop. Hand it to a mapping facility through [`AsFd`], or turn it
/// into a [`File`] to size and map it. Unlinking the name does not invalidate
/// the handle.
#[derive(Debug)]
pub struct SegmentHandle {
    fd: OwnedFd,
}

impl SegmentHandle {
    /// Duplicate the descriptor (`dup`).
    pub fn try_clone(&self) -> ShmResult<Self> {
        Ok(Self {
            fd: self.fd.try_clone()?,
        })
    }

    /// Close now and report the result instead of ignoring it on drop.
    pub fn close(self) -> ShmResult<()> {
        let raw = self.fd.into_raw_fd();
        // SAFETY: `raw` was owned by this handle and is not used afterwards.
        Errno::result(unsafe { libc::close(raw) })
            .map(drop)
            .map_err(|errno| ShmError::Os {
                op: ShmOp::Close,
                name: String::new(),
                errno,
            })
    }
}

impl From<OwnedFd> for SegmentHandle {
    fn from(fd: OwnedFd) -> Self {
        Self { fd }
    }
}

impl From<SegmentHandle> for OwnedFd {
    fn from(handle: SegmentHandle) -> Self {
        handle.fd
    }
}

impl From<SegmentHandle> for File {
    fn from(handle: SegmentHandle) -> Self {
        File::from(handle.fd)
    }
}

impl AsFd for SegmentHandle {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl AsRawFd for SegmentHandle {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl IntoRawFd for SegmentHandle {
    fn into_raw_fd(self) -> RawFd {
        self.fd.into_raw_fd()
    }
}

impl FromRawFd for SegmentHandle {
    unsafe fn from_raw_fd(fd: RawFd) -> Self {
        Self {
            // SAFETY: forwarded from the caller's contract.
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        }
    }
}

//! C ABI bridge
//!
//! For callers that cannot reach `shm_open`/`shm_unlink` themselves. Integer
//! contract of the C calls is kept: `-1` / non-zero on failure with the cause
//! left in `errno`, the mode narrowed to `mode_t` like a C cast. The returned
//! descriptor belongs to the caller.
//!
//! Declared in `include/soundstream_shm.h`.

use crate::mode::PermissionMode;
use crate::platform;
use libc::{c_char, c_int};
use nix::errno::Errno;
use std::ffi::CStr;

/// Create or open a shared-memory object.
///
/// Returns a descriptor, or `-1` with `errno` set. A null `name` fails with
/// `EINVAL`.
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn shm_open_bridge(name: *const c_char, oflag: c_int, mode: c_int) -> c_int {
    if name.is_null() {
        Errno::set_raw(libc::EINVAL);
        return -1;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let name = unsafe { CStr::from_ptr(name) };
    platform::shm_open(name, oflag, PermissionMode::wrapping(mode).bits())
}

/// Remove a shared-memory object's name.
///
/// Returns `0`, or `-1` with `errno` set. A null `name` fails with `EINVAL`.
///
/// # Safety
///
/// Same contract as [`shm_open_bridge`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn shm_unlink_bridge(name: *const c_char) -> c_int {
    if name.is_null() {
        Errno::set_raw(libc::EINVAL);
        return -1;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let name = unsafe { CStr::from_ptr(name) };
    platform::shm_unlink(name)
}

//! Linux / glibc / musl shared memory

use libc::{c_int, mode_t};
use std::ffi::CStr;

/// `shm_open(name, oflag, mode)`, result returned untouched.
///
/// glibc resolves the name under `/dev/shm`. Opening an empty name or a name
/// with an inner slash fails with `EINVAL`; `shm_unlink("")` fails with
/// `ENOENT`.
pub fn shm_open(name: &CStr, oflag: c_int, mode: mode_t) -> c_int {
    // SAFETY: `name` is NUL-terminated and outlives the call.
    unsafe { libc::shm_open(name.as_ptr(), oflag, mode) }
}

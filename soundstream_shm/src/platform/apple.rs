//! macOS shared memory

use libc::{c_int, c_uint, mode_t};
use std::ffi::CStr;

/// `shm_open(name, oflag, mode)`, result returned untouched.
///
/// The Darwin prototype is variadic, so `mode` is promoted to `unsigned int`
/// the way a C caller's default argument promotion would.
pub fn shm_open(name: &CStr, oflag: c_int, mode: mode_t) -> c_int {
    // SAFETY: `name` is NUL-terminated and outlives the call.
    unsafe { libc::shm_open(name.as_ptr(), oflag, c_uint::from(mode)) }
}

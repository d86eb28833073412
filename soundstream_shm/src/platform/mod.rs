//! Host shared-memory calls
//!
//! One function per host call. No logging and no allocation between the call
//! and the caller reading `errno`.

#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(not(target_vendor = "apple"))]
mod linux;

#[cfg(target_vendor = "apple")]
pub use apple::shm_open;
#[cfg(not(target_vendor = "apple"))]
pub use linux::shm_open;

use libc::c_int;
use std::ffi::CStr;

/// `shm_unlink(name)`, result returned untouched.
pub fn shm_unlink(name: &CStr) -> c_int {
    // SAFETY: `name` is NUL-terminated and outlives the call.
    unsafe { libc::shm_unlink(name.as_ptr()) }
}

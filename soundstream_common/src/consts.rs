//! System-wide constants for the soundstream workspace.
//!
//! Single source of truth for the segment name and permission bits shared by
//! the capture helper and the viewer. Imported by all crates.

use static_assertions::const_assert;

/// Name of the audio segment in the POSIX shared-memory namespace.
///
/// Leading slash, no further slashes: the portable form accepted by both
/// Linux and macOS.
pub const DEFAULT_SHM_NAME: &str = "/soundstream2_audio";

/// Permission bits applied when the audio segment is created.
pub const DEFAULT_SHM_MODE: u32 = 0o666;

/// Highest value the permission bits can take (`S_IRWXU|S_IRWXG|S_IRWXO` plus
/// setuid, setgid and sticky).
pub const MAX_PERMISSION_BITS: u32 = 0o7777;

/// Default configuration file for `shmctl`.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/soundstream/shmctl.toml";

const_assert!(DEFAULT_SHM_MODE <= MAX_PERMISSION_BITS);
const_assert!(DEFAULT_SHM_NAME.as_bytes()[0] == b'/');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_has_single_leading_slash() {
        assert!(DEFAULT_SHM_NAME.starts_with('/'));
        assert!(!DEFAULT_SHM_NAME[1..].contains('/'));
        assert!(DEFAULT_SHM_NAME.len() > 1);
    }

    #[test]
    fn default_mode_is_world_read_write() {
        assert_eq!(DEFAULT_SHM_MODE, 0o666);
    }
}

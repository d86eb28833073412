//! Permission mode applied when a segment is created
//!
//! Callers usually hold the mode in a native `int`; the host wants `mode_t`
//! (32 bits on Linux, 16 on macOS). [`PermissionMode::wrapping`] narrows
//! like a C cast. [`PermissionMode::try_from`] refuses values that do not fit.

use crate::error::{ShmError, ShmResult};
use libc::{c_int, mode_t};
use static_assertions::{assert_eq_size, const_assert};
use std::fmt;

/// Width of the host `mode_t` in bits.
pub const MODE_BITS: u32 = mode_t::BITS;

const_assert!(MODE_BITS >= 16);
assert_eq_size!(PermissionMode, mode_t);

/// Permission bits for a newly created segment. Ignored when the segment
/// already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PermissionMode(mode_t);

impl PermissionMode {
    /// Use the bits exactly.
    pub const fn from_bits(bits: mode_t) -> Self {
        Self(bits)
    }

    /// Narrow a C `int`, wrapping modulo `2^MODE_BITS`.
    pub const fn wrapping(value: c_int) -> Self {
        Self(value as mode_t)
    }

    /// Narrow any integer, wrapping modulo `2^MODE_BITS`.
    pub const fn wrapping_from_i64(value: i64) -> Self {
        Self(value as mode_t)
    }

    /// Raw `mode_t` value.
    pub const fn bits(self) -> mode_t {
        self.0
    }
}

impl Default for PermissionMode {
    fn default() -> Self {
        Self(ss::consts::DEFAULT_SHM_MODE as mode_t)
    }
}

impl TryFrom<i64> for PermissionMode {
    type Error = ShmError;

    fn try_from(value: i64) -> ShmResult<Self> {
        mode_t::try_from(value)
            .map(Self)
            .map_err(|_| ShmError::ModeOutOfRange { value })
    }
}

impl From<PermissionMode> for mode_t {
    fn from(mode: PermissionMode) -> Self {
        mode.0
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#o}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(PermissionMode::default().bits(), 0o666);
        assert_eq!(PermissionMode::default().to_string(), "0o666");
    }

    #[test]
    fn test_in_range_values_are_exact() {
        assert_eq!(PermissionMode::wrapping(0o600).bits(), 0o600);
        assert_eq!(PermissionMode::try_from(0o644_i64).unwrap().bits(), 0o644);
    }

    #[test]
    fn test_negative_wraps() {
        assert_eq!(PermissionMode::wrapping(-1).bits(), mode_t::MAX);
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let too_big = i64::from(mode_t::MAX) + 1;
        assert!(matches!(
            PermissionMode::try_from(too_big),
            Err(ShmError::ModeOutOfRange { value }) if value == too_big
        ));
        assert!(PermissionMode::try_from(-1_i64).is_err());
        assert!(PermissionMode::try_from(i64::from(mode_t::MAX)).is_ok());
    }

    proptest! {
        #[test]
        fn wrapping_matches_modulo(value in any::<i64>()) {
            let modulus = 1_i128 << MODE_BITS;
            let reduced = (i128::from(value)).rem_euclid(modulus) as i64;
            prop_assert_eq!(
                PermissionMode::wrapping_from_i64(value),
                PermissionMode::wrapping_from_i64(reduced)
            );
            prop_assert_eq!(i64::from(PermissionMode::wrapping_from_i64(value).bits()), reduced);
        }

        #[test]
        fn int_and_i64_wrapping_agree(value in any::<c_int>()) {
            prop_assert_eq!(
                PermissionMode::wrapping(value),
                PermissionMode::wrapping_from_i64(i64::from(value))
            );
        }

        #[test]
        fn strict_accepts_exactly_the_representable_range(value in any::<i64>()) {
            let fits = value >= 0 && value <= i64::from(mode_t::MAX);
            prop_assert_eq!(PermissionMode::try_from(value).is_ok(), fits);
        }
    }
}

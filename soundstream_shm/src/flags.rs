//! Open flags forwarded to `shm_open`

use bitflags::bitflags;
use libc::c_int;

bitflags! {
    /// `O_*` bits for `shm_open`.
    ///
    /// Values come from the host headers. Bits without a name here are kept
    /// as-is and forwarded; nothing is validated.
    ///
    /// Read-only access is the absence of [`OpenFlags::READ_WRITE`]
    /// (`O_RDONLY` is zero), see [`OpenFlags::read_only`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: c_int {
        /// `O_RDWR`
        const READ_WRITE = libc::O_RDWR;
        /// `O_CREAT`, create if absent
        const CREATE = libc::O_CREAT;
        /// `O_EXCL`, fail if present (with `CREATE`)
        const EXCLUSIVE = libc::O_EXCL;
        /// `O_TRUNC`, truncate to zero length on open
        const TRUNCATE = libc::O_TRUNC;

        const _ = !0;
    }
}

impl OpenFlags {
    /// Open an existing segment for reading only.
    pub const fn read_only() -> Self {
        Self::empty()
    }

    /// Create if absent, otherwise open; read/write.
    pub const fn create_or_open() -> Self {
        Self::READ_WRITE.union(Self::CREATE)
    }

    /// Create a new segment, failing if the name is taken; read/write.
    pub const fn create_exclusive() -> Self {
        Self::create_or_open().union(Self::EXCLUSIVE)
    }

    /// Wrap raw `oflag` bits from a caller, unknown bits included.
    pub const fn from_raw(bits: c_int) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether this request can create a new object.
    pub const fn creates(self) -> bool {
        self.contains(Self::CREATE)
    }
}

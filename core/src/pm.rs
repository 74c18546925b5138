//! # PM Table Metadata
//!
//! The power-management table is a block of firmware telemetry whose layout
//! depends on its version. The driver publishes the version and byte size
//! as raw native-endian words; both must be nonzero for tables to be usable.

use core::fmt;

/// Size of the raw `pm_table_version` and `pm_table_size` values
pub const PM_WORD_SIZE: usize = 4;

/// PM table version and size as discovered at init
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PmTableInfo {
    /// Driver-defined table version
    pub version: u32,
    /// Table size in bytes
    pub size: u32,
}

impl PmTableInfo {
    /// Metadata for a platform without PM tables
    pub const NONE: Self = Self { version: 0, size: 0 };

    /// Create from raw values
    #[inline]
    pub const fn new(version: u32, size: u32) -> Self {
        Self { version, size }
    }

    /// Decode the raw contents of the metadata files
    #[inline]
    pub const fn from_raw(version: [u8; PM_WORD_SIZE], size: [u8; PM_WORD_SIZE]) -> Self {
        Self {
            version: u32::from_ne_bytes(version),
            size: u32::from_ne_bytes(size),
        }
    }

    /// Both version and size are known
    #[inline]
    pub const fn is_supported(&self) -> bool {
        self.version != 0 && self.size != 0
    }

    /// Size in bytes as a buffer length
    #[inline]
    pub const fn len(&self) -> usize {
        self.size as usize
    }

    /// Table has no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl fmt::Display for PmTableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version 0x{:08x}, {} bytes", self.version, self.size)
    }
}

//! # Driver Files
//!
//! The pseudo-files the driver creates under its sysfs directory.

use core::fmt;

use crate::channel::Access;

/// A driver pseudo-file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// Firmware version text
    Version,
    /// Processor codename text
    Codename,
    /// Raw PM table version (optional)
    PmTableVersion,
    /// Raw PM table size (required with a version)
    PmTableSize,
    /// PM table contents
    PmTable,
    /// SMN address/value register
    Smn,
    /// SMU argument block
    SmuArgs,
    /// SMU opcode/status register
    SmuCmd,
}

impl Node {
    /// All driver files
    pub const ALL: [Node; 8] = [
        Self::Version,
        Self::Codename,
        Self::PmTableVersion,
        Self::PmTableSize,
        Self::PmTable,
        Self::Smn,
        Self::SmuArgs,
        Self::SmuCmd,
    ];

    /// File name inside the driver directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Codename => "codename",
            Self::PmTableVersion => "pm_table_version",
            Self::PmTableSize => "pm_table_size",
            Self::PmTable => "pm_table",
            Self::Smn => "smn",
            Self::SmuArgs => "smu_args",
            Self::SmuCmd => "smu_cmd",
        }
    }

    /// Mode the session opens this file with
    pub const fn access(self) -> Access {
        match self {
            Self::Smn | Self::SmuArgs | Self::SmuCmd => Access::ReadWrite,
            _ => Access::ReadOnly,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

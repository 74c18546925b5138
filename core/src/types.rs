//! # Driver Channels
//!
//! The request channels a session may hold open.

bitflags::bitflags! {
    /// Set of open request channels
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Channels: u32 {
        /// `smn` (read-write)
        const SMN = 1 << 0;
        /// `smu_cmd` (read-write)
        const SMU_CMD = 1 << 1;
        /// `smu_args` (read-write)
        const SMU_ARGS = 1 << 2;
        /// `pm_table` (read-only)
        const PM_TABLE = 1 << 3;
        /// Channels every initialized session holds
        const REQUIRED = Self::SMN.bits() | Self::SMU_CMD.bits() | Self::SMU_ARGS.bits();
    }
}

//! # SMU Error Handling
//!
//! Return codes shared by the driver and the client.
//!
//! The driver reports the outcome of an SMU command as a raw 32-bit status
//! word. The client reuses the same code space for its own failures
//! (missing driver, short transfers, wrong buffer sizes), so a single closed
//! table describes every outcome a caller can observe.

use core::fmt;

// =============================================================================
// RETURN CODE
// =============================================================================

/// Outcome codes, using the driver's raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ReturnCode {
    /// Success
    Ok = 0x01,
    /// Generic failure
    Failed = 0xFF,
    /// Opcode not recognized by the SMU
    UnknownCmd = 0xFE,
    /// Command rejected: a prerequisite is unmet
    CmdRejectedPrereq = 0xFD,
    /// Command rejected: the SMU is busy
    CmdRejectedBusy = 0xFC,
    /// Command timed out inside the driver
    CommandTimeout = 0xFB,
    /// Invalid argument
    InvalidArgument = 0xFA,
    /// Unsupported platform or feature
    Unsupported = 0xF9,
    /// Destination buffer has the wrong size
    InsufficientSize = 0xF8,
    /// Memory-mapping I/O error
    MappedError = 0xF7,
    /// Driver not loaded or faulted
    DriverNotPresent = 0xF0,
    /// Read or write on a driver file failed or was short
    RwError = 0xE9,
}

impl ReturnCode {
    /// All codes, in table order
    pub const ALL: [ReturnCode; 12] = [
        Self::Ok,
        Self::Failed,
        Self::UnknownCmd,
        Self::CmdRejectedPrereq,
        Self::CmdRejectedBusy,
        Self::CommandTimeout,
        Self::InvalidArgument,
        Self::Unsupported,
        Self::InsufficientSize,
        Self::MappedError,
        Self::DriverNotPresent,
        Self::RwError,
    ];

    /// Decode a raw status word
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0x01 => Some(Self::Ok),
            0xFF => Some(Self::Failed),
            0xFE => Some(Self::UnknownCmd),
            0xFD => Some(Self::CmdRejectedPrereq),
            0xFC => Some(Self::CmdRejectedBusy),
            0xFB => Some(Self::CommandTimeout),
            0xFA => Some(Self::InvalidArgument),
            0xF9 => Some(Self::Unsupported),
            0xF8 => Some(Self::InsufficientSize),
            0xF7 => Some(Self::MappedError),
            0xF0 => Some(Self::DriverNotPresent),
            0xE9 => Some(Self::RwError),
            _ => None,
        }
    }

    /// Raw status word
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Failed => "Failed",
            Self::UnknownCmd => "Unknown Command",
            Self::CmdRejectedPrereq => "Command Rejected - Prerequisite Unmet",
            Self::CmdRejectedBusy => "Command Rejected - Busy",
            Self::CommandTimeout => "Command Timed Out",
            Self::InvalidArgument => "Invalid Argument Specified",
            Self::Unsupported => "Unsupported Platform Or Feature",
            Self::InsufficientSize => "Insufficient Buffer Size Provided",
            Self::MappedError => "Memory Mapping I/O Error",
            Self::DriverNotPresent => "SMU Driver Not Present Or Fault",
            Self::RwError => "Read Or Write Error",
        }
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe any raw status word, including ones outside the table
pub const fn return_code_to_str(raw: u32) -> &'static str {
    match ReturnCode::from_raw(raw) {
        Some(code) => code.description(),
        None => "Unspecified Error",
    }
}

// =============================================================================
// RESULT TYPE
// =============================================================================

/// SMU Result type alias
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Every non-success outcome
///
/// Driver statuses are carried through without reinterpretation: a status
/// word the table doesn't name surfaces as [`Error::Unknown`] with its raw
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    // =========================================================================
    // Driver-reported
    // =========================================================================
    /// Generic failure
    Failed,
    /// Opcode not recognized by the SMU
    UnknownCmd,
    /// Command rejected: a prerequisite is unmet
    CmdRejectedPrereq,
    /// Command rejected: the SMU is busy
    CmdRejectedBusy,
    /// Command timed out inside the driver
    CommandTimeout,
    /// Invalid argument
    InvalidArgument,
    /// Status word outside the known table
    Unknown(u32),

    // =========================================================================
    // Client-side
    // =========================================================================
    /// Unsupported platform or feature
    Unsupported,
    /// Destination buffer has the wrong size
    InsufficientSize,
    /// Memory-mapping I/O error
    MappedError,
    /// Driver not loaded or faulted
    DriverNotPresent,
    /// Read or write on a driver file failed or was short
    RwError,
}

impl Error {
    /// Interpret a raw status word; `None` means success
    pub const fn from_status(raw: u32) -> Option<Self> {
        match ReturnCode::from_raw(raw) {
            Some(code) => Self::from_code(code),
            None => Some(Self::Unknown(raw)),
        }
    }

    /// Error for a known code; `None` for `ReturnCode::Ok`
    pub const fn from_code(code: ReturnCode) -> Option<Self> {
        Some(match code {
            ReturnCode::Ok => return None,
            ReturnCode::Failed => Self::Failed,
            ReturnCode::UnknownCmd => Self::UnknownCmd,
            ReturnCode::CmdRejectedPrereq => Self::CmdRejectedPrereq,
            ReturnCode::CmdRejectedBusy => Self::CmdRejectedBusy,
            ReturnCode::CommandTimeout => Self::CommandTimeout,
            ReturnCode::InvalidArgument => Self::InvalidArgument,
            ReturnCode::Unsupported => Self::Unsupported,
            ReturnCode::InsufficientSize => Self::InsufficientSize,
            ReturnCode::MappedError => Self::MappedError,
            ReturnCode::DriverNotPresent => Self::DriverNotPresent,
            ReturnCode::RwError => Self::RwError,
        })
    }

    /// Matching return code, if the status is a known one
    pub const fn code(self) -> Option<ReturnCode> {
        match self {
            Self::Failed => Some(ReturnCode::Failed),
            Self::UnknownCmd => Some(ReturnCode::UnknownCmd),
            Self::CmdRejectedPrereq => Some(ReturnCode::CmdRejectedPrereq),
            Self::CmdRejectedBusy => Some(ReturnCode::CmdRejectedBusy),
            Self::CommandTimeout => Some(ReturnCode::CommandTimeout),
            Self::InvalidArgument => Some(ReturnCode::InvalidArgument),
            Self::Unknown(_) => None,
            Self::Unsupported => Some(ReturnCode::Unsupported),
            Self::InsufficientSize => Some(ReturnCode::InsufficientSize),
            Self::MappedError => Some(ReturnCode::MappedError),
            Self::DriverNotPresent => Some(ReturnCode::DriverNotPresent),
            Self::RwError => Some(ReturnCode::RwError),
        }
    }

    /// Raw status word
    pub const fn raw(self) -> u32 {
        match self {
            Self::Unknown(raw) => raw,
            other => match other.code() {
                Some(code) => code.raw(),
                None => 0,
            },
        }
    }

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        return_code_to_str(self.raw())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "Unspecified Error (status {:#04x})", raw),
            other => f.write_str(other.description()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl TryFrom<ReturnCode> for Error {
    type Error = ReturnCode;

    /// Fails with the code itself when it is `Ok`
    fn try_from(code: ReturnCode) -> core::result::Result<Self, ReturnCode> {
        Error::from_code(code).ok_or(code)
    }
}

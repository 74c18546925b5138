//! # Firmware Version
//!
//! The driver publishes the SMU firmware version as `"MAJOR.MINOR.REV\n"`.
//! The client keeps it packed into one word: `major << 24 | minor << 8 | rev`.

use core::fmt;

use crate::error::{Error, Result};

/// Longest version text the driver emits: `"255.255.255\n"`
pub const MAX_VERSION_LEN: usize = 12;

/// Packed SMU firmware version
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SmuVersion(u32);

impl SmuVersion {
    /// Pack a version from its components
    #[inline]
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self((major as u32) << 24 | (minor as u32) << 8 | revision as u32)
    }

    /// Wrap an already packed value
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packed value
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Major component
    #[inline]
    pub const fn major(self) -> u32 {
        self.0 >> 24
    }

    /// Minor component
    #[inline]
    pub const fn minor(self) -> u32 {
        (self.0 >> 8) & 0xFFFF
    }

    /// Revision component
    #[inline]
    pub const fn revision(self) -> u32 {
        self.0 & 0xFF
    }

    /// Parse the contents of the driver's `version` file
    ///
    /// Three dot-separated decimal integers, each optionally preceded by
    /// whitespace. Anything after the revision (normally `'\n'`) is ignored.
    /// A missing component or one above 255 is a read error.
    ///
    /// Stricter than C `sscanf("%d.%d.%d")`: signs are rejected and values
    /// do not wrap into the packed fields.
    pub fn parse(text: &[u8]) -> Result<Self> {
        let (major, rest) = parse_component(text)?;
        let rest = rest.strip_prefix(b".").ok_or(Error::RwError)?;
        let (minor, rest) = parse_component(rest)?;
        let rest = rest.strip_prefix(b".").ok_or(Error::RwError)?;
        let (revision, _) = parse_component(rest)?;

        Ok(Self::new(major, minor, revision))
    }
}

/// Parse one `%d` field, returning the value and the unconsumed tail
fn parse_component(text: &[u8]) -> Result<(u8, &[u8])> {
    let start = text.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let text = &text[start..];

    let digits = text.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(Error::RwError);
    }

    let mut value: u32 = 0;
    for &b in &text[..digits] {
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }

    let value = u8::try_from(value).map_err(|_| Error::RwError)?;
    Ok((value, &text[digits..]))
}

impl fmt::Debug for SmuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SmuVersion({}, 0x{:08x})", self, self.0)
    }
}

impl fmt::Display for SmuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.revision())
    }
}

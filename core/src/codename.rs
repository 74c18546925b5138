//! # Processor Codenames
//!
//! The driver identifies the processor family through a small integer
//! exposed in its `codename` file. The numbering is fixed by the driver.

use core::fmt;

use crate::error::{Error, Result};

/// Processor family reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u32)]
pub enum Codename {
    /// Not detected; never valid for an initialized session
    #[default]
    Undefined = 0,
    /// Colfax (Threadripper 2000)
    Colfax = 1,
    /// Renoir (Ryzen 4000 APU)
    Renoir = 2,
    /// Picasso (Ryzen 3000 APU)
    Picasso = 3,
    /// Matisse (Ryzen 3000)
    Matisse = 4,
    /// Threadripper
    Threadripper = 5,
    /// Castle Peak (Threadripper 3000)
    CastlePeak = 6,
    /// Raven Ridge (Ryzen 2000 APU)
    RavenRidge = 7,
    /// Raven Ridge 2
    RavenRidge2 = 8,
    /// Summit Ridge (Ryzen 1000)
    SummitRidge = 9,
    /// Pinnacle Ridge (Ryzen 2000)
    PinnacleRidge = 10,
}

impl Codename {
    /// One past the last valid raw value
    pub const COUNT: u32 = 11;

    /// Decode a raw codename
    ///
    /// Only values strictly between `Undefined` and [`Self::COUNT`] are
    /// accepted; anything else is `Unsupported`.
    pub const fn from_raw(raw: u32) -> Result<Self> {
        match raw {
            1 => Ok(Self::Colfax),
            2 => Ok(Self::Renoir),
            3 => Ok(Self::Picasso),
            4 => Ok(Self::Matisse),
            5 => Ok(Self::Threadripper),
            6 => Ok(Self::CastlePeak),
            7 => Ok(Self::RavenRidge),
            8 => Ok(Self::RavenRidge2),
            9 => Ok(Self::SummitRidge),
            10 => Ok(Self::PinnacleRidge),
            _ => Err(Error::Unsupported),
        }
    }

    /// Raw driver value
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Colfax => "Colfax",
            Self::Renoir => "Renoir",
            Self::Picasso => "Picasso",
            Self::Matisse => "Matisse",
            Self::Threadripper => "Thread Ripper",
            Self::CastlePeak => "CastlePeak",
            Self::RavenRidge => "Raven Ridge",
            Self::RavenRidge2 => "Raven Ridge 2",
            Self::SummitRidge => "Summit Ridge",
            Self::PinnacleRidge => "Pinnacle Ridge",
        }
    }

    /// Parse the ASCII contents of the `codename` file
    ///
    /// Follows `atoi`: leading whitespace, an optional sign, then digits up
    /// to the first non-digit. Text without digits parses as 0, which is
    /// rejected as `Unsupported` like any other out-of-range value.
    pub fn parse(text: &[u8]) -> Result<Self> {
        let mut rest = text;
        while let [b, tail @ ..] = rest {
            if !b.is_ascii_whitespace() {
                break;
            }
            rest = tail;
        }

        let negative = match rest {
            [b'-', tail @ ..] => {
                rest = tail;
                true
            },
            [b'+', tail @ ..] => {
                rest = tail;
                false
            },
            _ => false,
        };

        let mut value: u32 = 0;
        for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
            value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
        }

        if negative && value != 0 {
            return Err(Error::Unsupported);
        }

        Self::from_raw(value)
    }
}

impl fmt::Display for Codename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! # SMU Core
//!
//! Protocol vocabulary for the `ryzen_smu` kernel driver.
//!
//! The driver exposes a handful of sysfs pseudo-files, each behaving as a
//! small fixed-size register. This crate defines what travels through them:
//! return codes, the processor codename table, the packed firmware version,
//! the six-word SMU argument payload and the SMN request encodings. It does
//! no I/O; see `smu-sysfs` for the session that talks to the files.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          smu-core                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────────┐  │
//! │  │   Error     │  │  Codename   │  │   Wire encodings     │  │
//! │  │ (ReturnCode)│  │  Version    │  │ (SmuArgs, SMN, PM)   │  │
//! │  └─────────────┘  └─────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(any(feature = "std", test))]
extern crate std;

// =============================================================================
// MODULE EXPORTS
// =============================================================================

pub mod args;
pub mod codename;
pub mod error;
pub mod pm;
pub mod smn;
pub mod types;
pub mod version;

// Re-exports for convenience
pub use args::{SmuArgs, SMU_ARG_COUNT, SMU_ARGS_SIZE};
pub use codename::Codename;
pub use error::{return_code_to_str, Error, Result, ReturnCode};
pub use pm::PmTableInfo;
pub use types::Channels;
pub use version::SmuVersion;

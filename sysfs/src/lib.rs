//! # SMU Sysfs Client
//!
//! Session and request paths over the `ryzen_smu` driver's sysfs files.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Session                             │
//! │                                                              │
//! │   probe (init only)     version / codename / pm_table_*      │
//! │                                                              │
//! │  ┌──────────────┐  ┌────────────────────┐  ┌─────────────┐   │
//! │  │  SMN lock    │  │   command lock     │  │  PM lock    │   │
//! │  │    smn       │  │ smu_args + smu_cmd │  │  pm_table   │   │
//! │  └──────────────┘  └────────────────────┘  └─────────────┘   │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ Backend::open
//!                    /sys/kernel/ryzen_smu_drv/*
//! ```
//!
//! Every transfer rewinds its file and moves one fixed-size block. A short
//! read or write is reported as [`Error::RwError`]; nothing is retried.
//!
//! ## Example
//!
//! ```no_run
//! use smu_sysfs::{Config, Session, SmuArgs};
//!
//! let session = Session::open(&Config::default())?;
//! println!("SMU {} on {}", session.version(), session.codename());
//!
//! let value = session.read_smn(0x0005_9800)?;
//! let mut args = SmuArgs::with_arg(value);
//! session.send_command(0x02, &mut args)?;
//! # Ok::<(), smu_sysfs::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod command;
pub mod config;
pub mod node;
pub mod pm_table;
pub mod probe;
pub mod session;
pub mod smn;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::{Access, Backend, Channel, Handle, SysfsBackend};
pub use config::{Config, DEFAULT_DRIVER_PATH};
pub use node::Node;
pub use pm_table::PmTableSnapshot;
pub use probe::{probe, Capabilities};
pub use session::Session;

pub use smu_core::{
    return_code_to_str, Channels, Codename, Error, PmTableInfo, Result, ReturnCode, SmuArgs,
    SmuVersion,
};

//! # Capability Probe
//!
//! Reads the driver's descriptive files once, before any request channel is
//! opened:
//!
//! 1. `version` must exist, and parse as `MAJOR.MINOR.REV`
//! 2. `codename` must exist, and name a supported processor family
//! 3. `pm_table_version` is optional; without it the platform has no PM tables
//! 4. `pm_table_size` must exist whenever a table version does

use smu_core::pm::PM_WORD_SIZE;
use smu_core::version::MAX_VERSION_LEN;
use smu_core::{Codename, Error, PmTableInfo, Result, SmuVersion};

use crate::channel::{open_handle, Backend};
use crate::node::Node;

/// Bytes read from the `codename` file
const CODENAME_LEN: usize = 3;

/// What the driver reports about the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Packed SMU firmware version
    pub version: SmuVersion,
    /// Processor family
    pub codename: Codename,
    /// PM table metadata; zeroed when the platform has none
    pub pm_table: PmTableInfo,
}

impl Capabilities {
    /// PM tables can be read
    pub const fn pm_tables_supported(&self) -> bool {
        self.pm_table.is_supported()
    }
}

/// Probe the driver through `backend`
pub fn probe<B: Backend + ?Sized>(backend: &B) -> Result<Capabilities> {
    let version = read_version(backend)?;
    let codename = read_codename(backend)?;
    let pm_table = read_pm_table_info(backend)?;

    Ok(Capabilities {
        version,
        codename,
        pm_table,
    })
}

fn read_version<B: Backend + ?Sized>(backend: &B) -> Result<SmuVersion> {
    let mut handle = open_handle(backend, Node::Version).map_err(|err| {
        log::debug!("SMU: cannot open {}: {}", Node::Version, err);
        Error::DriverNotPresent
    })?;

    let mut text = [0u8; MAX_VERSION_LEN];
    let n = handle.read_some(&mut text)?;

    SmuVersion::parse(&text[..n]).map_err(|err| {
        log::warn!("SMU: malformed version {:?}", String::from_utf8_lossy(&text[..n]));
        err
    })
}

fn read_codename<B: Backend + ?Sized>(backend: &B) -> Result<Codename> {
    let mut handle = open_handle(backend, Node::Codename).map_err(|err| {
        log::debug!("SMU: cannot open {}: {}", Node::Codename, err);
        Error::DriverNotPresent
    })?;

    let mut text = [0u8; CODENAME_LEN];
    let n = handle.read_some(&mut text)?;

    Codename::parse(&text[..n]).map_err(|err| {
        log::warn!(
            "SMU: unsupported processor codename {:?}",
            String::from_utf8_lossy(&text[..n]).trim()
        );
        err
    })
}

fn read_pm_table_info<B: Backend + ?Sized>(backend: &B) -> Result<PmTableInfo> {
    let mut version_handle = match open_handle(backend, Node::PmTableVersion) {
        Ok(handle) => handle,
        Err(err) => {
            log::debug!("SMU: no {} ({}), PM tables unsupported", Node::PmTableVersion, err);
            return Ok(PmTableInfo::NONE);
        },
    };

    let mut version = [0u8; PM_WORD_SIZE];
    version_handle.read_block(&mut version)?;
    drop(version_handle);

    let mut size_handle = open_handle(backend, Node::PmTableSize).map_err(|err| {
        log::warn!("SMU: {} present but {} missing: {}", Node::PmTableVersion, Node::PmTableSize, err);
        Error::RwError
    })?;

    let mut size = [0u8; PM_WORD_SIZE];
    size_handle.read_block(&mut size)?;

    Ok(PmTableInfo::from_raw(version, size))
}

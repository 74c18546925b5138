//! # Session
//!
//! A session owns the driver's request channels and the capabilities read at
//! init. It starts zeroed, is populated by one [`Session::init`] call and is
//! torn down by [`Session::free`] or by dropping it.
//!
//! Each request path serializes through its own lock:
//!
//! | Lock      | Files                    |
//! |-----------|--------------------------|
//! | `smn`     | `smn`                    |
//! | `command` | `smu_args` + `smu_cmd`   |
//! | `pm`      | `pm_table`               |
//!
//! Paths don't block one another. Holders can block inside the driver, so a
//! contended waiter yields to the scheduler between attempts. Capability
//! fields are only written under `&mut self`, so readers need no lock.

use smu_core::{Channels, Codename, Error, PmTableInfo, Result, SmuVersion};
use spin::relax::Yield;

use crate::channel::{open_handle, Backend, Handle, SysfsBackend};
use crate::config::Config;
use crate::node::Node;
use crate::probe::probe;

/// Channel lock that yields the thread while contended
pub(crate) type Mutex<T> = spin::mutex::Mutex<T, Yield>;

// =============================================================================
// COMMAND CHANNEL
// =============================================================================

/// The two files that make up one SMU command transaction
#[derive(Debug, Default)]
pub(crate) struct CommandChannel {
    /// `smu_cmd`
    pub(crate) cmd: Option<Handle>,
    /// `smu_args`
    pub(crate) args: Option<Handle>,
}

// =============================================================================
// SESSION
// =============================================================================

/// Client session for the SMU driver
#[derive(Debug)]
pub struct Session {
    /// Packed firmware version
    version: SmuVersion,
    /// Processor family
    codename: Codename,
    /// PM table version and size
    pm_table: PmTableInfo,
    /// `smn` channel
    pub(crate) smn: Mutex<Option<Handle>>,
    /// `smu_cmd` and `smu_args` channels
    pub(crate) command: Mutex<CommandChannel>,
    /// `pm_table` channel, open only when PM tables are supported
    pub(crate) pm: Mutex<Option<Handle>>,
    /// Set once init completes
    initialized: bool,
}

static_assertions::assert_impl_all!(Session: Send, Sync);

impl Session {
    /// Zeroed, uninitialized session
    pub fn new() -> Self {
        Self {
            version: SmuVersion::default(),
            codename: Codename::Undefined,
            pm_table: PmTableInfo::NONE,
            smn: Mutex::new(None),
            command: Mutex::new(CommandChannel::default()),
            pm: Mutex::new(None),
            initialized: false,
        }
    }

    /// Open a session on the driver described by `config`
    ///
    /// On failure every channel opened so far is closed again.
    pub fn open(config: &Config) -> Result<Self> {
        let mut session = Self::new();
        session.init(&SysfsBackend::new(config.clone()))?;
        Ok(session)
    }

    /// Probe the driver and open the request channels
    ///
    /// The session is zeroed first. Probe errors are returned before any
    /// request channel is opened; a channel that fails to open yields
    /// `RwError`. Channels opened before a failure stay in the session until
    /// [`Session::free`] or drop.
    pub fn init<B: Backend + ?Sized>(&mut self, backend: &B) -> Result<()> {
        self.free();

        let caps = probe(backend)?;
        self.version = caps.version;
        self.codename = caps.codename;
        self.pm_table = caps.pm_table;

        *self.smn.get_mut() = Some(open_channel(backend, Node::Smn)?);

        let command = self.command.get_mut();
        command.cmd = Some(open_channel(backend, Node::SmuCmd)?);
        command.args = Some(open_channel(backend, Node::SmuArgs)?);

        if self.pm_tables_supported() {
            *self.pm.get_mut() = Some(open_channel(backend, Node::PmTable)?);
        }

        self.initialized = true;

        log::info!(
            "SMU: {} firmware {} ({:#010x})",
            self.codename,
            self.version,
            self.version.raw()
        );
        if self.pm_tables_supported() {
            log::info!("SMU: PM table {}", self.pm_table);
        } else {
            log::info!("SMU: PM tables unsupported");
        }

        Ok(())
    }

    /// Close every open channel and zero the session
    ///
    /// Safe on a partially initialized session; a second call does nothing.
    pub fn free(&mut self) {
        let open = self.open_channels();
        if !open.is_empty() {
            log::debug!("SMU: closing channels {:?}", open);
        }
        *self = Self::new();
    }

    /// Init completed successfully
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Packed SMU firmware version
    pub fn version(&self) -> SmuVersion {
        self.version
    }

    /// Processor family
    pub fn codename(&self) -> Codename {
        self.codename
    }

    /// PM table version and size
    pub fn pm_table_info(&self) -> PmTableInfo {
        self.pm_table
    }

    /// Raw PM table version
    pub fn pm_table_version(&self) -> u32 {
        self.pm_table.version
    }

    /// PM table size in bytes
    pub fn pm_table_size(&self) -> u32 {
        self.pm_table.size
    }

    /// Both PM table size and version are known
    pub fn pm_tables_supported(&self) -> bool {
        self.pm_table.is_supported()
    }

    /// Channels currently open
    pub fn open_channels(&self) -> Channels {
        let mut open = Channels::empty();
        open.set(Channels::SMN, self.smn.lock().is_some());
        {
            let command = self.command.lock();
            open.set(Channels::SMU_CMD, command.cmd.is_some());
            open.set(Channels::SMU_ARGS, command.args.is_some());
        }
        open.set(Channels::PM_TABLE, self.pm.lock().is_some());
        open
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn open_channel<B: Backend + ?Sized>(backend: &B, node: Node) -> Result<Handle> {
    open_handle(backend, node).map_err(|err| {
        log::warn!("SMU: cannot open {}: {}", node, err);
        Error::RwError
    })
}

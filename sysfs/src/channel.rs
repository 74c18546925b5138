//! # Channels and Backends
//!
//! A [`Channel`] is one open driver file. The driver treats each file as a
//! register rather than a stream, so every transfer rewinds to offset 0 and
//! moves a single fixed-size block. [`Handle`] owns a channel, closes it on
//! drop, and turns short or failed transfers into [`Error::RwError`].
//!
//! A [`Backend`] opens channels by [`Node`]; [`SysfsBackend`] does so in the
//! configured directory.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

use smu_core::{Error, Result};

use crate::config::Config;
use crate::node::Node;

// =============================================================================
// CHANNEL
// =============================================================================

/// Open driver file
pub trait Channel: Send {
    /// Reposition to offset 0
    fn rewind(&mut self) -> io::Result<()>;

    /// One read call, returning the number of bytes transferred
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// One write call, returning the number of bytes transferred
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

impl Channel for File {
    fn rewind(&mut self) -> io::Result<()> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }
}

/// Open mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// `O_RDONLY`
    ReadOnly,
    /// `O_RDWR`
    ReadWrite,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Owned channel for one driver file
pub struct Handle {
    node: Node,
    channel: Box<dyn Channel>,
}

impl Handle {
    /// Wrap an open channel
    pub fn new(node: Node, channel: Box<dyn Channel>) -> Self {
        Self { node, channel }
    }

    /// File this handle refers to
    pub fn node(&self) -> Node {
        self.node
    }

    /// Rewind and write `buf` in one transfer
    pub fn write_block(&mut self, buf: &[u8]) -> Result<()> {
        self.rewind()?;

        match self.channel.write(buf) {
            Ok(n) if n == buf.len() => {
                #[cfg(feature = "trace-io")]
                log::trace!("SMU: {} <- {:02x?}", self.node, buf);
                Ok(())
            },
            Ok(n) => {
                log::debug!("SMU: short write on {} ({} of {} bytes)", self.node, n, buf.len());
                Err(Error::RwError)
            },
            Err(err) => {
                log::debug!("SMU: write on {} failed: {}", self.node, err);
                Err(Error::RwError)
            },
        }
    }

    /// Rewind and fill `buf` in one transfer
    pub fn read_block(&mut self, buf: &mut [u8]) -> Result<()> {
        let n = self.read_some(buf)?;
        if n != buf.len() {
            log::debug!("SMU: short read on {} ({} of {} bytes)", self.node, n, buf.len());
            return Err(Error::RwError);
        }
        Ok(())
    }

    /// Rewind and read at most `buf.len()` bytes
    pub fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.rewind()?;

        match self.channel.read(buf) {
            Ok(n) => {
                #[cfg(feature = "trace-io")]
                log::trace!("SMU: {} -> {:02x?}", self.node, &buf[..n]);
                Ok(n)
            },
            Err(err) => {
                log::debug!("SMU: read on {} failed: {}", self.node, err);
                Err(Error::RwError)
            },
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.channel.rewind().map_err(|err| {
            log::debug!("SMU: rewind of {} failed: {}", self.node, err);
            Error::RwError
        })
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("node", &self.node).finish_non_exhaustive()
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Source of driver channels
pub trait Backend {
    /// Open `node` with the given access mode
    fn open(&self, node: Node, access: Access) -> io::Result<Box<dyn Channel>>;
}

/// Backend over real files in the configured directory
#[derive(Debug, Clone, Default)]
pub struct SysfsBackend {
    config: Config,
}

impl SysfsBackend {
    /// Backend for `config`
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Backend for SysfsBackend {
    fn open(&self, node: Node, access: Access) -> io::Result<Box<dyn Channel>> {
        let file = OpenOptions::new()
            .read(true)
            .write(access == Access::ReadWrite)
            .open(self.config.path(node))?;
        Ok(Box::new(file))
    }
}

/// Open `node` as an owned handle
pub(crate) fn open_handle<B: Backend + ?Sized>(backend: &B, node: Node) -> io::Result<Handle> {
    backend
        .open(node, node.access())
        .map(|channel| Handle::new(node, channel))
}

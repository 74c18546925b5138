//! In-memory driver used by unit tests.
//!
//! Emulates the `ryzen_smu` files closely enough to exercise the session:
//! `smn` latches an address and serves values from a sparse memory map,
//! `smu_cmd` executes on opcode write and reports a configurable status,
//! and every open, rewind, transfer and close is appended to a shared log.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Arc;

use smu_core::{ReturnCode, SmuArgs, SMU_ARGS_SIZE};
use spin::Mutex;

use crate::channel::{Access, Backend, Channel};
use crate::node::Node;

pub(crate) const FAKE_VERSION: &[u8] = b"46.54.0\n";
pub(crate) const FAKE_CODENAME: &[u8] = b"4\n";
pub(crate) const FAKE_PM_VERSION: u32 = 0x0024_0903;
pub(crate) const FAKE_PM_SIZE: u32 = 0x7E4;

/// Logged driver operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Open,
    Rewind,
    Read(usize),
    Write(usize),
    Close,
}

struct DriverState {
    present: HashSet<Node>,
    contents: HashMap<Node, Vec<u8>>,
    log: Vec<(Node, Op)>,
    open_attempts: Vec<Node>,
    open_handles: usize,
    short_reads: HashSet<Node>,
    short_writes: HashSet<Node>,
    smn_memory: HashMap<u32, u32>,
    smn_address: u32,
    args: SmuArgs,
    response: Option<SmuArgs>,
    status: u32,
    opcodes: Vec<u32>,
}

/// Fake driver and backend
#[derive(Clone)]
pub(crate) struct FakeDriver {
    state: Arc<Mutex<DriverState>>,
}

impl FakeDriver {
    /// Driver exposing every file, PM tables included
    pub(crate) fn new() -> Self {
        let mut contents = HashMap::new();
        contents.insert(Node::Version, FAKE_VERSION.to_vec());
        contents.insert(Node::Codename, FAKE_CODENAME.to_vec());
        contents.insert(Node::PmTableVersion, FAKE_PM_VERSION.to_ne_bytes().to_vec());
        contents.insert(Node::PmTableSize, FAKE_PM_SIZE.to_ne_bytes().to_vec());
        contents.insert(Node::PmTable, pm_table_pattern(FAKE_PM_SIZE as usize));

        Self {
            state: Arc::new(Mutex::new(DriverState {
                present: Node::ALL.iter().copied().collect(),
                contents,
                log: Vec::new(),
                open_attempts: Vec::new(),
                open_handles: 0,
                short_reads: HashSet::new(),
                short_writes: HashSet::new(),
                smn_memory: HashMap::new(),
                smn_address: 0,
                args: SmuArgs::new(),
                response: None,
                status: ReturnCode::Ok.raw(),
                opcodes: Vec::new(),
            })),
        }
    }

    /// Remove a file
    pub(crate) fn without(self, node: Node) -> Self {
        self.state.lock().present.remove(&node);
        self
    }

    /// Replace a file's static contents
    pub(crate) fn with_contents(self, node: Node, contents: &[u8]) -> Self {
        self.state.lock().contents.insert(node, contents.to_vec());
        self
    }

    /// Status reported by `smu_cmd`
    pub(crate) fn set_status(&self, status: u32) {
        self.state.lock().status = status;
    }

    /// Response placed in `smu_args` after a command; echoes the arguments if unset
    pub(crate) fn set_response(&self, response: SmuArgs) {
        self.state.lock().response = Some(response);
    }

    pub(crate) fn short_read(&self, node: Node) {
        self.state.lock().short_reads.insert(node);
    }

    pub(crate) fn short_write(&self, node: Node) {
        self.state.lock().short_writes.insert(node);
    }

    pub(crate) fn set_smn(&self, address: u32, value: u32) {
        self.state.lock().smn_memory.insert(address, value);
    }

    pub(crate) fn smn(&self, address: u32) -> Option<u32> {
        self.state.lock().smn_memory.get(&address).copied()
    }

    /// Last argument block written to `smu_args`
    pub(crate) fn last_args(&self) -> SmuArgs {
        self.state.lock().args
    }

    pub(crate) fn opcodes(&self) -> Vec<u32> {
        self.state.lock().opcodes.clone()
    }

    /// Every open attempt, successful or not, in order
    pub(crate) fn open_attempts(&self) -> Vec<Node> {
        self.state.lock().open_attempts.clone()
    }

    pub(crate) fn open_handles(&self) -> usize {
        self.state.lock().open_handles
    }

    /// Operations on one file, in order
    pub(crate) fn ops(&self, node: Node) -> Vec<Op> {
        self.state
            .lock()
            .log
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, op)| *op)
            .collect()
    }

    /// Operations on every file, in order
    pub(crate) fn log(&self) -> Vec<(Node, Op)> {
        self.state.lock().log.clone()
    }
}

impl Backend for FakeDriver {
    fn open(&self, node: Node, access: Access) -> io::Result<Box<dyn Channel>> {
        let mut state = self.state.lock();
        state.open_attempts.push(node);

        if !state.present.contains(&node) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        if access == Access::ReadWrite && node.access() == Access::ReadOnly {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }

        state.open_handles += 1;
        state.log.push((node, Op::Open));

        Ok(Box::new(FakeChannel {
            node,
            state: Arc::clone(&self.state),
        }))
    }
}

struct FakeChannel {
    node: Node,
    state: Arc<Mutex<DriverState>>,
}

impl Channel for FakeChannel {
    fn rewind(&mut self) -> io::Result<()> {
        self.state.lock().log.push((self.node, Op::Rewind));
        std::thread::yield_now();
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        state.log.push((self.node, Op::Read(buf.len())));

        let data = match self.node {
            Node::Smn => {
                let address = state.smn_address;
                state.smn_memory.get(&address).copied().unwrap_or(0).to_ne_bytes().to_vec()
            },
            Node::SmuCmd => state.status.to_ne_bytes().to_vec(),
            Node::SmuArgs => state.args.to_bytes().to_vec(),
            node => state.contents.get(&node).cloned().unwrap_or_default(),
        };

        let mut n = data.len().min(buf.len());
        if state.short_reads.contains(&self.node) {
            n = n.saturating_sub(1);
        }
        buf[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        state.log.push((self.node, Op::Write(buf.len())));

        if state.short_writes.contains(&self.node) {
            return Ok(buf.len().saturating_sub(1));
        }

        match (self.node, buf.len()) {
            (Node::Smn, 4) => {
                state.smn_address = word(&buf[0..4]);
            },
            (Node::Smn, 8) => {
                let address = word(&buf[0..4]);
                state.smn_memory.insert(address, word(&buf[4..8]));
            },
            (Node::SmuArgs, SMU_ARGS_SIZE) => {
                let mut block = [0u8; SMU_ARGS_SIZE];
                block.copy_from_slice(buf);
                state.args = SmuArgs::from_bytes(&block);
            },
            (Node::SmuCmd, 4) => {
                state.opcodes.push(word(buf));
                if let Some(response) = state.response {
                    state.args = response;
                }
            },
            _ => return Err(io::Error::from(io::ErrorKind::InvalidInput)),
        }

        Ok(buf.len())
    }
}

impl Drop for FakeChannel {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.open_handles -= 1;
        state.log.push((self.node, Op::Close));
    }
}

fn word(bytes: &[u8]) -> u32 {
    u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Deterministic PM table contents: consecutive `f32` values
pub(crate) fn pm_table_pattern(size: usize) -> Vec<u8> {
    (0..size / 4)
        .flat_map(|i| (i as f32).to_ne_bytes())
        .chain(std::iter::repeat(0).take(size % 4))
        .collect()
}

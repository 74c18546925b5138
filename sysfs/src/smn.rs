//! # SMN Access
//!
//! Reads and writes on the System Management Network through the `smn`
//! file. A read is two transfers (select address, read value) and both run
//! under the SMN lock so concurrent callers can't steer each other's reads.

use smu_core::smn::{decode_value, encode_read, encode_write, SMN_VALUE_SIZE};
use smu_core::{Error, Result};

use crate::session::Session;

impl Session {
    /// Read the 32-bit value at an SMN address
    pub fn read_smn(&self, address: u32) -> Result<u32> {
        let mut smn = self.smn.lock();
        let handle = smn.as_mut().ok_or(Error::RwError)?;

        handle.write_block(&encode_read(address))?;

        let mut value = [0u8; SMN_VALUE_SIZE];
        handle.read_block(&mut value)?;

        Ok(decode_value(value))
    }

    /// Write a 32-bit value to an SMN address
    pub fn write_smn(&self, address: u32, value: u32) -> Result<()> {
        let mut smn = self.smn.lock();
        let handle = smn.as_mut().ok_or(Error::RwError)?;

        handle.write_block(&encode_write(address, value))
    }
}

//! # SMU Commands
//!
//! One command is a synchronous exchange over two files, all under the
//! command lock:
//!
//! ```text
//!   smu_args  <- 6 x u32 arguments
//!   smu_cmd   <- opcode
//!   smu_cmd   -> status
//!   smu_args  -> 6 x u32 response      (only when status is OK)
//! ```
//!
//! The order is fixed by the driver. Only one command is in flight per
//! session.

use smu_core::{Error, Result, SmuArgs, SMU_ARGS_SIZE};

use crate::session::Session;

impl Session {
    /// Send an SMU command
    ///
    /// `args` holds the arguments on entry and the response on success. On
    /// any error it is left untouched. A non-OK status from the driver is
    /// returned as-is.
    pub fn send_command(&self, opcode: u32, args: &mut SmuArgs) -> Result<()> {
        let mut command = self.command.lock();
        let command = &mut *command;
        let (Some(cmd), Some(args_handle)) = (command.cmd.as_mut(), command.args.as_mut()) else {
            return Err(Error::RwError);
        };

        args_handle.write_block(&args.to_bytes())?;
        cmd.write_block(&opcode.to_ne_bytes())?;

        let mut status = [0u8; 4];
        cmd.read_block(&mut status)?;
        let status = u32::from_ne_bytes(status);

        if let Some(err) = Error::from_status(status) {
            log::debug!("SMU: command {:#04x} returned {:#04x} ({})", opcode, status, err);
            return Err(err);
        }

        let mut response = [0u8; SMU_ARGS_SIZE];
        args_handle.read_block(&mut response)?;
        *args = SmuArgs::from_bytes(&response);

        Ok(())
    }
}

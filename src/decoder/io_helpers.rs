// src/decoder/io_helpers.rs

use super::FrameDecoder; // Access FrameDecoder definition
use crate::common::{
    error::Gp2yError,
    hal_traits::{Gp2ySerial, Gp2yTimer},
};
use core::fmt::Debug;
use core::time::Duration;

// Implementation block for I/O related helpers
impl<IF> FrameDecoder<IF>
where
    IF: Gp2ySerial + Gp2yTimer,
    IF::Error: Debug,
{
    /// Polls the non-blocking read until a byte arrives, the deadline passes,
    /// or the interface reports a hard error.
    ///
    /// `Ok(None)` means the deadline passed with no byte; the caller decides
    /// whether that is a dead link (sync search) or a truncated frame (body
    /// read).
    pub(super) fn read_byte_within(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<u8>, Gp2yError<IF::Error>> {
        let deadline = self.interface.now() + timeout;

        loop {
            match self.interface.read_byte() {
                Ok(byte) => return Ok(Some(byte)),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Ok(None);
                    }
                    // Small delay might prevent busy-spinning 100% CPU
                    self.interface.delay_us(100);
                }
                Err(nb::Error::Other(e)) => return Err(Gp2yError::Io(e)),
            }
        }
    }
}

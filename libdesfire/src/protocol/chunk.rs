// libdesfire/src/protocol/chunk.rs

//! Additional-frame reassembly.
//!
//! A DESFire response that does not fit into one frame starts with the
//! `0xAF` status. The host then sends a bare `0xAF` command to fetch the
//! next part until a frame with a final status arrives. Each frame's
//! leading status byte is stripped and the payloads are concatenated.

use log::{trace, warn};

use crate::constants::{CMD_ADDITIONAL_FRAME, DEFAULT_BUFFER_CAPACITY};
use crate::protocol::status::{check_status, has_more_frames};
use crate::transport::Transport;
use crate::{Error, Result};

/// Assembles one logical response from possibly many frames.
///
/// The assembly buffer has a fixed capacity. A continuation payload that
/// does not fit into the remaining space is dropped with a warning and
/// the exchange carries on; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkReassembler {
    capacity: usize,
}

impl Default for ChunkReassembler {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

impl ChunkReassembler {
    /// Reassembler holding at most `capacity` payload bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Assembly capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Send `tx` and follow continuation frames. Returns the payload with
    /// all status bytes removed, or the error mapped from the final status.
    pub fn send<T: Transport + ?Sized>(&self, transport: &mut T, tx: &[u8]) -> Result<Vec<u8>> {
        let mut rx = transport.send_block(tx)?;
        let mut out = Vec::with_capacity(self.capacity.min(rx.len()));

        if rx.len() > 1 {
            let payload = &rx[1..];
            if payload.len() > self.capacity {
                warn!(
                    "RX buffer overflow: ignoring {} bytes",
                    payload.len() - self.capacity
                );
                out.extend_from_slice(&payload[..self.capacity]);
            } else {
                out.extend_from_slice(payload);
            }
        }

        while has_more_frames(&rx) {
            rx = transport.send_block(&[CMD_ADDITIONAL_FRAME])?;
            trace!("additional frame: {} bytes", rx.len());

            let payload = rx.get(1..).unwrap_or_default();
            let remaining = self.capacity - out.len();
            if payload.len() <= remaining {
                out.extend_from_slice(payload);
            } else {
                warn!("RX buffer overflow: ignoring {} bytes", payload.len());
            }
        }

        let status = rx.first().copied().ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })?;
        check_status(status)?;

        Ok(out)
    }
}

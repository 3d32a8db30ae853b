// libdesfire/src/protocol/codec.rs

//! One command round-trip: encode, exchange, decode.

use log::debug;

use crate::transport::Transport;
use crate::Result;

use super::chunk::ChunkReassembler;
use super::commands::Command;
use super::responses::Response;

/// Send a command and return the assembled payload without decoding it.
pub fn exchange<T: Transport + ?Sized>(
    reassembler: &ChunkReassembler,
    transport: &mut T,
    cmd: &Command,
) -> Result<Vec<u8>> {
    let tx = cmd.encode();
    debug!("-> {:?} ({} bytes)", cmd, tx.len());
    let payload = reassembler.send(transport, &tx)?;
    debug!("<- {:#04x}: {} bytes", cmd.command_code(), payload.len());
    Ok(payload)
}

/// Send a command and decode the response for it.
pub fn execute<T: Transport + ?Sized>(
    reassembler: &ChunkReassembler,
    transport: &mut T,
    cmd: &Command,
) -> Result<Response> {
    let payload = exchange(reassembler, transport, cmd)?;
    Response::decode(cmd.command_code(), &payload)
}

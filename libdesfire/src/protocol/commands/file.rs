// libdesfire/src/protocol/commands/file.rs

//! File-level requests.

use crate::constants::{CMD_GET_FILE_SETTINGS, CMD_GET_VALUE, CMD_READ_DATA, CMD_READ_RECORDS};
use crate::protocol::parser::push_le_u24;
use crate::types::FileId;

/// Encode GetFileSettings (0xF5) + file id
pub fn encode_get_file_settings(file_id: FileId) -> Vec<u8> {
    vec![CMD_GET_FILE_SETTINGS, file_id.as_u8()]
}

/// Encode ReadData (0xBD) + file id + offset(3) + length(3)
pub fn encode_read_data(file_id: FileId, offset: u32, length: u32) -> Vec<u8> {
    encode_ranged(CMD_READ_DATA, file_id, offset, length)
}

/// Encode GetValue (0x6C) + file id
pub fn encode_get_value(file_id: FileId) -> Vec<u8> {
    vec![CMD_GET_VALUE, file_id.as_u8()]
}

/// Encode ReadRecords (0xBB) + file id + offset(3) + length(3)
pub fn encode_read_records(file_id: FileId, offset: u32, length: u32) -> Vec<u8> {
    encode_ranged(CMD_READ_RECORDS, file_id, offset, length)
}

fn encode_ranged(code: u8, file_id: FileId, offset: u32, length: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 1 + 3 + 3);
    buf.push(code);
    buf.push(file_id.as_u8());
    push_le_u24(&mut buf, offset);
    push_le_u24(&mut buf, length);
    buf
}

// libdesfire/src/protocol/commands/mod.rs

//! Request encoders for the read commands.

pub mod application;
pub mod file;
pub mod picc;

pub use application::{encode_get_file_ids, encode_select_application};
pub use file::{encode_get_file_settings, encode_get_value, encode_read_data, encode_read_records};
pub use picc::{
    encode_get_application_ids, encode_get_free_memory, encode_get_key_settings,
    encode_get_key_version, encode_get_version,
};

use crate::constants::*;
use crate::types::{ApplicationId, FileId};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hardware, software and production data.
    GetVersion,
    /// Bytes left on the PICC.
    GetFreeMemory,
    /// Key settings of the current application.
    GetKeySettings,
    /// Version of one key of the current application.
    GetKeyVersion {
        /// Key index.
        key_no: u8,
    },
    /// Application directory of the PICC.
    GetApplicationIds,
    /// Switch the current application.
    SelectApplication {
        /// Target application, `ApplicationId::PICC` for the card level.
        aid: ApplicationId,
    },
    /// File directory of the current application.
    GetFileIds,
    /// Settings of one file.
    GetFileSettings {
        /// File to query.
        file_id: FileId,
    },
    /// Read a byte range of a standard or backup file.
    ReadData {
        /// File to read.
        file_id: FileId,
        /// Start offset, 24 bits on the wire.
        offset: u32,
        /// Byte count, 24 bits; 0 means the whole file.
        length: u32,
    },
    /// Current value of a value file.
    GetValue {
        /// File to read.
        file_id: FileId,
    },
    /// Read records of a record file.
    ReadRecords {
        /// File to read.
        file_id: FileId,
        /// First record, 24 bits on the wire.
        offset: u32,
        /// Record count, 24 bits; 0 means all records.
        length: u32,
    },
}

impl Command {
    /// Return the native DESFire opcode.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetVersion => CMD_GET_VERSION,
            Self::GetFreeMemory => CMD_GET_FREE_MEMORY,
            Self::GetKeySettings => CMD_GET_KEY_SETTINGS,
            Self::GetKeyVersion { .. } => CMD_GET_KEY_VERSION,
            Self::GetApplicationIds => CMD_GET_APPLICATION_IDS,
            Self::SelectApplication { .. } => CMD_SELECT_APPLICATION,
            Self::GetFileIds => CMD_GET_FILE_IDS,
            Self::GetFileSettings { .. } => CMD_GET_FILE_SETTINGS,
            Self::ReadData { .. } => CMD_READ_DATA,
            Self::GetValue { .. } => CMD_GET_VALUE,
            Self::ReadRecords { .. } => CMD_READ_RECORDS,
        }
    }

    /// Encode the command into the request block (opcode + params).
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Self::GetVersion => encode_get_version(),
            Self::GetFreeMemory => encode_get_free_memory(),
            Self::GetKeySettings => encode_get_key_settings(),
            Self::GetKeyVersion { key_no } => encode_get_key_version(key_no),
            Self::GetApplicationIds => encode_get_application_ids(),
            Self::SelectApplication { aid } => encode_select_application(aid),
            Self::GetFileIds => encode_get_file_ids(),
            Self::GetFileSettings { file_id } => encode_get_file_settings(file_id),
            Self::ReadData {
                file_id,
                offset,
                length,
            } => encode_read_data(file_id, offset, length),
            Self::GetValue { file_id } => encode_get_value(file_id),
            Self::ReadRecords {
                file_id,
                offset,
                length,
            } => encode_read_records(file_id, offset, length),
        }
    }
}

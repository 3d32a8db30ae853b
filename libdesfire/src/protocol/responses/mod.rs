// libdesfire/src/protocol/responses/mod.rs

//! Response payload decoders.

pub mod directory;
pub mod file_data;
pub mod file_settings;
pub mod key;
pub mod memory;
pub mod version;

pub use directory::{decode_application_ids, decode_file_ids};
pub use file_data::decode_file_data;
pub use file_settings::decode_file_settings;
pub use key::{decode_key_settings, decode_key_version};
pub use memory::decode_free_memory;
pub use version::decode_version;

use crate::card::{DesfireVersion, FileData, FileSettings, FreeMemory, KeySettings};
use crate::constants::*;
use crate::types::{ApplicationId, FileId, KeyVersion};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// GetVersion.
    Version(DesfireVersion),
    /// GetFreeMemory.
    FreeMemory(FreeMemory),
    /// GetKeySettings.
    KeySettings(KeySettings),
    /// GetKeyVersion.
    KeyVersion(KeyVersion),
    /// GetApplicationIDs, in card order.
    ApplicationIds(Vec<ApplicationId>),
    /// SelectApplication carries no payload.
    Selected,
    /// GetFileIDs, in card order.
    FileIds(Vec<FileId>),
    /// GetFileSettings.
    FileSettings(FileSettings),
    /// ReadData, ReadRecords or GetValue content.
    FileData(FileData),
}

impl Response {
    /// Decode an assembled payload (status bytes already stripped) for the
    /// given command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        match expected_cmd {
            CMD_GET_VERSION => Ok(Self::Version(decode_version(data)?)),
            CMD_GET_FREE_MEMORY => Ok(Self::FreeMemory(decode_free_memory(data))),
            CMD_GET_KEY_SETTINGS => Ok(Self::KeySettings(decode_key_settings(data)?)),
            CMD_GET_KEY_VERSION => Ok(Self::KeyVersion(decode_key_version(data)?)),
            CMD_GET_APPLICATION_IDS => Ok(Self::ApplicationIds(decode_application_ids(data))),
            CMD_SELECT_APPLICATION => Ok(Self::Selected),
            CMD_GET_FILE_IDS => Ok(Self::FileIds(decode_file_ids(data)?)),
            CMD_GET_FILE_SETTINGS => Ok(Self::FileSettings(decode_file_settings(data)?)),
            CMD_READ_DATA | CMD_GET_VALUE | CMD_READ_RECORDS => {
                Ok(Self::FileData(decode_file_data(data)))
            }
            other => Err(crate::Error::InvalidField(format!(
                "no decoder for command {:#04x}",
                other
            ))),
        }
    }
}

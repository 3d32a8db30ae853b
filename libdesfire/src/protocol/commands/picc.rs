// libdesfire/src/protocol/commands/picc.rs

//! PICC-level requests.

use crate::constants::{
    CMD_GET_APPLICATION_IDS, CMD_GET_FREE_MEMORY, CMD_GET_KEY_SETTINGS, CMD_GET_KEY_VERSION,
    CMD_GET_VERSION,
};

/// Encode GetVersion (0x60)
pub fn encode_get_version() -> Vec<u8> {
    vec![CMD_GET_VERSION]
}

/// Encode GetFreeMemory (0x6E)
pub fn encode_get_free_memory() -> Vec<u8> {
    vec![CMD_GET_FREE_MEMORY]
}

/// Encode GetKeySettings (0x45) for the currently selected application
pub fn encode_get_key_settings() -> Vec<u8> {
    vec![CMD_GET_KEY_SETTINGS]
}

/// Encode GetKeyVersion (0x64) for key number `key_no`
pub fn encode_get_key_version(key_no: u8) -> Vec<u8> {
    vec![CMD_GET_KEY_VERSION, key_no]
}

/// Encode GetApplicationIDs (0x6A)
pub fn encode_get_application_ids() -> Vec<u8> {
    vec![CMD_GET_APPLICATION_IDS]
}

// libdesfire/src/constants.rs
//! Common protocol constants used across the crate

/// DESFire native command opcodes
pub const CMD_GET_VERSION: u8 = 0x60;
/// GetFreeMemory
pub const CMD_GET_FREE_MEMORY: u8 = 0x6E;
/// GetKeySettings
pub const CMD_GET_KEY_SETTINGS: u8 = 0x45;
/// GetKeyVersion
pub const CMD_GET_KEY_VERSION: u8 = 0x64;
/// GetApplicationIDs
pub const CMD_GET_APPLICATION_IDS: u8 = 0x6A;
/// SelectApplication
pub const CMD_SELECT_APPLICATION: u8 = 0x5A;
/// GetFileIDs
pub const CMD_GET_FILE_IDS: u8 = 0x6F;
/// GetFileSettings
pub const CMD_GET_FILE_SETTINGS: u8 = 0xF5;
/// ReadData
pub const CMD_READ_DATA: u8 = 0xBD;
/// GetValue
pub const CMD_GET_VALUE: u8 = 0x6C;
/// ReadRecords
pub const CMD_READ_RECORDS: u8 = 0xBB;

/// Continuation request, sent alone to fetch the next frame
pub const CMD_ADDITIONAL_FRAME: u8 = 0xAF;

/// Card status bytes (first byte of each response)
pub const STATUS_OPERATION_OK: u8 = 0x00;
/// Authentication error
pub const STATUS_AUTHENTICATION_ERROR: u8 = 0xAE;
/// More frames follow
pub const STATUS_ADDITIONAL_FRAME: u8 = 0xAF;

/// Size of the GetVersion response
pub const VERSION_LEN: usize = 28;

/// Capacity of the chunk assembly buffer in bytes
pub const DEFAULT_BUFFER_CAPACITY: usize = 512;

/// Upper bound for `KeySettings::max_keys`
pub const MAX_KEYS: u8 = 14;

/// Upper bound for the number of files in one application
pub const MAX_FILES: usize = 32;

/// Upper bound for additional access rights entries in file settings
pub const MAX_ADDITIONAL_ACCESS_RIGHTS: usize = 14;

/// Access rights key number meaning "free access"
pub const ACCESS_FREE: u8 = 0x0E;

/// ISO14443-3 activation data identifying a DESFire EV1 target
pub const DESFIRE_ATQA: [u8; 2] = [0x44, 0x03];
/// SAK of a DESFire target
pub const DESFIRE_SAK: u8 = 0x20;

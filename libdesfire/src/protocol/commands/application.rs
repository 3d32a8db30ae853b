// libdesfire/src/protocol/commands/application.rs

//! Application-level requests.

use crate::constants::{CMD_GET_FILE_IDS, CMD_SELECT_APPLICATION};
use crate::types::ApplicationId;

/// Encode SelectApplication (0x5A) + AID(3)
pub fn encode_select_application(aid: ApplicationId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 3);
    buf.push(CMD_SELECT_APPLICATION);
    buf.extend_from_slice(aid.as_bytes());
    buf
}

/// Encode GetFileIDs (0x6F)
pub fn encode_get_file_ids() -> Vec<u8> {
    vec![CMD_GET_FILE_IDS]
}

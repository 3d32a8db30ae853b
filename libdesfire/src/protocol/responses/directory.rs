// libdesfire/src/protocol/responses/directory.rs

//! GetApplicationIDs and GetFileIDs payloads.

use crate::constants::MAX_FILES;
use crate::types::{ApplicationId, FileId};
use crate::{Error, Result};

/// Decode the GetApplicationIDs payload: N = floor(len / 3) ids.
/// Trailing bytes that do not form a full id are ignored.
pub fn decode_application_ids(data: &[u8]) -> Vec<ApplicationId> {
    data.chunks_exact(3)
        .map(|c| ApplicationId::from_bytes([c[0], c[1], c[2]]))
        .collect()
}

/// Decode the GetFileIDs payload: one byte per file.
pub fn decode_file_ids(data: &[u8]) -> Result<Vec<FileId>> {
    if data.len() > MAX_FILES {
        return Err(Error::InvalidField(format!(
            "{} file ids exceed {}",
            data.len(),
            MAX_FILES
        )));
    }
    Ok(data.iter().copied().map(FileId::new).collect())
}

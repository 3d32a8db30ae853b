// libdesfire/src/protocol/responses/key.rs

//! GetKeySettings and GetKeyVersion payloads.

use crate::card::KeySettings;
use crate::constants::MAX_KEYS;
use crate::protocol::parser;
use crate::types::KeyVersion;
use crate::{Error, Result};

/// Decode the GetKeySettings payload (exactly 2 bytes).
pub fn decode_key_settings(data: &[u8]) -> Result<KeySettings> {
    parser::ensure_exact_len(data, 2)?;
    let settings = KeySettings::from_bytes([data[0], data[1]]);
    if settings.max_keys > MAX_KEYS {
        return Err(Error::InvalidField(format!(
            "max keys {} exceeds {}",
            settings.max_keys, MAX_KEYS
        )));
    }
    Ok(settings)
}

/// Decode the GetKeyVersion payload (exactly 1 byte).
pub fn decode_key_version(data: &[u8]) -> Result<KeyVersion> {
    parser::ensure_exact_len(data, 1)?;
    Ok(KeyVersion::new(data[0]))
}

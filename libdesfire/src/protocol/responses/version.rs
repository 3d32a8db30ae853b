// libdesfire/src/protocol/responses/version.rs

//! GetVersion payload.

use crate::card::DesfireVersion;
use crate::constants::VERSION_LEN;
use crate::protocol::parser;
use crate::Result;

/// Decode the assembled GetVersion payload (exactly 28 bytes).
/// Layout: hw(7) + sw(7) + uid(7) + batch(5) + week(1) + year(1)
pub fn decode_version(data: &[u8]) -> Result<DesfireVersion> {
    parser::ensure_exact_len(data, VERSION_LEN)?;
    let mut bytes = [0u8; VERSION_LEN];
    bytes.copy_from_slice(data);
    Ok(DesfireVersion::from_bytes(&bytes))
}

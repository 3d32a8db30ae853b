// libdesfire/src/protocol/responses/memory.rs

//! GetFreeMemory payload.

use crate::card::FreeMemory;
use crate::protocol::parser;

/// Decode the GetFreeMemory payload: a 3-byte little-endian count.
///
/// Any other length means the card does not report free memory; this is
/// signalled through `is_present == false`, never as an error.
pub fn decode_free_memory(data: &[u8]) -> FreeMemory {
    match data.len() {
        3 => parser::le_u24_at(data, 0)
            .map(FreeMemory::present)
            .unwrap_or_default(),
        _ => FreeMemory::default(),
    }
}

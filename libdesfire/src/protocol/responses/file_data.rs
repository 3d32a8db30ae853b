// libdesfire/src/protocol/responses/file_data.rs

//! ReadData, ReadRecords and GetValue payloads.

use crate::card::FileData;

/// Decode ReadData / GetValue / ReadRecords payloads. The content is kept
/// as raw bytes; zero length is valid.
pub fn decode_file_data(data: &[u8]) -> FileData {
    FileData::new(data.to_vec())
}

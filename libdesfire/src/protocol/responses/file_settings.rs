// libdesfire/src/protocol/responses/file_settings.rs

//! GetFileSettings payload.

use crate::card::{FileKind, FileSettings};
use crate::constants::MAX_ADDITIONAL_ACCESS_RIGHTS;
use crate::protocol::parser;
use crate::types::{AccessRights, CommunicationMode, FileType};
use crate::{Error, Result};

const HEADER_LEN: usize = 4;
const EXTRA_RIGHTS_FLAG: u8 = 0x80;

fn body_len(file_type: FileType) -> usize {
    match file_type {
        FileType::Standard | FileType::Backup => 3,
        FileType::Value => 13,
        FileType::LinearRecord | FileType::CyclicRecord => 9,
    }
}

/// Decode the GetFileSettings payload.
///
/// Layout: type(1) comm(1) access(2 LE) + type-specific body, then when
/// bit 7 of `comm` is set a count byte followed by that many 2-byte
/// access-rights entries. The total length must match exactly.
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    parser::ensure_len(data, HEADER_LEN)?;

    let file_type = FileType::try_from(data[0])?;
    let comm_raw = data[1];
    let comm = CommunicationMode::try_from(comm_raw)?;
    let primary = AccessRights::new(parser::le_u16_at(data, 2)?);

    let body = HEADER_LEN;
    let fixed_len = body + body_len(file_type);
    parser::ensure_len(data, fixed_len)?;

    let kind = match file_type {
        FileType::Standard => FileKind::Standard {
            size: parser::le_u24_at(data, body)?,
        },
        FileType::Backup => FileKind::Backup {
            size: parser::le_u24_at(data, body)?,
        },
        FileType::Value => FileKind::Value {
            lo_limit: parser::le_u32_at(data, body)?,
            hi_limit: parser::le_u32_at(data, body + 4)?,
            limited_credit_value: parser::le_u32_at(data, body + 8)?,
            limited_credit_enabled: parser::byte_at(data, body + 12)? != 0,
        },
        FileType::LinearRecord | FileType::CyclicRecord => {
            let size = parser::le_u24_at(data, body)?;
            let max = parser::le_u24_at(data, body + 3)?;
            let cur = parser::le_u24_at(data, body + 6)?;
            if file_type == FileType::LinearRecord {
                FileKind::LinearRecord { size, max, cur }
            } else {
                FileKind::CyclicRecord { size, max, cur }
            }
        }
    };

    let mut access_rights = vec![primary];
    if comm_raw & EXTRA_RIGHTS_FLAG == 0 {
        parser::ensure_exact_len(data, fixed_len)?;
    } else {
        let count = parser::byte_at(data, fixed_len)? as usize;
        if count > MAX_ADDITIONAL_ACCESS_RIGHTS {
            return Err(Error::InvalidField(format!(
                "{} additional access rights exceed {}",
                count, MAX_ADDITIONAL_ACCESS_RIGHTS
            )));
        }
        let start = fixed_len + 1;
        parser::ensure_exact_len(data, start + count * 2)?;
        access_rights.extend(
            data[start..]
                .chunks_exact(2)
                .map(|c| AccessRights::from_le_bytes([c[0], c[1]])),
        );
    }

    Ok(FileSettings {
        kind,
        comm,
        access_rights,
    })
}

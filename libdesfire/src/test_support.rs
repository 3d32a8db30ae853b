//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same card answers.
#![allow(dead_code)]

use crate::constants::VERSION_LEN;
use crate::transport::mock::MockTransport;

/// UID carried by [`version_payload`].
#[doc(hidden)]
pub const SAMPLE_UID: [u8; 7] = [0x04, 0x5A, 0x3C, 0x22, 0x91, 0x6B, 0x80];

/// A DESFire EV1 8K GetVersion payload (28 bytes).
#[doc(hidden)]
pub fn version_payload() -> Vec<u8> {
    let mut v = Vec::with_capacity(VERSION_LEN);
    v.extend_from_slice(&[0x04, 0x01, 0x01, 0x01, 0x00, 0x1A, 0x05]);
    v.extend_from_slice(&[0x04, 0x01, 0x01, 0x01, 0x04, 0x1A, 0x05]);
    v.extend_from_slice(&SAMPLE_UID);
    v.extend_from_slice(&[0xBA, 0x34, 0x99, 0x50, 0x60]);
    v.push(0x13);
    v.push(0x19);
    v
}

/// Queue the PICC-level answers up to and including the master key
/// versions: version, free memory, key settings, one answer per version.
#[doc(hidden)]
pub fn push_picc_header(mock: &mut MockTransport, key_settings: [u8; 2], key_versions: &[u8]) {
    mock.push_ok(&version_payload());
    mock.push_ok(&[0x00, 0x0E, 0x00]);
    mock.push_ok(&key_settings);
    for v in key_versions {
        mock.push_ok(&[*v]);
    }
}

/// GetFileSettings payload of a plain standard data file.
#[doc(hidden)]
pub fn standard_file_settings(size: u32, access_rights: u16) -> Vec<u8> {
    let mut v = vec![0x00, 0x00];
    v.extend_from_slice(&access_rights.to_le_bytes());
    v.extend_from_slice(&size.to_le_bytes()[..3]);
    v
}

/// GetFileSettings payload of a plain value file.
#[doc(hidden)]
pub fn value_file_settings(lo: u32, hi: u32, access_rights: u16) -> Vec<u8> {
    let mut v = vec![0x02, 0x00];
    v.extend_from_slice(&access_rights.to_le_bytes());
    v.extend_from_slice(&lo.to_le_bytes());
    v.extend_from_slice(&hi.to_le_bytes());
    v.extend_from_slice(&0u32.to_le_bytes());
    v.push(0x00);
    v
}

/// Queue a full application answer: select, key settings, key versions,
/// file ids, then settings and content per file. `contents` entries of
/// `None` mean no read command is expected for that file.
#[doc(hidden)]
pub fn push_application(
    mock: &mut MockTransport,
    key_settings: [u8; 2],
    key_versions: &[u8],
    files: &[(u8, Vec<u8>, Option<Vec<u8>>)],
) {
    mock.push_ok(&[]);
    mock.push_ok(&key_settings);
    for v in key_versions {
        mock.push_ok(&[*v]);
    }
    let ids: Vec<u8> = files.iter().map(|(id, _, _)| *id).collect();
    mock.push_ok(&ids);
    for (_, settings, _) in files {
        mock.push_ok(settings);
    }
    for (_, _, content) in files {
        if let Some(content) = content {
            mock.push_ok(content);
        }
    }
}

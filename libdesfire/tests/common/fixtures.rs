// fixtures.rs: commonly used card answers

use libdesfire::test_support::{standard_file_settings, value_file_settings};
use libdesfire::transport::MockTransport;

/// Master key settings: everything permitted, one key.
pub const OPEN_MASTER_SETTINGS: [u8; 2] = [0x0F, 0x01];

/// Application key settings: listable, two keys.
pub const OPEN_APP_SETTINGS: [u8; 2] = [0x0B, 0x02];

pub fn aid(n: u8) -> [u8; 3] {
    [n, 0x00, 0x00]
}

pub fn application_ids(ids: &[[u8; 3]]) -> Vec<u8> {
    ids.iter().flatten().copied().collect()
}

/// Free-read standard file with `content.len()` bytes.
pub fn free_standard_file(id: u8, content: &[u8]) -> (u8, Vec<u8>, Option<Vec<u8>>) {
    let read = if content.is_empty() {
        None
    } else {
        Some(content.to_vec())
    };
    (id, standard_file_settings(content.len() as u32, 0xEEEE), read)
}

/// Standard file that needs key 1 for every access.
pub fn protected_standard_file(id: u8, size: u32) -> (u8, Vec<u8>, Option<Vec<u8>>) {
    (id, standard_file_settings(size, 0x1111), None)
}

pub fn free_value_file(id: u8, value: i32) -> (u8, Vec<u8>, Option<Vec<u8>>) {
    (
        id,
        value_file_settings(0, 1000, 0xE0E0),
        Some(value.to_le_bytes().to_vec()),
    )
}

/// A card with open master settings and the given applications, each
/// holding one free standard file of 4 bytes.
pub fn seeded_card(app_count: u8) -> MockTransport {
    let mut m = MockTransport::new();
    super::push_picc_header(&mut m, OPEN_MASTER_SETTINGS, &[0x00]);
    let ids: Vec<[u8; 3]> = (1..=app_count).map(aid).collect();
    m.push_ok(&application_ids(&ids));
    for n in 1..=app_count {
        super::push_application(
            &mut m,
            OPEN_APP_SETTINGS,
            &[n, n + 1],
            &[free_standard_file(1, &[n; 4])],
        );
    }
    m
}

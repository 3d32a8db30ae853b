#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libdesfire::card::FileKind;
use libdesfire::poller::{Poller, PollerConfig, PollerEvent};
use libdesfire::test_support::standard_file_settings;
use libdesfire::transport::MockTransport;
use libdesfire::types::{ApplicationId, FileId, KeyVersion};

#[test]
fn reads_every_application() {
    let mut poller = Poller::new(seeded_card(2));
    assert_eq!(common::run_to_event(&mut poller), PollerEvent::ReadSuccess);

    let data = poller.take_data().unwrap();
    assert_eq!(data.uid(), &libdesfire::test_support::SAMPLE_UID);
    assert_eq!(data.free_memory.bytes(), Some(0x0E00));
    assert_eq!(data.master_key_versions, vec![KeyVersion::new(0)]);
    assert_eq!(data.application_ids.len(), 2);
    assert_eq!(data.applications.len(), 2);

    let app = data
        .application(ApplicationId::from_bytes(aid(2)))
        .unwrap();
    assert_eq!(app.key_versions, vec![KeyVersion::new(2), KeyVersion::new(3)]);
    let (settings, content) = app.file(FileId::new(1)).unwrap();
    assert_eq!(settings.kind, FileKind::Standard { size: 4 });
    assert_eq!(content.as_bytes(), &[2, 2, 2, 2]);

    assert_eq!(poller.transport().remaining(), 0);
}

#[test]
fn key_versions_match_max_keys() {
    for max_keys in 0u8..=14 {
        let mut m = MockTransport::new();
        let versions: Vec<u8> = (0..max_keys).map(|i| i + 0x40).collect();
        // not listable, so the session ends after the key versions
        common::push_picc_header(&mut m, [0x01, max_keys], &versions);

        let mut poller = Poller::new(m);
        assert_eq!(common::run_to_event(&mut poller), PollerEvent::ReadSuccess);
        let data = poller.take_data().unwrap();
        assert_eq!(data.master_key_versions.len(), max_keys as usize);
        assert_eq!(data.master_key_settings.max_keys, max_keys);
    }
}

#[test]
fn files_without_free_read_stay_empty() {
    let mut m = MockTransport::new();
    common::push_picc_header(&mut m, OPEN_MASTER_SETTINGS, &[0x00]);
    m.push_ok(&aid(1));
    common::push_application(
        &mut m,
        OPEN_APP_SETTINGS,
        &[0x00, 0x00],
        &[
            protected_standard_file(1, 32),
            free_value_file(2, 150),
            free_standard_file(3, &[]),
        ],
    );

    let mut poller = Poller::new(m);
    assert_eq!(common::run_to_event(&mut poller), PollerEvent::ReadSuccess);

    let data = poller.take_data().unwrap();
    let app = &data.applications[0];
    assert!(app.file_data[0].is_empty());
    assert_eq!(app.file_data[1].as_bytes(), &150i32.to_le_bytes());
    assert!(app.file_data[2].is_empty());

    // Only the value file issued a content read, and nothing is left unread.
    let reads: Vec<_> = poller
        .transport()
        .sent
        .iter()
        .filter(|tx| matches!(tx[0], 0xBD | 0x6C | 0xBB))
        .collect();
    assert_eq!(reads, vec![&vec![0x6C, 0x02]]);
    assert_eq!(poller.transport().remaining(), 0);
}

#[test]
fn large_file_is_read_in_capacity_slices() {
    let content: Vec<u8> = (0..70).collect();
    let mut m = MockTransport::new();
    common::push_picc_header(&mut m, OPEN_MASTER_SETTINGS, &[0x00]);
    m.push_ok(&aid(1));
    m.push_ok(&[]);
    m.push_ok(&[0x0B, 0x00]);
    m.push_ok(&[0x01]);
    m.push_ok(&standard_file_settings(70, 0xEEEE));
    for chunk in content.chunks(28) {
        m.push_ok(chunk);
    }

    // 28 is the smallest capacity that still holds a GetVersion answer.
    let config = PollerConfig::new().with_buffer_capacity(28);
    let mut poller = Poller::with_config(m, config);
    assert_eq!(common::run_to_event(&mut poller), PollerEvent::ReadSuccess);
    let data = poller.take_data().unwrap();
    assert_eq!(data.applications[0].file_data[0].as_bytes(), &content[..]);

    let reads: Vec<Vec<u8>> = poller
        .into_transport()
        .sent
        .into_iter()
        .filter(|tx| tx[0] == 0xBD)
        .collect();
    assert_eq!(
        reads,
        vec![
            vec![0xBD, 0x01, 0, 0, 0, 28, 0, 0],
            vec![0xBD, 0x01, 28, 0, 0, 28, 0, 0],
            vec![0xBD, 0x01, 56, 0, 0, 14, 0, 0],
        ]
    );
}

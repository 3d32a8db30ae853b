#[path = "../common/mod.rs"]
mod common;

use libdesfire::poller::{check_card_type, Poller};
use libdesfire::transport::MockTransport;
use libdesfire::Error;

#[test]
fn detects_desfire_when_both_commands_answer() {
    let mut m = MockTransport::new();
    m.push_ok(&[0x00]);
    m.push_ok(&common::version_payload());

    let mut poller = Poller::new(m);
    assert!(poller.detect());
    assert_eq!(
        poller.into_transport().sent,
        vec![vec![0x64, 0x00], vec![0x60]]
    );
}

#[test]
fn multi_frame_version_is_detected() {
    let payload = common::version_payload();
    let mut m = MockTransport::new();
    m.push_ok(&[0x00]);
    let mut first = vec![0xAF];
    first.extend_from_slice(&payload[..7]);
    let mut second = vec![0xAF];
    second.extend_from_slice(&payload[7..14]);
    let mut third = vec![0x00];
    third.extend_from_slice(&payload[14..]);
    m.push_response(first);
    m.push_response(second);
    m.push_response(third);

    assert!(Poller::new(m).detect());
}

#[test]
fn any_failure_means_not_desfire() {
    let mut m = MockTransport::new();
    m.push_error(Error::Timeout);
    assert!(!Poller::new(m).detect());

    let mut m = MockTransport::new();
    m.push_ok(&[0x00]);
    m.push_ok(&[0x01, 0x02]);
    assert!(!Poller::new(m).detect());

    let mut m = MockTransport::new();
    m.push_status(0xAE);
    assert!(!Poller::new(m).detect());
}

#[test]
fn activation_data_filter() {
    assert!(check_card_type([0x44, 0x03], 0x20));
    assert!(!check_card_type([0x04, 0x00], 0x08));
}

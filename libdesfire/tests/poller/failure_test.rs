#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libdesfire::poller::{Poller, PollerCommand, PollerEvent, PollerState};
use libdesfire::transport::MockTransport;
use libdesfire::{Error, ErrorKind};

#[test]
fn timeout_in_second_application_fails_whole_read() {
    let mut m = MockTransport::new();
    common::push_picc_header(&mut m, OPEN_MASTER_SETTINGS, &[0x00]);
    m.push_ok(&application_ids(&[aid(1), aid(2), aid(3)]));
    common::push_application(&mut m, OPEN_APP_SETTINGS, &[1, 1], &[free_standard_file(1, &[9; 4])]);
    m.push_ok(&[]);
    m.push_ok(&OPEN_APP_SETTINGS);
    m.push_error(Error::Timeout);

    let mut poller = Poller::new(m);
    assert_eq!(
        common::run_to_event(&mut poller),
        PollerEvent::ReadFailed(Error::Timeout)
    );
    assert!(poller.data().is_none());
    assert!(poller.take_data().is_none());

    let m = poller.into_transport();
    assert_eq!(m.halts, 1);
    // application 3 was never selected
    assert!(!m.sent.contains(&vec![0x5A, 0x03, 0x00, 0x00]));
}

#[test]
fn card_error_on_version_is_protocol() {
    let mut m = MockTransport::new();
    m.push_status(0x1C);
    let mut poller = Poller::new(m);
    match common::run_to_event(&mut poller) {
        PollerEvent::ReadFailed(err) => {
            assert_eq!(err, Error::UnexpectedStatus(0x1C));
            assert_eq!(err.kind(), ErrorKind::Protocol);
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(poller.transport().halts, 0);
}

#[test]
fn authentication_on_file_ids_is_fatal() {
    let mut m = MockTransport::new();
    common::push_picc_header(&mut m, OPEN_MASTER_SETTINGS, &[0x00]);
    m.push_ok(&aid(1));
    m.push_ok(&[]);
    m.push_ok(&[0x0B, 0x00]);
    m.push_status(0xAE);

    let mut poller = Poller::new(m);
    assert_eq!(
        common::run_to_event(&mut poller),
        PollerEvent::ReadFailed(Error::Authentication)
    );
}

#[test]
fn failure_then_retry_succeeds() {
    let mut m = MockTransport::new();
    m.push_error(Error::NotPresent);
    common::push_picc_header(&mut m, [0x09, 0x00], &[]);

    let mut events = Vec::new();
    let mut poller = Poller::new(m);
    poller.start(|event: &PollerEvent, data: Option<&libdesfire::DesfireData>| {
        events.push(event.clone());
        match event {
            PollerEvent::ReadFailed(_) => {
                assert!(data.is_none());
                PollerCommand::Continue
            }
            PollerEvent::ReadSuccess => {
                assert!(data.is_some());
                PollerCommand::Stop
            }
        }
    });

    assert_eq!(
        events,
        vec![PollerEvent::ReadFailed(Error::NotPresent), PollerEvent::ReadSuccess]
    );
    assert_eq!(poller.state(), PollerState::Idle);
    assert!(poller.take_data().is_some());
    assert_eq!(poller.transport().halts, 1);
}

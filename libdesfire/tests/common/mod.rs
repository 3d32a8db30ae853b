// Shared helpers for integration tests.
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use libdesfire::test_support::{push_application, push_picc_header, version_payload};

use libdesfire::poller::{Poller, PollerEvent};
use libdesfire::transport::Transport;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tick until a terminal event is emitted.
pub fn run_to_event<T: Transport>(poller: &mut Poller<T>) -> PollerEvent {
    init_logging();
    for _ in 0..64 {
        if let Some(event) = poller.tick() {
            return event;
        }
    }
    panic!("poller did not finish, stuck in {}", poller.state());
}

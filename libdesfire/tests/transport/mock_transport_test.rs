use libdesfire::transport::{MockTransport, Transport};

#[test]
fn responses_are_replayed_in_order() {
    let mut m = MockTransport::new();
    m.push_ok(&[0x01]);
    m.push_status(0xAE);

    assert_eq!(m.send_block(&[0x6E]).unwrap(), vec![0x00, 0x01]);
    assert_eq!(m.send_block(&[0x45]).unwrap(), vec![0xAE]);
    assert_eq!(m.sent, vec![vec![0x6E], vec![0x45]]);
    assert_eq!(m.pop_sent(), Some(vec![0x45]));
}

#[test]
fn boxed_transport_is_usable_as_trait_object() {
    let mut m = MockTransport::new();
    m.push_ok(&[]);
    let mut boxed: Box<dyn Transport> = Box::new(m);
    assert_eq!(boxed.send_block(&[0x5A, 1, 2, 3]).unwrap(), vec![0x00]);
    boxed.halt().unwrap();
}

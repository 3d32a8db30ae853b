use libdesfire::protocol::chunk::ChunkReassembler;
use libdesfire::transport::MockTransport;
use libdesfire::Error;

#[test]
fn three_frames_reassemble_in_order() -> anyhow::Result<()> {
    let mut m = MockTransport::new();
    m.push_response(hex::decode("af04010101001a05")?);
    m.push_response(hex::decode("af04010101041a05")?);
    m.push_response(hex::decode("00045a3c22916b80ba349950601319")?);

    let out = ChunkReassembler::default().send(&mut m, &[0x60])?;
    assert_eq!(out.len(), 28);
    assert_eq!(
        out,
        hex::decode("04010101001a0504010101041a05045a3c22916b80ba349950601319")?
    );
    assert_eq!(m.sent, vec![vec![0x60], vec![0xAF], vec![0xAF]]);
    Ok(())
}

#[test]
fn status_only_frames_yield_empty_payload() {
    let mut m = MockTransport::new();
    m.push_status(0xAF);
    m.push_status(0x00);
    let out = ChunkReassembler::default().send(&mut m, &[0x6A]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn first_frame_larger_than_capacity_is_truncated() {
    let mut m = MockTransport::new();
    let mut frame = vec![0x00];
    frame.extend(0..10u8);
    m.push_response(frame);
    let out = ChunkReassembler::new(6).send(&mut m, &[0xBD]).unwrap();
    assert_eq!(out, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn overflow_keeps_following_frames_that_fit() {
    let mut m = MockTransport::new();
    let mut first = vec![0xAF];
    first.extend([0x11; 500]);
    let mut second = vec![0xAF];
    second.extend([0x33; 20]);
    m.push_response(first);
    // 20 bytes do not fit after 500 of 512 and are dropped.
    m.push_response(second);
    m.push_response(vec![0x00, 0x22, 0x22]);

    let out = ChunkReassembler::default().send(&mut m, &[0xBD]).unwrap();
    assert_eq!(out.len(), 502);
    assert_eq!(&out[500..], &[0x22, 0x22]);
}

#[test]
fn link_errors_pass_through() {
    let mut m = MockTransport::new();
    m.push_error(Error::Timeout);
    assert_eq!(
        ChunkReassembler::default().send(&mut m, &[0x60]),
        Err(Error::Timeout)
    );
}

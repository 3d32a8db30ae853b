use libdesfire::card::FileKind;
use libdesfire::protocol::responses::decode_file_settings;
use libdesfire::types::{AccessRights, CommunicationMode};
use libdesfire::{Error, ErrorKind};
use proptest::prelude::*;

fn header(file_type: u8, comm: u8, access: u16) -> Vec<u8> {
    let mut v = vec![file_type, comm];
    v.extend_from_slice(&access.to_le_bytes());
    v
}

#[test]
fn comm_mode_two_is_rejected() {
    let mut data = header(0x00, 0x02, 0xEEEE);
    data.extend_from_slice(&[0x10, 0x00, 0x00]);
    let err = decode_file_settings(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[test]
fn linear_record_fields() {
    let mut data = header(0x03, 0x01, 0x3210);
    data.extend_from_slice(&hex::decode("200000").unwrap());
    data.extend_from_slice(&hex::decode("0a0000").unwrap());
    data.extend_from_slice(&hex::decode("040000").unwrap());

    let fs = decode_file_settings(&data).unwrap();
    assert_eq!(
        fs.kind,
        FileKind::LinearRecord {
            size: 0x20,
            max: 10,
            cur: 4
        }
    );
    assert_eq!(fs.comm, CommunicationMode::Authenticated);
    let ar = fs.access_rights[0];
    assert_eq!((ar.read(), ar.write(), ar.read_write(), ar.change()), (3, 2, 1, 0));
    assert!(!fs.is_free_read());
}

#[test]
fn declared_rights_beyond_payload_are_rejected() {
    let mut data = header(0x00, 0x80, 0x0000);
    data.extend_from_slice(&[0x04, 0x00, 0x00]);
    data.push(3);
    data.extend_from_slice(&[0x11, 0x11, 0x22, 0x22]);
    assert!(matches!(
        decode_file_settings(&data),
        Err(Error::InvalidLength { .. })
    ));
}

proptest! {
    #[test]
    fn standard_and_backup_size_roundtrip(backup in any::<bool>(), size in 0u32..0x0100_0000) {
        let mut data = header(backup as u8, 0x00, 0xEEEE);
        data.extend_from_slice(&size.to_le_bytes()[..3]);
        let fs = decode_file_settings(&data).unwrap();
        prop_assert_eq!(fs.kind.size(), Some(size));
        prop_assert_eq!(fs.to_bytes(), data);
    }

    #[test]
    fn value_fields_roundtrip(lo in any::<u32>(), hi in any::<u32>(), lcv in any::<u32>(), en in any::<bool>()) {
        let mut data = header(0x02, 0x03, 0x0000);
        data.extend_from_slice(&lo.to_le_bytes());
        data.extend_from_slice(&hi.to_le_bytes());
        data.extend_from_slice(&lcv.to_le_bytes());
        data.push(en as u8);
        let fs = decode_file_settings(&data).unwrap();
        prop_assert_eq!(
            fs.kind,
            FileKind::Value { lo_limit: lo, hi_limit: hi, limited_credit_value: lcv, limited_credit_enabled: en }
        );
    }

    #[test]
    fn record_fields_roundtrip(cyclic in any::<bool>(), size in 0u32..0x0100_0000, max in 0u32..0x0100_0000, cur in 0u32..0x0100_0000) {
        let mut data = header(if cyclic { 4 } else { 3 }, 0x00, 0xEEEE);
        data.extend_from_slice(&size.to_le_bytes()[..3]);
        data.extend_from_slice(&max.to_le_bytes()[..3]);
        data.extend_from_slice(&cur.to_le_bytes()[..3]);
        let fs = decode_file_settings(&data).unwrap();
        let expected = if cyclic {
            FileKind::CyclicRecord { size, max, cur }
        } else {
            FileKind::LinearRecord { size, max, cur }
        };
        prop_assert_eq!(fs.kind, expected);
    }

    #[test]
    fn additional_rights_tail_matches(extra in prop::collection::vec(any::<u16>(), 0..=14)) {
        let mut data = header(0x00, 0x80, 0x1234);
        data.extend_from_slice(&[0x08, 0x00, 0x00]);
        data.push(extra.len() as u8);
        for ar in &extra {
            data.extend_from_slice(&ar.to_le_bytes());
        }
        let fs = decode_file_settings(&data).unwrap();
        prop_assert_eq!(fs.access_rights.len(), 1 + extra.len());
        let tail: Vec<AccessRights> = extra.iter().copied().map(AccessRights::new).collect();
        prop_assert_eq!(&fs.access_rights[1..], &tail[..]);
    }

    #[test]
    fn truncated_additional_rights_fail(count in 1u8..=14, missing in 1usize..=2) {
        let mut data = header(0x01, 0x80, 0x0000);
        data.extend_from_slice(&[0x08, 0x00, 0x00]);
        data.push(count);
        data.extend(std::iter::repeat(0xAA).take(count as usize * 2 - missing));
        let err = decode_file_settings(&data).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}

#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::responses::*;
use libdesfire::types::{ApplicationId, FileId};
use libdesfire::{Error, ErrorKind};
use proptest::prelude::*;

#[test]
fn version_decodes_sample_card() {
    let v = decode_version(&common::version_payload()).unwrap();
    assert_eq!(v.uid, libdesfire::test_support::SAMPLE_UID);
    assert_eq!(v.hw.storage, 0x1A);
    assert_eq!(v.sw.minor, 0x04);
    assert_eq!(v.to_bytes().to_vec(), common::version_payload());
}

#[test]
fn version_wrong_size_is_protocol_error() {
    let mut payload = common::version_payload();
    payload.pop();
    let err = decode_version(&payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[test]
fn application_ids_decode_in_order() {
    let ids = decode_application_ids(&hex::decode("010000020000f0f0f0").unwrap());
    assert_eq!(
        ids,
        vec![
            ApplicationId::from_bytes([1, 0, 0]),
            ApplicationId::from_bytes([2, 0, 0]),
            ApplicationId::from_bytes([0xF0, 0xF0, 0xF0]),
        ]
    );
    assert_eq!(ids[2].to_string(), "f0f0f0");
}

#[test]
fn file_ids_limit() {
    let ids: Vec<u8> = (0..32).collect();
    assert_eq!(decode_file_ids(&ids).unwrap().len(), 32);
    assert_eq!(decode_file_ids(&ids).unwrap()[31], FileId::new(31));
    let mut too_many = ids.clone();
    too_many.push(32);
    assert!(matches!(
        decode_file_ids(&too_many),
        Err(Error::InvalidField(_))
    ));
}

proptest! {
    #[test]
    fn free_memory_only_present_for_three_bytes(v in prop::collection::vec(any::<u8>(), 0..16)) {
        let fm = decode_free_memory(&v);
        prop_assert_eq!(fm.is_present, v.len() == 3);
        if v.len() == 3 {
            prop_assert_eq!(fm.bytes_free, u32::from_le_bytes([v[0], v[1], v[2], 0]));
        }
    }

    #[test]
    fn version_roundtrip(bytes in prop::array::uniform28(any::<u8>())) {
        let v = decode_version(&bytes).unwrap();
        prop_assert_eq!(v.to_bytes(), bytes);
    }

    #[test]
    fn key_version_roundtrip(b in any::<u8>()) {
        prop_assert_eq!(decode_key_version(&[b]).unwrap().as_u8(), b);
    }

    #[test]
    fn application_id_roundtrip(bytes in prop::array::uniform3(any::<u8>())) {
        let ids = decode_application_ids(&bytes);
        prop_assert_eq!(ids.len(), 1);
        prop_assert_eq!(*ids[0].as_bytes(), bytes);
    }

    #[test]
    fn file_id_roundtrip(b in any::<u8>()) {
        prop_assert_eq!(decode_file_ids(&[b]).unwrap()[0].as_u8(), b);
    }
}

use libdesfire::protocol::commands::*;
use libdesfire::types::{ApplicationId, FileId};

#[test]
fn fixed_commands_are_single_opcode() {
    assert_eq!(encode_get_version(), vec![0x60]);
    assert_eq!(encode_get_free_memory(), vec![0x6E]);
    assert_eq!(encode_get_key_settings(), vec![0x45]);
    assert_eq!(encode_get_application_ids(), vec![0x6A]);
    assert_eq!(encode_get_file_ids(), vec![0x6F]);
}

#[test]
fn select_application_carries_id_bytes() {
    let aid = ApplicationId::from_bytes([0x12, 0x34, 0x56]);
    assert_eq!(
        Command::SelectApplication { aid }.encode(),
        vec![0x5A, 0x12, 0x34, 0x56]
    );
}

#[test]
fn read_data_offset_and_length_are_three_byte_le() {
    let cmd = Command::ReadData {
        file_id: FileId::new(0x02),
        offset: 0x000200,
        length: 0x000150,
    };
    assert_eq!(
        cmd.encode(),
        hex::decode("bd02000200500100").unwrap()
    );
}

#[test]
fn read_records_and_get_value() {
    assert_eq!(
        encode_read_records(FileId::new(5), 0, 16),
        vec![0xBB, 0x05, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00]
    );
    assert_eq!(encode_get_value(FileId::new(5)), vec![0x6C, 0x05]);
    assert_eq!(encode_get_file_settings(FileId::new(7)), vec![0xF5, 0x07]);
    assert_eq!(encode_get_key_version(0x0D), vec![0x64, 0x0D]);
}

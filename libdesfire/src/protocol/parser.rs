// libdesfire/src/protocol/parser.rs

//! Bounds-checked byte readers for response decoding.

use crate::{Error, Result};

/// Fail with `InvalidLength` unless `data` holds `min` bytes or more.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Byte at `idx`, or `InvalidLength` past the end.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Borrow `len` bytes starting at `idx`.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Little-endian u16 at `idx`.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Read a 3-byte little-endian field into the low bytes of a u32.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 3)?;
    Ok(u32::from_le_bytes([data[idx], data[idx + 1], data[idx + 2], 0]))
}

/// Little-endian u32 at `idx`.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 4)?;
    Ok(u32::from_le_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Append the low 3 bytes of `value`, little-endian. The top byte is dropped.
pub fn push_le_u24(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes()[..3]);
}

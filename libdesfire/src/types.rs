// libdesfire/src/types.rs

//! Newtypes and small wire enums for identifiers, file tags and access rights.

use crate::Error;
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ApplicationId - Newtype Pattern (3 bytes, wire order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApplicationId([u8; 3]);

impl ApplicationId {
    /// The PICC level application (card master)
    pub const PICC: Self = Self([0, 0, 0]);

    /// Build from the three bytes as they appear on the wire (LSB first).
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Wire-order bytes.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Lowercase hex in wire order, e.g. `"abcdef"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for ApplicationId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 3 {
            return Err(Error::InvalidLength {
                expected: 3,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 3];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// FileId (u8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileId(u8);

impl FileId {
    /// Wrap a raw file number.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw file number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// KeyVersion (u8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyVersion(u8);

impl KeyVersion {
    /// Wrap a raw key version.
    pub const fn new(version: u8) -> Self {
        Self(version)
    }

    /// Raw key version.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Wire tag of a file, as reported by GetFileSettings
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileType {
    /// Plain data file.
    #[display(fmt = "standard")]
    Standard = 0,
    /// Data file with a mirrored commit buffer.
    #[display(fmt = "backup")]
    Backup = 1,
    /// Signed 32-bit value with limits.
    #[display(fmt = "value")]
    Value = 2,
    /// Record file that stops when full.
    #[display(fmt = "linear")]
    LinearRecord = 3,
    /// Record file that overwrites the oldest record.
    #[display(fmt = "cyclic")]
    CyclicRecord = 4,
}

impl TryFrom<u8> for FileType {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Backup),
            2 => Ok(Self::Value),
            3 => Ok(Self::LinearRecord),
            4 => Ok(Self::CyclicRecord),
            other => Err(Error::InvalidField(format!("unknown file type {:#04x}", other))),
        }
    }
}

/// CommunicationMode (low two bits of the comm byte)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommunicationMode {
    /// No MAC, no encryption.
    #[default]
    #[display(fmt = "plain")]
    Plaintext = 0,
    /// MACed.
    #[display(fmt = "auth")]
    Authenticated = 1,
    /// Fully enciphered.
    #[display(fmt = "enciphered")]
    Enciphered = 3,
}

impl TryFrom<u8> for CommunicationMode {
    type Error = Error;

    /// Only the two low bits are significant; callers strip bit 7 first.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value & 0x03 {
            0 => Ok(Self::Plaintext),
            1 => Ok(Self::Authenticated),
            3 => Ok(Self::Enciphered),
            _ => Err(Error::InvalidField(
                "communication mode 2 is undefined".to_string(),
            )),
        }
    }
}

/// AccessRights (u16) - four key-number nibbles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessRights(u16);

impl AccessRights {
    /// Wrap the raw 16-bit value.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Decode the little-endian wire form.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Little-endian wire form.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Raw value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Key number granting read access.
    pub fn read(&self) -> u8 {
        ((self.0 >> 12) & 0x0f) as u8
    }

    /// Key number granting write access.
    pub fn write(&self) -> u8 {
        ((self.0 >> 8) & 0x0f) as u8
    }

    /// Key number granting read and write access.
    pub fn read_write(&self) -> u8 {
        ((self.0 >> 4) & 0x0f) as u8
    }

    /// Key number allowed to change these rights.
    pub fn change(&self) -> u8 {
        (self.0 & 0x0f) as u8
    }

    /// Whether file content can be read without authenticating.
    pub fn is_free_read(&self) -> bool {
        self.read() == crate::constants::ACCESS_FREE
            || self.read_write() == crate::constants::ACCESS_FREE
    }
}

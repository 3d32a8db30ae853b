#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free memory reported by GetFreeMemory. `is_present == false` means the
/// card did not answer the command with a 3-byte count, which is distinct
/// from a card with zero bytes left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeMemory {
    /// Free bytes, 24 bits.
    pub bytes_free: u32,
    /// Whether the card answered with a count.
    pub is_present: bool,
}

impl FreeMemory {
    /// A reported count, masked to 24 bits.
    pub fn present(bytes_free: u32) -> Self {
        Self {
            bytes_free: bytes_free & 0x00ff_ffff,
            is_present: true,
        }
    }

    /// `Some(bytes_free)` when present.
    pub fn bytes(&self) -> Option<u32> {
        self.is_present.then_some(self.bytes_free)
    }
}

/// Key settings of the PICC master key or of one application.
///
/// Wire layout (2 bytes):
/// byte0 bit0 master key changeable, bit1 free directory list,
/// bit2 free create/delete, bit3 config changeable, bits4..7 change key id;
/// byte1 bits0..3 max keys, bits4..7 flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeySettings {
    /// The master key can be changed.
    pub is_master_key_changeable: bool,
    /// Directory listing works without authentication.
    pub is_free_directory_list: bool,
    /// Create and delete work without authentication.
    pub is_free_create_delete: bool,
    /// The configuration can be changed.
    pub is_config_changeable: bool,
    /// Key number required to change keys.
    pub change_key_id: u8,
    /// Number of keys, at most 14.
    pub max_keys: u8,
    /// Upper nibble of the second byte.
    pub flags: u8,
}

impl KeySettings {
    /// Settings assumed when the card refuses GetKeySettings without
    /// authentication at PICC level.
    pub fn restricted_master() -> Self {
        Self {
            is_free_directory_list: false,
            max_keys: 1,
            ..Self::default()
        }
    }

    /// Settings assumed for an application whose key settings are hidden.
    pub fn restricted_application() -> Self {
        Self {
            is_free_directory_list: false,
            max_keys: 0,
            ..Self::default()
        }
    }

    /// Decode the 2-byte wire layout.
    pub fn from_bytes(b: [u8; 2]) -> Self {
        Self {
            is_master_key_changeable: b[0] & 0x01 != 0,
            is_free_directory_list: b[0] & 0x02 != 0,
            is_free_create_delete: b[0] & 0x04 != 0,
            is_config_changeable: b[0] & 0x08 != 0,
            change_key_id: b[0] >> 4,
            max_keys: b[1] & 0x0f,
            flags: b[1] >> 4,
        }
    }

    /// Encode the 2-byte wire layout.
    pub fn to_bytes(&self) -> [u8; 2] {
        let mut b0 = (self.change_key_id & 0x0f) << 4;
        if self.is_master_key_changeable {
            b0 |= 0x01;
        }
        if self.is_free_directory_list {
            b0 |= 0x02;
        }
        if self.is_free_create_delete {
            b0 |= 0x04;
        }
        if self.is_config_changeable {
            b0 |= 0x08;
        }
        let b1 = (self.max_keys & 0x0f) | ((self.flags & 0x0f) << 4);
        [b0, b1]
    }
}

use crate::types::{AccessRights, CommunicationMode, FileType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type-specific part of the file settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileKind {
    /// Plain data file.
    Standard {
        /// File size in bytes.
        size: u32,
    },
    /// Backup data file.
    Backup {
        /// File size in bytes.
        size: u32,
    },
    /// Value file.
    Value {
        /// Lower limit.
        lo_limit: u32,
        /// Upper limit.
        hi_limit: u32,
        /// Limited credit value.
        limited_credit_value: u32,
        /// Whether limited credit is enabled.
        limited_credit_enabled: bool,
    },
    /// Linear record file.
    LinearRecord {
        /// Record size in bytes.
        size: u32,
        /// Maximum number of records.
        max: u32,
        /// Records currently written.
        cur: u32,
    },
    /// Cyclic record file.
    CyclicRecord {
        /// Record size in bytes.
        size: u32,
        /// Maximum number of records.
        max: u32,
        /// Records currently written.
        cur: u32,
    },
}

impl FileKind {
    /// Wire tag of this kind.
    pub fn file_type(&self) -> FileType {
        match self {
            Self::Standard { .. } => FileType::Standard,
            Self::Backup { .. } => FileType::Backup,
            Self::Value { .. } => FileType::Value,
            Self::LinearRecord { .. } => FileType::LinearRecord,
            Self::CyclicRecord { .. } => FileType::CyclicRecord,
        }
    }

    /// Size in bytes: the file size for data files, the record size for
    /// record files and `None` for value files.
    pub fn size(&self) -> Option<u32> {
        match *self {
            Self::Standard { size }
            | Self::Backup { size }
            | Self::LinearRecord { size, .. }
            | Self::CyclicRecord { size, .. } => Some(size),
            Self::Value { .. } => None,
        }
    }
}

/// Decoded GetFileSettings response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileSettings {
    /// Type-specific part.
    pub kind: FileKind,
    /// Communication mode for file content.
    pub comm: CommunicationMode,
    /// Primary entry first, followed by any additional entries.
    pub access_rights: Vec<AccessRights>,
}

impl FileSettings {
    /// Settings with a single access-rights entry.
    pub fn new(kind: FileKind, comm: CommunicationMode, access_rights: AccessRights) -> Self {
        Self {
            kind,
            comm,
            access_rights: vec![access_rights],
        }
    }

    /// Wire tag of the file.
    pub fn file_type(&self) -> FileType {
        self.kind.file_type()
    }

    /// Whether any access-rights entry grants free read access.
    pub fn is_free_read(&self) -> bool {
        self.access_rights.iter().any(AccessRights::is_free_read)
    }

    /// Encode back into the wire layout accepted by the decoder.
    pub fn to_bytes(&self) -> Vec<u8> {
        let extra = self.access_rights.len().saturating_sub(1);
        let mut comm = self.comm as u8;
        if extra > 0 {
            comm |= 0x80;
        }

        let primary = self.access_rights.first().copied().unwrap_or_default();
        let mut out = Vec::with_capacity(4 + 13 + 1 + extra * 2);
        out.push(self.file_type() as u8);
        out.push(comm);
        out.extend_from_slice(&primary.to_le_bytes());

        match self.kind {
            FileKind::Standard { size } | FileKind::Backup { size } => {
                crate::protocol::parser::push_le_u24(&mut out, size);
            }
            FileKind::Value {
                lo_limit,
                hi_limit,
                limited_credit_value,
                limited_credit_enabled,
            } => {
                out.extend_from_slice(&lo_limit.to_le_bytes());
                out.extend_from_slice(&hi_limit.to_le_bytes());
                out.extend_from_slice(&limited_credit_value.to_le_bytes());
                out.push(limited_credit_enabled as u8);
            }
            FileKind::LinearRecord { size, max, cur } | FileKind::CyclicRecord { size, max, cur } => {
                crate::protocol::parser::push_le_u24(&mut out, size);
                crate::protocol::parser::push_le_u24(&mut out, max);
                crate::protocol::parser::push_le_u24(&mut out, cur);
            }
        }

        if extra > 0 {
            out.push(extra as u8);
            for ar in &self.access_rights[1..] {
                out.extend_from_slice(&ar.to_le_bytes());
            }
        }

        out
    }
}

/// Raw file content. Empty when the file is empty or could not be read
/// without authentication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileData(Vec<u8>);

impl FileData {
    /// Wrap raw content.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the raw content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was read.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap the raw bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for FileData {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

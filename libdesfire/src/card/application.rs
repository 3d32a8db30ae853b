use crate::card::file::{FileData, FileSettings};
use crate::card::key::KeySettings;
use crate::types::{FileId, KeyVersion};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One application directory. `file_settings` and `file_data` are
/// index-aligned with `file_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Application {
    /// Application key settings.
    pub key_settings: KeySettings,
    /// One entry per key, `key_settings.max_keys` long.
    pub key_versions: Vec<KeyVersion>,
    /// File directory in card order.
    pub file_ids: Vec<FileId>,
    /// Settings per file.
    pub file_settings: Vec<FileSettings>,
    /// Content per file; empty for protected files.
    pub file_data: Vec<FileData>,
}

impl Application {
    /// Number of files in the directory.
    pub fn file_count(&self) -> usize {
        self.file_ids.len()
    }

    /// Iterate `(id, settings, data)` triples in file-id order.
    pub fn files(&self) -> impl Iterator<Item = (FileId, &FileSettings, &FileData)> {
        self.file_ids
            .iter()
            .zip(self.file_settings.iter())
            .zip(self.file_data.iter())
            .map(|((id, settings), data)| (*id, settings, data))
    }

    /// Settings and data of file `id`.
    pub fn file(&self, id: FileId) -> Option<(&FileSettings, &FileData)> {
        let idx = self.file_ids.iter().position(|f| *f == id)?;
        Some((self.file_settings.get(idx)?, self.file_data.get(idx)?))
    }
}

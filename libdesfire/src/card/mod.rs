// libdesfire/src/card/mod.rs

//! Card model: what one read session learns about a DESFire card.

use crate::types::{ApplicationId, KeyVersion};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod application;
mod file;
mod info;
mod key;
mod version;

pub mod format;

pub use application::Application;
pub use file::{FileData, FileKind, FileSettings};
pub use info::{render, CardInfo};
pub use key::{FreeMemory, KeySettings};
pub use version::{DesfireVersion, VersionInfo};

/// Everything read from one DESFire card during a poller session.
///
/// `applications` is index-aligned with `application_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesfireData {
    /// GetVersion data.
    pub version: DesfireVersion,
    /// GetFreeMemory result.
    pub free_memory: FreeMemory,
    /// PICC key settings.
    pub master_key_settings: KeySettings,
    /// PICC key versions.
    pub master_key_versions: Vec<KeyVersion>,
    /// Application directory.
    pub application_ids: Vec<ApplicationId>,
    /// One entry per id in `application_ids`.
    pub applications: Vec<Application>,
}

impl DesfireData {
    /// Empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Card UID from the version data.
    pub fn uid(&self) -> &[u8; 7] {
        &self.version.uid
    }

    /// Application with the given id.
    pub fn application(&self, id: ApplicationId) -> Option<&Application> {
        let idx = self.application_ids.iter().position(|a| *a == id)?;
        self.applications.get(idx)
    }

    /// Iterate `(id, application)` pairs in directory order.
    pub fn iter_applications(&self) -> impl Iterator<Item = (ApplicationId, &Application)> {
        self.application_ids
            .iter()
            .copied()
            .zip(self.applications.iter())
    }
}

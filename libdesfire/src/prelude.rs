// libdesfire/src/prelude.rs

//! Commonly used types in one import.

pub use crate::card::{Application, CardInfo, DesfireData, FileData, FileKind, FileSettings};
pub use crate::poller::{Poller, PollerCommand, PollerConfig, PollerEvent, PollerState};
pub use crate::protocol::{Command, Response};
pub use crate::transport::Transport;
pub use crate::{
    AccessRights, ApplicationId, CommunicationMode, Error, ErrorKind, FileId, FileType,
    KeyVersion, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};

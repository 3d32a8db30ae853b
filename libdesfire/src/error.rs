// libdesfire/src/error.rs

//! Error taxonomy shared by the codec, the poller and the persistence format.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The card left the field.
    #[error("card is not present")]
    NotPresent,

    /// The card stopped answering.
    #[error("operation timed out")]
    Timeout,

    /// The card wants an authenticated session for this command.
    #[error("authentication required")]
    Authentication,

    /// Response payload of the wrong size.
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Byte count the decoder required.
        expected: usize,
        /// Byte count the card returned.
        actual: usize,
    },

    /// A response field holds a value outside its domain.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Final status byte other than ok or authentication error.
    #[error("unexpected card status: {0:#04x}")]
    UnexpectedStatus(u8),

    /// Link-layer failure other than card loss or timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// A required key is absent from a saved field set.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A saved field has the wrong type or an out-of-range value.
    #[error("invalid value for {0}")]
    InvalidValue(String),
}

/// Coarse classification used by the poller's degradation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Card gone.
    NotPresent,
    /// No answer in time.
    Timeout,
    /// Malformed or unexpected response.
    Protocol,
    /// Keys required.
    Authentication,
}

impl Error {
    /// Classify into the coarse taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPresent => ErrorKind::NotPresent,
            Self::Timeout => ErrorKind::Timeout,
            Self::Authentication => ErrorKind::Authentication,
            Self::InvalidLength { .. }
            | Self::InvalidField(_)
            | Self::UnexpectedStatus(_)
            | Self::Transport(_)
            | Self::MissingField(_)
            | Self::InvalidValue(_) => ErrorKind::Protocol,
        }
    }

    /// True when the card has left the field or stopped answering.
    pub fn is_link_loss(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotPresent | ErrorKind::Timeout)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

// libdesfire/src/poller/state.rs

//! Read session states.

/// Poller states in read order. `ReadSuccess` and `ReadFailed` are
/// terminal; the tick that handles them emits the event and returns the
/// poller to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum PollerState {
    /// No session in progress.
    #[default]
    #[display(fmt = "idle")]
    Idle,
    /// GetVersion.
    #[display(fmt = "read version")]
    ReadVersion,
    /// GetFreeMemory.
    #[display(fmt = "read free memory")]
    ReadFreeMemory,
    /// PICC GetKeySettings.
    #[display(fmt = "read master key settings")]
    ReadMasterKeySettings,
    /// PICC key versions, one command per key.
    #[display(fmt = "read master key version")]
    ReadMasterKeyVersion,
    /// GetApplicationIDs.
    #[display(fmt = "read application ids")]
    ReadApplicationIds,
    /// Every application with its keys and files.
    #[display(fmt = "read applications")]
    ReadApplications,
    /// Done; the next tick emits `ReadSuccess`.
    #[display(fmt = "read success")]
    ReadSuccess,
    /// Failed; the next tick emits `ReadFailed`.
    #[display(fmt = "read failed")]
    ReadFailed,
}

impl PollerState {
    /// `ReadSuccess` or `ReadFailed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ReadSuccess | Self::ReadFailed)
    }
}

// libdesfire/src/poller/mod.rs

//! Tick-driven DESFire read session.
//!
//! A [`Poller`] owns its transport and walks the card one state per
//! [`Poller::tick`]: version, free memory, master key settings and versions,
//! then (when the directory is listable) every application with its keys,
//! files and file content. Terminal states surface as a [`PollerEvent`].

mod operations;
mod state;

pub use operations::*;
pub use state::PollerState;

use log::{debug, error, warn};

use crate::card::{DesfireData, KeySettings};
use crate::constants::{DEFAULT_BUFFER_CAPACITY, DESFIRE_ATQA, DESFIRE_SAK};
use crate::protocol::chunk::ChunkReassembler;
use crate::transport::Transport;
use crate::Error;

/// Poller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Capacity of the response assembly buffer; also the largest slice
    /// requested per file read command.
    pub buffer_capacity: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl PollerConfig {
    /// Same as `PollerConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assembly buffer capacity.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

/// Outcome of one read session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollerEvent {
    /// The card model is complete.
    ReadSuccess,
    /// The session failed; the model was discarded.
    ReadFailed(Error),
}

/// What the poller should do after an event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    /// Return to `Idle` and read again.
    Continue,
    /// Leave [`Poller::start`].
    Stop,
}

/// Receives terminal events from [`Poller::start`]. `data` is the card
/// model on success and `None` on failure.
pub trait PollerEventHandler {
    /// Called once per terminal event.
    fn on_event(&mut self, event: &PollerEvent, data: Option<&DesfireData>) -> PollerCommand;
}

impl<F> PollerEventHandler for F
where
    F: FnMut(&PollerEvent, Option<&DesfireData>) -> PollerCommand,
{
    fn on_event(&mut self, event: &PollerEvent, data: Option<&DesfireData>) -> PollerCommand {
        self(event, data)
    }
}

/// Cheap pre-filter on ISO14443-3A activation data.
pub fn check_card_type(atqa: [u8; 2], sak: u8) -> bool {
    atqa == DESFIRE_ATQA && sak == DESFIRE_SAK
}

/// DESFire read orchestrator.
pub struct Poller<T: Transport> {
    transport: T,
    reassembler: ChunkReassembler,
    state: PollerState,
    data: Option<DesfireData>,
    error: Option<Error>,
}

impl<T: Transport> Poller<T> {
    /// Poller with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, PollerConfig::default())
    }

    /// Poller with an explicit configuration.
    pub fn with_config(transport: T, config: PollerConfig) -> Self {
        Self {
            transport,
            reassembler: ChunkReassembler::new(config.buffer_capacity),
            state: PollerState::Idle,
            data: None,
            error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Card model of the current or last successful session. `None` after
    /// a failed session.
    pub fn data(&self) -> Option<&DesfireData> {
        self.data.as_ref()
    }

    /// Take ownership of the card model once a session has succeeded.
    pub fn take_data(&mut self) -> Option<DesfireData> {
        match self.state {
            PollerState::Idle | PollerState::ReadSuccess => self.data.take(),
            _ => None,
        }
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Give the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Abandon the current session.
    pub fn reset(&mut self) {
        self.state = PollerState::Idle;
        self.data = None;
        self.error = None;
    }

    /// Identify a DESFire card: GetKeyVersion(0) and GetVersion must both
    /// succeed.
    pub fn detect(&mut self) -> bool {
        let rx = &self.reassembler;
        let ok = operations::read_key_versions(rx, &mut self.transport, 1).is_ok()
            && operations::read_version(rx, &mut self.transport).is_ok();
        debug!("detect: {}", ok);
        ok
    }

    /// Run sessions until the handler returns [`PollerCommand::Stop`].
    pub fn start<H: PollerEventHandler>(&mut self, mut handler: H) {
        loop {
            let Some(event) = self.tick() else {
                continue;
            };
            if handler.on_event(&event, self.data.as_ref()) == PollerCommand::Stop {
                return;
            }
        }
    }

    /// Advance exactly one state.
    pub fn tick(&mut self) -> Option<PollerEvent> {
        match self.state {
            PollerState::Idle => {
                self.data = Some(DesfireData::new());
                self.error = None;
                self.transition(PollerState::ReadVersion);
            }
            PollerState::ReadVersion => self.handle_read_version(),
            PollerState::ReadFreeMemory => self.handle_read_free_memory(),
            PollerState::ReadMasterKeySettings => self.handle_read_master_key_settings(),
            PollerState::ReadMasterKeyVersion => self.handle_read_master_key_version(),
            PollerState::ReadApplicationIds => self.handle_read_application_ids(),
            PollerState::ReadApplications => self.handle_read_applications(),
            PollerState::ReadSuccess => {
                self.state = PollerState::Idle;
                return Some(PollerEvent::ReadSuccess);
            }
            PollerState::ReadFailed => {
                self.state = PollerState::Idle;
                return self.error.take().map(PollerEvent::ReadFailed);
            }
        }
        None
    }

    fn model(&mut self) -> &mut DesfireData {
        self.data.get_or_insert_with(DesfireData::new)
    }

    fn transition(&mut self, next: PollerState) {
        debug!("{} -> {}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, err: Error) {
        error!("{} failed: {}", self.state, err);
        if err.is_link_loss() {
            if let Err(e) = self.transport.halt() {
                warn!("halt failed: {}", e);
            }
        }
        self.data = None;
        self.error = Some(err);
        self.state = PollerState::ReadFailed;
    }

    fn handle_read_version(&mut self) {
        match operations::read_version(&self.reassembler, &mut self.transport) {
            Ok(version) => {
                self.model().version = version;
                self.transition(PollerState::ReadFreeMemory);
            }
            Err(e) => self.fail(e),
        }
    }

    fn handle_read_free_memory(&mut self) {
        match operations::read_free_memory(&self.reassembler, &mut self.transport) {
            Ok(free_memory) => {
                if !free_memory.is_present {
                    debug!("free memory not reported");
                }
                self.model().free_memory = free_memory;
            }
            Err(e) => return self.fail(e),
        }
        self.transition(PollerState::ReadMasterKeySettings);
    }

    fn handle_read_master_key_settings(&mut self) {
        let settings = match operations::read_key_settings(&self.reassembler, &mut self.transport) {
            Ok(ks) => ks,
            Err(Error::Authentication) => {
                debug!("Auth is required to read master key settings and app ids");
                KeySettings::restricted_master()
            }
            Err(e) => return self.fail(e),
        };
        self.model().master_key_settings = settings;
        self.transition(PollerState::ReadMasterKeyVersion);
    }

    fn handle_read_master_key_version(&mut self) {
        let settings = self.model().master_key_settings;
        match operations::read_key_versions(&self.reassembler, &mut self.transport, settings.max_keys)
        {
            Ok(versions) => {
                self.model().master_key_versions = versions;
                if settings.is_free_directory_list {
                    self.transition(PollerState::ReadApplicationIds);
                } else {
                    self.transition(PollerState::ReadSuccess);
                }
            }
            Err(e) => self.fail(e),
        }
    }

    fn handle_read_application_ids(&mut self) {
        match operations::read_application_ids(&self.reassembler, &mut self.transport) {
            Ok(ids) => {
                self.model().application_ids = ids;
                self.transition(PollerState::ReadApplications);
            }
            Err(Error::Authentication) => {
                debug!("Auth is required to read application ids");
                self.transition(PollerState::ReadSuccess);
            }
            Err(e) => self.fail(e),
        }
    }

    fn handle_read_applications(&mut self) {
        let ids = self.model().application_ids.clone();
        match operations::read_applications(&self.reassembler, &mut self.transport, &ids) {
            Ok(applications) => {
                self.model().applications = applications;
                self.transition(PollerState::ReadSuccess);
            }
            Err(e) => self.fail(e),
        }
    }
}

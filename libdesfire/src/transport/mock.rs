// libdesfire/src/transport/mock.rs

//! Scripted transport for tests.

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent blocks and returns queued
/// responses (or errors) in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every block passed to `send_block`, in order.
    pub sent: Vec<Vec<u8>>,
    /// Queued answers, consumed front first.
    pub responses: VecDeque<Result<Vec<u8>>>,
    /// Number of `halt` calls observed
    pub halts: usize,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response block (status byte first).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a link-level failure for the next exchange.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push_back(Err(err));
    }

    /// Queue a successful response: status `0x00` followed by `payload`.
    pub fn push_ok(&mut self, payload: &[u8]) {
        let mut resp = Vec::with_capacity(payload.len() + 1);
        resp.push(crate::constants::STATUS_OPERATION_OK);
        resp.extend_from_slice(payload);
        self.push_response(resp);
    }

    /// Queue a bare card status byte without payload.
    pub fn push_status(&mut self, status: u8) {
        self.push_response(vec![status]);
    }

    /// Remove and return the last sent block.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Responses that were queued but never consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Transport for MockTransport {
    fn send_block(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(tx.to_vec());
        // An exhausted queue behaves like a card that stopped answering.
        self.responses.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn halt(&mut self) -> Result<()> {
        self.halts += 1;
        Ok(())
    }
}

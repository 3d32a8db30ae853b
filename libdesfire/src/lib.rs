// libdesfire/src/lib.rs

//! libdesfire
//!
//! Pure Rust read-side client for MIFARE DESFire cards: command codec,
//! additional-frame reassembly, card model and a tick-driven read poller
//! over any block [`Transport`](transport::Transport).
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

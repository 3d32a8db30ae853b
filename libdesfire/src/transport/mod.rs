// libdesfire/src/transport/mod.rs

//! Link-layer abstraction and a scripted mock.

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;

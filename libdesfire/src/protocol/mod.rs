// libdesfire/src/protocol/mod.rs

//! DESFire native command codec and frame handling.

pub mod chunk;
pub mod codec;
pub mod commands;
pub mod parser;
pub mod responses;
pub mod status;

pub use chunk::ChunkReassembler;
pub use commands::*;
pub use responses::*;
pub use status::check_status;

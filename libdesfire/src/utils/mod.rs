//! Small helpers shared by rendering and the persistence schema.

pub mod hex;

pub use hex::*;

// libdesfire/src/transport/traits.rs

//! The `Transport` trait.

use crate::Result;

/// Transport trait abstracts the ISO14443-4 link layer away from the
/// DESFire protocol logic.
///
/// Implementations map their own failures onto the crate error taxonomy:
/// `Error::NotPresent` when the card left the field, `Error::Timeout` when
/// it stopped answering and `Error::Transport` for any other link-level
/// fault (CRC, framing, block numbering).
pub trait Transport {
    /// Exchange one logical command block for one logical response block.
    fn send_block(&mut self, tx: &[u8]) -> Result<Vec<u8>>;

    /// Put the card back into the HALT state.
    fn halt(&mut self) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_block(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        (**self).send_block(tx)
    }

    fn halt(&mut self) -> Result<()> {
        (**self).halt()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_block(&mut self, tx: &[u8]) -> Result<Vec<u8>> {
        (**self).send_block(tx)
    }

    fn halt(&mut self) -> Result<()> {
        (**self).halt()
    }
}

// libdesfire/src/protocol/status.rs

//! Card status byte handling.

use crate::constants::{STATUS_ADDITIONAL_FRAME, STATUS_AUTHENTICATION_ERROR, STATUS_OPERATION_OK};
use crate::{Error, Result};

/// Map the status byte of a final (non-continuation) response onto the
/// error taxonomy. Only "operation ok" succeeds.
pub fn check_status(status: u8) -> Result<()> {
    match status {
        STATUS_OPERATION_OK => Ok(()),
        STATUS_AUTHENTICATION_ERROR => Err(Error::Authentication),
        other => Err(Error::UnexpectedStatus(other)),
    }
}

/// True if the response announces another frame.
pub fn has_more_frames(response: &[u8]) -> bool {
    response.first() == Some(&STATUS_ADDITIONAL_FRAME)
}

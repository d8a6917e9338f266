//! States processing the checksum field.

use thiserror::Error;

use super::check::{compute_crc, crc_field};

/// Calculated and found CRC values do not match.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Calculated ({calculated:#06X}) and found ({found:#010X}) CRC values do not match.")]
pub struct ChecksumError {
    pub found: u32,
    pub calculated: u16,
}

/// State token to decode the checksum field.
#[derive(Debug)]
pub struct Footer(pub(super) ());

impl Footer {
    /// Finish decoding by checking the CRC field against a frame payload.
    ///
    /// `payload` is the range covered by the declared payload length, from the
    /// codec identifier through the trailing record count. The field must
    /// equal the payload's checksum byte for byte, including its two leading
    /// zero bytes.
    ///
    /// Returns the checksum.
    pub fn advance(self, r: [u8; 4], payload: &[u8]) -> Result<u16, ChecksumError> {
        let calculated = compute_crc(0, payload);

        if r != crc_field(calculated) {
            Err(ChecksumError {
                found: u32::from_be_bytes(r),
                calculated,
            })?;
        }

        Ok(calculated)
    }
}

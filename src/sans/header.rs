//! States processing the frame envelope header.

use core::marker::PhantomData;

use thiserror::Error;

use super::{property::PropertyBlock, record::RecordHeader};

/// Value of the preamble marking the start of every frame.
pub const PREAMBLE: u32 = 0;

/// An error advancing over a frame header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Incorrect preamble.
    #[error("Expected a zero preamble but found {0:#010X}.")]
    WrongPreamble(u32),
    /// The codec identifier belongs to another decoder.
    #[error("Expected codec identifier {expected:#04X} but found {found:#04X}.")]
    WrongCodecId { expected: u8, found: u8 },
}

/// State token to decode the preamble.
#[derive(Debug)]
pub struct FrameHeader;

impl FrameHeader {
    /// Transition to another state by decoding the preamble.
    ///
    /// Returns a successor state token.
    pub fn advance(r: [u8; 4]) -> Result<LengthHeader, HeaderError> {
        let preamble = u32::from_be_bytes(r);
        if preamble != PREAMBLE {
            Err(HeaderError::WrongPreamble(preamble))?;
        }

        Ok(LengthHeader(()))
    }
}

/// State token to decode the declared payload length.
#[derive(Debug)]
pub struct LengthHeader(pub(super) ());

impl LengthHeader {
    /// Transition to another state by decoding the declared payload length.
    ///
    /// Returns the length, counting bytes from the codec identifier through
    /// the trailing record count, and a successor state token.
    pub fn advance(self, r: [u8; 4]) -> (u32, CodecHeader) {
        (u32::from_be_bytes(r), CodecHeader(()))
    }
}

/// State token to decode the codec identifier and leading record count.
#[derive(Debug)]
pub struct CodecHeader(pub(super) ());

impl CodecHeader {
    /// Transition to another state by decoding the codec identifier and the
    /// leading record count.
    ///
    /// The identifier must match `P::CODEC_ID`. A mismatch is reported as
    /// [`HeaderError::WrongCodecId`] and nothing else, so callers may retry the
    /// same bytes with another block type.
    ///
    /// Returns the leading record count, and a successor state token.
    pub fn advance<P: PropertyBlock>(
        self,
        r: [u8; 2],
    ) -> Result<(u8, RecordHeader<P>), HeaderError> {
        let [codec_id, count] = r;

        if codec_id != P::CODEC_ID {
            Err(HeaderError::WrongCodecId {
                expected: P::CODEC_ID,
                found: codec_id,
            })?;
        }

        let successor = RecordHeader {
            declared: count,
            decoded: 0,
            _phantom: PhantomData,
        };

        Ok((count, successor))
    }
}

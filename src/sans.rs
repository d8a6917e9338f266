//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::avec`] for implementations covering the
//! common entry points.
//!
//! # Architecture
//!
//! All states are represented by a small, non-copy token. Once enough bytes
//! are ready, transition to another state by calling the token's `advance`
//! method. This will return a successor state token, along with any extracted
//! data.
//!
//! A frame is walked in this order:
//!
//! ```text
//! FrameHeader -> LengthHeader -> CodecHeader -> RecordHeader -> Position -> PropertySection
//!                                                   ^                             |
//!                                                   +-----------------------------+
//!                                              RecordHeader::finish -> Footer
//! ```
//!
//! The record section has no length prefix of its own. Each record is
//! self-delimiting only through full structural parsing: [`PropertySection`]
//! reports how many bytes its block consumed, and the caller advances its
//! cursor by that amount.
//!
//! Some areas of the decoding process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the frame.
//!
//! - Deciding when the record section has ended. The declared payload length
//!   covers the codec identifier through the trailing record count; records
//!   occupy everything up to, but excluding, its final byte.
//!
//! - Bounding every read to the supplied buffer.
//!
//! Implementers are recommended to begin by studying and modifying the
//! decoder in [`crate::avec::slice`].
//!
//! [`PropertySection`]: record::PropertySection

use thiserror::Error;

pub mod check;
pub mod footer;
pub mod header;
pub mod property;
pub mod record;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::FrameHeader;

/// Unexpectedly reached the end of the supplied bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unexpectedly reached the end of the slice.")]
pub struct EndOfSlice;

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
pub(crate) fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], EndOfSlice> {
    let s = *i;
    let e = s.checked_add(N).ok_or(EndOfSlice)?;

    let bytes = r.get(s..e).ok_or(EndOfSlice)?.try_into().map_err(|_| EndOfSlice)?;
    *i = e;

    Ok(bytes)
}

//! Slice-based decoder implementation.

use alloc::vec::Vec;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    frame::{Frame, Record},
    sans::{
        Decoder, EndOfSlice,
        footer::ChecksumError,
        header::HeaderError,
        property::PropertyBlock,
        record::{CountError, RecordError},
        take,
    },
};

/// Errors occurring while decoding a frame.
///
/// Variants are listed in the order their checks are applied; the first
/// failing check determines the error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No input was supplied.
    #[error("Input is empty.")]
    InputEmpty,
    /// Text input contained a character other than a hex digit or separator.
    #[error("Found non-hex character {character:?} at index {index}.")]
    NonHexCharacter { index: usize, character: char },
    /// Text input had an odd number of hex digits.
    #[error("Found an odd number of hex digits.")]
    OddHexLength,
    /// Incorrect preamble.
    #[error("Expected a zero preamble but found {0:#010X}.")]
    WrongPreamble(u32),
    /// The frame, or a structure inside it, runs past the supplied bytes.
    ///
    /// Also covers records that run past the declared payload length, even
    /// when the supplied bytes would hold them.
    #[error("Declared length exceeds the supplied input.")]
    DeclaredLengthExceedsInput,
    /// The codec identifier belongs to another decoder.
    #[error("Expected codec identifier {expected:#04X} but found {found:#04X}.")]
    WrongCodecId { expected: u8, found: u8 },
    /// Record priority outside of low, high and panic.
    #[error("Invalid record priority ({0}).")]
    InvalidPriority(u8),
    /// Leading and trailing record counts differ.
    #[error("Leading ({leading}) and trailing ({trailing}) record counts do not match.")]
    RecordCountMismatch { leading: u8, trailing: u8 },
    /// The declared record count differs from the records found in the
    /// declared payload length.
    #[error("Declared {declared} records, but the payload holds {decoded}.")]
    RecordCountStructuralMismatch { declared: u8, decoded: usize },
    /// Calculated and found CRC values do not match.
    #[error("Calculated ({calculated:#06X}) and found ({found:#010X}) CRC values do not match.")]
    ChecksumMismatch { found: u32, calculated: u16 },
}

impl Error {
    /// Whether the bytes may belong to another codec.
    pub fn is_codec_mismatch(&self) -> bool {
        matches!(self, Self::WrongCodecId { .. })
    }
}

impl From<EndOfSlice> for Error {
    fn from(_: EndOfSlice) -> Self {
        Self::DeclaredLengthExceedsInput
    }
}

impl From<HeaderError> for Error {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::WrongPreamble(found) => Self::WrongPreamble(found),
            HeaderError::WrongCodecId { expected, found } => Self::WrongCodecId { expected, found },
        }
    }
}

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::InvalidPriority(priority) => Self::InvalidPriority(priority),
        }
    }
}

impl From<CountError> for Error {
    fn from(err: CountError) -> Self {
        match err {
            CountError::Mismatch { leading, trailing } => {
                Self::RecordCountMismatch { leading, trailing }
            }
            CountError::Structural { declared, decoded } => {
                Self::RecordCountStructuralMismatch { declared, decoded }
            }
        }
    }
}

impl From<ChecksumError> for Error {
    fn from(ChecksumError { found, calculated }: ChecksumError) -> Self {
        Self::ChecksumMismatch { found, calculated }
    }
}

/// Size of the CRC field trailing every frame.
const CRC_SIZE: usize = 4;

/// Decode a frame carrying property blocks of type `P` from a slice.
///
/// Bytes past the frame's CRC field are ignored.
///
/// This method is also re-exported as `codec8::avec::decode_slice_as`.
pub fn decode<P: PropertyBlock>(r: &[u8]) -> Result<Frame<P>, Error> {
    if r.is_empty() {
        Err(Error::InputEmpty)?;
    }

    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    let length_header = Decoder::advance(take(r, i)?)?;
    let (data_length, codec_header) = length_header.advance(take(r, i)?);

    // Offsets of the range covered by the checksum.
    let start = *i;
    let end = usize::try_from(data_length)
        .ok()
        .and_then(|length| start.checked_add(length))
        .filter(|end| end.checked_add(CRC_SIZE).is_some_and(|size| size <= r.len()))
        .ok_or(Error::DeclaredLengthExceedsInput)?;

    let (leading_count, mut record_header) = codec_header.advance::<P>(take(r, i)?)?;

    // Records occupy the payload up to its final byte, the trailing count.
    let section = &r[..end - 1];

    let mut records = Vec::with_capacity(leading_count.into());

    while *i < section.len() {
        let s = *i;

        let (timestamp, priority, position) = record_header.advance(take(section, i)?)?;
        let (gps, properties) = position.advance(take(section, i)?);
        let (properties, size, successor) = properties.advance(&section[*i..])?;

        *i += size;
        record_header = successor;

        trace!(offset = s, length = *i - s, ?priority, "Decoded record.");

        records.push(Record {
            timestamp,
            priority,
            gps,
            properties,
            span: s..*i,
        });
    }

    let (trailing_count, footer) = record_header.finish(take(r, i)?)?;
    let crc = footer.advance(take(r, i)?, &r[start..end])?;

    debug!(
        codec_id = P::CODEC_ID,
        records = records.len(),
        length = *i,
        "Decoded frame."
    );

    Ok(Frame {
        data_length,
        codec_id: P::CODEC_ID,
        leading_count,
        records,
        trailing_count,
        crc,
        bytes: r[..*i].to_vec(),
        payload: start..end,
    })
}

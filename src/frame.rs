//! Decoded frames and records.

use alloc::vec::Vec;
use core::{ops::Range, time::Duration};

use crate::sans::{
    property::{ExtendedProperties, Properties},
    record::{Gps, Priority},
};

/// A decoded Codec8 frame.
pub type Codec8Frame = Frame<Properties>;

/// A decoded Codec8 Extended frame.
pub type Codec8ExtendedFrame = Frame<ExtendedProperties>;

/// One decoded transmission unit.
///
/// A frame owns a copy of the bytes it was decoded from, so that every field
/// can also be inspected in its original wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<P> {
    /// Declared payload length, from the codec identifier through the trailing
    /// record count.
    pub data_length: u32,
    pub codec_id: u8,
    /// Record count preceding the records.
    pub leading_count: u8,
    pub records: Vec<Record<P>>,
    /// Record count following the records.
    pub trailing_count: u8,
    pub crc: u16,

    pub(crate) bytes: Vec<u8>,
    pub(crate) payload: Range<usize>,
}

impl<P> Frame<P> {
    /// The frame as it appeared on the wire, excluding any bytes supplied past
    /// its CRC field.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn preamble_bytes(&self) -> &[u8] {
        &self.bytes[..4]
    }

    pub fn data_length_bytes(&self) -> &[u8] {
        &self.bytes[4..8]
    }

    /// The bytes covered by the checksum.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.payload.clone()]
    }

    /// The 4-byte CRC field.
    pub fn crc_bytes(&self) -> &[u8] {
        &self.bytes[self.bytes.len() - 4..]
    }

    /// The wire bytes of a record, if it exists.
    pub fn record_bytes(&self, index: usize) -> Option<&[u8]> {
        let record = self.records.get(index)?;
        self.bytes.get(record.span.clone())
    }
}

/// One timestamped vehicle-state sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<P> {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub priority: Priority,
    pub gps: Gps,
    pub properties: P,
    /// Location of the record within [`Frame::as_bytes`].
    pub span: Range<usize>,
}

impl<P> Record<P> {
    /// Time elapsed between the Unix epoch and this record.
    pub fn since_epoch(&self) -> Duration {
        Duration::from_millis(self.timestamp)
    }

    /// The instant this record was sampled.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn time(&self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + self.since_epoch()
    }
}

//! States processing records.

use core::marker::PhantomData;

use thiserror::Error;
use zerocopy::{FromBytes, TryFromBytes};

use super::{EndOfSlice, footer::Footer, property::PropertyBlock};

/// An error advancing over a record header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Priority outside of low, high and panic.
    #[error("Invalid record priority ({0}).")]
    InvalidPriority(u8),
}

/// An error closing the record section.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// Leading and trailing record counts differ.
    #[error("Leading ({leading}) and trailing ({trailing}) record counts do not match.")]
    Mismatch { leading: u8, trailing: u8 },
    /// The declared record count differs from the records found.
    #[error("Declared {declared} records, but the payload holds {decoded}.")]
    Structural { declared: u8, decoded: usize },
}

/// Record priority.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum Priority {
    Low = 0,
    High = 1,
    Panic = 2,
}

/// Instantaneous position fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gps {
    /// Longitude in units of 10<sup>-7</sup> degrees.
    pub longitude: i32,
    /// Latitude in units of 10<sup>-7</sup> degrees.
    pub latitude: i32,
    /// Altitude in meters above sea level.
    pub altitude: i16,
    /// Heading in degrees clockwise from north.
    pub angle: u16,
    /// Number of visible satellites.
    pub satellites: u8,
    /// Speed in kilometers per hour.
    pub speed: u16,
}

impl Gps {
    const SCALE: f64 = 10_000_000.0;

    pub fn longitude_deg(&self) -> f64 {
        f64::from(self.longitude) / Self::SCALE
    }

    pub fn latitude_deg(&self) -> f64 {
        f64::from(self.latitude) / Self::SCALE
    }

    /// Whether the device reported a valid fix.
    ///
    /// Devices signal an invalid fix by reporting zero speed.
    pub fn is_valid_fix(&self) -> bool {
        self.speed != 0
    }
}

/// State token to decode a record's timestamp and priority.
///
/// Also counts the records decoded so far, closing the record section with
/// [`RecordHeader::finish`].
#[derive(Debug)]
pub struct RecordHeader<P> {
    pub(super) declared: u8,
    pub(super) decoded: usize,
    pub(super) _phantom: PhantomData<P>,
}

impl<P: PropertyBlock> RecordHeader<P> {
    /// Transition to another state by decoding a record's timestamp and
    /// priority.
    ///
    /// Returns the timestamp in milliseconds since the Unix epoch, the
    /// priority, and a successor state token.
    pub fn advance(self, r: [u8; 9]) -> Result<(u64, Priority, Position<P>), RecordError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Prefix {
            timestamp: [u8; 8],
            priority: u8,
        }

        let Prefix {
            timestamp,
            priority,
        } = zerocopy::transmute!(r);

        let priority: Priority =
            zerocopy::try_transmute!(priority).map_err(|_| RecordError::InvalidPriority(priority))?;

        let successor = Position {
            declared: self.declared,
            decoded: self.decoded,
            _phantom: PhantomData,
        };

        Ok((u64::from_be_bytes(timestamp), priority, successor))
    }

    /// Close the record section by decoding the trailing record count.
    ///
    /// The trailing count must equal the leading count, and both must equal
    /// the number of records decoded.
    ///
    /// Returns the trailing count, and a successor state token.
    pub fn finish(self, r: [u8; 1]) -> Result<(u8, Footer), CountError> {
        let [trailing] = r;

        if trailing != self.declared {
            Err(CountError::Mismatch {
                leading: self.declared,
                trailing,
            })?;
        }

        if usize::from(self.declared) != self.decoded {
            Err(CountError::Structural {
                declared: self.declared,
                decoded: self.decoded,
            })?;
        }

        Ok((trailing, Footer(())))
    }
}

/// State token to decode a record's GPS sub-block.
#[derive(Debug)]
pub struct Position<P> {
    declared: u8,
    decoded: usize,
    _phantom: PhantomData<P>,
}

impl<P: PropertyBlock> Position<P> {
    /// Transition to another state by decoding a GPS sub-block.
    ///
    /// Returns the position fix, and a successor state token.
    pub fn advance(self, r: [u8; 15]) -> (Gps, PropertySection<P>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct GpsElement {
            longitude: [u8; 4],
            latitude: [u8; 4],
            altitude: [u8; 2],
            angle: [u8; 2],
            satellites: u8,
            speed: [u8; 2],
        }

        let GpsElement {
            longitude,
            latitude,
            altitude,
            angle,
            satellites,
            speed,
        } = zerocopy::transmute!(r);

        let gps = Gps {
            longitude: i32::from_be_bytes(longitude),
            latitude: i32::from_be_bytes(latitude),
            altitude: i16::from_be_bytes(altitude),
            angle: u16::from_be_bytes(angle),
            satellites,
            speed: u16::from_be_bytes(speed),
        };

        let successor = PropertySection {
            declared: self.declared,
            decoded: self.decoded,
            _phantom: PhantomData,
        };

        (gps, successor)
    }
}

/// State token to decode a record's property block.
#[derive(Debug)]
pub struct PropertySection<P> {
    declared: u8,
    decoded: usize,
    _phantom: PhantomData<P>,
}

impl<P: PropertyBlock> PropertySection<P> {
    /// Transition to another state by decoding a property block.
    ///
    /// **This method takes every remaining byte of the record section, not an
    /// exact count.** The block's length is only known once it is decoded.
    ///
    /// Returns the property block, the number of bytes it occupies, and a
    /// successor state token.
    pub fn advance(self, r: &[u8]) -> Result<(P, usize, RecordHeader<P>), EndOfSlice> {
        let (block, size) = P::decode(r)?;

        let successor = RecordHeader {
            declared: self.declared,
            decoded: self.decoded + 1,
            _phantom: PhantomData,
        };

        Ok((block, size, successor))
    }
}

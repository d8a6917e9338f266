//! Property blocks: the variable-length I/O section of a record.
//!
//! A property block groups reported I/O values into buckets by value width.
//! Each bucket is a count followed by that many `(id, value)` pairs.
//! Identifiers and values are carried opaquely; what a given identifier means
//! is left to the application.
//!
//! Two layouts exist, one per codec:
//!
//! | Codec             | Ids and counts | Buckets                        |
//! |-------------------|----------------|--------------------------------|
//! | Codec8 (`0x08`)   | 1 byte         | 1, 2, 4, 8-byte values         |
//! | Extended (`0x8E`) | 2 bytes        | 1, 2, 4, 8-byte, and variable  |

use alloc::vec::Vec;

use super::{EndOfSlice, take};

/// A property block layout, and the codec whose frames carry it.
pub trait PropertyBlock: Sized {
    /// Codec identifier of frames carrying this block.
    const CODEC_ID: u8;

    /// Decode a property block from the start of a slice.
    ///
    /// The slice may extend past the end of the block. Returns the block and
    /// the number of bytes it occupies.
    fn decode(r: &[u8]) -> Result<(Self, usize), EndOfSlice>;
}

/// Property block of a Codec8 record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    /// Identifier of the property that triggered the record, or zero.
    pub event_id: u8,
    /// Declared number of properties in the block.
    ///
    /// This is advisory, and not checked against the buckets while decoding.
    /// See [`Self::declared_total_matches`].
    pub total: u8,
    pub one_byte: Vec<(u8, u8)>,
    pub two_byte: Vec<(u8, u16)>,
    pub four_byte: Vec<(u8, u32)>,
    pub eight_byte: Vec<(u8, u64)>,
}

impl Properties {
    /// Number of properties present across all buckets.
    pub fn len(&self) -> usize {
        self.one_byte.len() + self.two_byte.len() + self.four_byte.len() + self.eight_byte.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the declared total equals the number of properties present.
    pub fn declared_total_matches(&self) -> bool {
        usize::from(self.total) == self.len()
    }
}

impl PropertyBlock for Properties {
    const CODEC_ID: u8 = 0x08;

    fn decode(r: &[u8]) -> Result<(Self, usize), EndOfSlice> {
        let i = &mut 0;

        let event_id: u8 = read(r, i)?;
        let total: u8 = read(r, i)?;

        let count: u8 = read(r, i)?;
        let one_byte = bucket(r, i, count.into())?;
        let count: u8 = read(r, i)?;
        let two_byte = bucket(r, i, count.into())?;
        let count: u8 = read(r, i)?;
        let four_byte = bucket(r, i, count.into())?;
        let count: u8 = read(r, i)?;
        let eight_byte = bucket(r, i, count.into())?;

        let block = Self {
            event_id,
            total,
            one_byte,
            two_byte,
            four_byte,
            eight_byte,
        };

        Ok((block, *i))
    }
}

/// Property block of a Codec8 Extended record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedProperties {
    /// Identifier of the property that triggered the record, or zero.
    pub event_id: u16,
    /// Declared number of properties in the block.
    ///
    /// This is advisory, and not checked against the buckets while decoding.
    /// See [`Self::declared_total_matches`].
    pub total: u16,
    pub one_byte: Vec<(u16, u8)>,
    pub two_byte: Vec<(u16, u16)>,
    pub four_byte: Vec<(u16, u32)>,
    pub eight_byte: Vec<(u16, u64)>,
    /// Properties whose values carry their own length.
    pub variable: Vec<(u16, Vec<u8>)>,
}

impl ExtendedProperties {
    /// Number of properties present across all buckets.
    pub fn len(&self) -> usize {
        self.one_byte.len()
            + self.two_byte.len()
            + self.four_byte.len()
            + self.eight_byte.len()
            + self.variable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the declared total equals the number of properties present.
    pub fn declared_total_matches(&self) -> bool {
        usize::from(self.total) == self.len()
    }
}

impl PropertyBlock for ExtendedProperties {
    const CODEC_ID: u8 = 0x8E;

    fn decode(r: &[u8]) -> Result<(Self, usize), EndOfSlice> {
        let i = &mut 0;

        let event_id: u16 = read(r, i)?;
        let total: u16 = read(r, i)?;

        let count: u16 = read(r, i)?;
        let one_byte = bucket(r, i, count.into())?;
        let count: u16 = read(r, i)?;
        let two_byte = bucket(r, i, count.into())?;
        let count: u16 = read(r, i)?;
        let four_byte = bucket(r, i, count.into())?;
        let count: u16 = read(r, i)?;
        let eight_byte = bucket(r, i, count.into())?;

        let count: u16 = read(r, i)?;
        let mut variable = Vec::new();
        for _ in 0..count {
            let id: u16 = read(r, i)?;
            let size: u16 = read(r, i)?;

            let s = *i;
            let e = s + usize::from(size);
            variable.push((id, r.get(s..e).ok_or(EndOfSlice)?.to_vec()));
            *i = e;
        }

        let block = Self {
            event_id,
            total,
            one_byte,
            two_byte,
            four_byte,
            eight_byte,
            variable,
        };

        Ok((block, *i))
    }
}

/// An unsigned integer stored big-endian on the wire.
pub trait BigEndian {
    /// The bytes storing this integer.
    type Bytes;

    fn from_bytes(r: Self::Bytes) -> Self;
}

macro_rules! big_endian {
    ($($t:ident),*) => {
        $(
            impl BigEndian for $t {
                type Bytes = [u8; size_of::<$t>()];

                fn from_bytes(r: Self::Bytes) -> Self {
                    $t::from_be_bytes(r)
                }
            }
        )*
    };
}

big_endian!(u8, u16, u32, u64);

/// Read a big-endian integer from an offset in a slice, advancing the offset.
fn read<T: BigEndian<Bytes = [u8; N]>, const N: usize>(
    r: &[u8],
    i: &mut usize,
) -> Result<T, EndOfSlice> {
    Ok(T::from_bytes(take(r, i)?))
}

/// Read `count` fixed-width `(id, value)` pairs.
fn bucket<K, V, const KN: usize, const VN: usize>(
    r: &[u8],
    i: &mut usize,
    count: usize,
) -> Result<Vec<(K, V)>, EndOfSlice>
where
    K: BigEndian<Bytes = [u8; KN]>,
    V: BigEndian<Bytes = [u8; VN]>,
{
    let mut entries = Vec::new();

    for _ in 0..count {
        let id = read::<K, KN>(r, i)?;
        let value = read::<V, VN>(r, i)?;
        entries.push((id, value));
    }

    Ok(entries)
}

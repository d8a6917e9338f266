//! Convenience interfaces for common decoding patterns.
//!
//! Frames can be decoded from bytes with [`decode_slice`], or from
//! hexadecimal text with [`decode_hex`]. Both detect the codec: the frame is
//! first decoded as Codec8, and only if its codec identifier does not match,
//! as Codec8 Extended.
//!
//! When the codec is known in advance, name the property block type instead:
//!
//! ```
//! let frame = codec8::avec::decode_slice_as::<ExtendedProperties>(&bytes)?;
//! ```

pub mod slice;
pub mod text;

pub use slice::{Error, decode as decode_slice_as};
pub use text::decode as decode_hex_as;

use either::Either::{self, Left, Right};
use tracing::debug;

use crate::{
    frame::{Codec8ExtendedFrame, Codec8Frame},
    sans::property::{ExtendedProperties, Properties, PropertyBlock},
};

/// A frame of either codec.
pub type AnyFrame = Either<Codec8Frame, Codec8ExtendedFrame>;

/// Decode a frame of either codec from a slice.
///
/// Any outcome of the Codec8 attempt other than a codec identifier mismatch
/// is returned as is. On a mismatch, the outcome of the Codec8 Extended
/// attempt is returned instead, whether or not it succeeds.
pub fn decode_slice(r: &[u8]) -> Result<AnyFrame, Error> {
    match slice::decode::<Properties>(r) {
        Err(err) if err.is_codec_mismatch() => {
            debug!(
                codec_id = ExtendedProperties::CODEC_ID,
                "Codec identifier mismatch, retrying."
            );

            slice::decode::<ExtendedProperties>(r).map(Right)
        }
        outcome => outcome.map(Left),
    }
}

/// Decode a frame of either codec from hexadecimal text.
///
/// See [`decode_slice`] for how the codec is chosen, and [`text`] for the
/// accepted text format.
pub fn decode_hex(input: &str) -> Result<AnyFrame, Error> {
    decode_slice(&text::to_bytes(input)?)
}

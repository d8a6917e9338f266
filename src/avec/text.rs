//! Hexadecimal text decoder implementation.
//!
//! Text is accepted as pairs of hex digits in either case, optionally
//! separated by `-`, as produced by common packet capture and logging tools:
//!
//! ```text
//! 00-00-00-00-00-00-00-36-08-01-00-00-01-6B-40-D8-EA-30-...
//! ```

use alloc::{string::String, vec::Vec};

use super::slice::{self, Error};
use crate::{frame::Frame, sans::property::PropertyBlock};

/// Character allowed between hex digits.
pub const SEPARATOR: char = '-';

/// Decode a frame carrying property blocks of type `P` from hexadecimal text.
///
/// This method is also re-exported as `codec8::avec::decode_hex_as`.
pub fn decode<P: PropertyBlock>(text: &str) -> Result<Frame<P>, Error> {
    slice::decode(&to_bytes(text)?)
}

/// Convert hexadecimal text to bytes.
///
/// Separators are removed first. Any other non-hex character is reported
/// with its byte index in `text`, before the digit count is checked.
pub fn to_bytes(text: &str) -> Result<Vec<u8>, Error> {
    if text.is_empty() {
        Err(Error::InputEmpty)?;
    }

    if let Some((index, character)) = find_non_hex(text) {
        Err(Error::NonHexCharacter { index, character })?;
    }

    let digits: String = text.chars().filter(|&c| c != SEPARATOR).collect();

    hex::decode(digits).map_err(|_| Error::OddHexLength)
}

/// Find the first character that is neither a hex digit nor a separator.
pub fn find_non_hex(text: &str) -> Option<(usize, char)> {
    text.char_indices()
        .find(|&(_, c)| c != SEPARATOR && !c.is_ascii_hexdigit())
}

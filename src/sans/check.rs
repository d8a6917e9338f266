//! Helper for computing cyclic redundancy checks.
//!
//! Frames are protected by CRC-16/IBM: reflected polynomial `0xA001`, initial
//! value zero, no final XOR.

/// Reflected CRC-16/IBM polynomial.
const POLYNOMIAL: u16 = 0xA001;

/// Accumulate a slice of bytes into a cyclic redundancy check value.
///
/// Pass an `init` of zero to checksum a complete frame payload.
pub fn compute_crc(init: u16, r: &[u8]) -> u16 {
    r.iter().fold(init, |acc, b| crc_byte(acc, *b))
}

/// Serialize a checksum into the 4-byte wire field.
///
/// The value is big-endian and right-justified; the two leading bytes are
/// always zero.
pub fn crc_field(crc: u16) -> [u8; 4] {
    let [hi, lo] = crc.to_be_bytes();
    [0, 0, hi, lo]
}

/// Accumulate a single byte into a cyclic redundancy check value.
fn crc_byte(crc: u16, b: u8) -> u16 {
    (0..8).fold(crc ^ u16::from(b), |crc, _| {
        if crc & 1 != 0 {
            (crc >> 1) ^ POLYNOMIAL
        } else {
            crc >> 1
        }
    })
}

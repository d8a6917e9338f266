#![no_std]

//! A strict decoder for the Codec8 and Codec8 Extended AVL telemetry
//! protocols.
//!
//! A frame is a length-prefixed container of vehicle-state records (timestamp,
//! GPS fix and a variable set of I/O property readings), protected by a CRC-16
//! checksum. This crate turns an in-memory byte sequence, or its hexadecimal
//! text form, into a fully parsed [`Frame`] or a specific [`avec::Error`]. It
//! performs no I/O and keeps no state between calls.
//!
//! Most users should begin with the functions in the [`avec`] module. If these
//! prove insufficient, the underlying finite-state machine is exposed in the
//! [`sans`] module.
//!
//! ```
//! let frame = codec8::avec::decode_hex(text)?;
//!
//! match frame {
//!     Left(frame) => println!("Codec8: {} records", frame.records.len()),
//!     Right(frame) => println!("Codec8 Extended: {} records", frame.records.len()),
//! }
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable standard library support, including [`Record::time`]
//!   (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod avec;
pub mod frame;
pub mod sans;

pub use frame::{Codec8ExtendedFrame, Codec8Frame, Frame, Record};
pub use sans::property::{ExtendedProperties, Properties, PropertyBlock};
pub use sans::record::{Gps, Priority};

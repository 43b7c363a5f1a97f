//! Driver for 4D Systems Picaso serial display controllers
//!
//! The display is attached over a plain serial line and speaks a strictly
//! synchronous protocol: the host writes one command (an opcode word plus
//! argument words, big-endian two bytes each), then reads back an ACK byte
//! and the response words documented for that opcode. This crate frames
//! and transmits commands, decodes the acknowledgement, and exposes the
//! command catalog as typed methods.
//!
//! # Structure
//!
//! [`Display`] owns the serial link and carries the system-level commands
//! (clear, contrast, orientation, display size). The rest of the catalog
//! is grouped the way the device documentation groups it:
//!
//! - [`Graphics`] - lines, shapes, pixels, polygons
//! - [`Text`] - cursor, fonts, string output, text styling
//! - [`Touch`] - touch screen control and status polling
//!
//! Each group is reached through a borrowing accessor, so only one command
//! can be in flight at a time. The protocol carries no request identifiers
//! and replies are attributed to commands purely by ordering; exclusive
//! access to the link is a correctness requirement, not a convenience.
//!
//! # Failure semantics
//!
//! A command either completes its full acknowledge cycle and returns the
//! decoded values, or it fails with no partial result. There is no retry
//! and no resynchronisation: after [`Error::Protocol`] the device and
//! driver no longer agree on byte boundaries, and the only recovery is a
//! higher-level policy such as reopening the link.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod error;
pub mod graphics;
pub mod text;
pub mod touch;

#[cfg(test)]
pub(crate) mod mock;

pub use display::{Display, Orientation};
pub use error::Error;
pub use graphics::Graphics;
pub use text::{Font, Text};
pub use touch::{Touch, TouchMode, TouchState};

// Colors are part of the wire protocol; surface them here for callers.
pub use picaso_protocol::{color, rgb};

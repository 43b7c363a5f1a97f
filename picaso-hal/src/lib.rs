//! Hardware abstraction for the Picaso display driver
//!
//! This crate defines the serial link trait the driver talks through. Any
//! byte-oriented serial transport (a host serial port, a UART peripheral,
//! a pseudo-terminal in tests) can implement it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  picaso-display (driver + catalog)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picaso-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  platform serial port implementation    │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod serial;

// Re-export key traits at crate root for convenience
pub use serial::{DataBits, Parity, SerialConfig, SerialLink, StopBits};

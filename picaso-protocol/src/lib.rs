//! Picaso serial display wire protocol
//!
//! This crate implements the command/acknowledge protocol spoken by 4D
//! Systems Picaso display controllers over a serial line. It is pure: the
//! actual transport lives behind the `picaso-hal` traits and is driven by
//! `picaso-display`.
//!
//! # Protocol Overview
//!
//! Every command is a sequence of 16-bit words, each transmitted as two
//! bytes with the high byte first:
//!
//! ```text
//! ┌───────────┬───────────┬─────┬───────────┐
//! │ opcode    │ arg 1     │ ... │ arg N     │
//! │ hi lo     │ hi lo     │     │ hi lo     │
//! └───────────┴───────────┴─────┴───────────┘
//! ```
//!
//! The display answers every command with a single ACK byte (`0x06`),
//! followed by the number of response words documented for that opcode:
//!
//! ```text
//! ┌──────┬───────────┬─────┬───────────┐
//! │ 0x06 │ value 1   │ ... │ value M   │
//! │      │ hi lo     │     │ hi lo     │
//! └──────┴───────────┴─────┴───────────┘
//! ```
//!
//! A handful of string commands bypass the word split and carry raw bytes
//! after their opcode; the acknowledge cycle is identical.
//!
//! There is no length field and no resynchronisation mechanism: the reply
//! word count per opcode is a protocol constant, and getting it wrong
//! desynchronises the session for good.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod reply;
pub mod word;

pub use color::rgb;
pub use reply::{Reply, ReplyError, ReplyReader, ACK, MAX_REPLY_WORDS};
pub use word::{join_word, split_word};

//! Acknowledge and reply decoding
//!
//! Every command the host sends is answered with an ACK byte, followed by
//! the number of response words documented for that opcode. [`ReplyReader`]
//! consumes that byte stream one byte at a time and yields the decoded
//! words once the reply is complete.
//!
//! The reader is pure: timeouts are the transport's concern and are mapped
//! to a communication error by the driver pumping bytes in.

use heapless::Vec;

use crate::word::join_word;

/// Acknowledgement sentinel, the first byte of every reply
pub const ACK: u8 = 0x06;

/// Capacity for decoded reply words.
///
/// No catalogued command answers with more than one word today; the bound
/// exists so a reply is a fixed-size value.
pub const MAX_REPLY_WORDS: usize = 4;

/// Decoded response words of one command, in wire order
pub type Reply = Vec<u16, MAX_REPLY_WORDS>;

/// Errors signalled while decoding a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplyError {
    /// The first reply byte was not the ACK sentinel; carries the byte
    /// that arrived instead. The session must be considered
    /// desynchronised.
    NotAcknowledged(u8),
}

/// State machine decoding the reply to a single command
///
/// Construct one per request with the reply word count documented for the
/// opcode, then feed received bytes until it yields or fails. Both
/// outcomes are terminal for the request.
#[derive(Debug, Clone)]
pub struct ReplyReader {
    state: ReadState,
    expected_words: usize,
    high_byte: u8,
    values: Reply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    /// Waiting for the ACK sentinel
    AwaitingAck,
    /// Got ACK, waiting for the high byte of the next value
    ReadingHigh,
    /// Waiting for the low byte of the current value
    ReadingLow,
    /// Reply fully decoded
    Complete,
}

impl ReplyReader {
    /// Create a reader expecting `expected_words` response words.
    ///
    /// `expected_words` is a per-opcode protocol constant and must not
    /// exceed [`MAX_REPLY_WORDS`].
    pub fn new(expected_words: usize) -> Self {
        debug_assert!(expected_words <= MAX_REPLY_WORDS);
        Self {
            state: ReadState::AwaitingAck,
            expected_words,
            high_byte: 0,
            values: Vec::new(),
        }
    }

    /// Feed a single received byte to the reader
    ///
    /// Returns `Ok(Some(reply))` when the reply is complete, `Ok(None)`
    /// when more bytes are needed, or `Err` when the device broke the
    /// protocol. Bytes fed after completion are ignored.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Reply>, ReplyError> {
        match self.state {
            ReadState::AwaitingAck => {
                if byte != ACK {
                    return Err(ReplyError::NotAcknowledged(byte));
                }
                if self.expected_words == 0 {
                    self.state = ReadState::Complete;
                    return Ok(Some(self.values.clone()));
                }
                self.state = ReadState::ReadingHigh;
                Ok(None)
            }
            ReadState::ReadingHigh => {
                self.high_byte = byte;
                self.state = ReadState::ReadingLow;
                Ok(None)
            }
            ReadState::ReadingLow => {
                // Cannot overflow: expected_words is bounded at construction
                let _ = self.values.push(join_word(self.high_byte, byte));
                if self.values.len() == self.expected_words {
                    self.state = ReadState::Complete;
                    return Ok(Some(self.values.clone()));
                }
                self.state = ReadState::ReadingHigh;
                Ok(None)
            }
            ReadState::Complete => Ok(None),
        }
    }
}

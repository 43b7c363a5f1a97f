//! Driver error type

use picaso_protocol::ReplyError;

/// Errors that can occur while issuing a command
///
/// Two failure classes exist at the protocol boundary. `Timeout` and
/// `Serial` are communication failures: the transport did not deliver or
/// accept bytes in time. `Protocol` and `InvalidReply` are protocol
/// failures: bytes arrived but the device and driver have desynchronised,
/// or the device reported something outside its documented behaviour.
/// The remaining variants are raised before any byte is transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The read timeout elapsed before the display answered
    Timeout,
    /// The reply violated the wire protocol
    Protocol(ReplyError),
    /// The display answered with a value outside the documented range
    /// for the command
    InvalidReply(u16),
    /// A character the string protocol cannot carry (non-ASCII, or NUL
    /// inside a payload)
    InvalidCharacter(char),
    /// String payload exceeds the device limit of 511 characters
    StringTooLong(usize),
    /// The display reported writing a different number of characters
    /// than were sent
    StringLength { sent: u16, written: u16 },
    /// More polygon vertices than a count word can describe
    TooManyPoints(usize),
    /// Error from the underlying serial link
    Serial(E),
}

impl<E> From<ReplyError> for Error<E> {
    fn from(err: ReplyError) -> Self {
        Error::Protocol(err)
    }
}

//! Scripted serial link for driver tests
//!
//! Replays a canned reply byte stream and records everything the driver
//! writes. An exhausted reply script behaves like a read timeout, which is
//! exactly what a silent display looks like to the driver.

use heapless::Vec;
use picaso_hal::SerialLink;

/// Error surfaced by a deliberately broken [`MockLink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub struct MockLink {
    reply: Vec<u8, 64>,
    cursor: usize,
    tx: Vec<u8, 1024>,
    broken: bool,
}

impl MockLink {
    /// Link that will answer with the given bytes, then fall silent
    pub fn with_reply(reply: &[u8]) -> Self {
        let mut script = Vec::new();
        script.extend_from_slice(reply).unwrap();
        Self {
            reply: script,
            cursor: 0,
            tx: Vec::new(),
            broken: false,
        }
    }

    /// Link that never answers
    pub fn silent() -> Self {
        Self::with_reply(&[])
    }

    /// Link whose writes fail
    pub fn broken() -> Self {
        let mut link = Self::silent();
        link.broken = true;
        link
    }

    /// Everything the driver wrote, in order
    pub fn sent(&self) -> &[u8] {
        &self.tx
    }
}

impl SerialLink for MockLink {
    type Error = MockError;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.broken {
            return Err(MockError);
        }
        self.tx.push(byte).map_err(|_| MockError)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.reply.get(self.cursor).copied();
        if byte.is_some() {
            self.cursor += 1;
        }
        Ok(byte)
    }
}

//! Display connection and system-level commands
//!
//! [`Display`] owns the serial link, implements the command/acknowledge
//! cycle all catalog methods go through, and carries the system commands
//! that are not tied to a catalog group.

use picaso_hal::SerialLink;
use picaso_protocol::{split_word, Reply, ReplyReader};

use crate::error::Error;
use crate::graphics::Graphics;
use crate::text::Text;
use crate::touch::Touch;

/// System command opcodes
mod op {
    /// Clear Screen
    pub const CLEAR_SCREEN: u16 = 0xFFCD;
    /// Screen Mode (orientation)
    pub const ORIENTATION: u16 = 0xFF9E;
    /// Background Colour
    pub const BACKGROUND_COLOR: u16 = 0xFFA4;
    /// Contrast
    pub const CONTRAST: u16 = 0xFF9C;
    /// Display Size
    pub const DISPLAY_SIZE: u16 = 0xFFA6;
}

/// Contrast the display powers up with
const DEFAULT_CONTRAST: u16 = 15;

/// Display orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    Landscape,
    LandscapeReverse,
    Portrait,
    PortraitReverse,
}

impl Orientation {
    /// Parse an orientation from its wire word
    pub fn from_word(word: u16) -> Option<Self> {
        match word {
            0 => Some(Orientation::Landscape),
            1 => Some(Orientation::LandscapeReverse),
            2 => Some(Orientation::Portrait),
            3 => Some(Orientation::PortraitReverse),
            _ => None,
        }
    }

    /// Convert to the wire word
    pub fn to_word(self) -> u16 {
        match self {
            Orientation::Landscape => 0,
            Orientation::LandscapeReverse => 1,
            Orientation::Portrait => 2,
            Orientation::PortraitReverse => 3,
        }
    }
}

/// A Picaso display attached to a serial link
///
/// The link is owned exclusively: the protocol attributes replies to
/// commands purely by ordering, so a second writer would corrupt the
/// session undetectably. One command is in flight at a time and each call
/// blocks until its acknowledge cycle completes or fails.
///
/// The only state kept between calls is the last contrast set through
/// [`set_contrast`](Display::set_contrast), used by [`on`](Display::on)
/// to restore brightness after [`off`](Display::off).
pub struct Display<S: SerialLink> {
    link: S,
    contrast: u16,
}

impl<S: SerialLink> Display<S> {
    /// Take ownership of an opened serial link
    pub fn new(link: S) -> Self {
        Self {
            link,
            contrast: DEFAULT_CONTRAST,
        }
    }

    /// Release the underlying serial link
    pub fn release(self) -> S {
        self.link
    }

    /// Graphics commands
    pub fn graphics(&mut self) -> Graphics<'_, S> {
        Graphics::new(self)
    }

    /// Text and string commands
    pub fn text(&mut self) -> Text<'_, S> {
        Text::new(self)
    }

    /// Touch screen commands
    pub fn touch(&mut self) -> Touch<'_, S> {
        Touch::new(self)
    }

    // ---- command/acknowledge cycle ----

    /// Write a sequence of words, each as two bytes high byte first.
    pub(crate) fn write_words(&mut self, words: &[u16]) -> Result<(), Error<S::Error>> {
        for &word in words {
            self.link.write_all(&split_word(word)).map_err(Error::Serial)?;
        }
        Ok(())
    }

    /// Write raw payload bytes with no word splitting.
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error<S::Error>> {
        self.link.write_all(bytes).map_err(Error::Serial)
    }

    /// Read the acknowledgement and `reply_words` response words.
    pub(crate) fn read_reply(&mut self, reply_words: usize) -> Result<Reply, Error<S::Error>> {
        let mut reader = ReplyReader::new(reply_words);
        loop {
            let byte = self
                .link
                .read_byte()
                .map_err(Error::Serial)?
                .ok_or(Error::Timeout)?;
            if let Some(reply) = reader.feed(byte)? {
                return Ok(reply);
            }
        }
    }

    /// Send a word command and complete its acknowledge cycle.
    ///
    /// `reply_words` is the response word count documented for the opcode.
    pub(crate) fn command(
        &mut self,
        words: &[u16],
        reply_words: usize,
    ) -> Result<Reply, Error<S::Error>> {
        self.write_words(words)?;
        self.read_reply(reply_words)
    }

    /// Send a raw byte command and complete its acknowledge cycle.
    pub(crate) fn raw_command(
        &mut self,
        bytes: &[u8],
        reply_words: usize,
    ) -> Result<Reply, Error<S::Error>> {
        self.write_bytes(bytes)?;
        self.read_reply(reply_words)
    }

    /// Send a word command whose reply is a single word.
    pub(crate) fn query(&mut self, words: &[u16]) -> Result<u16, Error<S::Error>> {
        let reply = self.command(words, 1)?;
        Ok(reply[0])
    }

    // ---- system commands ----

    /// Clear the screen to the current background color
    pub fn clear_screen(&mut self) -> Result<(), Error<S::Error>> {
        self.command(&[op::CLEAR_SCREEN], 0)?;
        Ok(())
    }

    /// Set the screen background color, returning the previous color
    pub fn set_background_color(&mut self, color: u16) -> Result<u16, Error<S::Error>> {
        self.query(&[op::BACKGROUND_COLOR, color])
    }

    /// Set the contrast, returning the previous value
    ///
    /// Most LCD models ignore contrast levels other than on/off; the level
    /// is remembered so [`on`](Display::on) can restore it.
    pub fn set_contrast(&mut self, level: u16) -> Result<u16, Error<S::Error>> {
        let previous = self.query(&[op::CONTRAST, level])?;
        self.contrast = level;
        Ok(previous)
    }

    /// Last contrast set through [`set_contrast`](Display::set_contrast)
    pub fn contrast(&self) -> u16 {
        self.contrast
    }

    /// Blank the display by driving the contrast to zero
    ///
    /// Does not touch the remembered contrast, so [`on`](Display::on)
    /// restores the level in use before the display was blanked.
    pub fn off(&mut self) -> Result<(), Error<S::Error>> {
        self.query(&[op::CONTRAST, 0])?;
        Ok(())
    }

    /// Restore the display to the last set contrast
    pub fn on(&mut self) -> Result<(), Error<S::Error>> {
        self.query(&[op::CONTRAST, self.contrast])?;
        Ok(())
    }

    /// Set the display orientation, returning the previous orientation
    pub fn set_orientation(
        &mut self,
        orientation: Orientation,
    ) -> Result<Orientation, Error<S::Error>> {
        let previous = self.query(&[op::ORIENTATION, orientation.to_word()])?;
        Orientation::from_word(previous).ok_or(Error::InvalidReply(previous))
    }

    /// Query the display resolution as `(width, height)` in pixels
    ///
    /// The resolution follows the current orientation.
    pub fn size(&mut self) -> Result<(u16, u16), Error<S::Error>> {
        // Mode 0 reports the x resolution, mode 1 the y resolution
        let width = self.query(&[op::DISPLAY_SIZE, 0])?;
        let height = self.query(&[op::DISPLAY_SIZE, 1])?;
        Ok((width, height))
    }
}

//! Text and string commands
//!
//! Cursor movement, fonts, styling, and string output. String payloads
//! travel as raw bytes rather than words: the opcode prefix is followed by
//! the characters themselves and a NUL terminator, so only ASCII text
//! without embedded NUL can be sent.

use picaso_hal::SerialLink;

use crate::display::Display;
use crate::error::Error;

/// Text command opcodes
mod op {
    /// Move Cursor
    pub const MOVE_CURSOR: u16 = 0xFFE9;
    /// Put Character
    pub const PUT_CHARACTER: u16 = 0xFFFE;
    /// Text Foreground Colour
    pub const FOREGROUND_COLOR: u16 = 0xFFE7;
    /// Text Background Colour
    pub const BACKGROUND_COLOR: u16 = 0xFFE6;
    /// Set Font
    pub const SET_FONT: u16 = 0xFFE5;
    /// Text Width
    pub const WIDTH_MULTIPLIER: u16 = 0xFFE4;
    /// Text Height
    pub const HEIGHT_MULTIPLIER: u16 = 0xFFE3;
    /// Text X-gap
    pub const X_GAP: u16 = 0xFFE2;
    /// Text Y-gap
    pub const Y_GAP: u16 = 0xFFE1;
}

// Raw command opcodes, written as bare bytes with an unsplit payload
const PUT_STRING: [u8; 2] = [0x00, 0x18];
const CHARACTER_HEIGHT: [u8; 2] = [0x00, 0x1D];
const CHARACTER_WIDTH: [u8; 2] = [0x00, 0x1E];

const STRING_TERMINATOR: u8 = 0x00;

/// Longest string Put String accepts
pub const MAX_STRING_LEN: usize = 511;

/// Built-in fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// System font
    Font1,
    Font2,
    /// Default font
    Font3,
}

impl Font {
    /// Parse a font from its wire id
    pub fn from_word(word: u16) -> Option<Self> {
        match word {
            0 => Some(Font::Font1),
            1 => Some(Font::Font2),
            3 => Some(Font::Font3),
            _ => None,
        }
    }

    /// Convert to the wire id
    pub fn to_word(self) -> u16 {
        match self {
            Font::Font1 => 0,
            Font::Font2 => 1,
            Font::Font3 => 3,
        }
    }
}

/// Text command group, borrowed from a [`Display`]
pub struct Text<'a, S: SerialLink> {
    display: &'a mut Display<S>,
}

impl<'a, S: SerialLink> Text<'a, S> {
    pub(crate) fn new(display: &'a mut Display<S>) -> Self {
        Self { display }
    }

    /// Move the text cursor to a line and column
    ///
    /// Positions are in character cells of the currently selected font and
    /// start at 0, so line 0 column 0 is the top left corner.
    pub fn move_cursor(&mut self, line: u16, column: u16) -> Result<(), Error<S::Error>> {
        self.display.command(&[op::MOVE_CURSOR, line, column], 0)?;
        Ok(())
    }

    /// Print a single character at the cursor
    pub fn put_character(&mut self, character: char) -> Result<(), Error<S::Error>> {
        let code = char_code(character)?;
        self.display
            .command(&[op::PUT_CHARACTER, u16::from(code)], 0)?;
        Ok(())
    }

    /// Print a string at the cursor
    ///
    /// At most [`MAX_STRING_LEN`] ASCII characters. The display echoes the
    /// number of characters it wrote; a mismatch is reported as
    /// [`Error::StringLength`].
    pub fn put_string(&mut self, text: &str) -> Result<(), Error<S::Error>> {
        if text.len() > MAX_STRING_LEN {
            return Err(Error::StringTooLong(text.len()));
        }
        if let Some(bad) = text.chars().find(|&c| !sendable(c)) {
            return Err(Error::InvalidCharacter(bad));
        }

        self.display.write_bytes(&PUT_STRING)?;
        self.display.write_bytes(text.as_bytes())?;
        self.display.write_bytes(&[STRING_TERMINATOR])?;
        let reply = self.display.read_reply(1)?;

        let sent = text.len() as u16;
        let written = reply[0];
        if written != sent {
            return Err(Error::StringLength { sent, written });
        }
        Ok(())
    }

    /// Width of a character in pixels, in the currently selected font
    ///
    /// Widths above 255 pixel units come back wrapped modulo 256 by the
    /// device.
    pub fn character_width(&mut self, character: char) -> Result<u16, Error<S::Error>> {
        let code = char_code(character)?;
        let reply = self
            .display
            .raw_command(&[CHARACTER_WIDTH[0], CHARACTER_WIDTH[1], code], 1)?;
        Ok(reply[0])
    }

    /// Height of a character in pixels, in the currently selected font
    ///
    /// Heights above 255 pixel units come back wrapped modulo 256 by the
    /// device.
    pub fn character_height(&mut self, character: char) -> Result<u16, Error<S::Error>> {
        let code = char_code(character)?;
        let reply = self
            .display
            .raw_command(&[CHARACTER_HEIGHT[0], CHARACTER_HEIGHT[1], code], 1)?;
        Ok(reply[0])
    }

    /// Set the text foreground color, returning the previous color
    pub fn set_foreground_color(&mut self, color: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::FOREGROUND_COLOR, color])
    }

    /// Set the text background color, returning the previous color
    pub fn set_background_color(&mut self, color: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::BACKGROUND_COLOR, color])
    }

    /// Select a font, returning the previously selected font
    pub fn set_font(&mut self, font: Font) -> Result<Font, Error<S::Error>> {
        let previous = self.display.query(&[op::SET_FONT, font.to_word()])?;
        Font::from_word(previous).ok_or(Error::InvalidReply(previous))
    }

    /// Set the text width multiplier (1 to 16), returning the previous one
    pub fn set_width_multiplier(&mut self, multiplier: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::WIDTH_MULTIPLIER, multiplier])
    }

    /// Set the text height multiplier (1 to 16), returning the previous one
    pub fn set_height_multiplier(&mut self, multiplier: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::HEIGHT_MULTIPLIER, multiplier])
    }

    /// Set width and height multipliers together
    ///
    /// Returns the previous `(width, height)` multipliers.
    pub fn set_size_multiplier(
        &mut self,
        multiplier: u16,
    ) -> Result<(u16, u16), Error<S::Error>> {
        let width = self.set_width_multiplier(multiplier)?;
        let height = self.set_height_multiplier(multiplier)?;
        Ok((width, height))
    }

    /// Set the horizontal pixel gap between characters (0 to 32)
    ///
    /// Returns the previous gap.
    pub fn set_x_gap(&mut self, pixels: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::X_GAP, pixels])
    }

    /// Set the vertical pixel gap between characters (0 to 32)
    ///
    /// Returns the previous gap.
    pub fn set_y_gap(&mut self, pixels: u16) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::Y_GAP, pixels])
    }

    /// Set both character gaps together
    ///
    /// Returns the previous `(x, y)` gaps.
    pub fn set_gap(&mut self, pixels: u16) -> Result<(u16, u16), Error<S::Error>> {
        let x = self.set_x_gap(pixels)?;
        let y = self.set_y_gap(pixels)?;
        Ok((x, y))
    }
}

/// Whether the string protocol can carry this character.
fn sendable(c: char) -> bool {
    c.is_ascii() && c != '\0'
}

fn char_code<E>(c: char) -> Result<u8, Error<E>> {
    if !sendable(c) {
        return Err(Error::InvalidCharacter(c));
    }
    Ok(c as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLink;
    use picaso_protocol::ACK;

    fn display_with_reply(reply: &[u8]) -> Display<MockLink> {
        Display::new(MockLink::with_reply(reply))
    }

    #[test]
    fn test_move_cursor_wire_format() {
        let mut display = display_with_reply(&[ACK]);
        display.text().move_cursor(3, 12).unwrap();

        let link = display.release();
        assert_eq!(link.sent(), &[0xFF, 0xE9, 0x00, 0x03, 0x00, 0x0C]);
    }

    #[test]
    fn test_put_character_wire_format() {
        let mut display = display_with_reply(&[ACK]);
        display.text().put_character('A').unwrap();

        let link = display.release();
        assert_eq!(link.sent(), &[0xFF, 0xFE, 0x00, 0x41]);
    }

    #[test]
    fn test_put_string_wire_format() {
        // Display reports 5 characters written
        let mut display = display_with_reply(&[ACK, 0x00, 0x05]);
        display.text().put_string("Hello").unwrap();

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[0x00, 0x18, b'H', b'e', b'l', b'l', b'o', 0x00]
        );
    }

    #[test]
    fn test_put_string_length_mismatch() {
        let mut display = display_with_reply(&[ACK, 0x00, 0x03]);
        assert_eq!(
            display.text().put_string("Hello"),
            Err(Error::StringLength { sent: 5, written: 3 })
        );
    }

    #[test]
    fn test_put_string_rejects_overlong() {
        let bytes = [b'a'; MAX_STRING_LEN + 1];
        let text = core::str::from_utf8(&bytes).unwrap();

        let mut display = display_with_reply(&[]);
        assert_eq!(
            display.text().put_string(text),
            Err(Error::StringTooLong(MAX_STRING_LEN + 1))
        );
        // Rejected before anything reached the wire
        assert!(display.release().sent().is_empty());
    }

    #[test]
    fn test_put_string_rejects_unsendable_characters() {
        let mut display = display_with_reply(&[]);
        assert_eq!(
            display.text().put_string("gr\u{00FC}n"),
            Err(Error::InvalidCharacter('\u{00FC}'))
        );
        assert_eq!(
            display.text().put_string("a\0b"),
            Err(Error::InvalidCharacter('\0'))
        );
        assert!(display.release().sent().is_empty());
    }

    #[test]
    fn test_character_width_raw_command() {
        let mut display = display_with_reply(&[ACK, 0x00, 0x08]);
        let width = display.text().character_width('W').unwrap();
        assert_eq!(width, 8);

        let link = display.release();
        assert_eq!(link.sent(), &[0x00, 0x1E, b'W']);
    }

    #[test]
    fn test_character_height_raw_command() {
        let mut display = display_with_reply(&[ACK, 0x00, 0x0C]);
        let height = display.text().character_height('W').unwrap();
        assert_eq!(height, 12);

        let link = display.release();
        assert_eq!(link.sent(), &[0x00, 0x1D, b'W']);
    }

    #[test]
    fn test_set_font_reports_previous() {
        let mut display = display_with_reply(&[ACK, 0x00, 0x03]);
        let previous = display.text().set_font(Font::Font1).unwrap();
        assert_eq!(previous, Font::Font3);

        let link = display.release();
        assert_eq!(link.sent(), &[0xFF, 0xE5, 0x00, 0x00]);
    }

    #[test]
    fn test_set_font_unknown_id_is_invalid_reply() {
        let mut display = display_with_reply(&[ACK, 0x00, 0x02]);
        assert_eq!(
            display.text().set_font(Font::Font2),
            Err(Error::InvalidReply(2))
        );
    }

    #[test]
    fn test_set_size_multiplier_issues_both_commands() {
        let mut display = display_with_reply(&[
            ACK, 0x00, 0x01, // previous width
            ACK, 0x00, 0x02, // previous height
        ]);
        assert_eq!(display.text().set_size_multiplier(2).unwrap(), (1, 2));

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[0xFF, 0xE4, 0x00, 0x02, 0xFF, 0xE3, 0x00, 0x02]
        );
    }

    #[test]
    fn test_set_gap_issues_both_commands() {
        let mut display = display_with_reply(&[
            ACK, 0x00, 0x00, // previous x gap
            ACK, 0x00, 0x00, // previous y gap
        ]);
        assert_eq!(display.text().set_gap(4).unwrap(), (0, 0));

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[0xFF, 0xE2, 0x00, 0x04, 0xFF, 0xE1, 0x00, 0x04]
        );
    }

    #[test]
    fn test_font_word_roundtrip() {
        for font in [Font::Font1, Font::Font2, Font::Font3] {
            assert_eq!(Font::from_word(font.to_word()), Some(font));
        }
        assert_eq!(Font::from_word(2), None);
    }
}

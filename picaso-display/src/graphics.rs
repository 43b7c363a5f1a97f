//! Graphics commands
//!
//! Drawing primitives from the gfx section of the command set. All
//! coordinates are in pixels with the origin at the top left of the
//! current orientation; colors are RGB565 words (see
//! [`rgb`](picaso_protocol::rgb)).

use picaso_hal::SerialLink;

use crate::display::Display;
use crate::error::Error;

/// Graphics command opcodes
mod op {
    /// Draw Rectangle
    pub const RECTANGLE: u16 = 0xFFC5;
    /// Draw Filled Rectangle
    pub const RECTANGLE_FILLED: u16 = 0xFFC4;
    /// Draw Ellipse
    pub const ELLIPSE: u16 = 0xFFB2;
    /// Draw Filled Ellipse
    pub const ELLIPSE_FILLED: u16 = 0xFFB1;
    /// Draw Line
    pub const LINE: u16 = 0xFFC8;
    /// Put Pixel
    pub const PUT_PIXEL: u16 = 0xFFC1;
    /// Draw Polygon
    pub const POLYGON: u16 = 0x0013;
    /// Draw Filled Polygon
    pub const POLYGON_FILLED: u16 = 0x0014;
    /// Draw Polyline
    pub const POLYLINE: u16 = 0x0015;
}

/// Graphics command group, borrowed from a [`Display`]
pub struct Graphics<'a, S: SerialLink> {
    display: &'a mut Display<S>,
}

impl<'a, S: SerialLink> Graphics<'a, S> {
    pub(crate) fn new(display: &'a mut Display<S>) -> Self {
        Self { display }
    }

    /// Draw a line between two points
    pub fn line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.display.command(&[op::LINE, x1, y1, x2, y2, color], 0)?;
        Ok(())
    }

    /// Set a single pixel
    pub fn put_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Error<S::Error>> {
        self.display.command(&[op::PUT_PIXEL, x, y, color], 0)?;
        Ok(())
    }

    /// Draw a rectangle outline from corner to corner
    pub fn rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.display
            .command(&[op::RECTANGLE, x1, y1, x2, y2, color], 0)?;
        Ok(())
    }

    /// Draw a filled rectangle from corner to corner
    pub fn filled_rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.display
            .command(&[op::RECTANGLE_FILLED, x1, y1, x2, y2, color], 0)?;
        Ok(())
    }

    /// Draw an ellipse outline centered on `(x, y)`
    pub fn ellipse(
        &mut self,
        x: u16,
        y: u16,
        x_radius: u16,
        y_radius: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.display
            .command(&[op::ELLIPSE, x, y, x_radius, y_radius, color], 0)?;
        Ok(())
    }

    /// Draw a filled ellipse centered on `(x, y)`
    pub fn filled_ellipse(
        &mut self,
        x: u16,
        y: u16,
        x_radius: u16,
        y_radius: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.display
            .command(&[op::ELLIPSE_FILLED, x, y, x_radius, y_radius, color], 0)?;
        Ok(())
    }

    /// Draw a circle outline
    pub fn circle(
        &mut self,
        x: u16,
        y: u16,
        radius: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.ellipse(x, y, radius, radius, color)
    }

    /// Draw a filled circle
    pub fn filled_circle(
        &mut self,
        x: u16,
        y: u16,
        radius: u16,
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.filled_ellipse(x, y, radius, radius, color)
    }

    /// Draw an open polyline through the given points
    pub fn polyline(&mut self, points: &[(u16, u16)], color: u16) -> Result<(), Error<S::Error>> {
        self.poly(op::POLYLINE, points, color)
    }

    /// Draw a closed polygon outline through the given points
    pub fn polygon(&mut self, points: &[(u16, u16)], color: u16) -> Result<(), Error<S::Error>> {
        self.poly(op::POLYGON, points, color)
    }

    /// Draw a filled polygon through the given points
    pub fn filled_polygon(
        &mut self,
        points: &[(u16, u16)],
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.poly(op::POLYGON_FILLED, points, color)
    }

    /// Draw a triangle outline
    pub fn triangle(
        &mut self,
        vertices: [(u16, u16); 3],
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.polygon(&vertices, color)
    }

    /// Draw a filled triangle
    pub fn filled_triangle(
        &mut self,
        vertices: [(u16, u16); 3],
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        self.filled_polygon(&vertices, color)
    }

    /// Shared body of the polygon family.
    ///
    /// Wire layout: opcode, vertex count, all x values, all y values,
    /// color. The whole sequence is one command and is acknowledged once.
    fn poly(
        &mut self,
        opcode: u16,
        points: &[(u16, u16)],
        color: u16,
    ) -> Result<(), Error<S::Error>> {
        let count =
            u16::try_from(points.len()).map_err(|_| Error::TooManyPoints(points.len()))?;
        self.display.write_words(&[opcode, count])?;
        for &(x, _) in points {
            self.display.write_words(&[x])?;
        }
        for &(_, y) in points {
            self.display.write_words(&[y])?;
        }
        self.display.write_words(&[color])?;
        self.display.read_reply(0)?;
        Ok(())
    }
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
    fn test_line_wire_format() {
        let mut display = display_with_reply(&[ACK]);
        display.graphics().line(1, 2, 300, 4, 0xF800).unwrap();

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[
                0xFF, 0xC8, // opcode
                0x00, 0x01, 0x00, 0x02, // start
                0x01, 0x2C, 0x00, 0x04, // end
                0xF8, 0x00, // color
            ]
        );
    }

    #[test]
    fn test_rectangle_opcodes() {
        let mut display = display_with_reply(&[ACK, ACK]);
        display.graphics().rectangle(0, 0, 10, 10, 0).unwrap();
        display.graphics().filled_rectangle(0, 0, 10, 10, 0).unwrap();

        let link = display.release();
        assert_eq!(&link.sent()[..2], &[0xFF, 0xC5]);
        assert_eq!(&link.sent()[12..14], &[0xFF, 0xC4]);
    }

    #[test]
    fn test_circle_delegates_to_ellipse() {
        let mut display = display_with_reply(&[ACK]);
        display.graphics().filled_circle(100, 100, 10, 0x001F).unwrap();

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[
                0xFF, 0xB1, // filled ellipse opcode
                0x00, 0x64, 0x00, 0x64, // center
                0x00, 0x0A, 0x00, 0x0A, // equal radii
                0x00, 0x1F, // color
            ]
        );
    }

    #[test]
    fn test_polyline_wire_layout() {
        let mut display = display_with_reply(&[ACK]);
        display
            .graphics()
            .polyline(&[(1, 2), (3, 4), (5, 6)], 7)
            .unwrap();

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[
                0x00, 0x15, // polyline opcode
                0x00, 0x03, // vertex count
                0x00, 0x01, 0x00, 0x03, 0x00, 0x05, // x values
                0x00, 0x02, 0x00, 0x04, 0x00, 0x06, // y values
                0x00, 0x07, // color
            ]
        );
    }

    #[test]
    fn test_triangle_is_a_closed_polygon() {
        let mut display = display_with_reply(&[ACK]);
        display
            .graphics()
            .triangle([(0, 0), (10, 0), (5, 8)], 1)
            .unwrap();

        let link = display.release();
        assert_eq!(&link.sent()[..4], &[0x00, 0x13, 0x00, 0x03]);
    }

    #[test]
    fn test_put_pixel_wire_format() {
        let mut display = display_with_reply(&[ACK]);
        display.graphics().put_pixel(5, 6, 0xFFFF).unwrap();

        let link = display.release();
        assert_eq!(
            link.sent(),
            &[0xFF, 0xC1, 0x00, 0x05, 0x00, 0x06, 0xFF, 0xFF]
        );
    }
}

//! Serial link abstraction
//!
//! Provides the blocking byte-level trait the display driver drives, plus
//! the port configuration the implementor applies when opening the link.

/// Blocking byte-oriented serial link.
///
/// The display protocol is strictly synchronous: the driver writes one
/// complete command and then reads the reply, so a link only needs single
/// byte operations with the configured timeouts applied per call.
pub trait SerialLink {
    /// Error type for link operations
    type Error;

    /// Write a single byte to the link
    ///
    /// Blocks until the byte has been accepted or the write timeout
    /// elapses; an elapsed timeout is reported through `Self::Error`.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Read a single byte from the link
    ///
    /// Blocks up to the read timeout. Returns `Ok(None)` when the timeout
    /// elapsed with nothing received.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a byte slice to the link in order
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// Serial port configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u32,
    /// Write timeout in milliseconds
    pub write_timeout_ms: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600, // Display default in SPE2 rev 1.1
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            read_timeout_ms: 10_000,
            write_timeout_ms: 10_000,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

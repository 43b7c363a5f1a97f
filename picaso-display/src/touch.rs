//! Touch screen commands
//!
//! The touch task runs on the device in the background; the host enables
//! or disables it and polls its status. Disabling the task when unused
//! frees device cycles.

use picaso_hal::SerialLink;

use crate::display::Display;
use crate::error::Error;

/// Touch command opcodes
mod op {
    /// Touch Set (mode control)
    pub const TOUCH_SET: u16 = 0xFF39;
    /// Touch Get (status poll)
    pub const TOUCH_GET: u16 = 0xFF37;
}

// Touch Get request modes
const GET_STATE: u16 = 0;
const GET_X: u16 = 1;
const GET_Y: u16 = 2;

/// Touch Set modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchMode {
    /// Enable and initialise the touch hardware
    Enable,
    /// Disable the touch screen
    Disable,
    /// Reset the active region to the full screen
    ResetActiveRegion,
}

impl TouchMode {
    /// Convert to the wire word
    pub fn to_word(self) -> u16 {
        match self {
            TouchMode::Enable => 0,
            TouchMode::Disable => 1,
            TouchMode::ResetActiveRegion => 2,
        }
    }
}

/// Touch activity reported by a status poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchState {
    /// No touch, or activity outside the active region
    NoTouch,
    Press,
    Release,
    Moving,
}

impl TouchState {
    /// Parse a state from its wire word
    pub fn from_word(word: u16) -> Option<Self> {
        match word {
            0 => Some(TouchState::NoTouch),
            1 => Some(TouchState::Press),
            2 => Some(TouchState::Release),
            3 => Some(TouchState::Moving),
            _ => None,
        }
    }
}

/// Touch command group, borrowed from a [`Display`]
pub struct Touch<'a, S: SerialLink> {
    display: &'a mut Display<S>,
}

impl<'a, S: SerialLink> Touch<'a, S> {
    pub(crate) fn new(display: &'a mut Display<S>) -> Self {
        Self { display }
    }

    /// Control the touch screen task
    pub fn set_mode(&mut self, mode: TouchMode) -> Result<(), Error<S::Error>> {
        self.display
            .command(&[op::TOUCH_SET, mode.to_word()], 0)?;
        Ok(())
    }

    /// Poll the current touch activity
    pub fn state(&mut self) -> Result<TouchState, Error<S::Error>> {
        let word = self.display.query(&[op::TOUCH_GET, GET_STATE])?;
        TouchState::from_word(word).ok_or(Error::InvalidReply(word))
    }

    /// X coordinate of the last touch
    pub fn x(&mut self) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::TOUCH_GET, GET_X])
    }

    /// Y coordinate of the last touch
    pub fn y(&mut self) -> Result<u16, Error<S::Error>> {
        self.display.query(&[op::TOUCH_GET, GET_Y])
    }
}

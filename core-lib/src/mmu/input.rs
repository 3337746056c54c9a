//! Joypad buttons and the JOYP (0xFF00) register matrix.

use tracing::trace;

/// Game Boy buttons, in hardware matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}

impl Button {
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
        Self::A,
        Self::B,
        Self::Select,
        Self::Start,
    ];
}

const SELECT_DPAD: u8 = 0x10;
const SELECT_BUTTONS: u8 = 0x20;

/// The 2x4 button matrix behind the JOYP register.
///
/// Bits 4 and 5 of JOYP select which half of the matrix drives the low
/// nibble; all matrix lines are active-low.
#[derive(Debug)]
pub struct Joypad {
    /// Selection bits as last written (bits 4-5 of JOYP).
    select: u8,
    pressed: [bool; 8],
}

impl Default for Joypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Joypad {
    pub fn new() -> Self {
        Self {
            // Neither column selected after boot.
            select: SELECT_DPAD | SELECT_BUTTONS,
            pressed: [false; 8],
        }
    }

    /// Mark a button down. Returns true on a released-to-pressed edge,
    /// which is when the joypad interrupt is requested.
    pub fn press(&mut self, button: Button) -> bool {
        let edge = !self.pressed[button as usize];
        self.pressed[button as usize] = true;
        if edge {
            trace!(?button, "button pressed");
        }
        edge
    }

    /// Mark a button up.
    pub fn release(&mut self, button: Button) {
        self.pressed[button as usize] = false;
    }

    /// Decode JOYP: selected matrix lines pull their bits low, everything
    /// unconnected reads high.
    pub fn read(&self) -> u8 {
        let mut value = 0xC0 | self.select | 0x0F;
        if self.select & SELECT_DPAD == 0 {
            for button in &Button::ALL[0..4] {
                if self.pressed[*button as usize] {
                    value &= !(1 << (*button as u8));
                }
            }
        }
        if self.select & SELECT_BUTTONS == 0 {
            for button in &Button::ALL[4..8] {
                if self.pressed[*button as usize] {
                    value &= !(1 << (*button as u8 - 4));
                }
            }
        }
        value
    }

    /// Only the two selection bits are writable.
    pub fn write(&mut self, value: u8) {
        self.select = value & (SELECT_DPAD | SELECT_BUTTONS);
    }
}

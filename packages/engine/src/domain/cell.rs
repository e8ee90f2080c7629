//! Cell - the binary state of one board position
//!
//! `#[repr(u8)]` keeps a board's storage byte-compatible with a JS
//! `Uint8Array` (0 = dead, 1 = alive).

use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Any non-zero byte reads as alive, matching the JS side's truthiness.
    #[inline]
    pub fn from_byte(byte: u8) -> Cell {
        if byte == 0 { Cell::Dead } else { Cell::Alive }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

//! Color buffer for the canvas
//!
//! One ABGR `u32` per cell (little-endian bytes `[R, G, B, A]`), so JS can
//! wrap the buffer in a `Uint8ClampedArray` and hand it to `ImageData`
//! without conversion.

use crate::core::grid::{AgeMap, Board};

pub const DEAD_COLOR: u32 = abgr(40, 40, 40);
pub const LIVE_COLOR: u32 = abgr(0, 200, 0);

/// Ages at or above this render with the hottest heatmap color.
pub const HEATMAP_MAX_AGE: u32 = 50;

const HEAT_YOUNG: (u8, u8, u8) = (255, 235, 59);
const HEAT_OLD: (u8, u8, u8) = (211, 47, 47);

pub(crate) struct RenderBuffers {
    pub(crate) colors: Vec<u32>,
}

impl RenderBuffers {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            colors: vec![DEAD_COLOR; size],
        }
    }

    /// Rewrite every pixel from the current snapshot. Resizes the buffer
    /// when the grid changed size.
    pub(crate) fn refresh(&mut self, board: &Board, ages: &AgeMap, heatmap: bool) {
        let size = board.dims().size();
        self.colors.resize(size, DEAD_COLOR);

        for (idx, (cell, &age)) in board.cells().iter().zip(ages.as_slice()).enumerate() {
            let color = match (cell.is_alive(), heatmap) {
                (false, _) => DEAD_COLOR,
                (true, false) => LIVE_COLOR,
                (true, true) => heatmap_color(age),
            };
            fast!(self.colors, [idx] = color);
        }
    }
}

/// Yellow for young cells fading to red for old ones. A live cell with
/// age 0 (seeded or toggled, never stepped) gets the youngest color.
pub fn heatmap_color(age: u32) -> u32 {
    let t = age.min(HEATMAP_MAX_AGE) as f32 / HEATMAP_MAX_AGE as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    abgr(
        lerp(HEAT_YOUNG.0, HEAT_OLD.0),
        lerp(HEAT_YOUNG.1, HEAT_OLD.1),
        lerp(HEAT_YOUNG.2, HEAT_OLD.2),
    )
}

pub const fn abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

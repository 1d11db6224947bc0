//! Custom glyph slots in CGRAM
//!
//! The controller reserves eight 8-byte cells of CGRAM for user glyphs. Once
//! uploaded, a glyph is printed by writing its slot number (`0..=7`) as a
//! regular character code. Glyphs survive until power loss or the next
//! upload to the same slot.
//!
//! Each glyph row is one byte; only the low five bits are drawn:
//!
//! ```text
//! 0x00  .....
//! 0x0A  .#.#.
//! 0x00  .....
//! 0x11  #...#
//! 0x0E  .###.
//! ```
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::glyph::GlyphSlot;
//!
//! assert_eq!(GlyphSlot::new(2).cgram_instruction(), 0x50);
//!
//! // Out-of-range slots clamp to the last one
//! assert_eq!(GlyphSlot::new(12).index(), 7);
//! ```

use crate::command::SET_CGRAM_ADDR;

/// Number of user glyph slots
pub const GLYPH_SLOTS: u8 = 8;

/// Rows in one glyph (5x8 font)
pub const GLYPH_ROWS: usize = 8;

/// Index of a CGRAM glyph cell, always `0..=7`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphSlot(u8);

impl GlyphSlot {
    /// Create a slot, clamping `location` to `0..=7`
    pub fn new(location: u8) -> Self {
        Self(location.min(GLYPH_SLOTS - 1))
    }

    /// Slot number, also the character code that prints the glyph
    pub fn index(self) -> u8 {
        self.0
    }

    /// "Set CGRAM address" instruction pointing at the first row of the slot
    pub fn cgram_instruction(self) -> u8 {
        SET_CGRAM_ADDR | (self.0 << 3)
    }
}

impl From<u8> for GlyphSlot {
    fn from(location: u8) -> Self {
        Self::new(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_zero_address() {
        assert_eq!(GlyphSlot::new(0).cgram_instruction(), 0x40);
    }

    #[test]
    fn test_slot_seven_address() {
        assert_eq!(GlyphSlot::new(7).cgram_instruction(), 0x78);
    }

    #[test]
    fn test_slot_clamps() {
        assert_eq!(GlyphSlot::new(8), GlyphSlot::new(7));
        assert_eq!(GlyphSlot::from(255).index(), 7);
    }
}

//! Shadow copies of the controller registers
//!
//! The HD44780 cannot be read back over a PCF8574 backpack (RW is tied low in
//! practice), so the driver keeps its own copy of the three configuration
//! registers. Each register is a small value type wrapping the flag bits; the
//! instruction byte sent to the controller is the register's instruction
//! prefix OR-ed with those bits.
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::register::ControlRegister;
//!
//! let mut control = ControlRegister::default();
//! assert_eq!(control.bits(), 0x04); // display on
//!
//! control.set(ControlRegister::CURSOR, true);
//! control.set(ControlRegister::BLINK, true);
//! assert_eq!(control.bits(), 0x07);
//! assert_eq!(control.instruction(), 0x0F);
//! ```

use crate::command::{
    BLINK_ON, CURSOR_ON, DISPLAY_CONTROL, DISPLAY_ON, DOTS_5X10, EIGHT_BIT_MODE, ENTRY_LEFT,
    ENTRY_MODE_SET, ENTRY_SHIFT_INCREMENT, FUNCTION_SET, TWO_LINE,
};
use crate::config::CharSize;

/// Function set register: data width, line count and font
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FunctionRegister(u8);

impl FunctionRegister {
    /// 8-bit data bus flag (always clear in this driver)
    pub const EIGHT_BIT: u8 = EIGHT_BIT_MODE;
    /// Two-line addressing flag
    pub const TWO_LINE: u8 = TWO_LINE;
    /// 5x10 dot font flag
    pub const DOTS_5X10: u8 = DOTS_5X10;

    /// Derive the register for a panel with `rows` rows and the given font
    ///
    /// One row leaves the line flag clear; two or more rows set it. The font
    /// flag is independent of the line flag.
    pub fn for_panel(rows: u8, char_size: CharSize) -> Self {
        let mut bits = 0;
        if rows > 1 {
            bits |= Self::TWO_LINE;
        }
        if char_size == CharSize::Dots5x10 {
            bits |= Self::DOTS_5X10;
        }
        Self(bits)
    }

    /// Raw flag bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Instruction byte (`0x20 | bits`)
    pub fn instruction(self) -> u8 {
        FUNCTION_SET | self.0
    }
}

/// Display control register: display, cursor and blink
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRegister(u8);

impl ControlRegister {
    /// Display on flag
    pub const DISPLAY: u8 = DISPLAY_ON;
    /// Cursor visible flag
    pub const CURSOR: u8 = CURSOR_ON;
    /// Cursor blink flag
    pub const BLINK: u8 = BLINK_ON;

    /// Set or clear one flag
    pub fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Whether `flag` is set
    pub fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Raw flag bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Instruction byte (`0x08 | bits`)
    pub fn instruction(self) -> u8 {
        DISPLAY_CONTROL | self.0
    }
}

impl Default for ControlRegister {
    /// Display on, cursor hidden, no blink
    fn default() -> Self {
        Self(Self::DISPLAY)
    }
}

/// Entry mode register: text direction and autoscroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeRegister(u8);

impl ModeRegister {
    /// Left-to-right flag (address counter increments)
    pub const LEFT_TO_RIGHT: u8 = ENTRY_LEFT;
    /// Autoscroll flag (display shifts on every write)
    pub const AUTOSCROLL: u8 = ENTRY_SHIFT_INCREMENT;

    /// Set or clear one flag
    pub fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Whether `flag` is set
    pub fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Raw flag bits
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Instruction byte (`0x04 | bits`)
    pub fn instruction(self) -> u8 {
        ENTRY_MODE_SET | self.0
    }
}

impl Default for ModeRegister {
    /// Left to right, no autoscroll
    fn default() -> Self {
        Self(Self::LEFT_TO_RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_register_two_rows_5x8() {
        let function = FunctionRegister::for_panel(2, CharSize::Dots5x8);
        assert_eq!(function.bits(), 0x08);
        assert_eq!(function.instruction(), 0x28);
    }

    #[test]
    fn test_function_register_one_row() {
        assert_eq!(FunctionRegister::for_panel(1, CharSize::Dots5x8).bits(), 0x00);
        assert_eq!(FunctionRegister::for_panel(1, CharSize::Dots5x10).bits(), 0x04);
    }

    #[test]
    fn test_function_register_four_rows_5x10_is_orthogonal() {
        // Unverified on hardware; flags are treated as independent bits
        let function = FunctionRegister::for_panel(4, CharSize::Dots5x10);
        assert_eq!(function.bits(), 0x0C);
        assert_eq!(function.bits() & FunctionRegister::EIGHT_BIT, 0);
    }

    #[test]
    fn test_control_register_toggles_single_bits() {
        let mut control = ControlRegister::default();
        control.set(ControlRegister::CURSOR, true);
        assert_eq!(control.bits(), 0x06);
        control.set(ControlRegister::BLINK, true);
        assert_eq!(control.bits(), 0x07);
        control.set(ControlRegister::BLINK, false);
        assert_eq!(control.bits(), 0x06);
        assert!(control.contains(ControlRegister::CURSOR));
        assert!(!control.contains(ControlRegister::BLINK));
    }

    #[test]
    fn test_control_register_set_is_idempotent() {
        let mut control = ControlRegister::default();
        control.set(ControlRegister::DISPLAY, false);
        control.set(ControlRegister::DISPLAY, false);
        assert_eq!(control.bits(), 0x00);
        assert_eq!(control.instruction(), 0x08);
    }

    #[test]
    fn test_mode_register_defaults_and_toggles() {
        let mut mode = ModeRegister::default();
        assert_eq!(mode.bits(), 0x02);
        mode.set(ModeRegister::AUTOSCROLL, true);
        assert_eq!(mode.bits(), 0x03);
        mode.set(ModeRegister::LEFT_TO_RIGHT, false);
        assert_eq!(mode.bits(), 0x01);
        assert_eq!(mode.instruction(), 0x05);
    }
}

//! HD44780 instruction set and PCF8574 pin mapping
//!
//! This module defines the instruction bytes understood by the HD44780
//! controller, the flag bits that are OR-ed into them, and the bit layout of
//! the byte written to the PCF8574 expander.
//!
//! ## Instruction Structure
//!
//! Every instruction is a single byte whose highest set bit selects the
//! instruction family and whose lower bits carry the arguments:
//!
//! | Family          | Prefix | Arguments                         |
//! |-----------------|--------|-----------------------------------|
//! | Clear display   | `0x01` | -                                 |
//! | Return home     | `0x02` | -                                 |
//! | Entry mode set  | `0x04` | direction, shift                  |
//! | Display control | `0x08` | display, cursor, blink            |
//! | Cursor shift    | `0x10` | display/cursor, right/left        |
//! | Function set    | `0x20` | data width, lines, font           |
//! | Set CGRAM addr  | `0x40` | 6-bit address                     |
//! | Set DDRAM addr  | `0x80` | 7-bit address                     |
//!
//! ## Expander Wiring
//!
//! The common PCF8574 backpacks wire the expander port to the LCD like this:
//!
//! ```text
//! P7  P6  P5  P4  P3  P2  P1  P0
//! D7  D6  D5  D4  BL  EN  RW  RS
//! ```
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::command;
//!
//! // Display on, cursor on, no blink
//! let byte = command::DISPLAY_CONTROL | command::DISPLAY_ON | command::CURSOR_ON;
//! assert_eq!(byte, 0x0E);
//!
//! // Scroll the whole display one position to the left
//! let byte = command::CURSOR_SHIFT | command::DISPLAY_MOVE | command::MOVE_LEFT;
//! assert_eq!(byte, 0x18);
//! ```

// Instructions

/// Clear display instruction (0x01)
///
/// Fills DDRAM with spaces and sets the address counter to 0.
/// Needs the extended settle time.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home instruction (0x02)
///
/// Sets the address counter to 0 and undoes any display shift.
/// Needs the extended settle time.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set instruction (0x04)
///
/// Combined with [`ENTRY_LEFT`] and [`ENTRY_SHIFT_INCREMENT`].
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control instruction (0x08)
///
/// Combined with [`DISPLAY_ON`], [`CURSOR_ON`] and [`BLINK_ON`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift instruction (0x10)
///
/// Combined with [`DISPLAY_MOVE`] and [`MOVE_RIGHT`].
pub const CURSOR_SHIFT: u8 = 0x10;

/// Function set instruction (0x20)
///
/// Combined with [`EIGHT_BIT_MODE`], [`TWO_LINE`] and [`DOTS_5X10`].
pub const FUNCTION_SET: u8 = 0x20;

/// Set CGRAM address instruction (0x40)
///
/// Lower 6 bits carry the address; each glyph occupies 8 bytes.
pub const SET_CGRAM_ADDR: u8 = 0x40;

/// Set DDRAM address instruction (0x80)
///
/// Lower 7 bits carry the address.
pub const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags

/// Entry mode: text flows left to right (address counter increments)
pub const ENTRY_LEFT: u8 = 0x02;
/// Entry mode: text flows right to left (address counter decrements)
pub const ENTRY_RIGHT: u8 = 0x00;
/// Entry mode: shift the display on every write (autoscroll)
pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;
/// Entry mode: display stays put on write
pub const ENTRY_SHIFT_DECREMENT: u8 = 0x00;

// Display control flags

/// Display control: display on
pub const DISPLAY_ON: u8 = 0x04;
/// Display control: display off
pub const DISPLAY_OFF: u8 = 0x00;
/// Display control: underline cursor visible
pub const CURSOR_ON: u8 = 0x02;
/// Display control: cursor hidden
pub const CURSOR_OFF: u8 = 0x00;
/// Display control: blinking block cursor
pub const BLINK_ON: u8 = 0x01;
/// Display control: no blinking
pub const BLINK_OFF: u8 = 0x00;

// Cursor shift flags

/// Cursor shift: move the whole display
pub const DISPLAY_MOVE: u8 = 0x08;
/// Cursor shift: move only the cursor
pub const CURSOR_MOVE: u8 = 0x00;
/// Cursor shift: towards the right
pub const MOVE_RIGHT: u8 = 0x04;
/// Cursor shift: towards the left
pub const MOVE_LEFT: u8 = 0x00;

// Function set flags

/// Function set: 8-bit data bus
///
/// Never set by this driver; the expander only exposes D4..D7.
pub const EIGHT_BIT_MODE: u8 = 0x10;
/// Function set: 4-bit data bus
pub const FOUR_BIT_MODE: u8 = 0x00;
/// Function set: two display lines (also used for 4-row panels)
pub const TWO_LINE: u8 = 0x08;
/// Function set: one display line
pub const ONE_LINE: u8 = 0x00;
/// Function set: 5x10 dot font
pub const DOTS_5X10: u8 = 0x04;
/// Function set: 5x8 dot font
pub const DOTS_5X8: u8 = 0x00;

// PCF8574 port bits

/// Expander bit driving the backlight transistor (P3)
pub const BACKLIGHT: u8 = 0x08;
/// Expander value with the backlight off
pub const NO_BACKLIGHT: u8 = 0x00;
/// Expander bit driving the EN strobe (P2)
pub const EN: u8 = 0x04;
/// Expander bit driving RW (P1), kept low: the bus is write-only
pub const RW: u8 = 0x02;
/// Expander bit driving RS (P0), high for data, low for instructions
pub const RS: u8 = 0x01;

/// Raw nibble that selects 8-bit mode during the power-on reset sequence
pub const INIT_8BIT_NIBBLE: u8 = 0x03;
/// Raw nibble that switches the controller into 4-bit mode
pub const INIT_4BIT_NIBBLE: u8 = 0x02;

//! HD44780 I2C Character LCD Driver
//!
//! A driver for HD44780-compatible character LCDs (1602, 2004 and friends)
//! wired through a PCF8574 I2C backpack in 4-bit mode.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 1, 2 and 4 row panels, 5x8 and 5x10 fonts
//! - Cursor, blink, scrolling, text direction and autoscroll control
//! - Eight custom glyphs
//! - Backlight control
//! - `core::fmt::Write` and (with the `ufmt` feature) `ufmt_write::uWrite`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_i2c::{Builder, Dimensions, Display};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let delay = MockDelay;
//! let dims = match Dimensions::new(16, 2) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().address(0x27).dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = Display::new_i2c(i2c, delay, config);
//! let _ = lcd.begin();
//! let _ = lcd.print("Hello World");
//!
//! // Smiley in glyph slot 0, printed on the second row
//! let _ = lcd.create_char(0, &[0x00, 0x00, 0x11, 0x04, 0x04, 0x11, 0x0E, 0x00]);
//! let _ = lcd.set_cursor(7, 1);
//! let _ = lcd.print("\u{0}");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HD44780 instruction set and expander pin mapping
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Cursor bookkeeping and DDRAM addressing
pub mod cursor;
/// Core display operations
pub mod display;
/// Nibble-level byte transfer
pub mod emitter;
/// Error types for the driver
pub mod error;
/// Custom glyph slots
pub mod glyph;
/// Hardware interface abstraction
pub mod interface;
/// Shadow copies of the controller registers
pub mod register;

/// `ufmt_write::uWrite` support (requires `ufmt` feature)
#[cfg(feature = "ufmt")]
pub mod ufmt;

#[cfg(test)]
mod mock;

pub use config::{Builder, CharSize, Config, DEFAULT_ADDRESS, Dimensions};
pub use cursor::{CursorPosition, RowOffsets};
pub use display::{Display, POWER_ON_DELAY_MS};
pub use emitter::Mode;
pub use error::{BuilderError, Error, MAX_I2C_ADDRESS};
pub use glyph::GlyphSlot;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use register::{ControlRegister, FunctionRegister, ModeRegister};

//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for writing to the PCF8574 expander that sits between the I2C bus and the
//! HD44780 controller.
//!
//! ## Hardware Requirements
//!
//! - I2C bus (SDA + SCL), up to 800 kHz on short wiring; lower the bus clock
//!   in your HAL if writes fail on long or noisy cables
//! - PCF8574 or PCF8574A backpack at a 7-bit address (commonly `0x27` or `0x3F`)
//!
//! The expander is a passive latch: every write replaces all eight output
//! lines, and nothing is ever read back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use hd44780_i2c::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface for the backpack at 0x27
//! let mut interface = Interface::new(MockI2c, 0x27);
//!
//! // Backlight on, every other line low
//! let _ = interface.write(0x08);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the bus side of the display
///
/// This trait abstracts over different transports, allowing the
/// [`Display`](crate::display::Display) to work with any I2C implementation
/// that satisfies embedded-hal traits, or with a recording mock in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself when the expander sits behind something else, e.g. an I2C
/// multiplexer that needs a channel select before each write.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Latch one byte onto the expander's output port
    ///
    /// No response is expected.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails (e.g. NACK).
    fn write(&mut self, byte: u8) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// PCF8574 interface over an embedded-hal v1.0 I2C bus
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`] with 7-bit addressing
pub struct Interface<I2C> {
    /// I2C bus (owned, or a shared-bus handle)
    i2c: I2C,
    /// 7-bit expander address
    address: u8,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit address of the expander
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the expander address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn write(&mut self, byte: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[byte])
            .map_err(InterfaceError::I2c)
    }
}

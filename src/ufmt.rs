//! `ufmt` support
//!
//! Implements [`uWrite`] for [`Display`] so that `ufmt::uwrite!` can format
//! straight onto the panel without pulling in `core::fmt` machinery, which
//! matters on small AVR and Cortex-M0 parts.
//!
//! ```rust,ignore
//! use ufmt::uwrite;
//!
//! lcd.set_cursor(0, 1)?;
//! uwrite!(lcd, "T={}C", temperature)?;
//! ```

use embedded_hal::delay::DelayNs;
use ufmt_write::uWrite;

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I, D> uWrite for Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    type Error = Error<I>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.print(s)
    }

    fn write_char(&mut self, c: char) -> Result<(), Self::Error> {
        Display::write_char(self, c)
    }
}

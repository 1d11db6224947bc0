//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Out-of-range cursor coordinates and glyph slots are not errors; they are
//! clamped to the nearest valid value.
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Zero columns
//! let result = Dimensions::new(0, 2);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Highest 7-bit I2C address
pub const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// When an operation fails part-way, the driver's shadow registers and cursor
/// may no longer match the panel; a fresh [`begin`](crate::Display::begin)
/// brings both back in sync.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns requested
        cols: u8,
        /// Number of rows requested
        rows: u8,
    },
    /// Address does not fit in 7 bits
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "Invalid dimensions {cols}x{rows} (cols must be non-zero)")
            }
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid I2C address {address:#04x} (max {MAX_I2C_ADDRESS:#04x})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

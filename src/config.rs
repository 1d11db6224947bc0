//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_I2C_ADDRESS};

/// I2C address of the common PCF8574 backpack with A0..A2 pulled high
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Panel dimensions in characters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of character columns
    pub cols: u8,
    /// Number of character rows (1, 2 or 4)
    pub rows: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if `cols` is zero.
    ///
    /// Row counts other than 1, 2 or 4 are accepted as-is; cursor lookups
    /// clamp into the 4-entry row offset table.
    pub fn new(cols: u8, rows: u8) -> Result<Self, BuilderError> {
        if cols == 0 {
            return Err(BuilderError::InvalidDimensions { cols, rows });
        }
        Ok(Self { cols, rows })
    }
}

/// Character font selected through the function set instruction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CharSize {
    /// 5x8 dots (selector `0`)
    #[default]
    Dots5x8,
    /// 5x10 dots (selector `1`)
    Dots5x10,
}

impl CharSize {
    /// Numeric selector as used on panel datasheets (`0` or `1`)
    pub fn selector(self) -> u8 {
        match self {
            Self::Dots5x8 => 0,
            Self::Dots5x10 => 1,
        }
    }
}

impl From<u8> for CharSize {
    /// `0` selects 5x8, anything else selects 5x10
    fn from(selector: u8) -> Self {
        if selector == 0 {
            Self::Dots5x8
        } else {
            Self::Dots5x10
        }
    }
}

/// Display configuration
///
/// Immutable once the display is constructed. Use [`Builder`] or
/// [`Config::new`] to create one.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C address of the expander
    pub address: u8,
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Character font
    pub char_size: CharSize,
}

impl Config {
    /// Build a configuration in one call
    ///
    /// ```
    /// use hd44780_i2c::{CharSize, Config};
    ///
    /// let config = Config::new(0x27, 20, 4, CharSize::Dots5x8).unwrap();
    /// assert_eq!(config.dimensions.cols, 20);
    /// assert!(Config::new(0x80, 16, 2, CharSize::Dots5x8).is_err());
    /// ```
    pub fn new(
        address: u8,
        cols: u8,
        rows: u8,
        char_size: CharSize,
    ) -> Result<Self, BuilderError> {
        Builder::new()
            .address(address)
            .dimensions(Dimensions::new(cols, rows)?)
            .char_size(char_size)
            .build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use hd44780_i2c::{Builder, CharSize, Dimensions};
///
/// let dims = match Dimensions::new(16, 2) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .address(0x3F)
///     .dimensions(dims)
///     .char_size(CharSize::Dots5x8)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// 7-bit I2C address
    address: u8,
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Character font
    char_size: CharSize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            dimensions: None,
            char_size: CharSize::Dots5x8,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expander's 7-bit I2C address (default `0x27`)
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the character font (default 5x8)
    pub fn char_size(mut self, char_size: CharSize) -> Self {
        self.char_size = char_size;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidAddress` if the address does not fit 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > MAX_I2C_ADDRESS {
            return Err(BuilderError::InvalidAddress(self.address));
        }
        Ok(Config {
            address: self.address,
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            char_size: self.char_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(16, 2).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.char_size, CharSize::Dots5x8);
    }

    #[test]
    fn test_builder_missing_dimensions() {
        let result = Builder::new().build();
        assert!(matches!(result, Err(BuilderError::MissingDimensions)));
    }

    #[test]
    fn test_builder_rejects_10_bit_address() {
        let result = Builder::new()
            .address(0x80)
            .dimensions(Dimensions::new(16, 2).unwrap())
            .build();
        assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
    }

    #[test]
    fn test_dimensions_zero_cols() {
        assert!(matches!(
            Dimensions::new(0, 2),
            Err(BuilderError::InvalidDimensions { cols: 0, rows: 2 })
        ));
    }

    #[test]
    fn test_dimensions_odd_rows_accepted() {
        assert!(Dimensions::new(16, 3).is_ok());
    }

    #[test]
    fn test_char_size_selector() {
        assert_eq!(CharSize::from(0), CharSize::Dots5x8);
        assert_eq!(CharSize::from(1), CharSize::Dots5x10);
        assert_eq!(CharSize::Dots5x10.selector(), 1);
    }

    #[test]
    fn test_config_new() {
        let config = Config::new(39, 20, 4, CharSize::Dots5x10).unwrap();
        assert_eq!(config.address, 0x27);
        assert_eq!(config.dimensions, Dimensions { cols: 20, rows: 4 });
        assert_eq!(config.char_size, CharSize::Dots5x10);
    }
}

//! Core display operations

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::command::{
    CLEAR_DISPLAY, CURSOR_SHIFT, DISPLAY_MOVE, INIT_4BIT_NIBBLE, INIT_8BIT_NIBBLE, MOVE_LEFT,
    MOVE_RIGHT, RETURN_HOME, SET_DDRAM_ADDR,
};
use crate::config::{CharSize, Config};
use crate::cursor::{CursorPosition, RowOffsets};
use crate::emitter::{Emitter, LONG_SETTLE_US, Mode};
use crate::error::Error;
use crate::glyph::GlyphSlot;
use crate::interface::{DisplayInterface, Interface};
use crate::register::{ControlRegister, FunctionRegister, ModeRegister};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Wait after power-up before the first instruction (datasheet: 40 ms)
pub const POWER_ON_DELAY_MS: u32 = 50;

/// Waits after each of the three 8-bit-mode nibbles of the reset sequence
const INIT_NIBBLE_WAITS_US: [u32; 3] = [4_500, 4_500, 150];

/// Character code the controller renders as a solid block
const FULL_BLOCK: u8 = 0xFF;

/// HD44780 character display behind a PCF8574 expander
///
/// Owns the bus interface and the delay. All controller registers are
/// write-only over this wiring, so the values kept here are the only record
/// of the panel's state.
pub struct Display<I, D>
where
    I: DisplayInterface,
{
    /// Nibble-level transfer over the interface
    emitter: Emitter<I>,
    /// Blocking delay for controller timing
    delay: D,
    /// Display configuration
    config: Config,
    /// DDRAM base address per row
    row_offsets: RowOffsets,
    function: FunctionRegister,
    control: ControlRegister,
    mode: ModeRegister,
    /// Mirror of the controller's address counter
    cursor: CursorPosition,
}

impl<I2C, D> Display<Interface<I2C>, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a display on an I2C bus, using the address from `config`
    ///
    /// Pass a shared-bus handle instead of the bus itself if other devices
    /// live on the same bus.
    pub fn new_i2c(i2c: I2C, delay: D, config: Config) -> Self {
        let interface = Interface::new(i2c, config.address);
        Self::new(interface, delay, config)
    }
}

impl<I, D> Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the panel until [`begin`](Self::begin) is called.
    pub fn new(interface: I, delay: D, config: Config) -> Self {
        let dims = config.dimensions;
        Self {
            emitter: Emitter::new(interface),
            delay,
            row_offsets: RowOffsets::from(dims),
            function: FunctionRegister::for_panel(dims.rows, config.char_size),
            control: ControlRegister::default(),
            mode: ModeRegister::default(),
            cursor: CursorPosition::HOME,
            config,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// The controller may come up in 8-bit mode or halfway through a 4-bit
    /// transfer, so it is first forced into 8-bit mode with three raw nibbles
    /// and then switched to 4-bit mode. After that the function, display
    /// control and entry mode registers are written and the display is cleared.
    ///
    /// Safe to call again at any time; it resets every register to its
    /// default (display on, cursor off, blink off, left to right, no
    /// autoscroll). The backlight keeps its current state.
    pub fn begin(&mut self) -> DisplayResult<I> {
        log::debug!(
            "init {}x{} lcd at {:#04x}",
            self.config.dimensions.cols,
            self.config.dimensions.rows,
            self.config.address
        );

        self.delay.delay_ms(POWER_ON_DELAY_MS);
        self.emitter.idle().map_err(Error::Interface)?;

        for wait_us in INIT_NIBBLE_WAITS_US {
            self.emitter
                .send_raw_nibble(INIT_8BIT_NIBBLE, &mut self.delay)
                .map_err(Error::Interface)?;
            self.delay.delay_us(wait_us);
        }
        self.emitter
            .send_raw_nibble(INIT_4BIT_NIBBLE, &mut self.delay)
            .map_err(Error::Interface)?;

        let dims = self.config.dimensions;
        self.function = FunctionRegister::for_panel(dims.rows, self.config.char_size);
        self.send_command(self.function.instruction())?;

        self.control = ControlRegister::default();
        self.send_command(self.control.instruction())?;

        self.mode = ModeRegister::default();
        self.send_command(self.mode.instruction())?;

        self.clear()
    }

    /// Clear the display and move the cursor to (0, 0)
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.send_command(CLEAR_DISPLAY)?;
        self.delay.delay_us(LONG_SETTLE_US);
        self.cursor = CursorPosition::HOME;
        Ok(())
    }

    /// Move the cursor to (0, 0) and undo any display shift
    pub fn home(&mut self) -> DisplayResult<I> {
        self.send_command(RETURN_HOME)?;
        self.delay.delay_us(LONG_SETTLE_US);
        self.cursor = CursorPosition::HOME;
        Ok(())
    }

    /// Turn the display on (DDRAM content is kept while off)
    pub fn display(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::DISPLAY, true)
    }

    /// Turn the display off
    pub fn no_display(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::DISPLAY, false)
    }

    /// Show the underline cursor
    pub fn cursor(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::CURSOR, true)
    }

    /// Hide the underline cursor
    pub fn no_cursor(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::CURSOR, false)
    }

    /// Same as [`cursor`](Self::cursor)
    pub fn cursor_on(&mut self) -> DisplayResult<I> {
        self.cursor()
    }

    /// Same as [`no_cursor`](Self::no_cursor)
    pub fn cursor_off(&mut self) -> DisplayResult<I> {
        self.no_cursor()
    }

    /// Blink the character cell under the cursor
    pub fn blink(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::BLINK, true)
    }

    /// Stop blinking
    pub fn no_blink(&mut self) -> DisplayResult<I> {
        self.set_control(ControlRegister::BLINK, false)
    }

    /// Same as [`blink`](Self::blink)
    pub fn blink_on(&mut self) -> DisplayResult<I> {
        self.blink()
    }

    /// Same as [`no_blink`](Self::no_blink)
    pub fn blink_off(&mut self) -> DisplayResult<I> {
        self.no_blink()
    }

    /// Shift the visible window one position to the left
    ///
    /// Only the view moves; DDRAM content and the cursor position stay put.
    pub fn scroll_display_left(&mut self) -> DisplayResult<I> {
        self.send_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_LEFT)
    }

    /// Shift the visible window one position to the right
    pub fn scroll_display_right(&mut self) -> DisplayResult<I> {
        self.send_command(CURSOR_SHIFT | DISPLAY_MOVE | MOVE_RIGHT)
    }

    /// Text flows from left to right
    pub fn left_to_right(&mut self) -> DisplayResult<I> {
        self.set_mode(ModeRegister::LEFT_TO_RIGHT, true)
    }

    /// Text flows from right to left
    pub fn right_to_left(&mut self) -> DisplayResult<I> {
        self.set_mode(ModeRegister::LEFT_TO_RIGHT, false)
    }

    /// Shift the display on every character written
    pub fn autoscroll(&mut self) -> DisplayResult<I> {
        self.set_mode(ModeRegister::AUTOSCROLL, true)
    }

    /// Keep the display still while writing
    pub fn no_autoscroll(&mut self) -> DisplayResult<I> {
        self.set_mode(ModeRegister::AUTOSCROLL, false)
    }

    /// Move the cursor to `(col, row)`
    ///
    /// Coordinates past the panel edge are clamped to the last column or row.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> DisplayResult<I> {
        let pos = CursorPosition::new(col, row).clamped(self.config.dimensions);
        let address = self.row_offsets.ddram_address(pos);
        self.send_command(SET_DDRAM_ADDR | address)?;
        self.cursor = pos;
        Ok(())
    }

    /// Current cursor position as `(col, row)`
    pub fn cursor_position(&self) -> (u8, u8) {
        self.cursor.into()
    }

    /// Move the cursor, see [`set_cursor`](Self::set_cursor)
    pub fn set_cursor_position(&mut self, pos: impl Into<CursorPosition>) -> DisplayResult<I> {
        let pos = pos.into();
        self.set_cursor(pos.col, pos.row)
    }

    /// Write a string at the cursor
    ///
    /// Each `char` is sent as one character code; see
    /// [`write_char`](Self::write_char). Text does not wrap to the next row.
    pub fn print(&mut self, text: &str) -> DisplayResult<I> {
        for c in text.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    /// Write one character at the cursor
    ///
    /// Codes `0..=7` print the custom glyphs. Characters above U+00FF have no
    /// code in the controller ROM and print as a solid block.
    pub fn write_char(&mut self, c: char) -> DisplayResult<I> {
        let code = u8::try_from(u32::from(c)).unwrap_or(FULL_BLOCK);
        self.send_data(code)?;
        self.advance_cursor();
        Ok(())
    }

    /// Upload a custom glyph into CGRAM slot `location`
    ///
    /// `location` is clamped to `0..=7`. Each `charmap` entry is one pixel row
    /// (low five bits used, upper bits passed through untouched);
    /// [`GLYPH_ROWS`](crate::glyph::GLYPH_ROWS) rows fill a 5x8 glyph. The
    /// cursor is put back where it was afterwards, since the upload leaves
    /// the controller addressing CGRAM.
    pub fn create_char(&mut self, location: u8, charmap: &[u8]) -> DisplayResult<I> {
        let slot = GlyphSlot::new(location);
        log::debug!("glyph upload to slot {}", slot.index());

        self.send_command(slot.cgram_instruction())?;
        for &row in charmap {
            self.send_data(row)?;
        }

        let CursorPosition { col, row } = self.cursor;
        self.set_cursor(col, row)
    }

    /// Turn the backlight on
    pub fn backlight(&mut self) -> DisplayResult<I> {
        self.set_backlight(true)
    }

    /// Turn the backlight off
    pub fn no_backlight(&mut self) -> DisplayResult<I> {
        self.set_backlight(false)
    }

    /// Switch the backlight
    ///
    /// The backlight is an expander pin, not a controller register, so this
    /// is a single port write that leaves the controller untouched.
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        log::debug!("backlight {}", if on { "on" } else { "off" });
        self.emitter.set_backlight(on).map_err(Error::Interface)
    }

    /// Whether the backlight is on
    pub fn get_backlight(&self) -> bool {
        self.emitter.backlight()
    }

    /// Expander bit currently merged into every write (`0x08` or `0x00`)
    pub fn backlight_value(&self) -> u8 {
        self.emitter.backlight_bit()
    }

    /// Send a raw instruction byte
    ///
    /// The driver's registers and cursor are not updated; prefer the
    /// dedicated methods.
    pub fn command(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(value)
    }

    /// Get the I2C address from the configuration
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Get the number of columns
    pub fn cols(&self) -> u8 {
        self.config.dimensions.cols
    }

    /// Get the number of rows
    pub fn rows(&self) -> u8 {
        self.config.dimensions.rows
    }

    /// Get the character font
    pub fn char_size(&self) -> CharSize {
        self.config.char_size
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current function set register
    pub fn function_register(&self) -> FunctionRegister {
        self.function
    }

    /// Current display control register
    pub fn control_register(&self) -> ControlRegister {
        self.control
    }

    /// Current entry mode register
    pub fn mode_register(&self) -> ModeRegister {
        self.mode
    }

    /// Give back the interface and the delay
    pub fn release(self) -> (I, D) {
        (self.emitter.into_inner(), self.delay)
    }

    fn set_control(&mut self, flag: u8, on: bool) -> DisplayResult<I> {
        self.control.set(flag, on);
        self.send_command(self.control.instruction())
    }

    fn set_mode(&mut self, flag: u8, on: bool) -> DisplayResult<I> {
        self.mode.set(flag, on);
        self.send_command(self.mode.instruction())
    }

    /// Mirror the controller's address counter after a DDRAM write
    fn advance_cursor(&mut self) {
        let col = if self.mode.contains(ModeRegister::LEFT_TO_RIGHT) {
            self.cursor.col.saturating_add(1)
        } else {
            self.cursor.col.saturating_sub(1)
        };
        self.cursor = CursorPosition::new(col, self.cursor.row).clamped(self.config.dimensions);
    }

    /// Send an instruction to the controller
    fn send_command(&mut self, value: u8) -> DisplayResult<I> {
        self.emitter
            .send(value, Mode::Command, &mut self.delay)
            .map_err(Error::Interface)
    }

    /// Send a data byte to the controller
    fn send_data(&mut self, value: u8) -> DisplayResult<I> {
        self.emitter
            .send(value, Mode::Data, &mut self.delay)
            .map_err(Error::Interface)
    }
}

impl<I, D> core::fmt::Write for Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s).map_err(|_| core::fmt::Error)
    }

    fn write_char(&mut self, c: char) -> core::fmt::Result {
        Display::write_char(self, c).map_err(|_| core::fmt::Error)
    }
}

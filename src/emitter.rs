//! Nibble-level transfer of instruction and data bytes
//!
//! Only D4..D7 of the controller are wired to the expander, so every byte
//! goes out as two nibbles, high nibble first. Each nibble is latched by
//! strobing EN: the expander port is written with EN low, then EN high, then
//! EN low again. That makes six bus writes per byte.
//!
//! The backlight line shares the expander port with the LCD signals, so the
//! current backlight bit is OR-ed into every single write.

use embedded_hal::delay::DelayNs;

use crate::command::{BACKLIGHT, EN, NO_BACKLIGHT, RS};
use crate::interface::DisplayInterface;

/// Guard around each EN edge in microseconds (datasheet: 450 ns pulse)
pub const ENABLE_PULSE_US: u32 = 1;

/// Settle time after a regular instruction (datasheet: 37 us)
pub const SETTLE_US: u32 = 50;

/// Settle time after clear display / return home (datasheet: 1.52 ms)
pub const LONG_SETTLE_US: u32 = 2_000;

/// Register select for a transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Instruction register (RS low)
    Command,
    /// Data register, i.e. DDRAM or CGRAM (RS high)
    Data,
}

impl Mode {
    fn rs_bit(self) -> u8 {
        match self {
            Self::Command => 0,
            Self::Data => RS,
        }
    }
}

/// Serializes bytes into strobed expander writes
pub(crate) struct Emitter<I> {
    interface: I,
    backlight: bool,
}

impl<I> Emitter<I>
where
    I: DisplayInterface,
{
    /// Backlight starts on
    pub(crate) fn new(interface: I) -> Self {
        Self {
            interface,
            backlight: true,
        }
    }

    pub(crate) fn backlight(&self) -> bool {
        self.backlight
    }

    /// Expander bit for the current backlight state
    pub(crate) fn backlight_bit(&self) -> u8 {
        if self.backlight { BACKLIGHT } else { NO_BACKLIGHT }
    }

    /// Change the backlight and latch it with a plain port write (no strobe)
    pub(crate) fn set_backlight(&mut self, on: bool) -> Result<(), I::Error> {
        self.backlight = on;
        self.expander_write(0)
    }

    /// Send one byte as two strobed nibbles
    pub(crate) fn send<D: DelayNs>(
        &mut self,
        value: u8,
        mode: Mode,
        delay: &mut D,
    ) -> Result<(), I::Error> {
        log::trace!("{:?} {:#04x}", mode, value);
        let rs = mode.rs_bit();
        self.write_nibble((value & 0xF0) | rs, delay)?;
        self.write_nibble(((value << 4) & 0xF0) | rs, delay)
    }

    /// Send a lone nibble in instruction mode
    ///
    /// Only used by the power-on sequence, before the controller is known to
    /// be in 4-bit mode.
    pub(crate) fn send_raw_nibble<D: DelayNs>(
        &mut self,
        nibble: u8,
        delay: &mut D,
    ) -> Result<(), I::Error> {
        self.write_nibble((nibble << 4) & 0xF0, delay)
    }

    /// Drive the port to just the backlight bit
    pub(crate) fn idle(&mut self) -> Result<(), I::Error> {
        self.expander_write(0)
    }

    /// `bits` carries D7..D4 in the high half and RS in bit 0
    fn write_nibble<D: DelayNs>(&mut self, bits: u8, delay: &mut D) -> Result<(), I::Error> {
        let bits = bits & !EN;
        self.expander_write(bits)?;
        delay.delay_us(ENABLE_PULSE_US);
        self.expander_write(bits | EN)?;
        delay.delay_us(ENABLE_PULSE_US);
        self.expander_write(bits)?;
        delay.delay_us(SETTLE_US);
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), I::Error> {
        self.interface.write(bits | self.backlight_bit())
    }

    pub(crate) fn into_inner(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockInterface};

    #[test]
    fn test_command_is_six_writes_high_nibble_first() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.send(0x28, Mode::Command, &mut delay).unwrap();
        assert_eq!(
            emitter.interface().writes,
            alloc::vec![0x28, 0x2C, 0x28, 0x88, 0x8C, 0x88]
        );
    }

    #[test]
    fn test_data_sets_rs_on_every_write() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.send(b'H', Mode::Data, &mut delay).unwrap();
        assert_eq!(
            emitter.interface().writes,
            alloc::vec![0x49, 0x4D, 0x49, 0x89, 0x8D, 0x89]
        );
    }

    #[test]
    fn test_backlight_off_is_merged_into_every_write() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.set_backlight(false).unwrap();
        emitter.send(0x01, Mode::Command, &mut delay).unwrap();
        let writes = &emitter.interface().writes;
        assert_eq!(writes.len(), 7);
        assert!(writes.iter().all(|w| w & BACKLIGHT == 0));
    }

    #[test]
    fn test_set_backlight_is_single_unstrobed_write() {
        let mut emitter = Emitter::new(MockInterface::new());
        emitter.set_backlight(true).unwrap();
        assert_eq!(emitter.interface().writes, alloc::vec![BACKLIGHT]);
        assert!(emitter.backlight());
    }

    #[test]
    fn test_raw_nibble_is_three_writes() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.send_raw_nibble(0x03, &mut delay).unwrap();
        assert_eq!(emitter.interface().writes, alloc::vec![0x38, 0x3C, 0x38]);
    }

    #[test]
    fn test_each_nibble_waits_for_settle() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.send(0x0C, Mode::Command, &mut delay).unwrap();
        assert_eq!(
            delay.total_us(),
            2 * (2 * u64::from(ENABLE_PULSE_US) + u64::from(SETTLE_US))
        );
    }

    #[test]
    fn test_raw_nibble_guards_each_edge() {
        let mut emitter = Emitter::new(MockInterface::new());
        let mut delay = MockDelay::new();
        emitter.send_raw_nibble(0x02, &mut delay).unwrap();
        // EN low -> high and EN high -> low both wait a pulse width
        assert_eq!(
            delay.total_us(),
            2 * u64::from(ENABLE_PULSE_US) + u64::from(SETTLE_US)
        );
    }

    #[test]
    fn test_bus_error_aborts_immediately() {
        let mut emitter = Emitter::new(MockInterface::failing_after(2));
        let mut delay = MockDelay::new();
        let result = emitter.send(0x80, Mode::Command, &mut delay);
        assert!(result.is_err());
        assert_eq!(emitter.interface().writes.len(), 2);
    }
}

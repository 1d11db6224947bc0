//! Recording doubles for the bus and the delay

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{EN, RS};
use crate::emitter::Mode;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

/// Records every expander byte; optionally starts failing after `fail_after` writes
#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub(crate) writes: Vec<u8>,
    fail_after: Option<usize>,
}

impl MockInterface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_after(writes: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(writes),
        }
    }

    pub(crate) fn fail_now(&mut self) {
        self.fail_after = Some(self.writes.len());
    }

    /// Decoded `(mode, byte)` transfers, pairing up EN-high samples
    ///
    /// Only meaningful for traffic that contains whole bytes, i.e. after
    /// the power-on nibbles have been cleared.
    pub(crate) fn transfers(&self) -> Vec<(Mode, u8)> {
        let strobes: Vec<u8> = self.writes.iter().copied().filter(|w| w & EN != 0).collect();
        strobes
            .chunks_exact(2)
            .map(|pair| {
                let mode = if pair[0] & RS != 0 {
                    Mode::Data
                } else {
                    Mode::Command
                };
                (mode, (pair[0] & 0xF0) | (pair[1] >> 4))
            })
            .collect()
    }

    pub(crate) fn commands(&self) -> Vec<u8> {
        self.transfers()
            .into_iter()
            .filter(|(mode, _)| *mode == Mode::Command)
            .map(|(_, byte)| byte)
            .collect()
    }

    pub(crate) fn data(&self) -> Vec<u8> {
        self.transfers()
            .into_iter()
            .filter(|(mode, _)| *mode == Mode::Data)
            .map(|(_, byte)| byte)
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.writes.clear();
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(MockError);
        }
        self.writes.push(byte);
        Ok(())
    }
}

/// Sums up requested delays instead of sleeping
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

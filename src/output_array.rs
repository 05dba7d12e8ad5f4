use embedded_hal::digital::{OutputPin, PinState};

use crate::{Error, Result};

/// Which pin level turns a digit, segment or LED on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    High,
    Low,
}

impl ActiveLevel {
    /// The pin state that shows `on`.
    #[must_use]
    pub const fn pin_state(self, on: bool) -> PinState {
        match (self, on) {
            (Self::High, true) | (Self::Low, false) => PinState::High,
            (Self::High, false) | (Self::Low, true) => PinState::Low,
        }
    }
}

/// Array of output pins driven as a group (digit enables, segments, keypad rows).
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    #[inline]
    pub fn set_all(&mut self, state: PinState) -> Result<()> {
        for output in &mut self.0 {
            output
                .set_state(state)
                .map_err(|_| Error::CannotSetOutputState)?;
        }
        Ok(())
    }

    #[inline]
    pub fn set_state_at_index(&mut self, index: usize, state: PinState) -> Result<()> {
        self.0
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds)?
            .set_state(state)
            .map_err(|_| Error::CannotSetOutputState)
    }

    /// Bit 0 drives pin 0, bit 1 pin 1, and so on. Pins past bit 7 are turned off.
    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    #[inline]
    pub fn set_from_bits(&mut self, mut bits: u8, active: ActiveLevel) -> Result<()> {
        for output in &mut self.0 {
            let on = (bits & 1) == 1;
            output
                .set_state(active.pin_state(on))
                .map_err(|_| Error::CannotSetOutputState)?;
            bits >>= 1;
        }
        Ok(())
    }
}

//! A short square-wave beep on a piezo buzzer.

use embedded_hal::digital::OutputPin;

use crate::wait::Wait;
use crate::{BUZZ_CYCLES, BUZZ_HALF_PERIOD, Error, Result};

/// Something that can make the game's one sound.
pub trait AudioPulse {
    /// Blocks for the length of the beep.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be driven.
    fn pulse(&mut self) -> Result<()>;
}

/// Bit-banged buzzer: [`BUZZ_CYCLES`] periods of [`BUZZ_HALF_PERIOD`] high then low
/// (about 1.7 kHz for 60 ms).
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: Wait> Buzzer<P, D> {
    /// # Errors
    ///
    /// Returns an error if the pin cannot be set low.
    pub fn new(mut pin: P, delay: D) -> Result<Self> {
        pin.set_low().map_err(|_| Error::CannotSetOutputState)?;
        Ok(Self { pin, delay })
    }
}

impl<P: OutputPin, D: Wait> AudioPulse for Buzzer<P, D> {
    fn pulse(&mut self) -> Result<()> {
        for _ in 0..BUZZ_CYCLES {
            self.pin.set_high().map_err(|_| Error::CannotSetOutputState)?;
            self.delay.wait(BUZZ_HALF_PERIOD);
            self.pin.set_low().map_err(|_| Error::CannotSetOutputState)?;
            self.delay.wait(BUZZ_HALF_PERIOD);
        }
        Ok(())
    }
}

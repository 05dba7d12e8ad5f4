//! The one timing primitive the polling context uses.
//!
//! Everything that blocks for a fixed time (keypad settle, game step, message holds)
//! goes through [`Wait::wait`], so moving to a timer queue later only touches this seam.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Block the caller for a fixed duration.
pub trait Wait {
    fn wait(&mut self, duration: Duration);
}

impl<D: DelayNs> Wait for D {
    #[inline]
    fn wait(&mut self, duration: Duration) {
        // Longer than ~71 minutes saturates; nothing here waits that long.
        let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.delay_us(micros);
    }
}

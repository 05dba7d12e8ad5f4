//! The fixed-period tick handler.
//!
//! [`TickSource::on_tick`] is called every [`TICK_PERIOD`](crate::TICK_PERIOD) from the
//! high-priority context. It owns every pin it drives and talks to the polling context
//! only through [`SharedState`].

use embedded_hal::digital::{InputPin, OutputPin};

use crate::blink_effect::{BlinkEffect, BlinkPattern};
use crate::led4::Led4Mux;
use crate::output_array::ActiveLevel;
use crate::shared_state::SharedState;
use crate::{Error, Result, SWITCH_STABLE_TICKS, TICKS_PER_EFFECT_TICK};

/// Publishes a level only after it has been sampled [`SWITCH_STABLE_TICKS`] times in a row.
pub struct SwitchDebounce<W> {
    pin: W,
    candidate: bool,
    count: u8,
    stable: bool,
}

impl<W: InputPin> SwitchDebounce<W> {
    pub const fn new(pin: W) -> Self {
        Self {
            pin,
            candidate: false,
            count: 0,
            stable: false,
        }
    }

    /// Returns the new level when the debounced level changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be read.
    pub fn sample(&mut self) -> Result<Option<bool>> {
        let level = self.pin.is_high().map_err(|_| Error::CannotReadInputState)?;
        if level == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = level;
            self.count = 1;
        }
        if self.count >= SWITCH_STABLE_TICKS && self.candidate != self.stable {
            self.stable = self.candidate;
            return Ok(Some(self.stable));
        }
        Ok(None)
    }

    #[must_use]
    pub const fn level(&self) -> bool {
        self.stable
    }
}

/// Everything the tick context owns.
pub struct TickSource<'a, C, S, L, W> {
    shared: &'a SharedState,
    led4: Led4Mux<C, S>,
    glow: BlinkEffect<'a, L>,
    alarm: BlinkEffect<'a, L>,
    switch: SwitchDebounce<W>,
    pacing: u8,
}

impl<'a, C, S, L, W> TickSource<'a, C, S, L, W>
where
    C: OutputPin,
    S: OutputPin,
    L: OutputPin,
    W: InputPin,
{
    /// # Errors
    ///
    /// Returns an error if an LED pin cannot be turned off.
    pub fn new(
        shared: &'a SharedState,
        led4: Led4Mux<C, S>,
        glow_pin: L,
        alarm_pin: L,
        switch_pin: W,
        led_active: ActiveLevel,
    ) -> Result<Self> {
        Ok(Self {
            shared,
            led4,
            glow: BlinkEffect::new(glow_pin, shared.glow(), BlinkPattern::GLOW, led_active)?,
            alarm: BlinkEffect::new(alarm_pin, shared.alarm(), BlinkPattern::ALARM, led_active)?,
            switch: SwitchDebounce::new(switch_pin),
            pacing: 0,
        })
    }

    /// One tick: effects, then the mode switch, then one display slot.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set or read.
    pub fn on_tick(&mut self) -> Result<()> {
        self.glow.poll_trigger()?;
        self.alarm.poll_trigger()?;

        self.pacing = self.pacing.saturating_add(1);
        if self.pacing >= TICKS_PER_EFFECT_TICK {
            self.pacing = 0;
            self.glow.on_effect_tick()?;
            self.alarm.on_effect_tick()?;
            #[cfg(feature = "tick-trace")]
            debug!(
                "effect tick: glow {} alarm {}",
                self.glow.is_lit(),
                self.alarm.is_lit()
            );
        }

        if let Some(level) = self.switch.sample()? {
            debug!("mode switch {}", level);
            self.shared.publish_mode_switch(level);
        }

        self.led4.step(self.shared.display_value())
    }

    #[must_use]
    pub const fn glow(&self) -> &BlinkEffect<'a, L> {
        &self.glow
    }

    #[must_use]
    pub const fn alarm(&self) -> &BlinkEffect<'a, L> {
        &self.alarm
    }

    #[must_use]
    pub const fn led4(&self) -> &Led4Mux<C, S> {
        &self.led4
    }
}

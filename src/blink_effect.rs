//! Countdown-driven LED effects paced by the effect tick.
//!
//! Each effect is a small state machine ([`BlinkState`]) that only the tick context
//! advances. The polling context asks for an effect through an [`EffectTrigger`], a
//! request counter it bumps; the tick side re-arms whenever the counter moves.

use embedded_hal::digital::OutputPin;
use portable_atomic::{AtomicU8, Ordering};

use crate::output_array::ActiveLevel;
use crate::{ALARM_TOGGLE_INTERVAL, ALARM_TOGGLES, Error, GLOW_EFFECT_TICKS, Result};

/// Request counter written by the polling context, read by the tick context.
///
/// Only plain loads and stores are used, so this works on cores without
/// compare-and-swap. There must be a single caller of [`trigger`](Self::trigger).
pub struct EffectTrigger {
    requests: AtomicU8,
}

impl EffectTrigger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: AtomicU8::new(0),
        }
    }

    /// Asks the tick context to (re)start the effect.
    #[inline]
    pub fn trigger(&self) {
        let requests = self.requests.load(Ordering::Relaxed);
        self.requests.store(requests.wrapping_add(1), Ordering::Release);
    }

    /// Number of requests so far, wrapping at 256.
    #[inline]
    #[must_use]
    pub fn requests(&self) -> u8 {
        self.requests.load(Ordering::Acquire)
    }
}

impl Default for EffectTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// What an armed effect does with its effect-ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPattern {
    /// Lit for `duration` effect-ticks, then dark.
    Glow { duration: u8 },
    /// Flips every `interval` effect-ticks; dark after `toggles` flips.
    Alarm { interval: u8, toggles: u8 },
}

impl BlinkPattern {
    pub const GLOW: Self = Self::Glow {
        duration: GLOW_EFFECT_TICKS,
    };

    pub const ALARM: Self = Self::Alarm {
        interval: ALARM_TOGGLE_INTERVAL,
        toggles: ALARM_TOGGLES,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    #[default]
    Idle,
    Armed {
        ticks_remaining: u8,
        toggle_count: u8,
    },
}

impl BlinkState {
    /// Start (or restart) `pattern`. Returns the new state and whether the LED is lit.
    #[must_use]
    pub const fn arm(pattern: BlinkPattern) -> (Self, bool) {
        let ticks_remaining = match pattern {
            BlinkPattern::Glow { duration } => duration,
            BlinkPattern::Alarm { interval, .. } => interval,
        };
        if ticks_remaining == 0 {
            return (Self::Idle, false);
        }
        (
            Self::Armed {
                ticks_remaining,
                toggle_count: 0,
            },
            true,
        )
    }

    /// Advance by one effect-tick. Returns the new state and whether the LED is lit.
    #[must_use]
    pub const fn on_effect_tick(self, pattern: BlinkPattern, lit: bool) -> (Self, bool) {
        let Self::Armed {
            ticks_remaining,
            toggle_count,
        } = self
        else {
            return (Self::Idle, lit);
        };

        let ticks_remaining = ticks_remaining.saturating_sub(1);
        if ticks_remaining > 0 {
            return (
                Self::Armed {
                    ticks_remaining,
                    toggle_count,
                },
                lit,
            );
        }

        match pattern {
            BlinkPattern::Glow { .. } => (Self::Idle, false),
            BlinkPattern::Alarm { interval, toggles } => {
                let toggle_count = toggle_count.saturating_add(1);
                if toggle_count >= toggles {
                    (Self::Idle, false)
                } else {
                    (
                        Self::Armed {
                            ticks_remaining: interval,
                            toggle_count,
                        },
                        !lit,
                    )
                }
            }
        }
    }

    #[must_use]
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::Armed { .. })
    }
}

/// One LED run by a [`BlinkPattern`]. Lives in the tick context and owns its pin.
pub struct BlinkEffect<'a, P> {
    pin: P,
    trigger: &'a EffectTrigger,
    pattern: BlinkPattern,
    active: ActiveLevel,
    last_seen: u8,
    state: BlinkState,
    lit: bool,
}

impl<'a, P: OutputPin> BlinkEffect<'a, P> {
    /// Takes the pin and turns the LED off. Requests made before this call are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be set.
    pub fn new(
        pin: P,
        trigger: &'a EffectTrigger,
        pattern: BlinkPattern,
        active: ActiveLevel,
    ) -> Result<Self> {
        let mut blink_effect = Self {
            pin,
            trigger,
            pattern,
            active,
            last_seen: trigger.requests(),
            state: BlinkState::Idle,
            lit: false,
        };
        blink_effect.drive()?;
        Ok(blink_effect)
    }

    /// Re-arms if the polling context asked for the effect since the last call.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be set.
    pub fn poll_trigger(&mut self) -> Result<()> {
        let requests = self.trigger.requests();
        if requests == self.last_seen {
            return Ok(());
        }
        self.last_seen = requests;
        (self.state, self.lit) = BlinkState::arm(self.pattern);
        self.drive()
    }

    /// # Errors
    ///
    /// Returns an error if the pin cannot be set.
    pub fn on_effect_tick(&mut self) -> Result<()> {
        if !self.state.is_armed() {
            return Ok(());
        }
        (self.state, self.lit) = self.state.on_effect_tick(self.pattern, self.lit);
        self.drive()
    }

    #[must_use]
    pub const fn state(&self) -> BlinkState {
        self.state
    }

    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    fn drive(&mut self) -> Result<()> {
        self.pin
            .set_state(self.active.pin_state(self.lit))
            .map_err(|_| Error::CannotSetOutputState)
    }
}

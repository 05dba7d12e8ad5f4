//! The only state that crosses between the tick and polling contexts.

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

use crate::blink_effect::EffectTrigger;
use crate::led4::DisplayValue;

/// Atomic scalars shared by the tick context and the polling context.
///
/// Every field has exactly one writer:
///
/// | field          | writer  | reader  |
/// |----------------|---------|---------|
/// | display value  | polling | tick    |
/// | glow requests  | polling | tick    |
/// | alarm requests | polling | tick    |
/// | mode switch    | tick    | polling |
///
/// Only loads and stores are used. Keep it that way when adding a field.
pub struct SharedState {
    display_value: AtomicU16,
    glow: EffectTrigger,
    alarm: EffectTrigger,
    mode_switch: AtomicBool,
}

impl SharedState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display_value: AtomicU16::new(0),
            glow: EffectTrigger::new(),
            alarm: EffectTrigger::new(),
            mode_switch: AtomicBool::new(false),
        }
    }

    /// Polling context: set the number on the seven-segment counter.
    #[inline]
    pub fn show(&self, value: DisplayValue) {
        self.display_value.store(value.get(), Ordering::Release);
    }

    /// Tick context: the number to multiplex this tick.
    #[inline]
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        // Only `show` writes, and it only stores valid values.
        DisplayValue::saturating(self.display_value.load(Ordering::Acquire))
    }

    /// Polling context: light the green LED briefly.
    #[inline]
    pub fn trigger_glow(&self) {
        self.glow.trigger();
    }

    /// Polling context: flash the red LED.
    #[inline]
    pub fn trigger_alarm(&self) {
        self.alarm.trigger();
    }

    #[must_use]
    pub const fn glow(&self) -> &EffectTrigger {
        &self.glow
    }

    #[must_use]
    pub const fn alarm(&self) -> &EffectTrigger {
        &self.alarm
    }

    /// Tick context: publish the debounced mode switch level.
    #[inline]
    pub fn publish_mode_switch(&self, on: bool) {
        self.mode_switch.store(on, Ordering::Release);
    }

    /// Polling context: the debounced mode switch level.
    #[inline]
    #[must_use]
    pub fn mode_switch(&self) -> bool {
        self.mode_switch.load(Ordering::Acquire)
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

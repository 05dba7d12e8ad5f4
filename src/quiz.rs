//! The riddle that stands between power-up and the menu.
//!
//! The player turns a potentiometer until the 8-bit reading spells the answer, then
//! holds it there for [`QUIZ_STREAK`] samples in a row.

use crate::analog::AnalogSampler;
use crate::char_lcd::TextDisplay;
use crate::led4::DisplayValue;
use crate::shared_state::SharedState;
use crate::wait::Wait;
use crate::{
    QUIZ_CHANNEL, QUIZ_HIGH, QUIZ_LOW, QUIZ_PASS_HOLD, QUIZ_POLL_DELAY, QUIZ_STREAK, Result,
};

/// Counts consecutive in-band readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizGate {
    streak: u8,
}

impl QuizGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { streak: 0 }
    }

    /// Feeds one 8-bit reading. Returns `true` once the streak is long enough.
    pub fn observe(&mut self, reading: u8) -> bool {
        if (QUIZ_LOW..=QUIZ_HIGH).contains(&reading) {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }
        self.is_passed()
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.streak >= QUIZ_STREAK
    }

    #[must_use]
    pub const fn streak(&self) -> u8 {
        self.streak
    }
}

/// Shows the riddle and blocks until it is answered. Each reading is echoed on the
/// seven-segment counter.
///
/// # Errors
///
/// Returns an error if the display or the analog input fails.
pub fn run_quiz_gate<T, A, D>(
    lcd: &mut T,
    sampler: &mut A,
    shared: &SharedState,
    delay: &mut D,
) -> Result<()>
where
    T: TextDisplay + ?Sized,
    A: AnalogSampler,
    D: Wait,
{
    lcd.show("Answer the hint", "101 in binary is")?;
    let mut gate = QuizGate::new();
    loop {
        let reading = sampler.read_byte(QUIZ_CHANNEL)?;
        shared.show(DisplayValue::saturating(u16::from(reading)));
        if gate.observe(reading) {
            break;
        }
        delay.wait(QUIZ_POLL_DELAY);
    }

    info!("Quiz answered");
    lcd.show("Correct!", "")?;
    delay.wait(QUIZ_PASS_HOLD);
    shared.show(DisplayValue::ZERO);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_in_a_row_passes() {
        let mut gate = QuizGate::new();
        for _ in 1..QUIZ_STREAK {
            assert!(!gate.observe(101));
        }
        assert!(gate.observe(100));
    }

    #[test]
    fn one_miss_resets_the_streak() {
        let mut gate = QuizGate::new();
        for _ in 1..QUIZ_STREAK {
            gate.observe(102);
        }
        assert!(!gate.observe(103));
        assert_eq!(gate.streak(), 0);
        for _ in 1..QUIZ_STREAK {
            assert!(!gate.observe(101));
        }
        assert!(gate.observe(101));
    }

    #[test]
    fn the_band_edges_count() {
        let mut gate = QuizGate::new();
        assert!(!gate.observe(QUIZ_LOW - 1));
        gate.observe(QUIZ_LOW);
        gate.observe(QUIZ_HIGH);
        assert_eq!(gate.streak(), 2);
        gate.observe(QUIZ_HIGH + 1);
        assert_eq!(gate.streak(), 0);
    }
}

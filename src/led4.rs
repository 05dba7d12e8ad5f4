//! Tick-driven multiplexer for a 4-digit, 7-segment LED display.
//!
//! The digits share one set of segment lines. Each call to [`Led4Mux::step`] blanks
//! every digit, drives the segment pattern for one digit and enables only that digit,
//! then moves on to the next. Called every [`TICK_PERIOD`](crate::TICK_PERIOD) the four
//! digits refresh every 8 ms, fast enough to look steadily lit.

use embedded_hal::digital::OutputPin;

use crate::output_array::{ActiveLevel, OutputArray};
use crate::segment_table::Digit;
use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// The number of cells (digits) in the display.
pub const CELL_COUNT: usize = 4;

/// The number of segment lines (A through G; the decimal point is not wired).
pub const SEGMENT_COUNT: usize = 7;

// ============================================================================
// DisplayValue
// ============================================================================

/// A counter value the display can show, 0 through 9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue(u16);

impl DisplayValue {
    pub const MAX: u16 = 9999;
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps anything above 9999 to 9999.
    #[must_use]
    pub const fn saturating(value: u16) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Thousands, hundreds, tens, ones.
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Division is required for digit extraction"
    )]
    #[must_use]
    pub const fn digits(self) -> [Digit; CELL_COUNT] {
        let value = self.0;
        [
            Digit::ones_of(value / 1000),
            Digit::ones_of(value / 100),
            Digit::ones_of(value / 10),
            Digit::ones_of(value),
        ]
    }
}

impl TryFrom<u16> for DisplayValue {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value).ok_or(Error::DisplayValueOutOfRange(value))
    }
}

// ============================================================================
// DigitSlot
// ============================================================================

/// The digit lit during the current tick. Slot 0 is the leftmost (thousands) digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSlot(u8);

impl DigitSlot {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.index() >= CELL_COUNT - 1 {
            Self(0)
        } else {
            Self(self.0.wrapping_add(1))
        }
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// Pin polarity of a particular display module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    /// Level that enables a digit.
    pub cells: ActiveLevel,
    /// Level that lights a segment.
    pub segments: ActiveLevel,
}

impl Wiring {
    /// Common-anode module behind PNP drivers: digits and segments are both active low.
    pub const COMMON_ANODE: Self = Self {
        cells: ActiveLevel::Low,
        segments: ActiveLevel::Low,
    };

    /// Common-cathode module: digit LOW = on, segment HIGH = on.
    pub const COMMON_CATHODE: Self = Self {
        cells: ActiveLevel::Low,
        segments: ActiveLevel::High,
    };
}

// ============================================================================
// Led4Mux
// ============================================================================

/// Drives one digit per [`step`](Self::step), never two at once.
///
/// # Hardware Requirements
///
/// - Cell pins, leftmost digit first, select which digit is enabled.
/// - Segment pins, A through G, select which segments light up.
pub struct Led4Mux<C, S> {
    cells: OutputArray<C, CELL_COUNT>,
    segments: OutputArray<S, SEGMENT_COUNT>,
    wiring: Wiring,
    slot: DigitSlot,
}

impl<C: OutputPin, S: OutputPin> Led4Mux<C, S> {
    /// Takes the pins and turns every digit and segment off.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set.
    pub fn new(
        cells: OutputArray<C, CELL_COUNT>,
        segments: OutputArray<S, SEGMENT_COUNT>,
        wiring: Wiring,
    ) -> Result<Self> {
        let mut led4_mux = Self {
            cells,
            segments,
            wiring,
            slot: DigitSlot::default(),
        };
        led4_mux.blank()?;
        led4_mux
            .segments
            .set_from_bits(0, led4_mux.wiring.segments)?;
        Ok(led4_mux)
    }

    /// Shows the current slot's digit of `value` and advances to the next slot.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set.
    pub fn step(&mut self, value: DisplayValue) -> Result<()> {
        // Blank first so the new segment pattern never shows on the old digit.
        self.blank()?;
        let index = self.slot.index();
        let digit = value
            .digits()
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds)?;
        self.segments
            .set_from_bits(digit.segments(), self.wiring.segments)?;
        self.cells
            .set_state_at_index(index, self.wiring.cells.pin_state(true))?;
        self.slot = self.slot.next();
        Ok(())
    }

    /// Disables every digit.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set.
    pub fn blank(&mut self) -> Result<()> {
        self.cells.set_all(self.wiring.cells.pin_state(false))
    }

    /// The slot the next [`step`](Self::step) will light.
    #[must_use]
    pub const fn slot(&self) -> DigitSlot {
        self.slot
    }
}

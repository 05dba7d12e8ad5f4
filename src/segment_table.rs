//! Seven-segment patterns for the decimal digits.

use crate::{Error, Result};

/// Segment bits, A in bit 0 through G in bit 6.
const DIGITS: [u8; 10] = [
    0b_0011_1111, // Digit 0
    0b_0000_0110, // Digit 1
    0b_0101_1011, // Digit 2
    0b_0100_1111, // Digit 3
    0b_0110_0110, // Digit 4
    0b_0110_1101, // Digit 5
    0b_0111_1101, // Digit 6
    0b_0000_0111, // Digit 7
    0b_0111_1111, // Digit 8
    0b_0110_1111, // Digit 9
];

/// A decimal digit, 0 through 9. The only way to look up a segment pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const MAX: u8 = 9;

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The low decimal digit of `value`.
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "A remainder of 10 always fits in u8"
    )]
    #[must_use]
    pub const fn ones_of(value: u16) -> Self {
        Self((value % 10) as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Segment bits for this digit.
    #[expect(clippy::indexing_slicing, reason = "Digit is always 0..=9")]
    #[must_use]
    pub const fn segments(self) -> u8 {
        DIGITS[self.0 as usize]
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(Error::DigitOutOfRange(value))
    }
}

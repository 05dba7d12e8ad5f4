//! Polling scanner for a 4x4 matrix keypad.
//!
//! Rows are outputs held high; columns are inputs with pull-ups. Pulling one row low
//! makes any pressed key in that row pull its column low.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::output_array::OutputArray;
use crate::wait::Wait;
use crate::{Error, KEYPAD_QUIET_DELAY, KEYPAD_RELEASE_POLL, KEYPAD_SETTLE_DELAY, Result};

pub const ROW_COUNT: usize = 4;
pub const COLUMN_COUNT: usize = 4;

/// Row and column of a key, both 1-based, packed as `row << 4 | column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(u8);

impl KeyCode {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        reason = "Bounds checked above; row << 4 fits in u8"
    )]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Option<Self> {
        if row == 0 || row > ROW_COUNT || column == 0 || column > COLUMN_COUNT {
            return None;
        }
        Some(Self(((row as u8) << 4) | column as u8))
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    #[must_use]
    pub const fn row(self) -> usize {
        (self.0 >> 4) as usize
    }

    #[must_use]
    pub const fn column(self) -> usize {
        (self.0 & 0x0F) as usize
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// The sixteen keys, named by their printed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Labels by row (top first) and column (left first), as wired on the board.
const LAYOUT: [[Key; COLUMN_COUNT]; ROW_COUNT] = [
    [Key::D, Key::C, Key::B, Key::A],
    [Key::E, Key::Num9, Key::Num6, Key::Num3],
    [Key::F, Key::Num8, Key::Num5, Key::Num2],
    [Key::Num0, Key::Num7, Key::Num4, Key::Num1],
];

impl Key {
    /// Every `KeyCode` names a key.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "KeyCode rows and columns are 1..=4"
    )]
    #[must_use]
    pub const fn from_code(code: KeyCode) -> Self {
        LAYOUT[code.row() - 1][code.column() - 1]
    }

    #[must_use]
    pub const fn code(self) -> KeyCode {
        KeyCode(match self {
            Self::D => 0x11,
            Self::C => 0x12,
            Self::B => 0x13,
            Self::A => 0x14,
            Self::E => 0x21,
            Self::Num9 => 0x22,
            Self::Num6 => 0x23,
            Self::Num3 => 0x24,
            Self::F => 0x31,
            Self::Num8 => 0x32,
            Self::Num5 => 0x33,
            Self::Num2 => 0x34,
            Self::Num0 => 0x41,
            Self::Num7 => 0x42,
            Self::Num4 => 0x43,
            Self::Num1 => 0x44,
        })
    }

    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Num0 => '0',
            Self::Num1 => '1',
            Self::Num2 => '2',
            Self::Num3 => '3',
            Self::Num4 => '4',
            Self::Num5 => '5',
            Self::Num6 => '6',
            Self::Num7 => '7',
            Self::Num8 => '8',
            Self::Num9 => '9',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

/// Anything the game loop can read keys from.
pub trait KeySource {
    /// One scan. `Ok(None)` means nothing is pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set or read.
    fn scan(&mut self) -> Result<Option<Key>>;
}

/// Matrix keypad scanner.
///
/// # Hardware Requirements
///
/// - Four row outputs, top row first.
/// - Four column inputs with pull-ups, left column first.
pub struct Keypad<R, C, D> {
    rows: OutputArray<R, ROW_COUNT>,
    columns: [C; COLUMN_COUNT],
    delay: D,
}

impl<R: OutputPin, C: InputPin, D: Wait> Keypad<R, C, D> {
    /// Takes the pins and drives every row high (inactive).
    ///
    /// # Errors
    ///
    /// Returns an error if a row pin cannot be set.
    pub fn new(rows: [R; ROW_COUNT], columns: [C; COLUMN_COUNT], delay: D) -> Result<Self> {
        let mut rows = OutputArray::new(rows);
        rows.set_all(PinState::High)?;
        Ok(Self {
            rows,
            columns,
            delay,
        })
    }

    /// Scans rows in order; the first low column of the first active row wins.
    ///
    /// On a hit, blocks until every column reads high again and then for a quiet window.
    /// A key held forever blocks forever.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be set or read.
    pub fn scan_code(&mut self) -> Result<Option<KeyCode>> {
        let Some(code) = self.find_pressed()? else {
            return Ok(None);
        };

        // Watches all four columns with every row already released.
        while self.any_column_low()? {
            self.delay.wait(KEYPAD_RELEASE_POLL);
        }
        self.delay.wait(KEYPAD_QUIET_DELAY);
        Ok(Some(code))
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Indexes are below 4")]
    fn find_pressed(&mut self) -> Result<Option<KeyCode>> {
        for row_index in 0..ROW_COUNT {
            self.rows.set_state_at_index(row_index, PinState::Low)?;
            self.delay.wait(KEYPAD_SETTLE_DELAY);
            let column_index = self.first_low_column();
            self.rows.set_state_at_index(row_index, PinState::High)?;
            if let Some(column_index) = column_index? {
                return Ok(KeyCode::new(row_index + 1, column_index + 1));
            }
        }
        Ok(None)
    }

    fn first_low_column(&mut self) -> Result<Option<usize>> {
        for (column_index, column) in self.columns.iter_mut().enumerate() {
            if column.is_low().map_err(|_| Error::CannotReadInputState)? {
                return Ok(Some(column_index));
            }
        }
        Ok(None)
    }

    fn any_column_low(&mut self) -> Result<bool> {
        Ok(self.first_low_column()?.is_some())
    }
}

impl<R: OutputPin, C: InputPin, D: Wait> KeySource for Keypad<R, C, D> {
    fn scan(&mut self) -> Result<Option<Key>> {
        let key = self.scan_code()?.map(Key::from_code);
        if let Some(key) = key {
            debug!("key {}", key.label());
        }
        Ok(key)
    }
}

//! The five custom 5x8 characters the game draws with.

use crate::char_lcd::TextDisplay;
use crate::Result;

/// CGRAM slot of each custom character. Printing the slot number draws the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GlyphSlot {
    HandsDown = 0,
    HandsUp = 1,
    Dog = 2,
    Coin = 3,
    Bomb = 4,
}

impl GlyphSlot {
    pub const ALL: [Self; 5] = [
        Self::HandsDown,
        Self::HandsUp,
        Self::Dog,
        Self::Coin,
        Self::Bomb,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Pixel rows, top first, low five bits used.
    #[must_use]
    pub const fn bitmap(self) -> [u8; 8] {
        match self {
            Self::HandsDown => [0x0E, 0x0E, 0x04, 0x04, 0x0E, 0x15, 0x04, 0x0A],
            Self::HandsUp => [0x0E, 0x04, 0x15, 0x0E, 0x04, 0x04, 0x0A, 0x11],
            Self::Dog => [0x00, 0x0A, 0x1F, 0x15, 0x1F, 0x04, 0x0A, 0x11],
            Self::Coin => [0x00, 0x06, 0x0F, 0x0F, 0x0F, 0x0F, 0x06, 0x00],
            Self::Bomb => [0x04, 0x0A, 0x15, 0x0E, 0x0E, 0x1F, 0x04, 0x0A],
        }
    }
}

/// Uploads every glyph into its slot.
///
/// # Errors
///
/// Returns an error if the display cannot be written.
pub fn load_all<T: TextDisplay + ?Sized>(lcd: &mut T) -> Result<()> {
    for glyph in GlyphSlot::ALL {
        lcd.load_glyph(glyph.code(), &glyph.bitmap())?;
    }
    Ok(())
}

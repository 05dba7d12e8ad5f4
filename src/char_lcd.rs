//! HD44780-compatible 16x2 character LCD behind a PCF8574 I2C backpack.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::{Error, Result};

/// Characters per row.
pub const LCD_COLUMNS: u8 = 16;

/// Default I2C address of a PCF8574 backpack with all address jumpers open.
pub const PCF8574_ADDRESS: u8 = 0x27;

const CMD_CLEAR: u8 = 0x01;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

/// One of the two display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdRow {
    #[default]
    Top,
    Bottom,
}

impl LcdRow {
    /// DDRAM address of the row's first column.
    #[must_use]
    pub const fn address(self) -> u8 {
        match self {
            Self::Top => 0x00,
            Self::Bottom => 0x40,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// A two-row character display. Every call blocks until the display is ready.
pub trait TextDisplay {
    /// Sends an instruction byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    fn write_command(&mut self, command: u8) -> Result<()>;

    /// Sends a data byte: a character code at the cursor or a glyph row into CGRAM.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    fn write_glyph(&mut self, byte: u8) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    #[expect(clippy::arithmetic_side_effects, reason = "Column is clamped to 0..16")]
    fn set_cursor(&mut self, row: LcdRow, column: u8) -> Result<()> {
        let column = column.min(LCD_COLUMNS - 1);
        self.write_command(CMD_SET_DDRAM | (row.address() + column))
    }

    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    fn clear(&mut self) -> Result<()> {
        self.write_command(CMD_CLEAR)
    }

    /// Writes `text` at the cursor. Non-ASCII characters show as `?`.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    fn print(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            let byte = u8::try_from(ch).ok().filter(u8::is_ascii).unwrap_or(b'?');
            self.write_glyph(byte)?;
        }
        Ok(())
    }

    /// Clears the display and writes one line per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    fn show(&mut self, top: &str, bottom: &str) -> Result<()> {
        self.clear()?;
        self.print(top)?;
        self.set_cursor(LcdRow::Bottom, 0)?;
        self.print(bottom)
    }

    /// Uploads a 5x8 glyph into CGRAM slot `slot` (0..=7), then homes the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    #[expect(clippy::arithmetic_side_effects, reason = "Slot is masked to 0..8")]
    fn load_glyph(&mut self, slot: u8, rows: &[u8; 8]) -> Result<()> {
        self.write_command(CMD_SET_CGRAM | ((slot & 0x07) << 3))?;
        for &row in rows {
            self.write_glyph(row)?;
        }
        self.set_cursor(LcdRow::Top, 0)
    }
}

// PCF8574 pin mapping: P0=RS, P1=RW, P2=E, P3=Backlight, P4-P7=Data
const LCD_BACKLIGHT: u8 = 0x08;
const LCD_ENABLE: u8 = 0x04;
const LCD_RS: u8 = 0x01;

/// HD44780 in 4-bit mode through a PCF8574.
///
/// R/W is tied low on the backpack, so the busy flag cannot be read; fixed waits after each
/// write stand in for it.
pub struct CharLcdI2c<I, D> {
    i2c: I,
    delay: D,
    address: u8,
}

impl<I: I2c, D: DelayNs> CharLcdI2c<I, D> {
    /// Runs the 4-bit initialization sequence: two lines, display on, cursor off.
    ///
    /// # Errors
    ///
    /// Returns an error if the backpack does not acknowledge.
    pub fn new(i2c: I, delay: D, address: u8) -> Result<Self> {
        let mut lcd = Self {
            i2c,
            delay,
            address,
        };
        lcd.init()?;
        Ok(lcd)
    }

    fn init(&mut self) -> Result<()> {
        self.delay.delay_ms(50);

        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        // Function set: 4-bit, 2 lines, 5x8 font
        self.write_byte(0x28, false)?;
        // Display control: display on, cursor off, blink off
        self.write_byte(0x0C, false)?;
        self.write_byte(CMD_CLEAR, false)?;
        self.delay.delay_ms(2);
        // Entry mode: increment cursor, no shift
        self.write_byte(0x06, false)
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<()> {
        let rs_bit = if rs { LCD_RS } else { 0 };
        let data = (nibble << 4) | LCD_BACKLIGHT | rs_bit;

        self.i2c
            .write(self.address, &[data | LCD_ENABLE])
            .map_err(|_| Error::LcdWrite)?;
        self.delay.delay_us(1);

        self.i2c
            .write(self.address, &[data])
            .map_err(|_| Error::LcdWrite)?;
        self.delay.delay_us(50);
        Ok(())
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    fn write_byte(&mut self, byte: u8, rs: bool) -> Result<()> {
        self.write_nibble((byte >> 4) & 0x0F, rs)?;
        self.write_nibble(byte & 0x0F, rs)
    }

    pub fn into_inner(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c, D: DelayNs> TextDisplay for CharLcdI2c<I, D> {
    fn write_command(&mut self, command: u8) -> Result<()> {
        self.write_byte(command, false)?;
        // Clear and home need well over the 50 us every other instruction gets.
        if command <= 0x03 {
            self.delay.delay_ms(2);
        }
        Ok(())
    }

    fn write_glyph(&mut self, byte: u8) -> Result<()> {
        self.write_byte(byte, true)
    }
}

//! Coins and the character store.

use core::fmt::Write as _;

use heapless::String;

use crate::char_lcd::{LcdRow, TextDisplay};
use crate::glyph::GlyphSlot;
use crate::keypad::Key;
use crate::led4::DisplayValue;
use crate::{Result, STARTING_COINS};

/// The player's coins. Lost at power-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wallet(u16);

impl Wallet {
    #[must_use]
    pub const fn new(coins: u16) -> Self {
        Self(DisplayValue::saturating(coins).get())
    }

    /// Adds one coin. The counter stops at 9999.
    pub const fn deposit(&mut self) {
        self.0 = DisplayValue::saturating(self.0.saturating_add(1)).get();
    }

    /// Debits `price` if the balance covers it.
    pub const fn try_spend(&mut self, price: u16) -> bool {
        match self.0.checked_sub(price) {
            Some(rest) => {
                self.0 = rest;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn coins(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn display_value(self) -> DisplayValue {
        DisplayValue::saturating(self.0)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(STARTING_COINS)
    }
}

/// The figures the player can play as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Character {
    #[default]
    HandsDown,
    HandsUp,
    Dog,
}

impl Character {
    #[must_use]
    pub const fn glyph(self) -> GlyphSlot {
        match self {
            Self::HandsDown => GlyphSlot::HandsDown,
            Self::HandsUp => GlyphSlot::HandsUp,
            Self::Dog => GlyphSlot::Dog,
        }
    }
}

/// One store shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreItem {
    pub character: Character,
    /// Debited on purchase.
    pub price: u16,
    /// Balance needed to buy, whatever the price.
    pub minimum: u16,
    /// Key that buys it.
    pub key: Key,
    /// LCD column of the price label and the glyph.
    pub column: u8,
    /// Shown after a successful purchase.
    pub message: &'static str,
}

/// The three shelves, left to right.
pub static CATALOG: [StoreItem; 3] = [
    StoreItem {
        character: Character::HandsDown,
        price: 0,
        minimum: 2,
        key: Key::Num7,
        column: 0,
        message: "chosen Char 1!",
    },
    StoreItem {
        character: Character::HandsUp,
        price: 5,
        minimum: 5,
        key: Key::Num4,
        column: 6,
        message: "Bought Char 2!",
    },
    StoreItem {
        character: Character::Dog,
        price: 4,
        minimum: 4,
        key: Key::Num1,
        column: 12,
        message: "Bought Char 3!",
    },
];

/// The shelf `key` buys from, if any.
#[must_use]
pub fn item_for_key(key: Key) -> Option<&'static StoreItem> {
    CATALOG.iter().find(|item| item.key == key)
}

/// What happened at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Purchase {
    Bought(Character),
    Rejected { needed: u16, coins: u16 },
}

/// Debits the wallet and returns the character, or leaves everything as it was.
pub const fn purchase(wallet: &mut Wallet, item: &StoreItem) -> Purchase {
    let coins = wallet.coins();
    let needed = if item.minimum > item.price {
        item.minimum
    } else {
        item.price
    };
    if coins >= needed && wallet.try_spend(item.price) {
        Purchase::Bought(item.character)
    } else {
        Purchase::Rejected { needed, coins }
    }
}

/// Price labels on the top row, the figures underneath.
///
/// # Errors
///
/// Returns an error if the display cannot be written.
pub fn draw_catalog<T: TextDisplay + ?Sized>(lcd: &mut T) -> Result<()> {
    lcd.clear()?;
    for item in &CATALOG {
        let mut label: String<6> = String::new();
        write!(label, "{}C", item.price)?;
        lcd.set_cursor(LcdRow::Top, item.column)?;
        lcd.print(&label)?;
    }
    for item in &CATALOG {
        lcd.set_cursor(LcdRow::Bottom, item.column)?;
        lcd.write_glyph(item.character.glyph().code())?;
    }
    Ok(())
}

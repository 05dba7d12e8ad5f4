//! Movement, collision and scoring for one round of the side-scroller.
//!
//! The player sits in column 0 and changes row with the mode switch. A coin and a bomb
//! scroll left one column per step; each wraps back to the last column on its own
//! top/bottom zig-zag schedule.

use embassy_time::Duration;

use crate::char_lcd::{LCD_COLUMNS, LcdRow, TextDisplay};
use crate::glyph::GlyphSlot;
use crate::keypad::Key;
use crate::{EASY_STEP_DELAY, HARD_STEP_DELAY, Result};

/// Rightmost LCD column.
pub const LAST_COLUMN: u8 = LCD_COLUMNS - 1;

/// A cell on the LCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub row: LcdRow,
    pub column: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: LcdRow, column: u8) -> Self {
        Self { row, column }
    }
}

/// Alternating row choice for each wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZigZag {
    next_row: LcdRow,
}

impl ZigZag {
    fn wrap(&mut self) -> LcdRow {
        let row = self.next_row;
        self.next_row = row.other();
        row
    }
}

/// A scrolling entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mover {
    position: Position,
    zigzag: ZigZag,
}

impl Mover {
    /// Starts at `position`; the first wrap lands on `first_wrap_row`.
    #[must_use]
    pub const fn new(position: Position, first_wrap_row: LcdRow) -> Self {
        Self {
            position,
            zigzag: ZigZag {
                next_row: first_wrap_row,
            },
        }
    }

    /// One column left, or back to [`LAST_COLUMN`] on the next zig-zag row.
    pub fn advance(&mut self) {
        if let Some(column) = self.position.column.checked_sub(1) {
            self.position.column = column;
        } else {
            self.position = Position::new(self.zigzag.wrap(), LAST_COLUMN);
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}

/// How fast the round scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedTier {
    Easy,
    Hard,
}

impl SpeedTier {
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Num1 => Some(Self::Easy),
            Key::Num2 => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn step_delay(self) -> Duration {
        match self {
            Self::Easy => EASY_STEP_DELAY,
            Self::Hard => HARD_STEP_DELAY,
        }
    }

    #[must_use]
    pub const fn confirmation(self) -> &'static str {
        match self {
            Self::Easy => "Easy mode selected",
            Self::Hard => "Hard mode selected",
        }
    }
}

/// Where everything is at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub player: Position,
    pub coin: Position,
    pub bomb: Position,
}

/// The result of one [`Round::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub before: Snapshot,
    pub after: Snapshot,
    /// The coin landed on the player.
    pub collected: bool,
    /// The bomb landed on the player. Ends the round.
    pub crashed: bool,
}

/// Entity state for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    player: Position,
    coin: Mover,
    bomb: Mover,
    previous_switch: bool,
}

impl Round {
    /// Player bottom-left, coin top-right, bomb on the bottom row at column 10.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_positions(
            Position::new(LcdRow::Bottom, 0),
            Position::new(LcdRow::Top, LAST_COLUMN),
            Position::new(LcdRow::Bottom, 10),
        )
    }

    /// A round with chosen starting cells. Both movers wrap to the top row first.
    #[must_use]
    pub const fn with_positions(player: Position, coin: Position, bomb: Position) -> Self {
        Self {
            player,
            coin: Mover::new(coin, LcdRow::Top),
            bomb: Mover::new(bomb, LcdRow::Top),
            previous_switch: false,
        }
    }

    /// Rising edge moves the player up, falling edge moves it down. A steady level does nothing.
    pub const fn steer(&mut self, switch: bool) {
        match (self.previous_switch, switch) {
            (false, true) => self.player.row = LcdRow::Top,
            (true, false) => self.player.row = LcdRow::Bottom,
            _ => {}
        }
        self.previous_switch = switch;
    }

    /// Steer, move the coin and bomb, then check the coin and the bomb against the player.
    pub fn step(&mut self, switch: bool) -> Step {
        let before = self.snapshot();
        self.steer(switch);
        self.coin.advance();
        self.bomb.advance();
        let after = self.snapshot();
        Step {
            before,
            after,
            collected: after.coin == after.player,
            crashed: after.bomb == after.player,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player,
            coin: self.coin.position(),
            bomb: self.bomb.position(),
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the starting layout on a cleared display.
///
/// # Errors
///
/// Returns an error if the display cannot be written.
pub fn draw_round<T: TextDisplay + ?Sized>(
    lcd: &mut T,
    snapshot: &Snapshot,
    player_glyph: GlyphSlot,
) -> Result<()> {
    lcd.clear()?;
    draw_cells(lcd, snapshot, player_glyph)
}

/// Erases the old cells and draws the new ones. Coin and bomb draw over the player.
///
/// # Errors
///
/// Returns an error if the display cannot be written.
pub fn draw_step<T: TextDisplay + ?Sized>(
    lcd: &mut T,
    step: &Step,
    player_glyph: GlyphSlot,
) -> Result<()> {
    put(lcd, step.before.coin, b' ')?;
    put(lcd, step.before.bomb, b' ')?;
    put(lcd, step.before.player, b' ')?;
    draw_cells(lcd, &step.after, player_glyph)
}

fn draw_cells<T: TextDisplay + ?Sized>(
    lcd: &mut T,
    snapshot: &Snapshot,
    player_glyph: GlyphSlot,
) -> Result<()> {
    put(lcd, snapshot.player, player_glyph.code())?;
    put(lcd, snapshot.coin, GlyphSlot::Coin.code())?;
    put(lcd, snapshot.bomb, GlyphSlot::Bomb.code())
}

fn put<T: TextDisplay + ?Sized>(lcd: &mut T, position: Position, byte: u8) -> Result<()> {
    lcd.set_cursor(position.row, position.column)?;
    lcd.write_glyph(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Steps until the round ends or `limit` steps pass. Returns (step number, step).
    fn run_until_event(round: &mut Round, switch: bool, limit: usize) -> Option<(usize, Step)> {
        (1..=limit)
            .map(|number| (number, round.step(switch)))
            .find(|(_, step)| step.collected || step.crashed)
    }

    #[test]
    fn staying_low_hits_the_bomb_on_step_ten() {
        let mut round = Round::new();
        let (number, step) = run_until_event(&mut round, false, 100).expect("bomb arrives");
        assert_eq!(number, 10);
        assert!(step.crashed);
        assert!(!step.collected);
    }

    #[test]
    fn staying_high_collects_then_crashes() {
        let mut round = Round::new();
        let (number, step) = run_until_event(&mut round, true, 100).expect("coin arrives");
        assert_eq!((number, step.collected), (15, true));
        let (more, step) = run_until_event(&mut round, true, 100).expect("bomb arrives");
        assert_eq!((15 + more, step.crashed), (26, true));
    }

    #[test]
    fn movers_wrap_on_alternating_rows() {
        let mut mover = Mover::new(Position::new(LcdRow::Bottom, 0), LcdRow::Top);
        mover.advance();
        assert_eq!(mover.position(), Position::new(LcdRow::Top, LAST_COLUMN));
        for _ in 0..=LAST_COLUMN {
            mover.advance();
        }
        assert_eq!(mover.position(), Position::new(LcdRow::Bottom, LAST_COLUMN));
        mover.advance();
        assert_eq!(mover.position(), Position::new(LcdRow::Bottom, LAST_COLUMN - 1));
    }

    #[test]
    fn steering_follows_edges_only() {
        let mut round = Round::new();
        round.steer(true);
        assert_eq!(round.snapshot().player.row, LcdRow::Top);
        round.steer(true);
        assert_eq!(round.snapshot().player.row, LcdRow::Top);
        round.steer(false);
        assert_eq!(round.snapshot().player.row, LcdRow::Bottom);
    }

    #[test]
    fn quiet_steps_only_decrement_columns() {
        let mut round = Round::new();
        let step = round.step(false);
        assert_eq!(step.after.coin, Position::new(LcdRow::Top, LAST_COLUMN - 1));
        assert_eq!(step.after.bomb, Position::new(LcdRow::Bottom, 9));
        assert_eq!(step.after.player, step.before.player);
    }

    #[test]
    fn keys_pick_the_speed() {
        assert_eq!(SpeedTier::from_key(Key::Num1), Some(SpeedTier::Easy));
        assert_eq!(SpeedTier::from_key(Key::Num2), Some(SpeedTier::Hard));
        assert_eq!(SpeedTier::from_key(Key::Num3), None);
        assert_eq!(SpeedTier::Hard.step_delay(), Duration::from_millis(180));
    }
}

//! The polling-context state machine: menu, speed selection, play, store, exit.

use crate::audio::AudioPulse;
use crate::char_lcd::TextDisplay;
use crate::game::{Round, SpeedTier, draw_round, draw_step};
use crate::glyph;
use crate::keypad::{Key, KeySource};
use crate::shared_state::SharedState;
use crate::store::{Character, Purchase, Wallet, draw_catalog, item_for_key, purchase};
use crate::wait::Wait;
use crate::{
    GAME_OVER_HOLD, GOODBYE_HOLD, MENU_REFRESH_DELAY, MODE_CONFIRM_HOLD, MODE_POLL_DELAY,
    MODE_PROMPT_HOLD, Result, STORE_POLL_DELAY, STORE_REJECT_HOLD, STORE_RESULT_HOLD,
};

/// Which screen the cabinet is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    #[default]
    Menu,
    ModeSelect,
    Playing(SpeedTier),
    Store,
    Exit,
}

impl Screen {
    /// Runs this screen to completion and returns the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if a device fails.
    pub fn execute<T, K, B, D>(self, arcade: &mut Arcade<'_, T, K, B, D>) -> Result<Self>
    where
        T: TextDisplay,
        K: KeySource,
        B: AudioPulse,
        D: Wait,
    {
        match self {
            Self::Menu => arcade.menu(),
            Self::ModeSelect => arcade.mode_select(),
            Self::Playing(speed_tier) => arcade.play(speed_tier),
            Self::Store => arcade.store(),
            Self::Exit => Ok(Self::Exit),
        }
    }
}

/// Menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Play,
    Exit,
    Store,
}

impl MenuAction {
    const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Num1 => Some(Self::Play),
            Key::Num2 => Some(Self::Exit),
            Key::Num3 => Some(Self::Store),
            _ => None,
        }
    }
}

/// Everything the polling context owns.
pub struct Arcade<'a, T, K, B, D> {
    shared: &'a SharedState,
    lcd: T,
    keys: K,
    buzzer: B,
    delay: D,
    wallet: Wallet,
    character: Character,
}

impl<'a, T, K, B, D> Arcade<'a, T, K, B, D>
where
    T: TextDisplay,
    K: KeySource,
    B: AudioPulse,
    D: Wait,
{
    /// Starts with [`STARTING_COINS`](crate::STARTING_COINS) and the default figure.
    pub fn new(shared: &'a SharedState, lcd: T, keys: K, buzzer: B, delay: D) -> Self {
        Self {
            shared,
            lcd,
            keys,
            buzzer,
            delay,
            wallet: Wallet::default(),
            character: Character::default(),
        }
    }

    /// Runs screens until the player exits.
    ///
    /// # Errors
    ///
    /// Returns an error if a device fails.
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::Menu;
        while screen != Screen::Exit {
            info!("Screen: {:?}", screen);
            screen = screen.execute(self)?;
        }
        info!("Arcade closed with {} coins", self.wallet.coins());
        Ok(())
    }

    #[must_use]
    pub const fn coins(&self) -> u16 {
        self.wallet.coins()
    }

    #[must_use]
    pub const fn character(&self) -> Character {
        self.character
    }

    fn show_coins(&self) {
        self.shared.show(self.wallet.display_value());
    }

    fn menu(&mut self) -> Result<Screen> {
        self.show_coins();
        loop {
            self.lcd.show("MENU:   Play-1", "Exit-2  Store-3 ")?;
            self.show_coins();
            self.delay.wait(MENU_REFRESH_DELAY);

            let Some(action) = self.keys.scan()?.and_then(MenuAction::from_key) else {
                continue;
            };
            return match action {
                MenuAction::Play => Ok(Screen::ModeSelect),
                MenuAction::Store => Ok(Screen::Store),
                MenuAction::Exit => {
                    self.lcd.show("Good_Bye ", "")?;
                    self.delay.wait(GOODBYE_HOLD);
                    Ok(Screen::Exit)
                }
            };
        }
    }

    fn mode_select(&mut self) -> Result<Screen> {
        self.lcd.show("Easy press - 1", "Hard press - 2")?;
        self.delay.wait(MODE_PROMPT_HOLD);
        let speed_tier = loop {
            if let Some(speed_tier) = self.keys.scan()?.and_then(SpeedTier::from_key) {
                break speed_tier;
            }
            self.delay.wait(MODE_POLL_DELAY);
        };
        self.lcd.show(speed_tier.confirmation(), "")?;
        self.delay.wait(MODE_CONFIRM_HOLD);
        Ok(Screen::Playing(speed_tier))
    }

    fn play(&mut self, speed_tier: SpeedTier) -> Result<Screen> {
        self.show_coins();
        glyph::load_all(&mut self.lcd)?;
        let player_glyph = self.character.glyph();
        let mut round = Round::new();
        draw_round(&mut self.lcd, &round.snapshot(), player_glyph)?;

        loop {
            let step = round.step(self.shared.mode_switch());
            draw_step(&mut self.lcd, &step, player_glyph)?;

            if step.collected {
                self.wallet.deposit();
                self.show_coins();
                self.buzzer.pulse()?;
                self.shared.trigger_glow();
                info!("Coin collected, {} coins", self.wallet.coins());
            }

            if step.crashed {
                self.buzzer.pulse()?;
                self.shared.trigger_alarm();
                info!("Bomb hit");
                self.lcd.clear()?;
                self.lcd.print("BOOM! Game Over")?;
                self.delay.wait(GAME_OVER_HOLD);
                return Ok(Screen::Menu);
            }

            self.delay.wait(speed_tier.step_delay());
        }
    }

    fn store(&mut self) -> Result<Screen> {
        glyph::load_all(&mut self.lcd)?;
        draw_catalog(&mut self.lcd)?;

        let item = loop {
            self.show_coins();
            self.delay.wait(STORE_POLL_DELAY);
            if let Some(item) = self.keys.scan()?.and_then(item_for_key) {
                break item;
            }
        };

        match purchase(&mut self.wallet, item) {
            Purchase::Bought(character) => {
                self.character = character;
                self.show_coins();
                info!("Bought {:?}, {} coins left", character, self.wallet.coins());
                self.lcd.clear()?;
                self.lcd.print(item.message)?;
            }
            Purchase::Rejected { needed, coins } => {
                info!("Rejected: needs {} coins, has {}", needed, coins);
                self.lcd.clear()?;
                self.lcd.print("Not enough coins")?;
                self.delay.wait(STORE_REJECT_HOLD);
            }
        }
        self.delay.wait(STORE_RESULT_HOLD);
        Ok(Screen::Menu)
    }
}

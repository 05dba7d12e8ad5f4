//! Host-level tests for the game loop, the store and the quiz gate, with scripted keys
//! and recording fakes for the display, buzzer and analog input.

mod common;

use arcade_kit::quiz::run_quiz_gate;
use arcade_kit::store::Character;
use arcade_kit::{AnalogSampler, Arcade, Key, Result, SharedState, STARTING_COINS};
use common::{CountingBuzzer, CountingDelay, RecordingLcd, ScriptedKeys};

struct Cabinet {
    lcd: RecordingLcd,
    buzzer: CountingBuzzer,
    delay: CountingDelay,
}

impl Cabinet {
    fn new() -> Self {
        Self {
            lcd: RecordingLcd::default(),
            buzzer: CountingBuzzer::default(),
            delay: CountingDelay::default(),
        }
    }

    /// Runs the arcade to exit and returns (coins, character).
    fn play(&self, shared: &SharedState, keys: &[Key]) -> (u16, Character) {
        let mut arcade = Arcade::new(
            shared,
            self.lcd.clone(),
            ScriptedKeys::presses(keys),
            self.buzzer.clone(),
            self.delay.clone(),
        );
        arcade.run().expect("fakes never fail");
        (arcade.coins(), arcade.character())
    }
}

#[test]
fn exit_from_the_menu() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let (coins, character) = cabinet.play(&shared, &[Key::Num2]);

    assert_eq!(coins, STARTING_COINS);
    assert_eq!(character, Character::HandsDown);
    assert!(cabinet.lcd.printed("MENU:   Play-1"));
    assert!(cabinet.lcd.printed("Exit-2  Store-3 "));
    assert!(cabinet.lcd.printed("Good_Bye "));
    assert_eq!(shared.display_value().get(), STARTING_COINS);
}

#[test]
fn menu_ignores_other_keys_and_empty_scans() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let mut arcade = Arcade::new(
        &shared,
        cabinet.lcd.clone(),
        ScriptedKeys::new(&[None, Some(Key::A), Some(Key::Num9), Some(Key::Num2)]),
        cabinet.buzzer.clone(),
        cabinet.delay.clone(),
    );
    arcade.run().expect("fakes never fail");

    let menus = cabinet
        .lcd
        .texts()
        .iter()
        .filter(|text| text.as_str() == "MENU:   Play-1")
        .count();
    assert_eq!(menus, 4);
}

#[test]
fn staying_on_the_bottom_row_hits_the_bomb() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let (coins, _) = cabinet.play(&shared, &[Key::Num1, Key::Num1, Key::Num2]);

    assert_eq!(coins, STARTING_COINS);
    assert!(cabinet.lcd.printed("Easy press - 1"));
    assert!(cabinet.lcd.printed("Easy mode selected"));
    assert!(cabinet.lcd.printed("BOOM! Game Over"));
    assert_eq!(cabinet.buzzer.pulses(), 1);
    assert_eq!(shared.alarm().requests(), 1);
    assert_eq!(shared.glow().requests(), 0);
}

#[test]
fn the_top_row_collects_a_coin_before_the_bomb() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    shared.publish_mode_switch(true);
    let (coins, _) = cabinet.play(&shared, &[Key::Num1, Key::Num2, Key::Num2]);

    assert_eq!(coins, STARTING_COINS + 1);
    assert!(cabinet.lcd.printed("Hard mode selected"));
    assert_eq!(cabinet.buzzer.pulses(), 2);
    assert_eq!(shared.glow().requests(), 1);
    assert_eq!(shared.alarm().requests(), 1);
    assert_eq!(shared.display_value().get(), STARTING_COINS + 1);
}

#[test]
fn speed_tier_sets_the_step_delay() {
    let easy = Cabinet::new();
    easy.play(&SharedState::new(), &[Key::Num1, Key::Num1, Key::Num2]);
    let hard = Cabinet::new();
    hard.play(&SharedState::new(), &[Key::Num1, Key::Num2, Key::Num2]);

    // Nine waits between the ten steps of a bottom-row round.
    assert_eq!(easy.delay.total_ms() - hard.delay.total_ms(), 9 * (400 - 180));
}

#[test]
fn buying_a_character_debits_the_wallet() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let (coins, character) = cabinet.play(&shared, &[Key::Num3, Key::Num4, Key::Num2]);

    assert_eq!(coins, STARTING_COINS - 5);
    assert_eq!(character, Character::HandsUp);
    assert!(cabinet.lcd.printed("0C"));
    assert!(cabinet.lcd.printed("5C"));
    assert!(cabinet.lcd.printed("4C"));
    assert!(cabinet.lcd.printed("Bought Char 2!"));
    assert_eq!(shared.display_value().get(), STARTING_COINS - 5);
}

#[test]
fn a_short_wallet_is_turned_away() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let keys = [
        Key::Num3,
        Key::Num4, // 10 -> 5
        Key::Num3,
        Key::Num4, // 5 -> 0
        Key::Num3,
        Key::Num1, // the dog costs 4
        Key::Num2,
    ];
    let (coins, character) = cabinet.play(&shared, &keys);

    assert_eq!(coins, 0);
    assert_eq!(character, Character::HandsUp);
    assert!(cabinet.lcd.printed("Not enough coins"));
    assert!(!cabinet.lcd.printed("Bought Char 3!"));
}

#[test]
fn the_store_ignores_keys_off_the_shelf() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let keys = [Key::Num3, Key::Num2, Key::B, Key::Num7, Key::Num2];
    let (coins, character) = cabinet.play(&shared, &keys);

    assert_eq!(coins, STARTING_COINS);
    assert_eq!(character, Character::HandsDown);
    assert!(cabinet.lcd.printed("chosen Char 1!"));
}

#[test]
fn the_default_figure_needs_two_coins_in_the_wallet() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let keys = [
        Key::Num3,
        Key::Num4, // 10 -> 5
        Key::Num3,
        Key::Num4, // 5 -> 0
        Key::Num3,
        Key::Num7, // free, but only with two coins
        Key::Num2,
    ];
    let (coins, character) = cabinet.play(&shared, &keys);

    assert_eq!(coins, 0);
    assert_eq!(character, Character::HandsUp);
    assert!(cabinet.lcd.printed("Not enough coins"));
    assert!(!cabinet.lcd.printed("chosen Char 1!"));
}

#[test]
fn a_bought_character_plays_the_next_round() {
    let cabinet = Cabinet::new();
    let shared = SharedState::new();
    let keys = [Key::Num3, Key::Num1, Key::Num1, Key::Num1, Key::Num2];
    let (coins, character) = cabinet.play(&shared, &keys);

    assert_eq!(character, Character::Dog);
    assert_eq!(coins, STARTING_COINS - 4);
    assert!(cabinet.lcd.printed("BOOM! Game Over"));
}

/// Replays raw 12-bit readings.
struct ScriptedAnalog {
    readings: Vec<u16>,
    reads: usize,
}

impl AnalogSampler for ScriptedAnalog {
    const RESOLUTION_BITS: u32 = 12;

    fn read_channel(&mut self, channel: u8) -> Result<u16> {
        assert_eq!(channel, 2);
        let reading = self.readings[self.reads];
        self.reads += 1;
        Ok(reading)
    }
}

#[test]
fn quiz_needs_twenty_good_readings_in_a_row() {
    let good = 101 << 4;
    let mut readings = vec![good; 5];
    readings.push(103 << 4);
    readings.extend([good; 20]);
    let mut analog = ScriptedAnalog { readings, reads: 0 };
    let mut lcd = RecordingLcd::default();
    let mut delay = CountingDelay::default();
    let shared = SharedState::new();

    run_quiz_gate(&mut lcd, &mut analog, &shared, &mut delay).expect("fakes never fail");

    assert_eq!(analog.reads, 26);
    assert!(lcd.printed("Answer the hint"));
    assert!(lcd.printed("101 in binary is"));
    assert!(lcd.printed("Correct!"));
    assert_eq!(delay.total_ms(), 25 * 100 + 3000);
    assert_eq!(shared.display_value().get(), 0);
}

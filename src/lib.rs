//! Tick engine, keypad scanner and game logic for a keypad-and-LCD arcade cabinet.
//!
//! The crate splits into two execution contexts:
//!
//! - the **tick context** ([`TickSource`]), run every [`TICK_PERIOD`] from a
//!   high-priority interrupt executor. It multiplexes the four-digit coin counter
//!   ([`led4`]), paces the two LED blink effects ([`blink_effect`]) and debounces the
//!   mode switch.
//! - the **polling context** ([`Arcade`]), a blocking loop that scans the keypad
//!   ([`keypad`]), steps the game ([`game`]) and runs the store ([`store`]).
//!
//! The two meet only in [`SharedState`].
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod analog;
pub mod arcade;
pub mod audio;
pub mod blink_effect;
pub mod char_lcd;
mod error;
pub mod game;
pub mod glyph;
#[cfg(feature = "pico1")]
pub mod hardware;
pub mod keypad;
pub mod led4;
pub mod output_array;
pub mod quiz;
pub mod segment_table;
mod shared_constants;
pub mod shared_state;
pub mod store;
pub mod tick;
pub mod wait;

// Re-export commonly used items
pub use analog::AnalogSampler;
pub use arcade::{Arcade, Screen};
pub use audio::{AudioPulse, Buzzer};
pub use blink_effect::{BlinkEffect, BlinkPattern, BlinkState, EffectTrigger};
pub use char_lcd::{CharLcdI2c, LcdRow, TextDisplay};
pub use error::{Error, Result};
pub use keypad::{Key, KeyCode, KeySource, Keypad};
pub use led4::{DisplayValue, Led4Mux, Wiring};
pub use output_array::{ActiveLevel, OutputArray};
pub use shared_constants::*;
pub use shared_state::SharedState;
pub use tick::TickSource;
pub use wait::Wait;

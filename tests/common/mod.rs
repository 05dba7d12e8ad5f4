//! In-memory stand-ins for pins, delays and the game's devices.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use arcade_kit::{AudioPulse, Key, KeySource, Result, TextDisplay};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// A wire both sides can see: the code under test drives or reads it, the test inspects or sets it.
#[derive(Clone, Default)]
pub struct SharedPin(Rc<Cell<bool>>);

impl SharedPin {
    pub fn is_set_high(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, high: bool) {
        self.0.set(high);
    }
}

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> core::result::Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

impl InputPin for SharedPin {
    fn is_high(&mut self) -> core::result::Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> core::result::Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

pub fn pins<const N: usize>() -> [SharedPin; N] {
    core::array::from_fn(|_| SharedPin::default())
}

/// Adds up every requested delay instead of sleeping.
#[derive(Clone, Default)]
pub struct CountingDelay(Rc<Cell<u64>>);

impl CountingDelay {
    pub fn total_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get() + u64::from(ns));
    }
}

/// Hands out scripted scan results and fails the test if the game asks for more.
pub struct ScriptedKeys(VecDeque<Option<Key>>);

impl ScriptedKeys {
    pub fn new(script: &[Option<Key>]) -> Self {
        Self(script.iter().copied().collect())
    }

    pub fn presses(keys: &[Key]) -> Self {
        Self(keys.iter().copied().map(Some).collect())
    }
}

impl KeySource for ScriptedKeys {
    fn scan(&mut self) -> Result<Option<Key>> {
        Ok(self
            .0
            .pop_front()
            .unwrap_or_else(|| panic!("the game asked for a key after the script ended")))
    }
}

/// Keeps every printed string and counts clears.
#[derive(Clone, Default)]
pub struct RecordingLcd {
    texts: Rc<RefCell<Vec<String>>>,
    clears: Rc<Cell<usize>>,
}

impl RecordingLcd {
    pub fn texts(&self) -> Vec<String> {
        self.texts.borrow().clone()
    }

    pub fn printed(&self, text: &str) -> bool {
        self.texts.borrow().iter().any(|printed| printed == text)
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }
}

impl TextDisplay for RecordingLcd {
    fn write_command(&mut self, command: u8) -> Result<()> {
        if command == 0x01 {
            self.clears.set(self.clears.get() + 1);
        }
        Ok(())
    }

    fn write_glyph(&mut self, _byte: u8) -> Result<()> {
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.texts.borrow_mut().push(text.into());
        Ok(())
    }
}

/// Counts beeps.
#[derive(Clone, Default)]
pub struct CountingBuzzer(Rc<Cell<u32>>);

impl CountingBuzzer {
    pub fn pulses(&self) -> u32 {
        self.0.get()
    }
}

impl AudioPulse for CountingBuzzer {
    fn pulse(&mut self) -> Result<()> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

//! Host-level tests for the matrix keypad scanner against a simulated 4x4 matrix.

mod common;

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arcade_kit::{Key, KeySource, Keypad};
use common::CountingDelay;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Row levels plus the set of held keys, shared by every row and column pin.
#[derive(Default)]
struct Matrix {
    rows_high: [Cell<bool>; 4],
    pressed: RefCell<Vec<(usize, usize)>>,
    /// Column reads that still see contact bounce after every row is released.
    bounce_reads: Cell<u32>,
}

impl Matrix {
    fn press(&self, row: usize, column: usize) {
        self.pressed.borrow_mut().push((row, column));
    }

    fn column_is_low(&self, column: usize) -> bool {
        let driven = self
            .pressed
            .borrow()
            .iter()
            .any(|&(row, pressed_column)| pressed_column == column && !self.rows_high[row].get());
        if driven {
            return true;
        }
        let all_released = self.rows_high.iter().all(Cell::get);
        if all_released && self.bounce_reads.get() > 0 {
            self.bounce_reads.set(self.bounce_reads.get() - 1);
            return true;
        }
        false
    }
}

struct RowPin(Rc<Matrix>, usize);

impl ErrorType for RowPin {
    type Error = Infallible;
}

impl OutputPin for RowPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.rows_high[self.1].set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.rows_high[self.1].set(true);
        Ok(())
    }
}

struct ColumnPin(Rc<Matrix>, usize);

impl ErrorType for ColumnPin {
    type Error = Infallible;
}

impl InputPin for ColumnPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.column_is_low(self.1))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.column_is_low(self.1))
    }
}

fn keypad(
    matrix: &Rc<Matrix>,
    delay: &CountingDelay,
) -> Keypad<RowPin, ColumnPin, CountingDelay> {
    Keypad::new(
        core::array::from_fn(|row| RowPin(Rc::clone(matrix), row)),
        core::array::from_fn(|column| ColumnPin(Rc::clone(matrix), column)),
        delay.clone(),
    )
    .expect("fake pins never fail")
}

#[test]
fn rows_start_inactive() {
    let matrix = Rc::new(Matrix::default());
    let _keypad = keypad(&matrix, &CountingDelay::default());
    assert!(matrix.rows_high.iter().all(Cell::get));
}

#[test]
fn row_two_column_three_is_0x23() {
    let matrix = Rc::new(Matrix::default());
    let delay = CountingDelay::default();
    let mut keypad = keypad(&matrix, &delay);
    matrix.press(1, 2);

    let code = keypad.scan_code().expect("fake pins never fail");
    assert_eq!(code.map(|code| code.get()), Some(0x23));
    // Two row settles, no release polls, then the quiet window.
    assert_eq!(delay.total_ms(), 2 + 50);
    assert!(matrix.rows_high.iter().all(Cell::get));
}

#[test]
fn nothing_pressed_is_no_key_without_release_wait() {
    let matrix = Rc::new(Matrix::default());
    let delay = CountingDelay::default();
    let mut keypad = keypad(&matrix, &delay);

    assert_eq!(keypad.scan().expect("fake pins never fail"), None);
    assert_eq!(delay.total_ms(), 4);
    assert!(matrix.rows_high.iter().all(Cell::get));
}

#[test]
fn earlier_rows_win() {
    let matrix = Rc::new(Matrix::default());
    let mut keypad = keypad(&matrix, &CountingDelay::default());
    matrix.press(3, 0);
    matrix.press(1, 3);

    assert_eq!(keypad.scan().expect("fake pins never fail"), Some(Key::Num3));
}

#[test]
fn leftmost_column_wins_within_a_row() {
    let matrix = Rc::new(Matrix::default());
    let mut keypad = keypad(&matrix, &CountingDelay::default());
    matrix.press(0, 2);
    matrix.press(0, 1);

    assert_eq!(keypad.scan().expect("fake pins never fail"), Some(Key::C));
}

#[test]
fn release_wait_polls_every_ten_ms() {
    let matrix = Rc::new(Matrix::default());
    let delay = CountingDelay::default();
    let mut keypad = keypad(&matrix, &delay);
    matrix.press(0, 0);
    matrix.bounce_reads.set(3);

    assert_eq!(keypad.scan().expect("fake pins never fail"), Some(Key::D));
    assert_eq!(delay.total_ms(), 1 + 3 * 10 + 50);
    assert_eq!(matrix.bounce_reads.get(), 0);
}

#[test]
fn every_position_decodes_to_its_label() {
    let expected = [
        ['D', 'C', 'B', 'A'],
        ['E', '9', '6', '3'],
        ['F', '8', '5', '2'],
        ['0', '7', '4', '1'],
    ];
    for (row, labels) in expected.iter().enumerate() {
        for (column, &label) in labels.iter().enumerate() {
            let matrix = Rc::new(Matrix::default());
            let mut keypad = keypad(&matrix, &CountingDelay::default());
            matrix.press(row, column);
            let key = keypad.scan().expect("fake pins never fail").expect("pressed");
            assert_eq!(key.label(), label);
        }
    }
}

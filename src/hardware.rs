//! Pin assignments for the arcade board on a Raspberry Pi Pico (RP2040).
//!
//! | signal                    | pins               |
//! |---------------------------|--------------------|
//! | segments A..G             | GP0..GP6           |
//! | digit enables, left first | GP7..GP10          |
//! | keypad rows, top first    | GP11..GP14         |
//! | keypad columns            | GP15..GP18         |
//! | green (glow) LED          | GP19               |
//! | red (alarm) LED           | GP20               |
//! | buzzer                    | GP21               |
//! | mode switch               | GP22               |
//! | LCD backpack SDA / SCL    | GP26 / GP27 (I2C1) |
//! | answer potentiometer      | GP28 (ADC2)        |

use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{self, Level, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;

use crate::analog::RpAnalog;
use crate::keypad::{COLUMN_COUNT, ROW_COUNT};
use crate::led4::{CELL_COUNT, SEGMENT_COUNT};
use crate::output_array::OutputArray;
use crate::QUIZ_CHANNEL;

pub struct Hardware {
    pub cells: OutputArray<gpio::Output<'static>, CELL_COUNT>,
    pub segments: OutputArray<gpio::Output<'static>, SEGMENT_COUNT>,
    pub keypad_rows: [gpio::Output<'static>; ROW_COUNT],
    pub keypad_columns: [gpio::Input<'static>; COLUMN_COUNT],
    pub glow_led: gpio::Output<'static>,
    pub alarm_led: gpio::Output<'static>,
    pub buzzer: gpio::Output<'static>,
    pub mode_switch: gpio::Input<'static>,
    pub lcd_i2c: I2c<'static, I2C1, i2c::Blocking>,
    pub analog: RpAnalog<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Common-anode display: High turns a digit or segment off.
        let segments = OutputArray::new([
            gpio::Output::new(peripherals.PIN_0, Level::High),
            gpio::Output::new(peripherals.PIN_1, Level::High),
            gpio::Output::new(peripherals.PIN_2, Level::High),
            gpio::Output::new(peripherals.PIN_3, Level::High),
            gpio::Output::new(peripherals.PIN_4, Level::High),
            gpio::Output::new(peripherals.PIN_5, Level::High),
            gpio::Output::new(peripherals.PIN_6, Level::High),
        ]);

        let cells = OutputArray::new([
            gpio::Output::new(peripherals.PIN_7, Level::High),
            gpio::Output::new(peripherals.PIN_8, Level::High),
            gpio::Output::new(peripherals.PIN_9, Level::High),
            gpio::Output::new(peripherals.PIN_10, Level::High),
        ]);

        let keypad_rows = [
            gpio::Output::new(peripherals.PIN_11, Level::High),
            gpio::Output::new(peripherals.PIN_12, Level::High),
            gpio::Output::new(peripherals.PIN_13, Level::High),
            gpio::Output::new(peripherals.PIN_14, Level::High),
        ];

        let keypad_columns = [
            gpio::Input::new(peripherals.PIN_15, Pull::Up),
            gpio::Input::new(peripherals.PIN_16, Pull::Up),
            gpio::Input::new(peripherals.PIN_17, Pull::Up),
            gpio::Input::new(peripherals.PIN_18, Pull::Up),
        ];

        let glow_led = gpio::Output::new(peripherals.PIN_19, Level::Low);
        let alarm_led = gpio::Output::new(peripherals.PIN_20, Level::Low);
        let buzzer = gpio::Output::new(peripherals.PIN_21, Level::Low);
        let mode_switch = gpio::Input::new(peripherals.PIN_22, Pull::Down);

        let lcd_i2c = I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PIN_27,
            peripherals.PIN_26,
            i2c::Config::default(),
        );

        let adc = Adc::new_blocking(peripherals.ADC, adc::Config::default());
        let answer = adc::Channel::new_pin(peripherals.PIN_28, Pull::None);
        let analog = RpAnalog::new(adc, answer, QUIZ_CHANNEL);

        Self {
            cells,
            segments,
            keypad_rows,
            keypad_columns,
            glow_led,
            alarm_led,
            buzzer,
            mode_switch,
            lcd_i2c,
            analog,
        }
    }
}

//! Keypad-and-LCD arcade cabinet with a multiplexed coin counter.
//!
//! Runs on a Raspberry Pi Pico RP2040. The tick engine runs from a software interrupt at
//! raised priority; the game loop blocks in thread mode.
#![no_std]
#![no_main]
#![expect(unsafe_code, reason = "The interrupt executor is driven from an interrupt handler")]

use core::convert::Infallible;

use arcade_kit::quiz::run_quiz_gate;
use arcade_kit::{
    ActiveLevel, Arcade, Buzzer, CharLcdI2c, Keypad, Led4Mux, Result, SharedState, TICK_PERIOD,
    TickSource, Wiring, char_lcd::PCF8574_ADDRESS, hardware::Hardware,
};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::{Delay, Duration, Ticker, Timer};
use panic_probe as _;

type BoardTickSource =
    TickSource<'static, Output<'static>, Output<'static>, Output<'static>, Input<'static>>;

static SHARED: SharedState = SharedState::new();
static EXECUTOR_TICK: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    // SAFETY: SWI_IRQ_1 is reserved for EXECUTOR_TICK.
    unsafe { EXECUTOR_TICK.on_interrupt() }
}

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    if let Err(err) = inner_main() {
        panic!("{err}");
    }
    // The tick engine keeps the counter lit after the player exits.
    loop {
        Timer::after(Duration::from_secs(86_400)).await;
    }
}

fn inner_main() -> Result<()> {
    let hardware = Hardware::default();

    let led4 = Led4Mux::new(hardware.cells, hardware.segments, Wiring::COMMON_ANODE)?;
    let tick_source = TickSource::new(
        &SHARED,
        led4,
        hardware.glow_led,
        hardware.alarm_led,
        hardware.mode_switch,
        ActiveLevel::High,
    )?;
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let tick_spawner = EXECUTOR_TICK.start(interrupt::SWI_IRQ_1);
    let token = tick_loop(tick_source)?;
    tick_spawner.spawn(token);

    let mut lcd = CharLcdI2c::new(hardware.lcd_i2c, Delay, PCF8574_ADDRESS)?;
    let mut analog = hardware.analog;
    run_quiz_gate(&mut lcd, &mut analog, &SHARED, &mut Delay)?;

    let keypad = Keypad::new(hardware.keypad_rows, hardware.keypad_columns, Delay)?;
    let buzzer = Buzzer::new(hardware.buzzer, Delay)?;
    let mut arcade = Arcade::new(&SHARED, lcd, keypad, buzzer, Delay);
    arcade.run()
}

#[embassy_executor::task]
async fn tick_loop(tick_source: BoardTickSource) -> ! {
    // If it returns, something went wrong.
    let err = inner_tick_loop(tick_source).await.unwrap_err();
    panic!("{err}");
}

async fn inner_tick_loop(mut tick_source: BoardTickSource) -> Result<Infallible> {
    info!("Tick engine started, period {} us", TICK_PERIOD.as_micros());
    let mut ticker = Ticker::every(TICK_PERIOD);
    loop {
        tick_source.on_tick()?;
        ticker.next().await;
    }
}

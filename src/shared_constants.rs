use embassy_time::Duration;

// ============================================================================
// Tick engine
// ============================================================================

/// Period of the tick handler. Four digit slots give an 8 ms full display refresh.
pub const TICK_PERIOD: Duration = Duration::from_millis(2);

/// Ticks per effect-tick (100 x 2 ms = 200 ms).
pub const TICKS_PER_EFFECT_TICK: u8 = 100;

/// Effect-ticks the glow LED stays lit after a trigger (about 600 ms).
pub const GLOW_EFFECT_TICKS: u8 = 3;

/// Effect-ticks between two alarm LED toggles.
pub const ALARM_TOGGLE_INTERVAL: u8 = 1;

/// Toggles the alarm LED makes before going dark (three on/off cycles).
pub const ALARM_TOGGLES: u8 = 6;

/// Consecutive identical ticks before the mode switch level is believed.
pub const SWITCH_STABLE_TICKS: u8 = 5;

// ============================================================================
// Keypad
// ============================================================================

pub const KEYPAD_SETTLE_DELAY: Duration = Duration::from_millis(1);
pub const KEYPAD_RELEASE_POLL: Duration = Duration::from_millis(10);
pub const KEYPAD_QUIET_DELAY: Duration = Duration::from_millis(50);

// ============================================================================
// Game
// ============================================================================

pub const STARTING_COINS: u16 = 10;

pub const EASY_STEP_DELAY: Duration = Duration::from_millis(400);
pub const HARD_STEP_DELAY: Duration = Duration::from_millis(180);

pub const MENU_REFRESH_DELAY: Duration = Duration::from_millis(50);
pub const MODE_PROMPT_HOLD: Duration = Duration::from_secs(1);
pub const MODE_POLL_DELAY: Duration = Duration::from_millis(100);
pub const MODE_CONFIRM_HOLD: Duration = Duration::from_secs(2);
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(2);
pub const GOODBYE_HOLD: Duration = Duration::from_secs(2);
pub const STORE_POLL_DELAY: Duration = Duration::from_millis(10);
pub const STORE_REJECT_HOLD: Duration = Duration::from_millis(1500);
pub const STORE_RESULT_HOLD: Duration = Duration::from_secs(2);

// ============================================================================
// Quiz gate
// ============================================================================

/// Analog channel wired to the answer potentiometer.
pub const QUIZ_CHANNEL: u8 = 2;
/// Accepted 8-bit readings: 101 (0b101 read as decimal) give or take one.
pub const QUIZ_LOW: u8 = 100;
pub const QUIZ_HIGH: u8 = 102;
/// Consecutive in-band samples needed to pass.
pub const QUIZ_STREAK: u8 = 20;
pub const QUIZ_POLL_DELAY: Duration = Duration::from_millis(100);
pub const QUIZ_PASS_HOLD: Duration = Duration::from_secs(3);

// ============================================================================
// Buzzer
// ============================================================================

pub const BUZZ_CYCLES: u16 = 100;
pub const BUZZ_HALF_PERIOD: Duration = Duration::from_micros(300);

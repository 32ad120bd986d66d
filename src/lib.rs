//! Hue Pong - two-player paddle-and-ball game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring, session)
//! - `app`: Screen state machine (menu, settings, play, game over)
//! - `settings`: Per-game options edited on the settings screen
//! - `tuning`: Data-driven physics and layout constants
//! - `input`: Held-key latching for paddle control
//! - `ui`: Button layout and hit-testing
//! - `view`: Read-only frame snapshot for the renderer
//! - `platform`: Frame clock

pub mod app;
pub mod input;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;
pub mod view;

pub use app::{Action, App, AppState, Screen, Transition};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target frame rate (the frame clock caps to this)
    pub const TARGET_FPS: u32 = 120;
    /// Fixed timestep matching the target frame rate
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Largest dt the frame clock hands out
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 900.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Left edge of the left paddle, measured from the left wall
    pub const PADDLE_LEFT_OFFSET: f32 = 20.0;
    /// Left edge of the right paddle, measured from the right wall
    pub const PADDLE_RIGHT_OFFSET: f32 = 30.0;
    /// Pixels per second
    pub const PADDLE_SPEED: f32 = 600.0;
    /// Hue phase advance per second (one full cycle every 5s)
    pub const HUE_RATE: f32 = 0.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_START_SPEED: f32 = 300.0;
    /// Added to ball speed on each paddle hit when speed growth is on
    pub const BALL_SPEED_INCREMENT: f32 = 20.0;
    pub const BALL_MAX_SPEED: f32 = 600.0;

    /// Win threshold used the first time the settings screen opens
    pub const DEFAULT_WIN_THRESHOLD: u32 = 5;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, any positive value
//! - Seeded RNG only
//! - Fixed per-tick order (paddles, contact, ball, score, win check)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Rect, paddle_contact, resolve_paddle_hit};
pub use color::{Rgb, hue_to_rgb, random_ball_color};
pub use score::ScoreTracker;
pub use state::{Ball, Paddle, ScoreSignal, Side, VerticalInput};
pub use tick::{GameSession, TickInput, TickOutcome};

//! Paddle and ball entities
//!
//! Both are created from [`Tuning`] and remember the board bounds they live
//! in, so their update functions only need the frame delta.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::color::{Rgb, hue_to_rgb, random_ball_color, wrap_phase};
use crate::tuning::Tuning;

/// Which half of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Player label shown to the players
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical paddle input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalInput {
    Up,
    #[default]
    Idle,
    Down,
}

impl VerticalInput {
    /// Factor in {-1, 0, 1}; screen y grows downward
    #[inline]
    pub fn factor(&self) -> f32 {
        match self {
            VerticalInput::Up => -1.0,
            VerticalInput::Idle => 0.0,
            VerticalInput::Down => 1.0,
        }
    }
}

/// Result of moving the ball for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreSignal {
    #[default]
    None,
    /// Ball crossed the left boundary (-1)
    ExitedLeft,
    /// Ball crossed the right boundary (+1)
    ExitedRight,
}

impl ScoreSignal {
    /// Numeric form: -1 left, +1 right, 0 none
    pub fn value(&self) -> i8 {
        match self {
            ScoreSignal::None => 0,
            ScoreSignal::ExitedLeft => -1,
            ScoreSignal::ExitedRight => 1,
        }
    }

    pub fn is_point(&self) -> bool {
        *self != ScoreSignal::None
    }
}

/// A vertical-only paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; x never changes after creation
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    pub speed: f32,
    /// Cosmetic hue phase in [0, 1)
    pub hue: f32,
    pub color: Rgb,
    hue_rate: f32,
    board_height: f32,
}

impl Paddle {
    /// Create a paddle with its left edge at `x`, vertically centered
    pub fn new(x: f32, tuning: &Tuning, hue: f32) -> Self {
        let hue = wrap_phase(hue);
        Self {
            pos: Vec2::new(
                x,
                (tuning.board_height / 2.0).floor() - tuning.paddle_height / 2.0,
            ),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
            hue,
            color: hue_to_rgb(hue),
            hue_rate: tuning.hue_rate,
            board_height: tuning.board_height,
        }
    }

    /// Move by `speed * factor * dt`, clamp to the board, advance the hue
    pub fn update(&mut self, input: VerticalInput, dt: f32) {
        self.pos.y += self.speed * input.factor() * dt;
        self.pos.y = self.pos.y.clamp(0.0, self.max_y());

        self.hue = wrap_phase(self.hue + self.hue_rate * dt);
        self.color = hue_to_rgb(self.hue);
    }

    /// Lowest allowed top edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        (self.board_height - self.height).max(0.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Scalar speed in pixels per second
    pub speed: f32,
    /// Horizontal direction, always -1 or +1
    pub x_fac: f32,
    /// Vertical direction, always -1 or +1
    pub y_fac: f32,
    pub color: Rgb,
    /// Armed until the first boundary crossing; re-armed only by `reset`
    armed: bool,
    speed_increment: f32,
    max_speed: f32,
    board: Vec2,
    center: Vec2,
}

impl Ball {
    /// Serve position at the board center, heading right and up
    pub fn new(tuning: &Tuning) -> Self {
        let center = tuning.board_center();
        Self {
            pos: center,
            radius: tuning.ball_radius,
            speed: tuning.ball_start_speed,
            x_fac: 1.0,
            y_fac: -1.0,
            color: Rgb::WHITE,
            armed: true,
            speed_increment: tuning.ball_speed_increment,
            max_speed: tuning.ball_max_speed,
            board: Vec2::new(tuning.board_width, tuning.board_height),
            center,
        }
    }

    /// Advance the ball, bounce off top/bottom, report boundary crossings
    pub fn update(&mut self, dt: f32) -> ScoreSignal {
        self.pos.x += self.speed * self.x_fac * dt;
        self.pos.y += self.speed * self.y_fac * dt;

        if self.pos.y - self.radius <= 0.0 {
            self.y_fac = 1.0;
        } else if self.pos.y + self.radius >= self.board.y {
            self.y_fac = -1.0;
        }

        if !self.armed {
            return ScoreSignal::None;
        }
        if self.pos.x - self.radius <= 0.0 {
            self.armed = false;
            ScoreSignal::ExitedLeft
        } else if self.pos.x + self.radius >= self.board.x {
            self.armed = false;
            ScoreSignal::ExitedRight
        } else {
            ScoreSignal::None
        }
    }

    /// Recenter, alternate the serve, randomize vertical direction, re-arm
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = self.center;
        self.x_fac = -self.x_fac;
        self.y_fac = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.armed = true;
    }

    /// Reverse horizontally, recolor, and optionally speed up
    pub fn on_paddle_hit<R: Rng + ?Sized>(&mut self, speed_growth: bool, rng: &mut R) {
        self.x_fac = -self.x_fac;
        self.color = random_ball_color(rng);
        if speed_growth {
            self.speed = (self.speed + self.speed_increment).min(self.max_speed);
        }
    }

    /// Whether the next boundary crossing will count
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Bounding box used for paddle overlap
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
        )
    }
}

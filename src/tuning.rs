//! Data-driven game balance
//!
//! Every physics and layout constant the simulation reads lives in [`Tuning`].
//! Defaults mirror [`crate::consts`]; a JSON document can override any subset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and layout constants, all speeds in per-second units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f32,
    pub board_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_left_offset: f32,
    pub paddle_right_offset: f32,
    pub paddle_speed: f32,
    /// Hue phase per second; any finite value, negative runs the cycle backward
    pub hue_rate: f32,

    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub ball_speed_increment: f32,
    pub ball_max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_left_offset: PADDLE_LEFT_OFFSET,
            paddle_right_offset: PADDLE_RIGHT_OFFSET,
            paddle_speed: PADDLE_SPEED,
            hue_rate: HUE_RATE,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            ball_speed_increment: BALL_SPEED_INCREMENT,
            ball_max_speed: BALL_MAX_SPEED,
        }
    }
}

/// Errors raised while loading a tuning document
#[derive(Debug)]
pub enum TuningError {
    /// Document is not valid JSON or has mistyped fields
    Parse(serde_json::Error),
    /// A size or speed that must be positive is not
    NonPositive { field: &'static str, value: f32 },
    /// A value that must be finite is NaN or infinite
    NotFinite { field: &'static str, value: f32 },
    /// Speed cap is lower than the serve speed
    SpeedCapBelowStart { start: f32, cap: f32 },
    /// Paddles or ball do not fit on the board
    DoesNotFit(&'static str),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Tuning parse failed: {}", e),
            Self::NonPositive { field, value } => {
                write!(f, "Tuning field `{}` must be positive, got {}", field, value)
            }
            Self::NotFinite { field, value } => {
                write!(f, "Tuning field `{}` must be finite, got {}", field, value)
            }
            Self::SpeedCapBelowStart { start, cap } => write!(
                f,
                "Ball speed cap {} is below the start speed {}",
                cap, start
            ),
            Self::DoesNotFit(what) => write!(f, "{} does not fit on the board", what),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: board {}x{}, ball {} -> {} px/s",
            tuning.board_width,
            tuning.board_height,
            tuning.ball_start_speed,
            tuning.ball_max_speed
        );
        Ok(tuning)
    }

    /// Check the constants describe a playable board
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("ball_max_speed", self.ball_max_speed),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if !self.hue_rate.is_finite() {
            return Err(TuningError::NotFinite {
                field: "hue_rate",
                value: self.hue_rate,
            });
        }
        if self.ball_speed_increment < 0.0 {
            return Err(TuningError::NonPositive {
                field: "ball_speed_increment",
                value: self.ball_speed_increment,
            });
        }
        if self.ball_max_speed < self.ball_start_speed {
            return Err(TuningError::SpeedCapBelowStart {
                start: self.ball_start_speed,
                cap: self.ball_max_speed,
            });
        }
        if self.paddle_height > self.board_height {
            return Err(TuningError::DoesNotFit("Paddle"));
        }
        if self.paddle_left_offset < 0.0
            || self.paddle_right_offset < self.paddle_width
            || self.paddle_left_offset + self.paddle_width
                >= self.board_width - self.paddle_right_offset
        {
            return Err(TuningError::DoesNotFit("Paddle pair"));
        }
        if self.ball_radius * 2.0 >= self.board_height {
            return Err(TuningError::DoesNotFit("Ball"));
        }
        Ok(())
    }

    /// X of the left paddle's left edge
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_left_offset
    }

    /// X of the right paddle's left edge
    pub fn right_paddle_x(&self) -> f32 {
        self.board_width - self.paddle_right_offset
    }

    /// Ball serve point (integer halves of the board)
    pub fn board_center(&self) -> glam::Vec2 {
        glam::Vec2::new(
            (self.board_width / 2.0).floor(),
            (self.board_height / 2.0).floor(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.right_paddle_x(), 870.0);
        assert_eq!(tuning.board_center(), glam::Vec2::new(450.0, 300.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball_max_speed": 800.0 }"#).unwrap();
        assert_eq!(tuning.ball_max_speed, 800.0);
        assert_eq!(tuning.board_width, BOARD_WIDTH);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Tuning::from_json(r#"{ "paddle_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonPositive {
                field: "paddle_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_hue_rate_must_be_finite() {
        let tuning = Tuning {
            hue_rate: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotFinite {
                field: "hue_rate",
                ..
            })
        ));

        let tuning = Tuning {
            hue_rate: f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        // Backward drift is allowed
        let tuning = Tuning::from_json(r#"{ "hue_rate": -0.5 }"#).unwrap();
        assert_eq!(tuning.hue_rate, -0.5);
    }

    #[test]
    fn test_rejects_cap_below_start() {
        let err = Tuning::from_json(r#"{ "ball_max_speed": 100.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::SpeedCapBelowStart { .. }));
        assert!(err.to_string().contains("below the start speed"));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let err = Tuning::from_json(r#"{ "paddle_height": 700.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::DoesNotFit("Paddle")));
    }
}

//! Per-frame simulation step
//!
//! A [`GameSession`] owns both paddles, the ball, the score and a seeded RNG.
//! Each tick runs in a fixed order: paddles move, paddle contact is resolved,
//! the ball moves and may score, then the win condition is checked.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::resolve_paddle_hit;
use super::score::ScoreTracker;
use super::state::{Ball, Paddle, ScoreSignal, Side, VerticalInput};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: VerticalInput,
    pub right: VerticalInput,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Paddle the ball bounced off this tick
    pub hit: Option<Side>,
    /// Boundary crossing reported by the ball
    pub signal: ScoreSignal,
    /// Side credited with a point this tick
    pub scored: Option<Side>,
    /// Set once the game is over; stays set on later ticks
    pub winner: Option<Side>,
}

/// One game from serve to winner
#[derive(Debug, Clone)]
pub struct GameSession {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: ScoreTracker,
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    time_ticks: u64,
    winner: Option<Side>,
}

impl GameSession {
    /// Start a session; the same seed and inputs replay the same game
    pub fn new(settings: Settings, tuning: &Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let left = Paddle::new(tuning.left_paddle_x(), tuning, rng.random());
        let right = Paddle::new(tuning.right_paddle_x(), tuning, rng.random());

        log::info!(
            "New session: seed {}, first to {}, speed growth {}",
            seed,
            settings.win_threshold(),
            if settings.speed_growth { "on" } else { "off" }
        );

        Self {
            left,
            right,
            ball: Ball::new(tuning),
            scores: ScoreTracker::new(settings.win_threshold()),
            settings,
            seed,
            rng,
            time_ticks: 0,
            winner: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks advanced so far
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Advance the session by `dt` seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> TickOutcome {
        if let Some(winner) = self.winner {
            log::warn!("Tick on a finished session ignored");
            return TickOutcome {
                winner: Some(winner),
                ..Default::default()
            };
        }

        self.time_ticks += 1;

        self.left.update(input.left, dt);
        self.right.update(input.right, dt);

        let hit = resolve_paddle_hit(
            &mut self.ball,
            &self.left,
            &self.right,
            self.settings.speed_growth,
            &mut self.rng,
        );

        let signal = self.ball.update(dt);
        let scored = self.scores.apply_point(signal);
        if let Some(side) = scored {
            log::debug!(
                "{} scores ({} - {})",
                side.label(),
                self.scores.left,
                self.scores.right
            );
            self.ball.reset(&mut self.rng);
        }

        self.winner = self.scores.winner();
        if let Some(side) = self.winner {
            log::info!(
                "{} wins {} - {} after {} ticks",
                side.label(),
                self.scores.left,
                self.scores.right,
                self.time_ticks
            );
        }

        TickOutcome {
            hit,
            signal,
            scored,
            winner: self.winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use glam::Vec2;

    fn session(settings: Settings) -> GameSession {
        GameSession::new(settings, &Tuning::default(), 12345)
    }

    #[test]
    fn test_paddles_move_before_collision() {
        let mut s = session(Settings::new(false, false, 5));
        // Ball sits just above the left paddle; moving the paddle up this
        // frame must produce the hit in the same tick
        s.left.pos.y = 100.0;
        s.ball.pos = Vec2::new(25.0, 90.0);
        s.ball.x_fac = -1.0;
        let input = TickInput {
            left: VerticalInput::Up,
            right: VerticalInput::Idle,
        };
        let outcome = s.tick(&input, 0.01);
        assert_eq!(outcome.hit, Some(Side::Left));
        assert_eq!(s.ball.x_fac, 1.0);
    }

    #[test]
    fn test_point_resets_ball() {
        let mut s = session(Settings::new(false, false, 5));
        s.ball.pos = Vec2::new(450.0, 300.0);
        s.ball.x_fac = 1.0;
        s.ball.pos.x = 892.0;
        let outcome = s.tick(&TickInput::default(), SIM_DT);
        assert_eq!(outcome.signal, ScoreSignal::ExitedRight);
        assert_eq!(outcome.scored, Some(Side::Left));
        assert_eq!(s.ball.pos, Vec2::new(450.0, 300.0));
        assert_eq!(s.ball.x_fac, -1.0);
        assert!(s.ball.is_armed());
        assert_eq!(outcome.winner, None);
    }

    #[test]
    fn test_win_stops_session() {
        let mut s = session(Settings::new(false, false, 1));
        s.ball.x_fac = 1.0;
        s.ball.pos.x = 892.0;
        let outcome = s.tick(&TickInput::default(), SIM_DT);
        assert_eq!(outcome.winner, Some(Side::Left));
        assert!(s.is_over());

        let ticks = s.time_ticks();
        let ball_pos = s.ball.pos;
        let outcome = s.tick(&TickInput::default(), SIM_DT);
        assert_eq!(outcome.winner, Some(Side::Left));
        assert_eq!(s.time_ticks(), ticks);
        assert_eq!(s.ball.pos, ball_pos);
    }

    #[test]
    fn test_determinism() {
        let mut a = session(Settings::default());
        let mut b = session(Settings::default());
        let inputs = [
            TickInput {
                left: VerticalInput::Up,
                right: VerticalInput::Down,
            },
            TickInput::default(),
            TickInput {
                left: VerticalInput::Down,
                right: VerticalInput::Up,
            },
        ];
        for i in 0..3000 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(a.tick(input, SIM_DT), b.tick(input, SIM_DT));
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.scores.left, b.scores.left);
        assert_eq!(a.scores.right, b.scores.right);
        assert_eq!(a.left.color, b.left.color);
    }

    #[test]
    fn test_large_dt_stays_consistent() {
        let mut s = session(Settings::new(true, false, 1000));
        for _ in 0..200 {
            let outcome = s.tick(&TickInput::default(), 0.75);
            assert!(!(outcome.scored.is_some() && outcome.signal == ScoreSignal::None));
            assert!(s.left.pos.y >= 0.0 && s.left.pos.y <= s.left.max_y());
            assert!(s.ball.speed <= s.ball.max_speed());
        }
    }
}

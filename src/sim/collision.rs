//! Collision detection and response
//!
//! The ball is approximated by its bounding box, so paddle contact is a plain
//! rectangle overlap test. At most one paddle hit is processed per frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};

/// Axis-aligned rectangle (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build from top-left corner and extent, like a UI layout rect
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap; rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Half-open point containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// Check the ball against both paddles, left first
///
/// Returns the side whose paddle was hit. Pure geometry; does not touch the ball.
pub fn paddle_contact(ball: &Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    let ball_rect = ball.rect();
    if ball_rect.overlaps(&left.rect()) {
        Some(Side::Left)
    } else if ball_rect.overlaps(&right.rect()) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Detect a paddle contact and apply the hit response to the ball
pub fn resolve_paddle_hit<R: Rng + ?Sized>(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    speed_growth: bool,
    rng: &mut R,
) -> Option<Side> {
    let side = paddle_contact(ball, left, right)?;
    ball.on_paddle_hit(speed_growth, rng);
    log::debug!("Ball hit {:?} paddle, speed now {:.0}", side, ball.speed);
    Some(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Ball, Paddle, Paddle) {
        let tuning = Tuning::default();
        let ball = Ball::new(&tuning);
        let left = Paddle::new(tuning.left_paddle_x(), &tuning, 0.0);
        let right = Paddle::new(tuning.right_paddle_x(), &tuning, 0.5);
        (ball, left, right)
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::from_xywh(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::from_xywh(20.0, 0.0, 10.0, 10.0)));
        // Shared edge only
        assert!(!a.overlaps(&Rect::from_xywh(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::from_xywh(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 14.9)));
        assert!(!r.contains(Vec2::new(30.0, 12.0)));
        assert_eq!(r.center(), Vec2::new(20.0, 12.5));
    }

    #[test]
    fn test_no_contact_in_open_play() {
        let (ball, left, right) = setup();
        assert_eq!(paddle_contact(&ball, &left, &right), None);
    }

    #[test]
    fn test_left_paddle_hit_reverses_ball() {
        let (mut ball, left, right) = setup();
        let mut rng = Pcg32::seed_from_u64(3);
        ball.pos = Vec2::new(33.0, 300.0);
        ball.x_fac = -1.0;

        let hit = resolve_paddle_hit(&mut ball, &left, &right, true, &mut rng);
        assert_eq!(hit, Some(Side::Left));
        assert_eq!(ball.x_fac, 1.0);
        assert_eq!(ball.speed, 320.0);
    }

    #[test]
    fn test_right_paddle_hit() {
        let (mut ball, left, right) = setup();
        let mut rng = Pcg32::seed_from_u64(3);
        ball.pos = Vec2::new(866.0, 300.0);

        let hit = resolve_paddle_hit(&mut ball, &left, &right, false, &mut rng);
        assert_eq!(hit, Some(Side::Right));
        assert_eq!(ball.x_fac, -1.0);
        assert_eq!(ball.speed, 300.0);
    }

    #[test]
    fn test_left_takes_precedence_when_both_overlap() {
        let (mut ball, mut left, mut right) = setup();
        let mut rng = Pcg32::seed_from_u64(4);
        // Pull both paddles onto the ball
        left.pos.x = 440.0;
        right.pos.x = 452.0;
        let before = ball.x_fac;

        let hit = resolve_paddle_hit(&mut ball, &left, &right, false, &mut rng);
        assert_eq!(hit, Some(Side::Left));
        // Exactly one flip
        assert_eq!(ball.x_fac, -before);
    }
}

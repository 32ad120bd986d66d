//! Cosmetic colors
//!
//! Paddle color is a pure function of its hue phase; the ball picks a new
//! random color on every paddle hit. Neither affects gameplay.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Lowest channel value a random ball color can take
pub const BALL_CHANNEL_MIN: u8 = 50;

/// Wrap a phase into [0, 1)
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert a hue phase to RGB at full saturation and value
pub fn hue_to_rgb(phase: f32) -> Rgb {
    let h = wrap_phase(phase) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let rise = f;
    let fall = 1.0 - f;

    let (r, g, b) = match sector as u32 {
        0 => (1.0, rise, 0.0),
        1 => (fall, 1.0, 0.0),
        2 => (0.0, 1.0, rise),
        3 => (0.0, fall, 1.0),
        4 => (rise, 0.0, 1.0),
        _ => (1.0, 0.0, fall),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Truncate a unit channel to 0..=255
#[inline]
fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Random ball color, each channel in 50..=255
pub fn random_ball_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.random_range(BALL_CHANNEL_MIN..=255),
        rng.random_range(BALL_CHANNEL_MIN..=255),
        rng.random_range(BALL_CHANNEL_MIN..=255),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_to_rgb(0.0), Rgb::new(255, 0, 0));
        assert_eq!(hue_to_rgb(1.0 / 3.0), Rgb::new(0, 255, 0));
        assert_eq!(hue_to_rgb(2.0 / 3.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hue_to_rgb(0.25), Rgb::new(127, 255, 0));
        assert_eq!(hue_to_rgb(0.5), Rgb::new(0, 255, 255));
        assert_eq!(hue_to_rgb(0.75), Rgb::new(127, 0, 255));
    }

    #[test]
    fn test_phase_wraps() {
        assert_eq!(hue_to_rgb(1.25), hue_to_rgb(0.25));
        assert_eq!(hue_to_rgb(-0.75), hue_to_rgb(0.25));
        for phase in [-3.5, -0.0001, 0.0, 0.9999, 1.0, 7.3] {
            let w = wrap_phase(phase);
            assert!((0.0..1.0).contains(&w), "phase {} wrapped to {}", phase, w);
        }
    }

    #[test]
    fn test_random_ball_color_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let c = random_ball_color(&mut rng);
            assert!(c.r >= BALL_CHANNEL_MIN);
            assert!(c.g >= BALL_CHANNEL_MIN);
            assert!(c.b >= BALL_CHANNEL_MIN);
        }
    }
}

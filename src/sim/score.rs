//! Point tally and win condition

use serde::{Deserialize, Serialize};

use super::state::{ScoreSignal, Side};

/// Points per side and the threshold that ends the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ScoreRecord")]
pub struct ScoreTracker {
    pub left: u32,
    pub right: u32,
    win_threshold: u32,
}

#[derive(Deserialize)]
struct ScoreRecord {
    left: u32,
    right: u32,
    win_threshold: u32,
}

impl From<ScoreRecord> for ScoreTracker {
    fn from(record: ScoreRecord) -> Self {
        Self {
            left: record.left,
            right: record.right,
            ..Self::new(record.win_threshold)
        }
    }
}

impl ScoreTracker {
    pub fn new(win_threshold: u32) -> Self {
        Self {
            left: 0,
            right: 0,
            win_threshold: win_threshold.max(1),
        }
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    /// Credit the point a ball crossing earns
    ///
    /// A ball leaving on the left is the left player's miss and scores for the
    /// right counter; leaving on the right scores for the left counter.
    /// Returns the side credited.
    pub fn apply_point(&mut self, signal: ScoreSignal) -> Option<Side> {
        let side = match signal {
            ScoreSignal::None => return None,
            ScoreSignal::ExitedLeft => Side::Right,
            ScoreSignal::ExitedRight => Side::Left,
        };
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        Some(side)
    }

    /// Side at or past the threshold; left wins a tie
    pub fn winner(&self) -> Option<Side> {
        if self.left >= self.win_threshold {
            Some(Side::Left)
        } else if self.right >= self.win_threshold {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

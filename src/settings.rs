//! Game settings chosen on the settings screen
//!
//! Immutable once a game starts; lives only for the process lifetime.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_WIN_THRESHOLD;

/// Per-game options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsRecord")]
pub struct Settings {
    /// Ball speeds up on every paddle hit (capped)
    pub speed_growth: bool,
    /// Draw the background image instead of a plain fill
    pub background: bool,
    /// Points needed to win, always >= 1
    win_threshold: u32,
}

/// Wire shape of [`Settings`]; decoding goes through `Settings::new`
#[derive(Deserialize)]
struct SettingsRecord {
    speed_growth: bool,
    background: bool,
    win_threshold: u32,
}

impl From<SettingsRecord> for Settings {
    fn from(record: SettingsRecord) -> Self {
        Settings::new(record.speed_growth, record.background, record.win_threshold)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_growth: true,
            background: true,
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

impl Settings {
    /// Create settings; a threshold of 0 is raised to 1
    pub fn new(speed_growth: bool, background: bool, win_threshold: u32) -> Self {
        Self {
            speed_growth,
            background,
            win_threshold: win_threshold.max(1),
        }
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    pub fn toggle_speed_growth(&mut self) {
        self.speed_growth = !self.speed_growth;
    }

    pub fn toggle_background(&mut self) {
        self.background = !self.background;
    }

    pub fn increase_win_threshold(&mut self) {
        self.win_threshold = self.win_threshold.saturating_add(1);
    }

    /// Lower the threshold by one, never below 1
    pub fn decrease_win_threshold(&mut self) {
        if self.win_threshold > 1 {
            self.win_threshold -= 1;
        }
    }

    /// Label for the speed growth toggle button
    pub fn speed_growth_label(&self) -> &'static str {
        if self.speed_growth {
            "Random Ball Speed: ON"
        } else {
            "Random Ball Speed: OFF"
        }
    }

    /// Label for the background toggle button
    pub fn background_label(&self) -> &'static str {
        if self.background {
            "Background: ON"
        } else {
            "Background: OFF"
        }
    }
}

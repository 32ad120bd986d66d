//! Keyboard input for the paddles
//!
//! Key-down latches a direction for that paddle; releasing either of the
//! paddle's keys clears it. The result feeds [`TickInput`] once per frame.

use serde::{Deserialize, Serialize};

use crate::sim::{TickInput, VerticalInput};

/// Keys bound to paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaddleKey {
    /// Left paddle up
    W,
    /// Left paddle down
    S,
    /// Right paddle up
    ArrowUp,
    /// Right paddle down
    ArrowDown,
}

impl PaddleKey {
    /// Map a host key name to a paddle key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(PaddleKey::W),
            "s" | "S" => Some(PaddleKey::S),
            "ArrowUp" | "Up" => Some(PaddleKey::ArrowUp),
            "ArrowDown" | "Down" => Some(PaddleKey::ArrowDown),
            _ => None,
        }
    }
}

/// Latched vertical input for both paddles
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleControls {
    input: TickInput,
}

impl PaddleControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: PaddleKey) {
        match key {
            PaddleKey::W => self.input.left = VerticalInput::Up,
            PaddleKey::S => self.input.left = VerticalInput::Down,
            PaddleKey::ArrowUp => self.input.right = VerticalInput::Up,
            PaddleKey::ArrowDown => self.input.right = VerticalInput::Down,
        }
    }

    pub fn key_up(&mut self, key: PaddleKey) {
        match key {
            PaddleKey::W | PaddleKey::S => self.input.left = VerticalInput::Idle,
            PaddleKey::ArrowUp | PaddleKey::ArrowDown => self.input.right = VerticalInput::Idle,
        }
    }

    /// Drop all latched input (e.g. when leaving the play screen)
    pub fn release_all(&mut self) {
        self.input = TickInput::default();
    }

    /// Input for the current frame
    pub fn tick_input(&self) -> TickInput {
        self.input
    }
}

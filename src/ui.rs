//! Menu button layout and hit-testing
//!
//! Buttons are laid out relative to the board center. A click is translated
//! to a named [`Action`] here; the renderer draws the same rectangles.

use glam::Vec2;
use serde::Serialize;

use crate::app::{Action, Screen};
use crate::sim::Rect;

/// A clickable button
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Button {
    pub action: Action,
    pub rect: Rect,
    /// Static caption; toggle captions come from [`crate::Settings`]
    pub label: &'static str,
}

impl Button {
    fn new(action: Action, rect: Rect, label: &'static str) -> Self {
        Self {
            action,
            rect,
            label,
        }
    }
}

/// Buttons shown on a screen, for a board of the given size
pub fn layout(screen: Screen, board: Vec2) -> Vec<Button> {
    let cx = (board.x / 2.0).floor();
    let cy = (board.y / 2.0).floor();

    match screen {
        Screen::MainMenu => vec![
            Button::new(Action::Play, Rect::from_xywh(cx - 60.0, cy - 20.0, 120.0, 40.0), "PLAY"),
            Button::new(Action::Quit, Rect::from_xywh(cx - 60.0, cy + 40.0, 120.0, 40.0), "QUIT"),
        ],
        Screen::Settings => vec![
            Button::new(
                Action::ToggleSpeedGrowth,
                Rect::from_xywh(cx - 150.0, cy - 80.0, 300.0, 40.0),
                "",
            ),
            Button::new(
                Action::ToggleBackground,
                Rect::from_xywh(cx - 150.0, cy - 20.0, 300.0, 40.0),
                "",
            ),
            Button::new(
                Action::DecreaseScore,
                Rect::from_xywh(cx - 150.0, cy + 40.0, 60.0, 40.0),
                "-",
            ),
            Button::new(
                Action::IncreaseScore,
                Rect::from_xywh(cx + 90.0, cy + 40.0, 60.0, 40.0),
                "+",
            ),
            Button::new(
                Action::Start,
                Rect::from_xywh(cx - 75.0, cy + 100.0, 150.0, 50.0),
                "START GAME",
            ),
        ],
        Screen::GameOver => vec![
            Button::new(
                Action::PlayAgain,
                Rect::from_xywh(cx - 150.0, cy + 20.0, 130.0, 50.0),
                "Play Again",
            ),
            Button::new(Action::Quit, Rect::from_xywh(cx + 20.0, cy + 20.0, 130.0, 50.0), "Quit"),
        ],
        Screen::Playing | Screen::Exited => Vec::new(),
    }
}

/// Action for a click at `point`, if it lands on a button
pub fn hit_test(screen: Screen, board: Vec2, point: Vec2) -> Option<Action> {
    layout(screen, board)
        .into_iter()
        .find(|button| button.rect.contains(point))
        .map(|button| button.action)
}

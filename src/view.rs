//! Read-only frame snapshot for the renderer
//!
//! The core never draws. Each frame the host asks for a [`FrameView`] and
//! draws what it describes.

use glam::Vec2;
use serde::Serialize;

use crate::app::{App, AppState, Screen};
use crate::settings::Settings;
use crate::sim::{GameSession, Rgb, Side};
use crate::ui::{self, Button};

/// How the renderer should fill the background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Backdrop {
    /// Background image; the renderer falls back to `Plain` if it fails to load
    Image,
    Plain(Rgb),
}

/// A drawable rectangle (paddle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

/// A drawable circle (ball)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleView {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

/// Everything visible while playing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayView {
    pub left: RectView,
    pub right: RectView,
    pub ball: CircleView,
    pub left_score: u32,
    pub right_score: u32,
    /// "Player 1: 3" style captions
    pub score_labels: [String; 2],
}

/// Per-screen payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScreenView {
    MainMenu,
    Settings {
        settings: Settings,
        speed_growth_label: &'static str,
        background_label: &'static str,
        threshold_label: String,
    },
    Playing(PlayView),
    GameOver {
        winner: Side,
        headline: String,
    },
    Exited,
}

/// Snapshot handed to the renderer once per frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub screen: Screen,
    pub board: Vec2,
    pub backdrop: Backdrop,
    pub buttons: Vec<Button>,
    pub content: ScreenView,
}

impl FrameView {
    /// Snapshot the app's current screen
    pub fn capture(app: &App) -> Self {
        let tuning = app.tuning();
        let board = Vec2::new(tuning.board_width, tuning.board_height);
        let screen = app.screen();

        let (backdrop, content) = match app.state() {
            None => (Backdrop::Plain(Rgb::BLACK), ScreenView::Exited),
            Some(AppState::MainMenu) => (Backdrop::Image, ScreenView::MainMenu),
            Some(AppState::Settings(settings)) => (
                Backdrop::Plain(Rgb::BLACK),
                ScreenView::Settings {
                    settings: *settings,
                    speed_growth_label: settings.speed_growth_label(),
                    background_label: settings.background_label(),
                    threshold_label: format!("First to: {}", settings.win_threshold()),
                },
            ),
            Some(AppState::Playing(session)) => {
                let backdrop = if session.settings().background {
                    Backdrop::Image
                } else {
                    Backdrop::Plain(Rgb::BLACK)
                };
                (backdrop, ScreenView::Playing(play_view(session)))
            }
            Some(AppState::GameOver { winner, .. }) => (
                Backdrop::Plain(Rgb::BLACK),
                ScreenView::GameOver {
                    winner: *winner,
                    headline: format!("{} Wins!", winner.label()),
                },
            ),
        };

        Self {
            screen,
            board,
            backdrop,
            buttons: ui::layout(screen, board),
            content,
        }
    }
}

fn play_view(session: &GameSession) -> PlayView {
    let paddle = |p: &crate::sim::Paddle| RectView {
        pos: p.pos,
        size: Vec2::new(p.width, p.height),
        color: p.color,
    };
    let scores = &session.scores;

    PlayView {
        left: paddle(&session.left),
        right: paddle(&session.right),
        ball: CircleView {
            center: session.ball.pos,
            radius: session.ball.radius,
            color: session.ball.color,
        },
        left_score: scores.left,
        right_score: scores.right,
        score_labels: [
            format!("{}: {}", Side::Left.label(), scores.left),
            format!("{}: {}", Side::Right.label(), scores.right),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::tuning::Tuning;

    #[test]
    fn test_settings_view() {
        let mut app = App::new(Tuning::default(), 9);
        app.handle(Action::Play);
        app.handle(Action::ToggleBackground);
        let view = FrameView::capture(&app);
        assert_eq!(view.screen, Screen::Settings);
        assert_eq!(view.buttons.len(), 5);
        match view.content {
            ScreenView::Settings {
                background_label,
                threshold_label,
                ..
            } => {
                assert_eq!(background_label, "Background: OFF");
                assert_eq!(threshold_label, "First to: 5");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_play_view_backdrop_follows_settings() {
        let mut app = App::new(Tuning::default(), 9);
        app.handle(Action::Play);
        app.handle(Action::ToggleBackground);
        app.handle(Action::Start);
        let view = FrameView::capture(&app);
        assert_eq!(view.backdrop, Backdrop::Plain(Rgb::BLACK));
        match view.content {
            ScreenView::Playing(play) => {
                assert_eq!(play.ball.center, Vec2::new(450.0, 300.0));
                assert_eq!(play.left.pos.x, 20.0);
                assert_eq!(play.right.pos.x, 870.0);
                assert_eq!(play.score_labels[0], "Player 1: 0");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_view_serializes() {
        let app = App::new(Tuning::default(), 9);
        let json = serde_json::to_string(&FrameView::capture(&app)).unwrap();
        assert!(json.contains("\"MainMenu\""));
        assert!(json.contains("PLAY"));
    }
}

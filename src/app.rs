//! Screen state machine
//!
//! Sequences main menu -> settings -> playing -> game over. Each screen is a
//! variant of [`AppState`]; UI actions move between them through
//! [`transition`], and [`App::frame`] advances the game while playing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{GameSession, Side, TickInput, TickOutcome};
use crate::tuning::Tuning;

/// Named UI actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Play,
    Quit,
    ToggleSpeedGrowth,
    ToggleBackground,
    IncreaseScore,
    DecreaseScore,
    Start,
    PlayAgain,
    /// Window closed; exits from any screen
    Close,
}

/// Screen tag without payload, for the renderer and transition records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    MainMenu,
    Settings,
    Playing,
    GameOver,
    /// Process is shutting down
    Exited,
}

/// Current screen and the data it owns
#[derive(Debug, Clone)]
pub enum AppState {
    MainMenu,
    /// Settings being edited
    Settings(Settings),
    /// The session exists only while playing
    Playing(Box<GameSession>),
    /// Winner plus the settings used, so "play again" can start from them
    GameOver {
        winner: Side,
        settings: Settings,
    },
}

impl AppState {
    pub fn screen(&self) -> Screen {
        match self {
            AppState::MainMenu => Screen::MainMenu,
            AppState::Settings(_) => Screen::Settings,
            AppState::Playing(_) => Screen::Playing,
            AppState::GameOver { .. } => Screen::GameOver,
        }
    }
}

/// Outcome of feeding an action to a state
#[derive(Debug)]
pub enum Step {
    /// Action did not apply to this screen; state returned untouched
    Ignored(AppState),
    /// Action applied; possibly the same screen with edited data
    Next(AppState),
    /// Leave the application
    Exit,
}

/// Creates sessions with fresh seeds
#[derive(Debug, Clone)]
pub struct SessionLauncher {
    tuning: Tuning,
    seeds: Pcg32,
}

impl SessionLauncher {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            tuning,
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn launch(&mut self, settings: Settings) -> GameSession {
        let seed = self.seeds.random();
        GameSession::new(settings, &self.tuning, seed)
    }
}

/// Apply a UI action to a state
pub fn transition(state: AppState, action: Action, launcher: &mut SessionLauncher) -> Step {
    match (state, action) {
        (_, Action::Close) => Step::Exit,

        (AppState::MainMenu, Action::Play) => {
            Step::Next(AppState::Settings(Settings::default()))
        }
        (AppState::MainMenu, Action::Quit) => Step::Exit,

        (AppState::Settings(mut settings), Action::ToggleSpeedGrowth) => {
            settings.toggle_speed_growth();
            Step::Next(AppState::Settings(settings))
        }
        (AppState::Settings(mut settings), Action::ToggleBackground) => {
            settings.toggle_background();
            Step::Next(AppState::Settings(settings))
        }
        (AppState::Settings(mut settings), Action::IncreaseScore) => {
            settings.increase_win_threshold();
            Step::Next(AppState::Settings(settings))
        }
        (AppState::Settings(mut settings), Action::DecreaseScore) => {
            settings.decrease_win_threshold();
            Step::Next(AppState::Settings(settings))
        }
        (AppState::Settings(settings), Action::Start) => {
            Step::Next(AppState::Playing(Box::new(launcher.launch(settings))))
        }

        (AppState::GameOver { settings, .. }, Action::PlayAgain) => {
            Step::Next(AppState::Settings(settings))
        }
        (AppState::GameOver { .. }, Action::Quit) => Step::Exit,

        (state, _) => Step::Ignored(state),
    }
}

/// Record of one state machine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub accepted: bool,
    pub from: Screen,
    pub to: Screen,
}

/// Application driver owning the active screen
#[derive(Debug)]
pub struct App {
    /// `None` once the application has exited
    state: Option<AppState>,
    launcher: SessionLauncher,
}

impl App {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: Some(AppState::MainMenu),
            launcher: SessionLauncher::new(tuning, seed),
        }
    }

    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.state
            .as_ref()
            .map(AppState::screen)
            .unwrap_or(Screen::Exited)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn tuning(&self) -> &Tuning {
        self.launcher.tuning()
    }

    /// Feed a UI action to the current screen
    pub fn handle(&mut self, action: Action) -> Transition {
        let from = self.screen();
        let Some(state) = self.state.take() else {
            log::warn!("Action {:?} after exit ignored", action);
            return Transition {
                accepted: false,
                from,
                to: from,
            };
        };

        let accepted = match transition(state, action, &mut self.launcher) {
            Step::Ignored(state) => {
                self.state = Some(state);
                false
            }
            Step::Next(state) => {
                self.state = Some(state);
                true
            }
            Step::Exit => true,
        };

        let to = self.screen();
        if accepted && from != to {
            log::info!("{:?} -> {:?} on {:?}", from, to, action);
        }
        Transition { accepted, from, to }
    }

    /// Advance one frame; only the play screen has per-frame logic
    ///
    /// Returns the tick outcome while playing. When the session reports a
    /// winner the state moves to game over in the same call.
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> Option<TickOutcome> {
        let Some(AppState::Playing(session)) = self.state.as_mut() else {
            return None;
        };

        let outcome = session.tick(input, dt);
        if let Some(winner) = outcome.winner {
            let settings = *session.settings();
            log::info!("Playing -> GameOver: {} wins", winner.label());
            self.state = Some(AppState::GameOver { winner, settings });
        }
        Some(outcome)
    }
}

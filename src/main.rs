//! Hue Pong entry point
//!
//! Native headless host: walks the menus, plays one game with idle paddles
//! under the frame clock, and prints the final frame as JSON. A windowed host
//! drives the same `App` with real input and a renderer.

use std::process::ExitCode;

use hue_pong::input::PaddleControls;
use hue_pong::platform::FrameClock;
use hue_pong::view::FrameView;
use hue_pong::{Action, App, Screen, Tuning};

/// Safety stop for the demo game (five minutes at 120 Hz)
const MAX_FRAMES: u32 = 120 * 60 * 5;

fn load_tuning() -> Result<Tuning, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(Tuning::from_json(&json)?)
        }
        None => Ok(Tuning::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hue Pong (native) starting...");

    let tuning = match load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Could not load tuning: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = rand::random();
    let mut app = App::new(tuning, seed);
    for action in [
        Action::Play,
        Action::DecreaseScore,
        Action::DecreaseScore,
        Action::Start,
    ] {
        app.handle(action);
    }

    let mut clock = FrameClock::default();
    // Nobody holds a key in the headless run
    let controls = PaddleControls::new();
    let mut frames = 0;
    while app.screen() == Screen::Playing && frames < MAX_FRAMES {
        let dt = clock.tick();
        app.frame(&controls.tick_input(), dt);
        frames += 1;
    }
    log::info!("Stopped after {} frames on {:?}", frames, app.screen());

    match serde_json::to_string_pretty(&FrameView::capture(&app)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode frame: {}", e),
    }

    // Close is accepted on every screen, including a game cut off at MAX_FRAMES
    app.handle(Action::Close);
    ExitCode::SUCCESS
}

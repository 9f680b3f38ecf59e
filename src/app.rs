//! Frame loop: input → tick → render
//!
//! Quit requests travel back up as `TickOutcome::Exit`; only the binary's
//! entry point actually ends the process.

use crate::consts::{FRAME_RATE, MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::platform::{Clock, InputEvent, InputSource, Key};
use crate::renderer::{Surface, Theme, render};
use crate::settings::Settings;
use crate::sim::{FrameInput, GamePhase, GameState, Playfield, TickOutcome, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct App {
    pub state: GameState,
    pub theme: Theme,
}

impl App {
    /// Build from settings; `fallback_seed` is used unless settings pin a seed
    pub fn new(settings: &Settings, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::with_settings(Playfield::default(), settings, seed),
            theme: Theme::from_settings(settings),
        }
    }

    /// Advance the simulation one frame without drawing
    pub fn step<I: InputSource + ?Sized>(&mut self, input: &mut I) -> TickOutcome {
        let frame_input = gather_input(input);
        tick(&mut self.state, &frame_input)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.state, surface, &self.theme);
        surface.present();
    }

    /// Run one frame. Nothing is drawn on the frame that exits.
    pub fn frame<I, S>(&mut self, input: &mut I, surface: &mut S) -> TickOutcome
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
    {
        self.frame_steps(input, surface, 1)
    }

    /// Run `steps` simulation frames, then draw once. With zero steps the
    /// current state is redrawn.
    pub fn frame_steps<I, S>(&mut self, input: &mut I, surface: &mut S, steps: u32) -> TickOutcome
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
    {
        for _ in 0..steps {
            if self.step(input) == TickOutcome::Exit {
                return TickOutcome::Exit;
            }
        }

        self.draw(surface);
        TickOutcome::Continue
    }
}

/// Fixed-timestep accumulator for display-driven loops
///
/// Converts display timestamps into a count of `FRAME_RATE` simulation
/// steps, so game speed does not depend on the monitor's refresh rate.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    last_ms: Option<f64>,
    accumulator_ms: f64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulation steps owed at display time `now_ms`
    pub fn steps(&mut self, now_ms: f64) -> u32 {
        let step_ms = 1000.0 / FRAME_RATE as f64;
        // First frame runs one step; stalls (hidden tab, debugger) are capped
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => step_ms,
        };
        self.last_ms = Some(now_ms);
        self.accumulator_ms += dt;

        let mut steps = 0;
        while self.accumulator_ms >= step_ms && steps < MAX_SUBSTEPS {
            self.accumulator_ms -= step_ms;
            steps += 1;
        }
        steps
    }
}

/// Snapshot held keys and drain queued events into one frame's input
pub fn gather_input<I: InputSource + ?Sized>(input: &mut I) -> FrameInput {
    let mut frame_input = FrameInput {
        up: input.is_held(Key::Up),
        down: input.is_held(Key::Down),
        ..Default::default()
    };

    for event in input.poll_events() {
        match event {
            InputEvent::Quit => frame_input.quit = true,
            InputEvent::KeyPressed(key) => {
                frame_input.any_key = true;
                if frame_input.menu_choice.is_none() {
                    frame_input.menu_choice = key.menu_choice();
                }
            }
        }
    }

    frame_input
}

/// Blocking frame loop for native targets. Returns the process exit code.
pub fn run<I, S, C>(app: &mut App, input: &mut I, surface: &mut S, clock: &mut C) -> i32
where
    I: InputSource + ?Sized,
    S: Surface + ?Sized,
    C: Clock + ?Sized,
{
    log::info!("Frame loop running at {} fps", FRAME_RATE);
    while app.frame(input, surface) == TickOutcome::Continue {
        clock.tick(FRAME_RATE);
    }

    let state = &app.state;
    let phase = match state.phase {
        GamePhase::Playing => "playing",
        GamePhase::GameOver { .. } => "game over",
        GamePhase::ReplayConfig => "replay menu",
    };
    log::info!(
        "Exiting from {} after {} match(es), last score {} - {}",
        phase,
        state.matches_played,
        state.player_score,
        state.computer_score
    );
    0
}

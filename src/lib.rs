//! Paddle Duel - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, match state)
//! - `renderer`: Drawing through an abstract `Surface`
//! - `platform`: Input, clock and headless/browser backends
//! - `app`: Frame loop gluing input, simulation and rendering
//! - `settings`: Player preferences

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, run};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frames per second the simulation is tuned for (velocities are per frame)
    pub const FRAME_RATE: u32 = 60;
    /// Max simulation steps per displayed frame
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the step accumulator, in milliseconds
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side of the court
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Player paddle step per frame while a movement key is held
    pub const PLAYER_STEP: f32 = 10.0;
    /// Computer paddle tracking speed per frame
    pub const AI_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Per-axis ball speed in pixels per frame
    pub const BALL_SPEED: f32 = 7.0;

    /// Points needed to win the first match of a session
    pub const DEFAULT_WINNING_SCORE: u32 = 5;
    /// How long the winner banner stays up before input is accepted
    pub const GAME_OVER_HOLD_MS: u64 = 3000;
}

/// Convert a duration in milliseconds to whole simulation frames
#[inline]
pub fn ms_to_frames(ms: u64) -> u32 {
    (ms * consts::FRAME_RATE as u64 / 1000) as u32
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::resolve_paddle_hit;
pub use paddle::{Paddle, track_direction};
pub use rect::Rect;
pub use state::{GamePhase, GameState, MatchLength, Playfield, Side};
pub use tick::{FrameInput, MenuChoice, TickOutcome, tick};

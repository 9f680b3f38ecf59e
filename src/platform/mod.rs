//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held keys and discrete presses)
//! - Time/frame pacing

pub mod keyboard;

#[cfg(not(target_arch = "wasm32"))]
pub mod clock;
#[cfg(not(target_arch = "wasm32"))]
pub mod headless;

#[cfg(not(target_arch = "wasm32"))]
pub use clock::SleepClock;
#[cfg(not(target_arch = "wasm32"))]
pub use headless::HeadlessInput;
pub use keyboard::KeyboardState;

use crate::sim::{MatchLength, MenuChoice};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Digit3,
    Digit5,
    Digit7,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_code(code: &str) -> Key {
        match code {
            "w" | "W" | "ArrowUp" => Key::Up,
            "s" | "S" | "ArrowDown" => Key::Down,
            "3" => Key::Digit3,
            "5" => Key::Digit5,
            "7" => Key::Digit7,
            "q" | "Q" | "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Replay menu meaning of this key, if any
    pub fn menu_choice(&self) -> Option<MenuChoice> {
        match self {
            Key::Digit3 => Some(MenuChoice::Play(MatchLength::BestOf3)),
            Key::Digit5 => Some(MenuChoice::Play(MatchLength::BestOf5)),
            Key::Digit7 => Some(MenuChoice::Play(MatchLength::BestOf7)),
            Key::Escape => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    /// Window close request
    Quit,
}

/// Source of player input
pub trait InputSource {
    /// Is `key` currently held down
    fn is_held(&self, key: Key) -> bool;
    /// Drain events queued since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Frame pacing
pub trait Clock {
    /// Sleep out the remainder of the current frame at `fps`
    fn tick(&mut self, fps: u32);
}

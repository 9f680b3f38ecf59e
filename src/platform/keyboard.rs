//! Keyboard state fed by platform key callbacks

use std::collections::{HashSet, VecDeque};

use super::{InputEvent, InputSource, Key};

/// Held keys plus a queue of presses since the last poll
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    events: VecDeque<InputEvent>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat does not queue another press.
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.held.insert(key);
        if !repeat {
            self.events.push_back(InputEvent::KeyPressed(key));
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Queue a window close request
    pub fn request_quit(&mut self) {
        self.events.push_back(InputEvent::Quit);
    }

    /// Page is going away. A page kept in the back/forward cache may come
    /// back, so only a real teardown counts as a window close.
    pub fn page_hidden(&mut self, persisted: bool) {
        self.release_all();
        if !persisted {
            self.request_quit();
        }
    }

    /// Forget held keys (e.g. on focus loss, when key-up events never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }
}

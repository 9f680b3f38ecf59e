//! Unattended input for the native build, which has no window.
//!
//! Holds no keys, so the player paddle stays put. Escape is tapped on a fixed
//! interval: it dismisses the game-over banner once the hold has elapsed and
//! then picks "exit" on the replay menu. A quit request is raised after a
//! frame budget in case a rally never ends.

use super::{InputEvent, InputSource, Key};

#[derive(Debug)]
pub struct HeadlessInput {
    frame: u64,
    press_every: u64,
    quit_after: u64,
}

impl HeadlessInput {
    pub fn new(press_every: u64, quit_after: u64) -> Self {
        Self {
            frame: 0,
            press_every: press_every.max(1),
            quit_after,
        }
    }
}

impl InputSource for HeadlessInput {
    fn is_held(&self, _key: Key) -> bool {
        false
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.frame >= self.quit_after {
            vec![InputEvent::Quit]
        } else if self.frame.is_multiple_of(self.press_every) {
            vec![InputEvent::KeyPressed(Key::Escape)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule() {
        let mut input = HeadlessInput::new(3, 7);
        let polled: Vec<Vec<InputEvent>> = (0..7).map(|_| input.poll_events()).collect();
        assert!(polled[0].is_empty());
        assert_eq!(polled[2], vec![InputEvent::KeyPressed(Key::Escape)]);
        assert_eq!(polled[5], vec![InputEvent::KeyPressed(Key::Escape)]);
        assert_eq!(polled[6], vec![InputEvent::Quit]);
        assert!(!input.is_held(Key::Up));
    }
}

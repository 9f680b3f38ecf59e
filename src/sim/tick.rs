//! Per-frame phase dispatch
//!
//! One call per frame. Modal screens (game over, replay menu) are phases of
//! the state machine, so the frame loop keeps polling input and quit requests
//! while they are up instead of blocking inside them.

use super::state::{GamePhase, GameState, MatchLength};

/// A choice made on the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(MatchLength),
    Exit,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Move-up key held
    pub up: bool,
    /// Move-down key held
    pub down: bool,
    /// Any key was pressed this frame
    pub any_key: bool,
    /// Replay menu selection pressed this frame
    pub menu_choice: Option<MenuChoice>,
    /// Window close / quit request
    pub quit: bool,
}

/// What the frame loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) -> TickOutcome {
    if input.quit {
        log::info!("Quit requested");
        return TickOutcome::Exit;
    }

    match state.phase {
        GamePhase::Playing => {
            state.handle_input(input.up, input.down);
            state.update();
        }

        GamePhase::GameOver { .. } => {
            // Presses during the hold are dropped, not queued
            if state.game_over_hold_elapsed() {
                if input.any_key {
                    state.continue_after_game_over();
                }
            } else {
                state.tick_game_over_hold();
            }
        }

        GamePhase::ReplayConfig => match input.menu_choice {
            Some(MenuChoice::Play(length)) => state.start_match(length),
            Some(MenuChoice::Exit) => {
                log::info!("Exit chosen from replay menu");
                return TickOutcome::Exit;
            }
            None => {}
        },
    }

    TickOutcome::Continue
}

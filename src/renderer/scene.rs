//! Scene drawing: court, scores and phase overlays

use glam::Vec2;

use super::{Surface, TextAnchor, Theme};
use crate::sim::{GamePhase, GameState, MatchLength, Side};

/// Height of the score row from the top edge
const SCORE_Y: f32 = 20.0;
/// Vertical gap between replay menu lines
const MENU_LINE_SPACING: f32 = 40.0;

/// Draw one frame of `state`. Reads state only.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S, theme: &Theme) {
    let w = state.playfield.width;
    let h = state.playfield.height;

    surface.fill(theme.background);

    surface.fill_rect(state.player.rect(), theme.foreground);
    surface.fill_rect(state.computer.rect(), theme.foreground);
    surface.fill_ellipse(state.ball.rect(), theme.foreground);
    if theme.show_divider {
        surface.line(Vec2::new(w / 2.0, 0.0), Vec2::new(w / 2.0, h), theme.divider);
    }

    surface.draw_text(
        &state.player_score.to_string(),
        &theme.score_font,
        theme.foreground,
        TextAnchor::TopLeft(Vec2::new(w / 4.0, SCORE_Y)),
    );
    surface.draw_text(
        &state.computer_score.to_string(),
        &theme.score_font,
        theme.foreground,
        TextAnchor::TopLeft(Vec2::new(w * 3.0 / 4.0, SCORE_Y)),
    );

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::GameOver { winner, .. } => {
            draw_game_over(state, surface, theme, winner);
        }
        GamePhase::ReplayConfig => {
            draw_replay_menu(state, surface, theme);
        }
    }
}

fn draw_game_over<S: Surface + ?Sized>(
    state: &GameState,
    surface: &mut S,
    theme: &Theme,
    winner: Side,
) {
    let center = state.playfield.size() / 2.0;
    surface.draw_text(
        winner.victory_text(),
        &theme.banner_font,
        theme.foreground,
        TextAnchor::Center(center),
    );
    if state.game_over_hold_elapsed() {
        surface.draw_text(
            "Press any key to continue",
            &theme.menu_font,
            theme.muted,
            TextAnchor::Center(center + Vec2::new(0.0, 60.0)),
        );
    }
}

fn draw_replay_menu<S: Surface + ?Sized>(state: &GameState, surface: &mut S, theme: &Theme) {
    let center = state.playfield.size() / 2.0;
    let top = center.y - 2.0 * MENU_LINE_SPACING;

    surface.draw_text(
        "Play again?",
        &theme.banner_font,
        theme.foreground,
        TextAnchor::Center(Vec2::new(center.x, top - MENU_LINE_SPACING)),
    );

    let mut lines: Vec<String> = MatchLength::ALL
        .iter()
        .map(|l| format!("{} - Best of {}", l.games(), l.games()))
        .collect();
    lines.push("Q - Exit".to_string());

    for (i, line) in lines.iter().enumerate() {
        let y = top + (i as f32 + 1.0) * MENU_LINE_SPACING;
        surface.draw_text(
            line,
            &theme.menu_font,
            theme.muted,
            TextAnchor::Center(Vec2::new(center.x, y)),
        );
    }
}

//! Match state and the phase machine
//!
//! Phases: `Playing` → `GameOver` → `ReplayConfig` → `Playing`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::collision::resolve_paddle_hit;
use super::paddle::Paddle;
use crate::consts::*;
use crate::ms_to_frames;
use crate::settings::Settings;

/// Which side of the court: the human on the left, the computer on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Banner shown when this side wins a match
    pub fn victory_text(&self) -> &'static str {
        match self {
            Side::Player => "Player Wins!",
            Side::Computer => "AI Wins!",
        }
    }
}

/// Match length offered in the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLength {
    BestOf3,
    BestOf5,
    BestOf7,
}

impl MatchLength {
    pub const ALL: [MatchLength; 3] = [
        MatchLength::BestOf3,
        MatchLength::BestOf5,
        MatchLength::BestOf7,
    ];

    /// Points needed to take the match
    pub fn winning_score(&self) -> u32 {
        match self {
            MatchLength::BestOf3 => 2,
            MatchLength::BestOf5 => 3,
            MatchLength::BestOf7 => 4,
        }
    }

    /// Number of games in the series ("best of N")
    pub fn games(&self) -> u32 {
        match self {
            MatchLength::BestOf3 => 3,
            MatchLength::BestOf5 => 5,
            MatchLength::BestOf7 => 7,
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Rally in progress
    Playing,
    /// Match decided; banner held for `hold_ticks` more frames before input counts
    GameOver { winner: Side, hold_ticks: u32 },
    /// Choosing the length of the next match
    ReplayConfig,
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Complete game state (deterministic under a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    pub playfield: Playfield,
    /// Human paddle (left)
    pub player: Paddle,
    /// Computer paddle (right)
    pub computer: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub computer_score: u32,
    pub winning_score: u32,
    pub phase: GamePhase,
    /// Frames simulated while playing
    pub frame: u64,
    /// Matches completed this session
    pub matches_played: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game on the default playfield with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Playfield::default(), &Settings::default(), seed)
    }

    pub fn with_settings(playfield: Playfield, settings: &Settings, seed: u64) -> Self {
        let paddle_y = (playfield.height - PADDLE_HEIGHT) / 2.0;
        let player = Paddle::new(PADDLE_MARGIN, paddle_y, PLAYER_STEP);
        let computer = Paddle::new(
            playfield.width - PADDLE_MARGIN - PADDLE_WIDTH,
            paddle_y,
            settings.ai_speed,
        );
        // First serve goes toward the computer, later serves are randomised
        let ball = Ball::new(playfield.size(), Vec2::new(BALL_SPEED, BALL_SPEED));

        Self {
            seed,
            playfield,
            player,
            computer,
            ball,
            player_score: 0,
            computer_score: 0,
            winning_score: settings.winning_score.max(1),
            phase: GamePhase::Playing,
            frame: 0,
            matches_played: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Apply held movement keys to the player paddle.
    ///
    /// Up is applied before down; holding both cancels out.
    pub fn handle_input(&mut self, up: bool, down: bool) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if up {
            self.player.move_by(-PLAYER_STEP, self.playfield.height);
        }
        if down {
            self.player.move_by(PLAYER_STEP, self.playfield.height);
        }
    }

    /// Advance one frame of play: ball, collisions, scoring, AI, win check
    pub fn update(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.frame += 1;

        self.ball.advance();

        if resolve_paddle_hit(&mut self.ball, &self.player, Side::Player) {
            log::debug!("Player return at y={:.0}", self.ball.pos.y);
        } else if resolve_paddle_hit(&mut self.ball, &self.computer, Side::Computer) {
            log::debug!("Computer return at y={:.0}", self.ball.pos.y);
        }

        if self.ball.past_left() {
            self.award_point(Side::Computer);
        } else if self.ball.past_right() {
            self.award_point(Side::Player);
        }

        self.computer.auto_track(&self.ball, self.playfield.height);

        self.check_game_over();
    }

    fn award_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player_score += 1,
            Side::Computer => self.computer_score += 1,
        }
        log::debug!(
            "{:?} scores ({} - {})",
            side,
            self.player_score,
            self.computer_score
        );
        self.ball.reset(&mut self.rng);
    }

    /// The side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.winning_score {
            Some(Side::Player)
        } else if self.computer_score >= self.winning_score {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Enter `GameOver` if a side has won. Returns the winner.
    pub fn check_game_over(&mut self) -> Option<Side> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let winner = self.winner()?;
        self.matches_played += 1;
        self.phase = GamePhase::GameOver {
            winner,
            hold_ticks: ms_to_frames(GAME_OVER_HOLD_MS),
        };
        log::info!(
            "Match over: {} ({} - {})",
            winner.victory_text(),
            self.player_score,
            self.computer_score
        );
        Some(winner)
    }

    /// Whether the game-over banner has been shown long enough to accept input
    pub fn game_over_hold_elapsed(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { hold_ticks: 0, .. })
    }

    /// Count down the game-over hold by one frame
    pub fn tick_game_over_hold(&mut self) {
        if let GamePhase::GameOver { hold_ticks, .. } = &mut self.phase {
            *hold_ticks = hold_ticks.saturating_sub(1);
        }
    }

    /// Leave the game-over banner for the replay menu.
    ///
    /// Returns `false` if not in `GameOver` or the hold has not elapsed.
    pub fn continue_after_game_over(&mut self) -> bool {
        if !self.game_over_hold_elapsed() {
            return false;
        }
        self.phase = GamePhase::ReplayConfig;
        log::info!("Replay menu");
        true
    }

    /// Start a fresh match of the given length
    pub fn start_match(&mut self, length: MatchLength) {
        self.winning_score = length.winning_score();
        self.player_score = 0;
        self.computer_score = 0;
        self.player.recenter(self.playfield.height);
        self.computer.recenter(self.playfield.height);
        self.ball.reset(&mut self.rng);
        self.phase = GamePhase::Playing;
        log::info!(
            "New match: best of {} (first to {})",
            length.games(),
            self.winning_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(10.0, 250.0));
        assert_eq!(state.computer.pos, Vec2::new(780.0, 250.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(state.winning_score, DEFAULT_WINNING_SCORE);
        assert_eq!((state.player_score, state.computer_score), (0, 0));
    }

    #[test]
    fn test_first_frame_moves_ball() {
        let mut state = GameState::new(1);
        state.update();
        assert_eq!(state.ball.pos, Vec2::new(407.0, 307.0));
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_handle_input_up_then_down() {
        let mut state = GameState::new(1);
        state.handle_input(true, false);
        assert_eq!(state.player.pos.y, 240.0);
        state.handle_input(false, true);
        assert_eq!(state.player.pos.y, 250.0);
        state.handle_input(true, true);
        assert_eq!(state.player.pos.y, 250.0);
    }

    #[test]
    fn test_handle_input_ignored_outside_play() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::ReplayConfig;
        state.handle_input(true, false);
        assert_eq!(state.player.pos.y, 250.0);
    }

    #[test]
    fn test_left_exit_scores_for_computer() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(7.0, 50.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        state.update();

        assert_eq!(state.computer_score, 1);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_ball_at_left_line_scores() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(0.0, 450.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        state.update();

        assert_eq!(state.computer_score, 1);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_right_exit_scores_for_player() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(795.0, 50.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        state.computer.pos.y = 450.0;
        state.update();

        assert_eq!(state.player_score, 1);
        assert_eq!(state.computer_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_player_return() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(25.0, 280.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        state.update();

        assert_eq!(state.ball.pos.x, 20.0);
        assert_eq!(state.ball.vel.x, 7.0);
        assert_eq!(state.computer_score, 0);
    }

    #[test]
    fn test_computer_tracks_during_update() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(400.0, 40.0);
        state.ball.vel = Vec2::new(7.0, -7.0);
        state.update();
        assert_eq!(state.computer.pos.y, 250.0 - AI_SPEED);
    }

    #[test]
    fn test_winning_point_ends_match() {
        let mut state = GameState::new(1);
        state.winning_score = 2;
        state.player_score = 1;
        state.ball.pos = Vec2::new(795.0, 50.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        state.computer.pos.y = 450.0;
        state.update();

        assert_eq!(
            state.phase,
            GamePhase::GameOver {
                winner: Side::Player,
                hold_ticks: ms_to_frames(GAME_OVER_HOLD_MS),
            }
        );
        assert_eq!(state.matches_played, 1);

        // Frozen while the banner is up
        let ball_pos = state.ball.pos;
        state.update();
        assert_eq!(state.ball.pos, ball_pos);
    }

    #[test]
    fn test_game_over_reports_player() {
        let mut state = GameState::new(1);
        state.winning_score = 5;
        state.player_score = 5;
        state.computer_score = 3;

        assert_eq!(state.check_game_over(), Some(Side::Player));
        assert!(matches!(
            state.phase,
            GamePhase::GameOver {
                winner: Side::Player,
                ..
            }
        ));
    }

    #[test]
    fn test_continue_requires_hold() {
        let mut state = GameState::new(1);
        state.computer_score = state.winning_score;
        state.check_game_over();

        assert!(!state.continue_after_game_over());
        for _ in 0..ms_to_frames(GAME_OVER_HOLD_MS) {
            state.tick_game_over_hold();
        }
        assert!(state.continue_after_game_over());
        assert_eq!(state.phase, GamePhase::ReplayConfig);
    }

    #[test]
    fn test_start_match_resets() {
        let mut state = GameState::new(1);
        state.player_score = 4;
        state.computer_score = 5;
        state.ball.pos = Vec2::new(-4.0, 10.0);
        state.player.pos.y = 0.0;
        state.phase = GamePhase::ReplayConfig;

        state.start_match(MatchLength::BestOf5);

        assert_eq!(state.winning_score, 3);
        assert_eq!((state.player_score, state.computer_score), (0, 0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.pos.y, 250.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_match_length_scores() {
        let scores: Vec<u32> = MatchLength::ALL.iter().map(|l| l.winning_score()).collect();
        assert_eq!(scores, vec![2, 3, 4]);
        let games: Vec<u32> = MatchLength::ALL.iter().map(|l| l.games()).collect();
        assert_eq!(games, vec![3, 5, 7]);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        for _ in 0..2000 {
            a.handle_input(true, false);
            b.handle_input(true, false);
            a.update();
            b.update();
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(
            (a.player_score, a.computer_score),
            (b.player_score, b.computer_score)
        );
    }

    proptest! {
        #[test]
        fn prop_game_over_iff_winning_score(
            player in 0u32..6,
            computer in 0u32..6,
            winning in 2u32..6,
        ) {
            let mut state = GameState::new(3);
            state.winning_score = winning;
            state.player_score = player;
            state.computer_score = computer;
            state.check_game_over();

            let decided = player >= winning || computer >= winning;
            prop_assert_eq!(
                matches!(state.phase, GamePhase::GameOver { .. }),
                decided
            );
        }

        #[test]
        fn prop_scores_stay_below_target_while_playing(seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            state.winning_score = 2;
            for _ in 0..3000 {
                state.update();
                if state.phase == GamePhase::Playing {
                    prop_assert!(state.player_score < state.winning_score);
                    prop_assert!(state.computer_score < state.winning_score);
                }
            }
        }
    }
}

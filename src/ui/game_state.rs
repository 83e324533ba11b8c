//! Game state management for the SiDing GUI
//!
//! Holds everything the core engine does not: whose turn it is, history for
//! undo, the current selection, and the background AI request.

use std::fmt;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::rules::{apply_move, check_winner, has_legal_move, legal_moves};
use crate::{AIEngine, AiConfig, Board, Move, MoveResult, Player, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::A }
    }
}

/// Shell configuration
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Minimum time before an AI move is shown
    pub think_delay: Duration,
    /// Length of the capture flash
    pub capture_flash: Duration,
    /// Engine settings for AI moves and hints
    pub ai: AiConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            think_delay: Duration::from_millis(800),
            capture_flash: Duration::from_millis(600),
            ai: AiConfig::default(),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Cells emptied by the last capture, for the flash effect
#[derive(Debug, Clone)]
pub struct CaptureAnimation {
    pub positions: Vec<Pos>,
    pub start_time: Instant,
    pub duration: Duration,
}

impl CaptureAnimation {
    /// Fraction of the animation played, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.start_time.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }
}

/// Board and side to move before a move, for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    turn: Player,
}

/// Why a player action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    GameOver,
    AiThinking,
    NotYourTurn,
    Illegal(crate::MoveError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::GameOver => f.write_str("Game is over"),
            ActionError::AiThinking => f.write_str("AI is thinking"),
            ActionError::NotYourTurn => f.write_str("Not your turn"),
            ActionError::Illegal(err) => write!(f, "Illegal move: {}", err),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<crate::MoveError> for ActionError {
    fn from(err: crate::MoveError) -> Self {
        ActionError::Illegal(err)
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub winner: Option<Player>,
    pub selected: Option<Pos>,
    pub valid_moves: Vec<Pos>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub capture_animation: Option<CaptureAnimation>,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    history: Vec<Snapshot>,
    config: ShellConfig,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, ShellConfig::default())
    }

    pub fn with_config(mode: GameMode, config: ShellConfig) -> Self {
        Self {
            board: Board::initial(),
            mode,
            current_turn: Player::A,
            winner: None,
            selected: None,
            valid_moves: Vec::new(),
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            capture_animation: None,
            suggested_move: None,
            message: None,
            history: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        let mode = self.mode;
        let config = self.config;
        *self = Self::with_config(mode, config);
        info!("new game ({:?})", mode);
    }

    /// Number of moves that can be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pieces left for (A, B)
    pub fn piece_counts(&self) -> (u32, u32) {
        (
            self.board.piece_count(Player::A),
            self.board.piece_count(Player::B),
        )
    }

    pub fn is_ai_enabled(&self) -> bool {
        matches!(self.mode, GameMode::PvE { .. })
    }

    /// Switch between playing the AI and hotseat. The human keeps side A.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.mode = if enabled {
            GameMode::PvE { human: Player::A }
        } else {
            GameMode::PvP
        };
        // Drop any pending AI result
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    fn check_can_act(&self) -> Result<(), ActionError> {
        if self.winner.is_some() {
            return Err(ActionError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(ActionError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    /// Handle a click on a board cell.
    ///
    /// Clicking an own piece selects it and lists its destinations; clicking a
    /// listed destination plays the move; anything else clears the selection.
    pub fn handle_click(&mut self, pos: Pos) -> Result<(), ActionError> {
        self.check_can_act()?;

        if self.board.get(pos) == Some(self.current_turn) {
            self.selected = Some(pos);
            self.valid_moves = legal_moves(&self.board, pos);
            return Ok(());
        }

        if let Some(from) = self.selected {
            if self.valid_moves.contains(&pos) {
                self.execute_move(Move::new(from, pos));
                return Ok(());
            }
        }

        self.clear_selection();
        Ok(())
    }

    /// Play a move for the side to move, checking legality first.
    pub fn try_move(&mut self, mv: Move) -> Result<(), ActionError> {
        self.check_can_act()?;
        crate::rules::try_apply_move(&self.board, mv, self.current_turn)?;
        self.execute_move(mv);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        let player = self.current_turn;

        self.history.push(Snapshot {
            board: self.board,
            turn: player,
        });

        let outcome = apply_move(&self.board, mv, player);
        self.board = outcome.board;
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.message = None;
        self.clear_selection();

        info!(
            "{:?}: ({},{})->({},{}) captured {:?} => {}",
            player, mv.from.row, mv.from.col, mv.to.row, mv.to.col, outcome.captured, self.board
        );

        self.capture_animation = if outcome.captured.is_empty() {
            None
        } else {
            Some(CaptureAnimation {
                positions: outcome.captured,
                start_time: Instant::now(),
                duration: self.config.capture_flash,
            })
        };

        if let Some(winner) = check_winner(&self.board) {
            info!("game over: {:?} wins", winner);
            self.winner = Some(winner);
            return;
        }

        self.advance_turn(player);
    }

    /// Hand the turn to the opponent of `mover`, passing when it is blocked.
    fn advance_turn(&mut self, mover: Player) {
        let next = mover.opponent();
        if has_legal_move(&self.board, next) || !has_legal_move(&self.board, mover) {
            self.current_turn = next;
            return;
        }

        warn!("{:?} has no legal move and passes", next);
        self.message = Some(format!("Player {} is blocked and passes", next.symbol()));
        self.current_turn = mover;
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.winner.is_some() {
            return;
        }

        let board = self.board;
        let player = self.current_turn;
        let config = self.config.ai;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI result once it is ready and the think delay has passed
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => {
                if start_time.elapsed() < self.config.think_delay {
                    return;
                }
                match receiver.try_recv() {
                    Ok(result) => Some(result),
                    Err(TryRecvError::Empty) => None,
                    Err(TryRecvError::Disconnected) => {
                        warn!("AI worker exited without a result");
                        self.ai_state = AiState::Idle;
                        self.message = Some("AI error".to_string());
                        return;
                    }
                }
            }
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.apply_ai_result(move_result);
        }
    }

    fn apply_ai_result(&mut self, move_result: MoveResult) {
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move {
            Some(mv) => self.execute_move(mv),
            None => {
                let ai = self.current_turn;
                warn!("{:?} (AI) has no legal move and passes", ai);
                self.message = Some(format!("Player {} is blocked and passes", ai.symbol()));
                self.current_turn = ai.opponent();
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.winner.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_config(self.config.ai);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move.
    ///
    /// Against the AI this rolls back to the last position with the human to
    /// move, taking back the AI reply (or winning move) along with the human's
    /// own move. Passes leave no snapshot, so they are skipped over.
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let keep = match self.mode {
            GameMode::PvE { human } => {
                match self.history.iter().rposition(|snap| snap.turn == human) {
                    Some(idx) => idx,
                    None => return,
                }
            }
            GameMode::PvP => self.history.len() - 1,
        };

        let undo_count = self.history.len() - keep;
        let restored = self.history[keep];
        self.history.truncate(keep);

        self.board = restored.board;
        self.current_turn = restored.turn;
        self.winner = None;
        self.last_move = None;
        self.suggested_move = None;
        self.capture_animation = None;
        self.message = None;
        self.clear_selection();

        info!("undo {} move(s) => {}", undo_count, self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchType;

    fn quick_config() -> ShellConfig {
        ShellConfig {
            think_delay: Duration::ZERO,
            capture_flash: Duration::from_millis(10),
            ai: AiConfig {
                seed: Some(3),
                ..AiConfig::default()
            },
        }
    }

    fn hotseat() -> GameState {
        GameState::with_config(GameMode::PvP, quick_config())
    }

    fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
        Move::new(Pos::new(fr, fc), Pos::new(tr, tc))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameMode::default());
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.current_turn, Player::A);
        assert_eq!(state.piece_counts(), (4, 4));
        assert!(state.is_ai_enabled());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_click_select_then_move() {
        let mut state = hotseat();
        state.handle_click(Pos::new(3, 1)).unwrap();
        assert_eq!(state.selected, Some(Pos::new(3, 1)));
        assert_eq!(state.valid_moves, vec![Pos::new(2, 1)]);

        state.handle_click(Pos::new(2, 1)).unwrap();
        assert_eq!(state.board.get(Pos::new(2, 1)), Some(Player::A));
        assert!(state.board.is_empty(Pos::new(3, 1)));
        assert_eq!(state.current_turn, Player::B);
        assert_eq!(state.last_move, Some(mv(3, 1, 2, 1)));
        assert!(state.selected.is_none());
        assert_eq!(state.history_len(), 1);
    }

    #[test]
    fn test_click_elsewhere_deselects() {
        let mut state = hotseat();
        state.handle_click(Pos::new(3, 0)).unwrap();
        state.handle_click(Pos::new(1, 3)).unwrap();
        assert!(state.selected.is_none());
        assert!(state.valid_moves.is_empty());
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.current_turn, Player::A);
    }

    #[test]
    fn test_click_opponent_piece_does_not_select() {
        let mut state = hotseat();
        state.handle_click(Pos::new(0, 0)).unwrap();
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_not_your_turn_against_ai() {
        let mut state = GameState::with_config(GameMode::PvE { human: Player::B }, quick_config());
        assert_eq!(state.handle_click(Pos::new(0, 0)), Err(ActionError::NotYourTurn));
    }

    #[test]
    fn test_try_move_rejects_illegal() {
        let mut state = hotseat();
        let err = state.try_move(mv(3, 1, 1, 1)).unwrap_err();
        assert!(matches!(err, ActionError::Illegal(_)));
        assert_eq!(state.board, Board::initial());
    }

    #[test]
    fn test_capture_and_win() {
        let mut state = hotseat();
        state.board = ".B../B.A./..../...A".parse().unwrap();
        state.current_turn = Player::B;

        state.try_move(mv(0, 1, 1, 1)).unwrap();
        assert_eq!(state.winner, Some(Player::B));
        let anim = state.capture_animation.as_ref().unwrap();
        assert_eq!(anim.positions, vec![Pos::new(1, 2)]);
        assert_eq!(state.try_move(mv(3, 3, 2, 3)), Err(ActionError::GameOver));
    }

    #[test]
    fn test_undo_restores_and_clears_winner() {
        let mut state = hotseat();
        let start: Board = ".B../B.A./..../...A".parse().unwrap();
        state.board = start;
        state.current_turn = Player::B;
        state.try_move(mv(0, 1, 1, 1)).unwrap();

        state.undo();
        assert_eq!(state.board, start);
        assert_eq!(state.current_turn, Player::B);
        assert!(state.winner.is_none());
        assert!(state.capture_animation.is_none());
    }

    #[test]
    fn test_undo_two_against_ai() {
        let mut state = GameState::with_config(GameMode::default(), quick_config());
        state.try_move(mv(3, 0, 2, 0)).unwrap();
        assert!(state.is_ai_turn());

        let reply = AIEngine::with_config(quick_config().ai).get_move_with_stats(&state.board, Player::B);
        state.apply_ai_result(reply);
        assert_eq!(state.current_turn, Player::A);
        assert_eq!(state.history_len(), 2);

        state.undo();
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.current_turn, Player::A);
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_undo_after_ai_win_returns_to_human() {
        let mut state = GameState::with_config(GameMode::default(), quick_config());
        let start: Board = ".B../B.A./..../...A".parse().unwrap();
        state.board = start;
        state.try_move(mv(3, 3, 2, 3)).unwrap();

        let reply = AIEngine::with_config(quick_config().ai).get_move_with_stats(&state.board, Player::B);
        assert_eq!(reply.search_type, SearchType::ImmediateWin);
        state.apply_ai_result(reply);
        assert_eq!(state.winner, Some(Player::B));

        state.undo();
        assert_eq!(state.board, start);
        assert_eq!(state.current_turn, Player::A);
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
        assert!(state.winner.is_none());
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_undo_after_pass_takes_back_one_move() {
        let mut state = GameState::with_config(GameMode::default(), quick_config());
        state.board = "BA../A.A./...A/..B.".parse().unwrap();

        state.try_move(mv(1, 2, 2, 2)).unwrap();
        state.apply_ai_result(MoveResult {
            best_move: Some(mv(3, 2, 3, 3)),
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 0,
        });
        let before_box = state.board;
        assert_eq!(state.current_turn, Player::A);

        // A closes in on the corner B piece; both B pieces are stuck
        state.try_move(mv(2, 2, 3, 2)).unwrap();
        assert_eq!(state.current_turn, Player::A);
        assert!(state.message.is_some());
        assert_eq!(state.history_len(), 3);

        state.undo();
        assert_eq!(state.board, before_box);
        assert_eq!(state.current_turn, Player::A);
        assert_eq!(state.history_len(), 2);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut state = hotseat();
        state.undo();
        assert_eq!(state.board, Board::initial());
    }

    #[test]
    fn test_blocked_opponent_passes() {
        let mut state = hotseat();
        // A steps (2,1)->(1,1) and boxes in both B pieces
        state.board = "BBA./A.../.A../....".parse().unwrap();
        state.try_move(mv(2, 1, 1, 1)).unwrap();

        assert!(state.winner.is_none());
        assert_eq!(state.current_turn, Player::A);
        assert!(state.message.is_some());
        assert!(state.capture_animation.is_none());
    }

    #[test]
    fn test_ai_no_move_passes_turn() {
        let mut state = GameState::with_config(GameMode::default(), quick_config());
        state.board = "BBA./AA../..../....".parse().unwrap();
        state.current_turn = Player::B;

        let result = AIEngine::with_config(quick_config().ai).get_move_with_stats(&state.board, Player::B);
        assert_eq!(result.search_type, SearchType::NoMove);
        state.apply_ai_result(result);
        assert_eq!(state.current_turn, Player::A);
        assert!(state.message.is_some());
    }

    #[test]
    fn test_background_ai_move() {
        let mut state = GameState::with_config(GameMode::default(), quick_config());
        state.try_move(mv(3, 2, 2, 2)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.handle_click(Pos::new(3, 0)), Err(ActionError::AiThinking));

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.current_turn, Player::A);
        assert_eq!(state.piece_counts().1, 4);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_toggle_ai() {
        let mut state = GameState::new(GameMode::default());
        state.set_ai_enabled(false);
        assert_eq!(state.mode, GameMode::PvP);
        assert!(!state.is_ai_turn());
        state.set_ai_enabled(true);
        assert_eq!(state.mode, GameMode::PvE { human: Player::A });
    }

    #[test]
    fn test_hint_in_hotseat() {
        let mut state = hotseat();
        state.request_suggestion();
        let hint = state.suggested_move.unwrap();
        assert_eq!(state.board.get(hint.from), Some(Player::A));
    }

    #[test]
    fn test_reset() {
        let mut state = hotseat();
        state.try_move(mv(3, 1, 2, 1)).unwrap();
        state.reset();
        assert_eq!(state.board, Board::initial());
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.mode, GameMode::PvP);
    }
}

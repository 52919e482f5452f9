use crate::ai::{self, MoveSelector};
use crate::board::Board;
use crate::rules;
use crate::types::{
    Difficulty, GameMode, GameResult, GameState, MoveError, Outcome, PendingAi, Player,
};

/// Cosmetic "thinking" latency the host waits before completing a
/// scheduled AI move. Never influences the chosen move.
pub const AI_DELAY_MS: u32 = 500;
/// X opens every game; in single-player the human is always X.
pub const STARTING_PLAYER: Player = Player::X;
/// The AI always plays O.
pub const AI_PLAYER: Player = Player::O;

/// One game of tic-tac-toe: board, turn order, outcome, and the AI
/// scheduling handshake. Exclusively owns its board; a reset discards
/// the board and outcome wholesale.
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: GameMode,
    difficulty: Difficulty,
    outcome: Outcome,
    last_move: Option<usize>,
    /// Token of the outstanding AI ticket, if any. At most one ticket
    /// exists at a time.
    pending: Option<u32>,
    /// Monotonic ticket counter. Never rewinds, so a ticket issued
    /// before a reset can never match a ticket issued after it.
    next_token: u32,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::with_selector(mode, difficulty, ai::selector_for(difficulty))
    }

    /// Builds a session with an injected move policy.
    pub fn with_selector(
        mode: GameMode,
        difficulty: Difficulty,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        Self {
            board: Board::new(),
            current_player: STARTING_PLAYER,
            mode,
            difficulty,
            outcome: Outcome::InProgress,
            last_move: None,
            pending: None,
            next_token: 0,
            selector,
        }
    }

    /// Applies a human move at `index` for the active player.
    ///
    /// Rejected without mutation when the game is over, when it is the
    /// AI's turn in single-player (which covers the whole delay window),
    /// or when the board refuses the cell.
    pub fn place(&mut self, index: usize) -> Result<(), MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::SinglePlayer && self.current_player == AI_PLAYER {
            return Err(MoveError::NotYourTurn);
        }

        self.apply_move(index)?;

        if self.mode == GameMode::SinglePlayer
            && !self.outcome.is_over()
            && self.current_player == AI_PLAYER
        {
            self.schedule_ai();
        }
        Ok(())
    }

    /// The outstanding AI ticket, if one is scheduled.
    pub fn pending_ai(&self) -> Option<PendingAi> {
        self.pending.map(|token| PendingAi {
            token,
            delay_ms: AI_DELAY_MS,
        })
    }

    /// Completes the scheduled AI move identified by `token`: selects a
    /// cell and applies it as one step. Returns the applied index.
    ///
    /// A token issued before a reset (or superseded by a newer ticket)
    /// is rejected, so a stale host timer can never touch a fresh board.
    pub fn complete_ai_move(&mut self, token: u32) -> Result<usize, MoveError> {
        let pending = self.pending.ok_or(MoveError::NoPendingMove)?;
        if pending != token {
            return Err(MoveError::StaleTicket);
        }

        self.pending = None;
        let index = self
            .selector
            .select_move(&self.board, AI_PLAYER)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.apply_move(index)?;
        Ok(index)
    }

    /// Discards the board and outcome and starts over with X to move.
    /// Mode and difficulty survive; any pending AI ticket is invalidated.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = STARTING_PLAYER;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        self.pending = None;
    }

    /// Selecting a mode starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Changing difficulty swaps the policy mid-game without a reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.selector = ai::selector_for(difficulty);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            mode: self.mode.code(),
            difficulty: self.difficulty.code(),
            is_game_over: self.outcome.is_over(),
            last_move: self.last_move.map(|index| index as u8),
        }
    }

    /// The final result, `None` while the game is in progress.
    pub fn result(&self) -> Option<GameResult> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won(player) => Some(GameResult {
                winner: player.code(),
            }),
            Outcome::Draw => Some(GameResult { winner: 0 }),
        }
    }

    /// Writes the active player's mark, then either records the final
    /// outcome or flips the turn.
    fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.board.set(index, self.current_player)?;
        self.last_move = Some(index);

        let outcome = rules::evaluate(&self.board);
        if outcome.is_over() {
            self.outcome = outcome;
        } else {
            self.current_player = self.current_player.other();
        }
        Ok(())
    }

    fn schedule_ai(&mut self) {
        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(token);
    }
}

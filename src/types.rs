use serde::Serialize;
use std::fmt;

/// A mark on the board. Wire code: 1 = X, 2 = O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::X => 1,
            Self::O => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    /// Wire code: 0 = single-player, 1 = two-player.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::SinglePlayer),
            1 => Some(Self::TwoPlayer),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::SinglePlayer => 0,
            Self::TwoPlayer => 1,
        }
    }
}

/// AI strength. Easy and Medium share the random policy; only Hard searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire code: 0 = easy, 1 = medium, 2 = hard.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Easy),
            1 => Some(Self::Medium),
            2 => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

/// Terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a move request was ignored. Every variant is recovered locally:
/// the session stays unchanged and play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange,
    Occupied,
    NotYourTurn,
    GameOver,
    NoPendingMove,
    StaleTicket,
    NoMoveAvailable,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::OutOfRange => "cell index out of range",
            Self::Occupied => "cell is already occupied",
            Self::NotYourTurn => "it is not the player's turn",
            Self::GameOver => "game is already over",
            Self::NoPendingMove => "no AI move is pending",
            Self::StaleTicket => "AI ticket is stale",
            Self::NoMoveAvailable => "no move available on the board",
        };
        f.write_str(msg)
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 9 cells, row-major, 0 = empty, 1 = X, 2 = O.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub mode: u8,
    pub difficulty: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `Some(index)` of the most recently applied move.
    /// - `None` directly after a reset.
    pub last_move: Option<u8>,
}

/// Final result after game over. `winner` is 0 for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
}

/// A scheduled AI response. The host arms a `delay_ms` timer and then
/// hands `token` back through `complete_ai_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingAi {
    pub token: u32,
    pub delay_ms: u32,
}

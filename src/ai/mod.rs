mod minimax;
mod random;

pub use minimax::MinimaxSelector;
pub use random::RandomSelector;

use crate::board::Board;
use crate::types::{Difficulty, Player};

/// Move policy seam. Selectors pick a cell for `player` on `board`,
/// or `None` when the board offers no move.
pub trait MoveSelector: Send + Sync {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize>;
}

/// Maps a difficulty to its policy. Easy and Medium intentionally share
/// the random policy; only Hard searches.
pub fn selector_for(difficulty: Difficulty) -> Box<dyn MoveSelector> {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => Box::new(RandomSelector::new()),
        Difficulty::Hard => Box::new(MinimaxSelector),
    }
}

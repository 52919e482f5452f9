use crate::ai::MoveSelector;
use crate::board::Board;
use crate::rules;
use crate::types::{Outcome, Player};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

/// Exhaustive minimax over the remaining empty cells. The 3x3 board has
/// at most 9 plies, so the search needs no pruning or depth limit.
///
/// Fully deterministic: cells are tried in ascending index order and
/// only a strictly greater score replaces the current best, so ties go
/// to the lowest index. Backs the Hard difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;

        for index in board.empty_cells() {
            let mut next = *board;
            if next.set(index, player).is_err() {
                continue;
            }
            let score = minimax(&next, player, player.other());
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index)
    }
}

/// Scores `board` from `maximizer`'s perspective with `to_move` next to
/// act. Terminates as soon as the outcome is decided.
fn minimax(board: &Board, maximizer: Player, to_move: Player) -> i32 {
    match rules::evaluate(board) {
        Outcome::Won(winner) => {
            if winner == maximizer {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        }
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let maximizing = to_move == maximizer;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };

            for index in board.empty_cells() {
                let mut next = *board;
                if next.set(index, to_move).is_err() {
                    continue;
                }
                let score = minimax(&next, maximizer, to_move.other());
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }

            best
        }
    }
}

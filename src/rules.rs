use crate::board::Board;
use crate::types::{Outcome, Player};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true iff some winning line is uniformly occupied by `player`.
/// Empty cells never count as a match.
pub fn is_win(board: &Board, player: Player) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(player)))
}

/// Returns true iff every cell is occupied and neither player has won.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_win(board, Player::X) && !is_win(board, Player::O)
}

/// Classifies the board. X is checked before O so an unreachable
/// double-win state resolves to X instead of panicking.
pub fn evaluate(board: &Board) -> Outcome {
    if is_win(board, Player::X) {
        Outcome::Won(Player::X)
    } else if is_win(board, Player::O) {
        Outcome::Won(Player::O)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in xs {
            board.set(index, Player::X).unwrap();
        }
        for &index in os {
            board.set(index, Player::O).unwrap();
        }
        board
    }

    #[test]
    fn every_line_wins_for_its_owner() {
        for line in WIN_LINES {
            let board = board_with(&line, &[]);
            assert!(is_win(&board, Player::X), "line {line:?} should win for X");
            assert!(!is_win(&board, Player::O));

            let board = board_with(&[], &line);
            assert!(is_win(&board, Player::O), "line {line:?} should win for O");
            assert!(!is_win(&board, Player::X));
        }
    }

    #[test]
    fn empty_cells_never_win() {
        let board = Board::new();

        assert!(!is_win(&board, Player::X));
        assert!(!is_win(&board, Player::O));
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn partial_line_is_not_a_win() {
        let board = board_with(&[0, 1], &[]);

        assert!(!is_win(&board, Player::X));
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        // X O X / X O O / O X X
        let board = board_with(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);

        assert!(is_draw(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn full_board_with_winner_is_not_a_draw() {
        // X X X / O O X / O X O
        let board = board_with(&[0, 1, 2, 5, 7], &[3, 4, 6, 8]);

        assert!(!is_draw(&board));
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn evaluate_reports_the_winner() {
        let board = board_with(&[0, 4, 8], &[1, 2]);
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));

        let board = board_with(&[1, 2], &[0, 4, 8]);
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));
    }

    #[test]
    fn double_win_guard_resolves_to_x() {
        // Unreachable under legal play; evaluate must not crash and
        // reports the first player checked.
        let board = board_with(&[0, 1, 2], &[6, 7, 8]);

        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn evaluate_is_idempotent() {
        let board = board_with(&[0, 4], &[1]);

        let first = evaluate(&board);
        for _ in 0..10 {
            assert_eq!(evaluate(&board), first);
        }
    }
}

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ai::MoveSelector;
use crate::board::Board;
use crate::types::Player;

/// Selects uniformly at random among the empty cells.
/// Backs both the Easy and Medium difficulties.
#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board, _player: Player) -> Option<usize> {
        let open = board.empty_cells();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_only_empty_cells() {
        let mut board = Board::new();
        board.set(0, Player::X).unwrap();
        board.set(4, Player::O).unwrap();
        board.set(8, Player::X).unwrap();
        let open = board.empty_cells();

        let mut selector = RandomSelector::seeded(7);
        for _ in 0..100 {
            let mv = selector.select_move(&board, Player::O).unwrap();
            assert!(open.contains(&mv), "cell {mv} is not empty");
        }
    }

    #[test]
    fn full_board_yields_no_move() {
        let mut board = Board::new();
        let mut player = Player::X;
        for index in 0..9 {
            board.set(index, player).unwrap();
            player = player.other();
        }

        let mut selector = RandomSelector::seeded(7);
        assert_eq!(selector.select_move(&board, Player::O), None);
    }

    #[test]
    fn seeded_selector_is_reproducible() {
        let board = Board::new();
        let mut left = RandomSelector::seeded(42);
        let mut right = RandomSelector::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                left.select_move(&board, Player::O),
                right.select_move(&board, Player::O)
            );
        }
    }
}

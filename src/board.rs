use crate::types::{MoveError, Player};

pub const NUM_CELLS: usize = 9;

/// Tic-tac-toe board: 9 cells in row-major order, each holding at most
/// one mark. A cell is written once per game; only `reset` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Player>; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `player` into the cell at `index`.
    /// Fails without mutation when the index is out of range or the cell
    /// is already occupied.
    pub fn set(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self.cells.get_mut(index).ok_or(MoveError::OutOfRange)?;
        if cell.is_some() {
            return Err(MoveError::Occupied);
        }
        *cell = Some(player);
        Ok(())
    }

    /// Returns the occupant of the cell at `index`, `None` when empty
    /// or out of range.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns the unoccupied cell indices in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Converts board to `[u8; 9]` where 0=empty, 1=X, 2=O.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [0u8; NUM_CELLS];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cells[pos].map_or(0, Player::code);
        }
        board
    }
}

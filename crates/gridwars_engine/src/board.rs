//! Board geometry: size, index mapping, winning lines, neighborhoods.

use crate::action::Move;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Supported board sizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum BoardSize {
    /// 3x3 board, three pieces per player.
    #[strum(serialize = "3x3", serialize = "3")]
    Three,
    /// 4x4 board, four pieces per player.
    #[strum(serialize = "4x4", serialize = "4")]
    Four,
    /// 5x5 board, five pieces per player.
    #[strum(serialize = "5x5", serialize = "5")]
    Five,
}

impl BoardSize {
    /// Cells per side.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Pieces each player places during the opening phase.
    pub fn piece_cap(self) -> usize {
        // 3 for 3x3, 4 for 4x4, 5 for 5x5
        self.side()
    }
}

/// Game board: row-major cells, `index = row * side + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Cells per side.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns the owner of the piece at the given index, if any.
    pub fn owner(&self, index: usize) -> Option<Player> {
        self.get(index).and_then(Cell::owner)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Converts an index to `(row, col)`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.side(), index % self.side())
    }

    /// Converts `(row, col)` to an index.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side() + col
    }

    /// All winning lines: every row, every column, and the two full
    /// diagonals, in that enumeration order (`2 * side + 2` lines total).
    pub fn lines(&self) -> Vec<Vec<usize>> {
        let side = self.side();
        let mut lines = Vec::with_capacity(2 * side + 2);

        for row in 0..side {
            lines.push((0..side).map(|col| self.index(row, col)).collect());
        }
        for col in 0..side {
            lines.push((0..side).map(|row| self.index(row, col)).collect());
        }
        lines.push((0..side).map(|i| self.index(i, i)).collect());
        lines.push((0..side).map(|i| self.index(i, side - 1 - i)).collect());

        lines
    }

    /// Checks whether two cells are within king-move distance of each other.
    ///
    /// True iff `|Δrow| <= 1 && |Δcol| <= 1`, excluding the cell itself.
    pub fn is_adjacent(&self, from: usize, to: usize) -> bool {
        if from == to || from >= self.cells.len() || to >= self.cells.len() {
            return false;
        }
        let (from_row, from_col) = self.coords(from);
        let (to_row, to_col) = self.coords(to);
        from_row.abs_diff(to_row) <= 1 && from_col.abs_diff(to_col) <= 1
    }

    /// Empty neighbors of a cell within king-move distance.
    pub fn empty_neighbors(&self, index: usize) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&to| self.is_adjacent(index, to) && self.is_empty(to))
            .collect()
    }

    /// Index of the center cell.
    pub fn center(&self) -> usize {
        let mid = self.side() / 2;
        self.index(mid, mid)
    }

    /// Indices of the four corner cells.
    pub fn corners(&self) -> [usize; 4] {
        let side = self.side();
        [
            0,
            side - 1,
            (side - 1) * side,
            side * side - 1,
        ]
    }

    /// Strategic priority ordering over all cells: center, then the four
    /// corners, then the remaining cells in index order.
    pub fn strategic_positions(&self) -> Vec<usize> {
        let mut strategic = vec![self.center()];
        strategic.extend(self.corners());

        for index in 0..self.cells.len() {
            if !strategic.contains(&index) {
                strategic.push(index);
            }
        }

        strategic
    }

    /// The high-priority prefix of the strategic ordering (center + corners),
    /// used to bias non-exhaustive AI choices.
    pub fn strategic_prefix(&self) -> Vec<usize> {
        let mut prefix = vec![self.center()];
        prefix.extend(self.corners());
        prefix
    }

    /// Returns a copy of the board with the move applied for the given
    /// player.
    ///
    /// Pure speculative application: relocations clear the origin, the
    /// destination takes the player's piece. Used by the AI instead of
    /// mutate-and-rollback on the live board.
    pub fn applying(&self, mv: Move, player: Player) -> Board {
        let mut next = self.clone();
        if let Move::Relocate { from, .. } = mv {
            next.set(from, Cell::Empty);
        }
        next.set(mv.to(), Cell::Occupied(player));
        next
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let side = self.side();
        let mut result = String::new();
        for row in 0..side {
            for col in 0..side {
                let symbol = match self.cells[self.index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::Black) => 'B',
                    Cell::Occupied(Player::White) => 'W',
                };
                result.push(symbol);
                if col < side - 1 {
                    result.push(' ');
                }
            }
            if row < side - 1 {
                result.push('\n');
            }
        }
        result
    }
}

//! Eight-way adjacency between board cells.

use super::types::{Board, Coordinate};

/// Returns true if `a` and `b` are distinct cells touching horizontally,
/// vertically or diagonally.
pub fn is_adjacent(a: Coordinate, b: Coordinate) -> bool {
    a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
}

/// The cell a search step extends from.
///
/// `Start` marks the first letter of a word: every cell qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predecessor {
    /// No cell chosen yet.
    Start,
    /// The previously chosen cell.
    Cell(Coordinate),
}

impl Predecessor {
    /// Returns true if `next` may follow this predecessor.
    pub fn admits(self, next: Coordinate) -> bool {
        match self {
            Predecessor::Start => true,
            Predecessor::Cell(prev) => is_adjacent(prev, next),
        }
    }
}

/// On-board neighbours of `cell`, in row-major order.
pub fn neighbors(board: &Board, cell: Coordinate) -> impl Iterator<Item = Coordinate> + use<> {
    let last_row = board.rows().saturating_sub(1);
    let last_col = board.cols().saturating_sub(1);
    let rows = cell.row.saturating_sub(1)..=(cell.row + 1).min(last_row);
    let cols = cell.col.saturating_sub(1)..=(cell.col + 1).min(last_col);

    rows.flat_map(move |row| cols.clone().map(move |col| Coordinate::new(row, col)))
        .filter(move |other| is_adjacent(cell, *other))
}

//! Tracing a single word through adjacent, unused cells.
//!
//! The search scans every cell at every level in row-major order, since a
//! letter may appear several times. One path buffer is shared down the
//! recursion: a cell is pushed before descending and popped after, so the
//! buffer is back to its previous state before the next candidate is tried.

use super::adjacency::Predecessor;
use super::types::{Board, Coordinate, Path};
use std::ops::ControlFlow;
use tracing::{debug, instrument, trace};

/// How many paths to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Stop at the first complete path.
    First,
    /// Collect every distinct path.
    All,
}

/// Returns every path spelling `word` on the board.
///
/// Matching is case-insensitive. Different cell sequences spelling the
/// same word are different paths. An empty word yields a single empty
/// path; a word with letters absent from the board yields nothing.
#[instrument(skip(board), fields(cells = board.cell_count()))]
pub fn trace_all(board: &Board, word: &str) -> Vec<Path> {
    let paths = search(board, word, TraceMode::All);
    debug!(paths = paths.len(), "Traced word");
    paths
}

/// Returns the first path spelling `word`, in row-major search order.
#[instrument(skip(board), fields(cells = board.cell_count()))]
pub fn trace_first(board: &Board, word: &str) -> Option<Path> {
    search(board, word, TraceMode::First).into_iter().next()
}

/// Returns true if `word` can be traced at all.
pub fn is_traceable(board: &Board, word: &str) -> bool {
    trace_first(board, word).is_some()
}

fn search(board: &Board, word: &str, mode: TraceMode) -> Vec<Path> {
    let word = word.to_uppercase();
    let mut used = Vec::with_capacity(word.len());
    let mut found = Vec::new();
    let _ = extend_path(board, &word, Predecessor::Start, &mut used, &mut found, mode);
    found
}

/// Extends `used` with cells spelling `rest`, recording each complete path.
///
/// Breaks out early once a path is found in [`TraceMode::First`].
pub fn extend_path(
    board: &Board,
    rest: &str,
    previous: Predecessor,
    used: &mut Vec<Coordinate>,
    found: &mut Vec<Path>,
    mode: TraceMode,
) -> ControlFlow<()> {
    if rest.is_empty() {
        trace!(path = ?used, "Complete path");
        found.push(Path::from(used.as_slice()));
        return match mode {
            TraceMode::First => ControlFlow::Break(()),
            TraceMode::All => ControlFlow::Continue(()),
        };
    }

    for cell in board.coordinates() {
        let Some(token) = board.token(cell) else {
            continue;
        };
        let Some(remaining) = rest.strip_prefix(token) else {
            continue;
        };
        if !previous.admits(cell) || used.contains(&cell) {
            continue;
        }

        used.push(cell);
        let flow = extend_path(board, remaining, Predecessor::Cell(cell), used, found, mode);
        used.pop();

        if flow.is_break() {
            return flow;
        }
    }

    ControlFlow::Continue(())
}

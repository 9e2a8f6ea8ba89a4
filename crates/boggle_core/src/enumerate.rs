//! Exhaustive search for every word left on the board.
//!
//! Each cell starts an independent depth-first walk that appends the token
//! of every visited cell to a growing candidate. A branch is abandoned as
//! soon as the candidate is no longer a prefix of any dictionary word.
//! Words of at least [`MIN_WORD_LENGTH`] letters that nobody has claimed
//! are recorded and claimed on the spot, so a word reachable along two
//! paths is only reported once.

use super::adjacency::neighbors;
use super::claim::ClaimedWords;
use super::lexicon::Lexicon;
use super::types::{Board, Coordinate};
use super::validity::MIN_WORD_LENGTH;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Whether the walk consults [`Lexicon::contains_prefix`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrefixPruning {
    /// Stop descending once the candidate is not a prefix.
    #[default]
    Enabled,
    /// Walk every path regardless. Same words, much slower.
    Disabled,
}

/// Optional deadline for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    deadline: Option<Instant>,
}

impl SearchLimits {
    /// No deadline.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stop at the given instant.
    pub fn until(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Stop once `budget` has elapsed from now.
    pub fn within(budget: Duration) -> Self {
        Self::until(Instant::now() + budget)
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Words found by an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Enumeration {
    /// Newly claimed words, in discovery order.
    words: Vec<String>,
    /// True if the deadline cut the search short.
    truncated: bool,
}

impl Enumeration {
    /// Consumes the result, returning the words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Mutable state of one walk: the candidate string and the cells behind it.
#[derive(Debug, Default)]
struct Walk {
    so_far: String,
    visited: Vec<Coordinate>,
    found: Vec<String>,
}

/// Finds every unclaimed word on a board.
pub struct WordEnumerator<'a, L: ?Sized> {
    board: &'a Board,
    lexicon: &'a L,
    pruning: PrefixPruning,
    limits: SearchLimits,
}

impl<'a, L: Lexicon + ?Sized> WordEnumerator<'a, L> {
    /// Creates an enumerator with pruning on and no deadline.
    pub fn new(board: &'a Board, lexicon: &'a L) -> Self {
        Self {
            board,
            lexicon,
            pruning: PrefixPruning::Enabled,
            limits: SearchLimits::unlimited(),
        }
    }

    /// Sets the pruning mode.
    pub fn with_pruning(mut self, pruning: PrefixPruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Sets a deadline.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Walks from every cell in row-major order, claiming each new word.
    #[instrument(
        skip(self, claimed),
        fields(cells = self.board.cell_count(), already_claimed = claimed.len())
    )]
    pub fn enumerate(&self, claimed: &mut ClaimedWords) -> Enumeration {
        let mut walk = Walk::default();
        let mut truncated = false;

        for start in self.board.coordinates() {
            if self.explore(start, claimed, &mut walk).is_break() {
                truncated = true;
                break;
            }
        }

        if truncated {
            warn!(found = walk.found.len(), "Deadline reached, enumeration truncated");
        } else {
            info!(found = walk.found.len(), "Enumeration complete");
        }

        Enumeration {
            words: walk.found,
            truncated,
        }
    }

    /// Walks from a single starting cell with empty buffers.
    ///
    /// Off-board starts find nothing.
    #[instrument(skip(self, claimed))]
    pub fn enumerate_from(&self, start: Coordinate, claimed: &mut ClaimedWords) -> Enumeration {
        let mut walk = Walk::default();
        if !self.board.contains(start) {
            debug!("Start cell off the board");
            return Enumeration::default();
        }
        let truncated = self.explore(start, claimed, &mut walk).is_break();
        Enumeration {
            words: walk.found,
            truncated,
        }
    }

    /// Visits `cell`, then every unvisited neighbour.
    ///
    /// `walk` is restored to its state on entry before returning.
    fn explore(
        &self,
        cell: Coordinate,
        claimed: &mut ClaimedWords,
        walk: &mut Walk,
    ) -> ControlFlow<()> {
        if self.limits.expired() {
            return ControlFlow::Break(());
        }
        let Some(token) = self.board.token(cell) else {
            return ControlFlow::Continue(());
        };

        let restore_len = walk.so_far.len();
        walk.so_far.push_str(token);
        walk.visited.push(cell);

        let flow = self.descend(cell, claimed, walk);

        walk.visited.pop();
        walk.so_far.truncate(restore_len);
        flow
    }

    fn descend(
        &self,
        cell: Coordinate,
        claimed: &mut ClaimedWords,
        walk: &mut Walk,
    ) -> ControlFlow<()> {
        if self.pruning == PrefixPruning::Enabled && !self.lexicon.contains_prefix(&walk.so_far) {
            return ControlFlow::Continue(());
        }

        if walk.so_far.chars().count() >= MIN_WORD_LENGTH
            && !claimed.contains(&walk.so_far)
            && self.lexicon.contains_word(&walk.so_far)
        {
            debug!(word = %walk.so_far, "Computer found word");
            claimed.claim(&walk.so_far);
            walk.found.push(walk.so_far.clone());
        }

        for next in neighbors(self.board, cell) {
            if walk.visited.contains(&next) {
                continue;
            }
            let flow = self.explore(next, claimed, walk);
            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}

/// Convenience wrapper: every unclaimed word, pruned, without a deadline.
pub fn find_all_words<L: Lexicon + ?Sized>(
    board: &Board,
    lexicon: &L,
    claimed: &mut ClaimedWords,
) -> Vec<String> {
    WordEnumerator::new(board, lexicon).enumerate(claimed).into_words()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TrieLexicon;

    fn board() -> Board {
        Board::from_rows(&[["C", "A", "T"], ["S", "E", "R"], ["N", "O", "D"]]).unwrap()
    }

    #[test]
    fn test_finds_words_and_claims_them() {
        let lex = TrieLexicon::from_words(["CATS", "RATE", "CAT", "DOES", "ZZZZ"]);
        let mut claimed = ClaimedWords::new();
        let mut words = find_all_words(&board(), &lex, &mut claimed);
        words.sort();
        assert_eq!(words, ["DOES", "RATE"]);
        assert!(claimed.contains("RATE"));
        assert!(!claimed.contains("CAT"));
    }

    #[test]
    fn test_skips_claimed_words() {
        let lex = TrieLexicon::from_words(["RATE", "DOES"]);
        let mut claimed: ClaimedWords = ["RATE"].into_iter().collect();
        let words = find_all_words(&board(), &lex, &mut claimed);
        assert_eq!(words, ["DOES"]);
    }

    #[test]
    fn test_word_reported_once_across_paths() {
        let board = Board::from_rows(&[["A", "A"], ["A", "A"]]).unwrap();
        let lex = TrieLexicon::from_words(["AAAA"]);
        let mut claimed = ClaimedWords::new();
        assert_eq!(find_all_words(&board, &lex, &mut claimed), ["AAAA"]);
    }

    #[test]
    fn test_enumerate_from_single_cell() {
        let lex = TrieLexicon::from_words(["RATE", "DOES"]);
        let mut claimed = ClaimedWords::new();
        let board = board();
        let enumerator = WordEnumerator::new(&board, &lex);
        let from_d = enumerator.enumerate_from(Coordinate::new(2, 2), &mut claimed);
        assert_eq!(from_d.words(), &["DOES"]);
        let off_board = enumerator.enumerate_from(Coordinate::new(9, 9), &mut claimed);
        assert!(off_board.words().is_empty());
    }

    #[test]
    fn test_expired_deadline_truncates() {
        let lex = TrieLexicon::from_words(["RATE"]);
        let mut claimed = ClaimedWords::new();
        let past = SearchLimits::until(Instant::now());
        let board = board();
        let result = WordEnumerator::new(&board, &lex)
            .with_limits(past)
            .enumerate(&mut claimed);
        assert!(*result.truncated());
        assert!(result.words().is_empty());
    }
}

//! Non-interactive reports for the `solve` and `check` commands.

use boggle_core::{
    AcceptableWord, Board, ClaimedWords, Lexicon, Path, SearchLimits, WordEnumerator, normalize,
    score,
};
use derive_getters::Getters;
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

/// A word with its point value.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ScoredWord {
    /// The word, upper case.
    word: String,
    /// Points it is worth.
    score: u32,
}

/// Every word on a board, sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SolveReport {
    /// Board tokens, row by row.
    board: Vec<Vec<String>>,
    /// Words found.
    words: Vec<ScoredWord>,
    /// Sum of all word scores.
    total_score: u32,
    /// True if the time limit cut the search short.
    truncated: bool,
}

impl SolveReport {
    /// Enumerates the board.
    #[instrument(skip_all, fields(cells = board.cell_count()))]
    pub fn solve<L: Lexicon + ?Sized>(board: &Board, lexicon: &L, limits: SearchLimits) -> Self {
        let enumeration = WordEnumerator::new(board, lexicon)
            .with_limits(limits)
            .enumerate(&mut ClaimedWords::new());
        let truncated = *enumeration.truncated();

        let mut words: Vec<ScoredWord> = enumeration
            .into_words()
            .into_iter()
            .map(|word| ScoredWord {
                score: score(&word),
                word,
            })
            .collect();
        words.sort_by(|a, b| a.word.cmp(&b.word));
        let total_score = words.iter().map(|w| w.score).sum();

        info!(words = words.len(), total_score, "Board solved");
        Self {
            board: board.token_rows(),
            words,
            total_score,
            truncated,
        }
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{:>3}  {}", word.score, word.word)?;
        }
        write!(
            f,
            "{} words, {} points",
            self.words.len(),
            self.total_score
        )?;
        if self.truncated {
            write!(f, " (search stopped early)")?;
        }
        Ok(())
    }
}

/// Verdict on one word passed to `check`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct CheckOutcome {
    /// The normalized word.
    word: String,
    /// The path used, if accepted.
    path: Option<Path>,
    /// Why it was rejected, if it was.
    reason: Option<String>,
}

impl CheckOutcome {
    /// True if the word was accepted.
    pub fn accepted(&self) -> bool {
        self.path.is_some()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, &self.reason) {
            (Some(path), _) => write!(f, "{}: ok ({})", self.word, path),
            (None, Some(reason)) => write!(f, "{}: rejected, {}", self.word, reason),
            (None, None) => write!(f, "{}: rejected", self.word),
        }
    }
}

/// Checks words in order as if one player typed them, so repeats are rejected.
#[instrument(skip(board, lexicon))]
pub fn check_words<L: Lexicon + ?Sized>(
    board: &Board,
    lexicon: &L,
    words: &[String],
) -> Vec<CheckOutcome> {
    let mut claimed = ClaimedWords::new();
    words
        .iter()
        .map(|word| {
            let word = normalize(word);
            match AcceptableWord::check(&word, board, lexicon, &claimed) {
                Ok(path) => {
                    claimed.claim(&word);
                    CheckOutcome {
                        word,
                        path: Some(path),
                        reason: None,
                    }
                }
                Err(rejection) => CheckOutcome {
                    word,
                    path: None,
                    reason: Some(rejection.to_string()),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boggle_core::TrieLexicon;

    fn board() -> Board {
        Board::from_rows(&[["C", "A", "T", "S"], ["O", "R", "E", "N"]]).unwrap()
    }

    #[test]
    fn test_solve_sorts_and_scores() {
        let lex = TrieLexicon::from_words(["TEAR", "CATS", "CRATE", "CAT"]);
        let report = SolveReport::solve(&board(), &lex, SearchLimits::unlimited());
        let words: Vec<&str> = report.words().iter().map(|w| w.word().as_str()).collect();
        assert_eq!(words, ["CATS", "CRATE", "TEAR"]);
        assert_eq!(*report.total_score(), 1 + 2 + 1);
        assert!(!report.truncated());
        assert!(report.to_string().ends_with("3 words, 4 points"));
    }

    #[test]
    fn test_solve_json_shape() {
        let lex = TrieLexicon::from_words(["CATS"]);
        let report = SolveReport::solve(&board(), &lex, SearchLimits::unlimited());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["words"][0]["word"], "CATS");
        assert_eq!(json["words"][0]["score"], 1);
        assert_eq!(json["board"][1][0], "O");
        assert_eq!(json["truncated"], false);
    }

    #[test]
    fn test_check_words_rejects_repeats() {
        let lex = TrieLexicon::from_words(["CATS", "CAT"]);
        let words = ["cats", "CATS", "cat", "dogs"].map(String::from);
        let outcomes = check_words(&board(), &lex, &words);
        assert!(outcomes[0].accepted());
        assert!(!outcomes[1].accepted());
        assert!(!outcomes[2].accepted());
        assert!(!outcomes[3].accepted());
        assert!(outcomes[1].to_string().starts_with("CATS: rejected"));
    }
}

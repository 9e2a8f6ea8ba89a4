//! Error types for the collaborators around the search core.
//!
//! The searches themselves never fail: a word that cannot be found is an
//! ordinary negative answer. These errors cover building a board from user
//! input and loading a dictionary.

use super::types::Coordinate;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Zero rows or zero columns.
    #[display("board must have at least one row and one column")]
    EmptyDimensions,

    /// Token count does not match the board dimensions.
    #[display("expected {} tokens for a {}x{} board, found {}", rows * cols, rows, cols, found)]
    WrongTokenCount {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Tokens supplied.
        found: usize,
    },

    /// A user configuration string did not carry enough letters.
    #[display("configuration needs {} letters, only {} given", needed, given)]
    TooShort {
        /// Letters required to fill the board.
        needed: usize,
        /// Letters found in the input.
        given: usize,
    },

    /// A cell was given an empty token.
    #[display("empty token at {}", _0)]
    EmptyToken(Coordinate),
}

/// Board construction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the user simply typed too few letters.
    pub fn is_too_short(&self) -> bool {
        matches!(self.kind, BoardErrorKind::TooShort { .. })
    }
}

/// Dictionary loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Lexicon error: {} at {}:{}", message, file, line)]
pub struct LexiconError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LexiconError {
    /// Creates a new lexicon error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LexiconError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let err = BoardError::new(BoardErrorKind::TooShort {
            needed: 16,
            given: 5,
        });
        assert!(err.is_too_short());
        assert_eq!(
            err.kind.to_string(),
            "configuration needs 16 letters, only 5 given"
        );
        assert!(err.to_string().starts_with("Board error: configuration needs 16"));
    }

    #[test]
    fn test_wrong_token_count_display() {
        let kind = BoardErrorKind::WrongTokenCount {
            rows: 4,
            cols: 4,
            found: 15,
        };
        assert_eq!(kind.to_string(), "expected 16 tokens for a 4x4 board, found 15");
    }

    #[test]
    fn test_lexicon_error_tracks_location() {
        let err = LexiconError::new("missing file");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("missing file"));
    }
}

//! Rules a submitted word must pass before it is credited.
//!
//! Each rule is a small precondition with a `check` function; the
//! composite [`AcceptableWord`] runs them cheapest first and stops at the
//! first failure. A failed check is an ordinary answer, not a fault.

use super::claim::ClaimedWords;
use super::lexicon::Lexicon;
use super::trace::trace_first;
use super::types::{Board, Path};
use tracing::{debug, instrument};

/// Shortest word the game accepts.
pub const MIN_WORD_LENGTH: usize = 4;

/// Why a submitted word was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// Fewer than [`MIN_WORD_LENGTH`] letters.
    #[display("{} is shorter than {} letters", _0, MIN_WORD_LENGTH)]
    TooShort(String),

    /// Already scored this round.
    #[display("{} has already been found", _0)]
    AlreadyClaimed(String),

    /// Not a dictionary word.
    #[display("{} is not in the dictionary", _0)]
    NotInLexicon(String),

    /// No path of adjacent, unused cells spells it.
    #[display("{} cannot be traced on the board", _0)]
    NotOnBoard(String),
}

impl std::error::Error for Rejection {}

/// Uppercases and trims a submitted word.
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Precondition: the word is long enough.
pub struct MinimumLength;

impl MinimumLength {
    /// Rejects words under [`MIN_WORD_LENGTH`] letters.
    pub fn check(word: &str) -> Result<(), Rejection> {
        if word.chars().count() < MIN_WORD_LENGTH {
            Err(Rejection::TooShort(word.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: nobody has scored the word yet.
pub struct NotYetClaimed;

impl NotYetClaimed {
    /// Rejects words present in `claimed`.
    pub fn check(word: &str, claimed: &ClaimedWords) -> Result<(), Rejection> {
        if claimed.contains(word) {
            Err(Rejection::AlreadyClaimed(word.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the dictionary knows the word.
pub struct InLexicon;

impl InLexicon {
    /// Rejects words the lexicon does not contain.
    pub fn check<L: Lexicon + ?Sized>(word: &str, lexicon: &L) -> Result<(), Rejection> {
        if lexicon.contains_word(word) {
            Ok(())
        } else {
            Err(Rejection::NotInLexicon(word.to_string()))
        }
    }
}

/// Precondition: the word can be traced on the board.
pub struct TraceableOnBoard;

impl TraceableOnBoard {
    /// Returns the first path spelling the word, or rejects it.
    pub fn check(word: &str, board: &Board) -> Result<Path, Rejection> {
        trace_first(board, word).ok_or_else(|| Rejection::NotOnBoard(word.to_string()))
    }
}

/// Composite rule: length, novelty, dictionary, then board.
pub struct AcceptableWord;

impl AcceptableWord {
    /// Validates a submitted word and returns one path that spells it.
    ///
    /// The word is normalised to uppercase first. Nothing is claimed here;
    /// crediting the word is the caller's job.
    #[instrument(skip(board, lexicon, claimed))]
    pub fn check<L: Lexicon + ?Sized>(
        word: &str,
        board: &Board,
        lexicon: &L,
        claimed: &ClaimedWords,
    ) -> Result<Path, Rejection> {
        let word = normalize(word);
        let outcome = MinimumLength::check(&word)
            .and_then(|()| NotYetClaimed::check(&word, claimed))
            .and_then(|()| InLexicon::check(&word, lexicon))
            .and_then(|()| TraceableOnBoard::check(&word, board));

        match &outcome {
            Ok(path) => debug!(%word, %path, "Word accepted"),
            Err(reason) => debug!(%word, %reason, "Word rejected"),
        }
        outcome
    }
}

/// Boolean form of [`AcceptableWord::check`].
pub fn is_valid<L: Lexicon + ?Sized>(
    word: &str,
    board: &Board,
    lexicon: &L,
    claimed: &ClaimedWords,
) -> bool {
    AcceptableWord::check(word, board, lexicon, claimed).is_ok()
}

//! Boggle word-search logic.
//!
//! Two searches share one board model:
//!
//! - **Tracing** ([`trace_all`], [`trace_first`]) checks whether a given word
//!   can be spelled through adjacent, unused cells.
//! - **Enumeration** ([`WordEnumerator`]) walks from every cell and collects
//!   every dictionary word on the board, pruning branches the dictionary
//!   cannot complete.
//!
//! [`AcceptableWord`] combines the game rules for a submitted word, and the
//! [`round`] typestate machine strings the two turns of a round together.
//! The dictionary is any [`Lexicon`]; [`TrieLexicon`] is provided.
//!
//! # Example
//!
//! ```
//! use boggle_core::{Board, ClaimedWords, TrieLexicon, find_all_words, is_valid};
//!
//! let board = Board::from_rows(&[["C", "A", "T", "S"], ["O", "R", "E", "N"]]).unwrap();
//! let lexicon = TrieLexicon::from_words(["CATS", "CORE"]);
//! let mut claimed = ClaimedWords::new();
//!
//! assert!(is_valid("cats", &board, &lexicon, &claimed));
//! claimed.claim("CATS");
//! assert_eq!(find_all_words(&board, &lexicon, &mut claimed), ["CORE"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adjacency;
mod claim;
mod cubes;
mod enumerate;
mod error;
mod lexicon;
pub mod round;
mod trace;
mod types;
mod validity;

pub use adjacency::{Predecessor, is_adjacent, neighbors};
pub use claim::{ClaimedWords, Player, Scoreboard, Tally, WordClaim, score};
pub use cubes::{BIG_CUBES, QFace, STANDARD_CUBES, roll};
pub use enumerate::{Enumeration, PrefixPruning, SearchLimits, WordEnumerator, find_all_words};
pub use error::{BoardError, BoardErrorKind, LexiconError};
pub use lexicon::{Lexicon, TrieLexicon};
pub use round::{
    AcceptedWord, ComputerTurn, HumanTurn, RoundComplete, RoundObserver, RoundSetup,
    SilentObserver,
};
pub use trace::{TraceMode, extend_path, is_traceable, trace_all, trace_first};
pub use types::{Board, BoardSize, Coordinate, Path};
pub use validity::{
    AcceptableWord, InLexicon, MIN_WORD_LENGTH, MinimumLength, NotYetClaimed, Rejection,
    TraceableOnBoard, is_valid, normalize,
};

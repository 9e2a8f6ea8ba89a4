//! Phase-specific typestate structs for one round of Boggle.
//!
//! A round moves `RoundSetup -> HumanTurn -> ComputerTurn -> RoundComplete`.
//! Every transition consumes the previous phase, so a finished turn cannot
//! be resumed. The claimed-word set is created in [`RoundSetup`] and
//! carried through; [`RoundComplete::restart`] is the only way to get a
//! fresh one.

use super::claim::{ClaimedWords, Player, Scoreboard, WordClaim};
use super::cubes::{QFace, roll};
use super::enumerate::{SearchLimits, WordEnumerator};
use super::lexicon::Lexicon;
use super::types::{Board, BoardSize, Path};
use super::validity::{AcceptableWord, Rejection, normalize};
use derive_getters::Getters;
use rand::Rng;
use tracing::{info, instrument};

/// Receives notifications meant for display.
///
/// Nothing here feeds back into the search.
pub trait RoundObserver {
    /// A human word was accepted along `path` on `board`.
    fn path_found(&mut self, _board: &Board, _word: &str, _path: &Path) {}

    /// A word was credited to a player.
    fn word_recorded(&mut self, _claim: &WordClaim) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RoundObserver for SilentObserver {}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round waiting for a board.
#[derive(Debug, Clone, Default)]
pub struct RoundSetup {
    claimed: ClaimedWords,
}

impl RoundSetup {
    /// Creates a round with nothing claimed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the human turn on a user-supplied board.
    #[instrument(skip(self, board), fields(rows = board.rows(), cols = board.cols()))]
    pub fn with_board(self, board: Board) -> HumanTurn {
        info!("Board configured");
        HumanTurn {
            board,
            claimed: self.claimed,
            claims: Vec::new(),
        }
    }

    /// Starts the human turn on a freshly rolled board.
    #[instrument(skip(self, rng))]
    pub fn roll<R: Rng + ?Sized>(self, size: BoardSize, rng: &mut R, q_face: QFace) -> HumanTurn {
        let board = roll(size, rng, q_face);
        self.with_board(board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Human Turn
// ─────────────────────────────────────────────────────────────

/// A word the human got credit for, with the cells that spell it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AcceptedWord {
    /// The claim.
    claim: WordClaim,
    /// One path spelling the word.
    path: Path,
}

/// Human entering words.
#[derive(Debug, Clone, Getters)]
pub struct HumanTurn {
    /// The board.
    board: Board,
    /// Words claimed so far.
    claimed: ClaimedWords,
    /// Claims in the order they were made.
    claims: Vec<WordClaim>,
}

impl HumanTurn {
    /// Submits a word. On success it is claimed for the human.
    #[instrument(skip(self, lexicon, observer))]
    pub fn submit<L: Lexicon + ?Sized>(
        &mut self,
        word: &str,
        lexicon: &L,
        observer: &mut dyn RoundObserver,
    ) -> Result<AcceptedWord, Rejection> {
        let path = AcceptableWord::check(word, &self.board, lexicon, &self.claimed)?;
        let word = normalize(word);

        self.claimed.claim(&word);
        let claim = WordClaim::new(word, Player::Human);
        self.claims.push(claim.clone());

        observer.path_found(&self.board, claim.word(), &path);
        observer.word_recorded(&claim);
        info!(word = %claim.word(), score = claim.score(), "Human scored");

        Ok(AcceptedWord { claim, path })
    }

    /// Ends the human turn.
    #[instrument(skip(self), fields(claims = self.claims.len()))]
    pub fn finish(self) -> ComputerTurn {
        ComputerTurn {
            board: self.board,
            claimed: self.claimed,
            claims: self.claims,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Computer Turn
// ─────────────────────────────────────────────────────────────

/// Computer about to sweep the board.
#[derive(Debug, Clone, Getters)]
pub struct ComputerTurn {
    /// The board.
    board: Board,
    /// Words claimed so far.
    claimed: ClaimedWords,
    /// Claims in the order they were made.
    claims: Vec<WordClaim>,
}

impl ComputerTurn {
    /// Finds and claims every remaining word.
    #[instrument(skip(self, lexicon, observer))]
    pub fn play<L: Lexicon + ?Sized>(
        self,
        lexicon: &L,
        limits: SearchLimits,
        observer: &mut dyn RoundObserver,
    ) -> RoundComplete {
        let ComputerTurn {
            board,
            mut claimed,
            mut claims,
        } = self;

        let enumeration = WordEnumerator::new(&board, lexicon)
            .with_limits(limits)
            .enumerate(&mut claimed);
        let truncated = *enumeration.truncated();

        for word in enumeration.into_words() {
            let claim = WordClaim::new(word, Player::Computer);
            observer.word_recorded(&claim);
            claims.push(claim);
        }

        RoundComplete {
            board,
            claimed,
            claims,
            truncated,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Complete Phase
// ─────────────────────────────────────────────────────────────

/// Round over; both turns played.
#[derive(Debug, Clone, Getters)]
pub struct RoundComplete {
    /// The board.
    board: Board,
    /// Every claimed word.
    claimed: ClaimedWords,
    /// Every claim, human first.
    claims: Vec<WordClaim>,
    /// True if the computer ran out of time.
    truncated: bool,
}

impl RoundComplete {
    /// Points and word counts per player.
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from_claims(&self.claims)
    }

    /// Words credited to one player, in claim order.
    pub fn words_for(&self, player: Player) -> Vec<&str> {
        self.claims
            .iter()
            .filter(|claim| *claim.player() == player)
            .map(|claim| claim.word().as_str())
            .collect()
    }

    /// Starts a new round with nothing claimed.
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TrieLexicon;

    #[derive(Default)]
    struct Recorder {
        paths: Vec<(String, Path)>,
        claims: Vec<WordClaim>,
    }

    impl RoundObserver for Recorder {
        fn path_found(&mut self, _board: &Board, word: &str, path: &Path) {
            self.paths.push((word.to_string(), path.clone()));
        }

        fn word_recorded(&mut self, claim: &WordClaim) {
            self.claims.push(claim.clone());
        }
    }

    fn board() -> Board {
        Board::from_rows(&[["C", "A", "T", "S"], ["O", "R", "E", "N"]]).unwrap()
    }

    #[test]
    fn test_full_round() {
        let lex = TrieLexicon::from_words(["CATS", "CORE", "RATE", "TEAR"]);
        let mut recorder = Recorder::default();

        let mut human = RoundSetup::new().with_board(board());
        let accepted = human.submit("cats", &lex, &mut recorder).unwrap();
        assert_eq!(accepted.claim().word(), "CATS");
        assert_eq!(accepted.path().len(), 4);
        assert!(human.submit("CAT", &lex, &mut recorder).is_err());

        let done = human.finish().play(&lex, SearchLimits::unlimited(), &mut recorder);
        assert_eq!(done.words_for(Player::Human), ["CATS"]);
        let mut computer = done.words_for(Player::Computer);
        computer.sort();
        assert_eq!(computer, ["CORE", "RATE", "TEAR"]);
        assert!(!done.truncated());

        assert_eq!(recorder.paths.len(), 1);
        assert_eq!(recorder.claims.len(), 4);
        assert_eq!(*recorder.claims[0].player(), Player::Human);

        let scores = done.scoreboard();
        assert_eq!(*scores.tally(Player::Computer).points(), 3);
    }

    #[test]
    fn test_restart_clears_claims() {
        let lex = TrieLexicon::from_words(["CATS"]);
        let mut human = RoundSetup::new().with_board(board());
        human.submit("CATS", &lex, &mut SilentObserver).unwrap();
        let done = human
            .finish()
            .play(&lex, SearchLimits::unlimited(), &mut SilentObserver);
        assert_eq!(done.claimed().len(), 1);

        let mut again = done.restart().with_board(board());
        assert!(again.claimed().is_empty());
        assert!(again.submit("CATS", &lex, &mut SilentObserver).is_ok());
    }
}

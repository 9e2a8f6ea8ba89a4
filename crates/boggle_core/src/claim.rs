//! Words claimed during a round, who claimed them, and what they score.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Which side found a word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The exhaustive search.
    Computer,
}

/// Points for a word: one for four letters, one more per extra letter.
pub fn score(word: &str) -> u32 {
    let letters = word.chars().count() as u32;
    letters.saturating_sub(3)
}

/// An accepted word credited to a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WordClaim {
    /// The uppercase word.
    word: String,
    /// Who found it.
    player: Player,
}

impl WordClaim {
    /// Creates a claim.
    pub fn new(word: impl Into<String>, player: Player) -> Self {
        Self {
            word: word.into(),
            player,
        }
    }

    /// Points this claim is worth.
    pub fn score(&self) -> u32 {
        score(&self.word)
    }
}

impl std::fmt::Display for WordClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, +{})", self.word, self.player, self.score())
    }
}

/// Words already scored this round, shared by both turns.
///
/// Only grows during a round; a new round starts with a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedWords {
    words: BTreeSet<String>,
}

impl ClaimedWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the word was already claimed.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Claims a word. Returns false if it was already claimed.
    #[instrument(skip(self))]
    pub fn claim(&mut self, word: &str) -> bool {
        let fresh = self.words.insert(word.to_string());
        debug!(fresh, total = self.words.len(), "Claim recorded");
        fresh
    }

    /// Number of claimed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Claimed words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ClaimedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Running totals per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Words credited.
    words: usize,
    /// Points earned.
    points: u32,
}

/// Score totals for both players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: Tally,
    computer: Tally,
}

impl Scoreboard {
    /// Totals a list of claims.
    pub fn from_claims<'a>(claims: impl IntoIterator<Item = &'a WordClaim>) -> Self {
        let mut board = Self::default();
        for claim in claims {
            board.record(claim);
        }
        board
    }

    /// Adds a claim to the totals.
    pub fn record(&mut self, claim: &WordClaim) {
        let tally = match claim.player {
            Player::Human => &mut self.human,
            Player::Computer => &mut self.computer,
        };
        tally.words += 1;
        tally.points += claim.score();
    }

    /// Totals for one player.
    pub fn tally(&self, player: Player) -> Tally {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }
}

//! Dictionary capability used by both searches.
//!
//! The searches only ever ask two questions: is this string a word, and
//! could it still grow into one. Any backing structure that answers both
//! works; [`TrieLexicon`] is the one the game ships with.

use super::error::LexiconError;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Word and prefix membership oracle.
///
/// Both queries are case-insensitive and total: any string, including the
/// empty string, gets an answer. The empty string is a prefix of every word.
pub trait Lexicon {
    /// Returns true if `word` is a complete dictionary word.
    fn contains_word(&self, word: &str) -> bool;

    /// Returns true if some dictionary word starts with `prefix`.
    fn contains_prefix(&self, prefix: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        (**self).contains_prefix(prefix)
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

/// Prefix tree of uppercase words.
#[derive(Debug, Clone, Default)]
pub struct TrieLexicon {
    root: TrieNode,
    len: usize,
}

impl TrieLexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Reads a newline-separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped, as are lines
    /// that are not valid UTF-8. Only read failures are errors.
    #[instrument(skip(reader))]
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        for (index, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            let Ok(line) = std::str::from_utf8(&bytes) else {
                warn!(line = index + 1, "Skipping dictionary line that is not UTF-8");
                continue;
            };
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            lexicon.insert(entry);
        }
        debug!(words = lexicon.len, "Word list read");
        Ok(lexicon)
    }

    /// Loads a word list from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            LexiconError::new(format!("Failed to open dictionary {}: {}", path.display(), e))
        })?;
        let lexicon = Self::from_reader(std::io::BufReader::new(file))?;
        if lexicon.is_empty() {
            return Err(LexiconError::new(format!(
                "Dictionary {} contains no words",
                path.display()
            )));
        }
        info!(words = lexicon.len, "Dictionary loaded");
        Ok(lexicon)
    }

    /// Adds a word. Returns false if it was empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        let mut letters = 0;
        for c in word.trim().chars().flat_map(char::to_uppercase) {
            node = node.children.entry(c).or_default();
            letters += 1;
        }
        if letters == 0 || node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in s.chars().flat_map(char::to_uppercase) {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl Lexicon for TrieLexicon {
    fn contains_word(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieLexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

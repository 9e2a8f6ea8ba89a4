//! Cross-checks between tracing, enumeration and the validity gate.

use std::collections::BTreeSet;

use boggle_core::{
    AcceptableWord, Board, ClaimedWords, Coordinate, Lexicon, PrefixPruning, Rejection,
    TrieLexicon, WordEnumerator, find_all_words, is_adjacent, is_traceable, is_valid, trace_all,
};

/// Sorted-set dictionary, to check the searches only rely on the trait.
struct SortedWords(BTreeSet<String>);

impl SortedWords {
    fn new(words: &[&str]) -> Self {
        Self(words.iter().map(|w| w.to_uppercase()).collect())
    }
}

impl Lexicon for SortedWords {
    fn contains_word(&self, word: &str) -> bool {
        self.0.contains(&word.to_uppercase())
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_uppercase();
        self.0
            .range(prefix.clone()..)
            .next()
            .is_some_and(|word| word.starts_with(&prefix))
    }
}

const WORDS: &[&str] = &[
    "CATS", "CAT", "CORE", "CORN", "RATE", "RATES", "TEAR", "TEARS", "STAR", "STARE", "SNORE",
    "NOTE", "NOTES", "TONE", "STONE", "REST", "SEAT", "EAST", "EATS", "TRACE", "CRATE", "ACRE",
    "SCARE", "ZEBRA", "NEST", "RENT", "TERN", "ONSET", "ORATE", "ROSE",
];

fn cats_board() -> Board {
    Board::from_rows(&[
        ["C", "A", "T", "S"],
        ["O", "R", "E", "N"],
        ["X", "X", "X", "X"],
        ["X", "X", "X", "X"],
    ])
    .unwrap()
}

fn dense_board() -> Board {
    Board::from_rows(&[
        ["S", "T", "A", "R"],
        ["E", "O", "N", "C"],
        ["R", "A", "T", "E"],
        ["N", "S", "E", "O"],
    ])
    .unwrap()
}

fn small_board() -> Board {
    Board::from_rows(&[["R", "A", "T"], ["S", "E", "O"], ["N", "C", "T"]]).unwrap()
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

// ─────────────────────────────────────────────────────────────
//  End-to-end scenarios
// ─────────────────────────────────────────────────────────────

#[test]
fn test_scenario_short_word_rejected_long_word_accepted() {
    let board = cats_board();
    let lex = TrieLexicon::from_words(["CAT", "CATS"]);
    let claimed = ClaimedWords::new();

    assert!(!is_valid("CAT", &board, &lex, &claimed));
    let path = AcceptableWord::check("CATS", &board, &lex, &claimed).expect("CATS is valid");
    assert_eq!(
        path.cells(),
        &[
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 2),
            Coordinate::new(0, 3)
        ]
    );
}

#[test]
fn test_scenario_second_claim_rejected() {
    let board = cats_board();
    let lex = TrieLexicon::from_words(["CAT", "CATS"]);
    let mut claimed = ClaimedWords::new();

    assert!(is_valid("CATS", &board, &lex, &claimed));
    claimed.claim("CATS");

    assert_eq!(
        AcceptableWord::check("CATS", &board, &lex, &claimed),
        Err(Rejection::AlreadyClaimed("CATS".to_string()))
    );
    assert!(is_traceable(&board, "CATS"), "path still exists");
}

#[test]
fn test_scenario_absent_letter_never_traces() {
    let board = cats_board();
    assert!(trace_all(&board, "ZEBRA").is_empty());
    let lex = TrieLexicon::from_words(["ZEBRA"]);
    assert_eq!(
        AcceptableWord::check("ZEBRA", &board, &lex, &ClaimedWords::new()),
        Err(Rejection::NotOnBoard("ZEBRA".to_string()))
    );
}

#[test]
fn test_scenario_nothing_to_find() {
    let board = Board::from_rows(&[["X", "X"], ["X", "X"]]).unwrap();
    let lex = TrieLexicon::from_words(WORDS);
    let mut claimed = ClaimedWords::new();
    assert!(find_all_words(&board, &lex, &mut claimed).is_empty());
    assert!(claimed.is_empty());

    let empty = TrieLexicon::new();
    assert!(find_all_words(&cats_board(), &empty, &mut claimed).is_empty());
}

// ─────────────────────────────────────────────────────────────
//  Properties
// ─────────────────────────────────────────────────────────────

#[test]
fn test_every_traced_path_is_valid() {
    let board = dense_board();
    for word in WORDS {
        for path in trace_all(&board, word) {
            assert_eq!(board.spell(&path), *word);
            let unique: BTreeSet<Coordinate> = path.cells().iter().copied().collect();
            assert_eq!(unique.len(), path.len(), "{} repeats a cell in {}", word, path);
            for pair in path.cells().windows(2) {
                assert!(is_adjacent(pair[0], pair[1]), "{} jumps in {}", word, path);
            }
        }
    }
}

#[test]
fn test_enumeration_agrees_with_tracing() {
    for board in [cats_board(), dense_board(), small_board()] {
        let lex = TrieLexicon::from_words(WORDS);
        let pre_claimed = ["RATE", "NOTE"];
        let mut claimed: ClaimedWords = pre_claimed.into_iter().collect();

        let found: BTreeSet<String> = find_all_words(&board, &lex, &mut claimed)
            .into_iter()
            .collect();

        let expected: BTreeSet<String> = WORDS
            .iter()
            .filter(|w| w.len() >= 4)
            .filter(|w| !pre_claimed.contains(*w))
            .filter(|w| is_traceable(&board, w))
            .map(|w| w.to_string())
            .collect();

        assert_eq!(found, expected, "board:\n{}", board);
    }
}

#[test]
fn test_enumeration_reports_each_word_once() {
    let board = dense_board();
    let lex = TrieLexicon::from_words(WORDS);
    let words = find_all_words(&board, &lex, &mut ClaimedWords::new());
    let unique: BTreeSet<&String> = words.iter().collect();
    assert_eq!(unique.len(), words.len());
    assert!(!words.is_empty());
}

#[test]
fn test_pruning_does_not_change_results() {
    let lex = TrieLexicon::from_words(WORDS);
    let boards = [
        small_board(),
        Board::from_rows(&[["S", "T", "A", "R"], ["E", "O", "N", "E"]]).unwrap(),
    ];
    for board in boards {
        let pruned = WordEnumerator::new(&board, &lex)
            .with_pruning(PrefixPruning::Enabled)
            .enumerate(&mut ClaimedWords::new())
            .into_words();
        let exhaustive = WordEnumerator::new(&board, &lex)
            .with_pruning(PrefixPruning::Disabled)
            .enumerate(&mut ClaimedWords::new())
            .into_words();
        assert_eq!(sorted(pruned), sorted(exhaustive), "board:\n{}", board);
    }
}

#[test]
fn test_backing_structure_does_not_matter() {
    let trie = TrieLexicon::from_words(WORDS);
    let set = SortedWords::new(WORDS);
    let board = dense_board();

    let from_trie = find_all_words(&board, &trie, &mut ClaimedWords::new());
    let from_set = find_all_words(&board, &set, &mut ClaimedWords::new());
    assert_eq!(from_trie, from_set, "same discovery order expected");

    for word in WORDS {
        assert_eq!(
            is_valid(word, &board, &trie, &ClaimedWords::new()),
            is_valid(word, &board, &set, &ClaimedWords::new()),
            "{}",
            word
        );
    }
}

#[test]
fn test_rejection_after_claim_is_idempotent() {
    let board = dense_board();
    let lex = TrieLexicon::from_words(WORDS);
    let mut claimed = ClaimedWords::new();

    assert!(is_valid("STAR", &board, &lex, &claimed));
    claimed.claim("STAR");
    for _ in 0..2 {
        assert_eq!(
            AcceptableWord::check("star", &board, &lex, &claimed),
            Err(Rejection::AlreadyClaimed("STAR".to_string()))
        );
    }
}

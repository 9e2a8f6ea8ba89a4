//! Core domain types for Boggle boards.

use super::error::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, 0-indexed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The two board sizes of the physical game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BoardSize {
    /// 4x4, sixteen cubes.
    #[default]
    Standard,
    /// 5x5 "Big Boggle", twenty-five cubes.
    Big,
}

impl BoardSize {
    /// Side length of the square board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Standard => 4,
            BoardSize::Big => 5,
        }
    }

    /// Number of cells on the board.
    pub fn cells(self) -> usize {
        self.side() * self.side()
    }
}

/// Rectangular grid of letter tokens.
///
/// A token is usually one letter but may be longer (`QU`). Tokens are
/// stored uppercase. Dimensions never change after construction.
/// Deserialization goes through [`Board::new`], so it is validated too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Tokens in row-major order.
    tokens: Vec<String>,
}

/// Serialized board fields before validation.
#[derive(Deserialize)]
struct BoardParts {
    rows: usize,
    cols: usize,
    tokens: Vec<String>,
}

impl TryFrom<BoardParts> for Board {
    type Error = BoardError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        Board::new(parts.rows, parts.cols, parts.tokens)
    }
}

impl Board {
    /// Creates a board from row-major tokens.
    ///
    /// Tokens are uppercased. Fails if the count does not match the
    /// dimensions or any token is empty.
    #[instrument(skip(tokens), fields(token_count = tokens.len()))]
    pub fn new(rows: usize, cols: usize, tokens: Vec<String>) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::new(BoardErrorKind::EmptyDimensions));
        }
        if tokens.len() != rows * cols {
            return Err(BoardError::new(BoardErrorKind::WrongTokenCount {
                rows,
                cols,
                found: tokens.len(),
            }));
        }

        let tokens: Vec<String> = tokens.into_iter().map(|t| t.trim().to_uppercase()).collect();
        if let Some(index) = tokens.iter().position(|t| t.is_empty()) {
            return Err(BoardError::new(BoardErrorKind::EmptyToken(Coordinate::new(
                index / cols,
                index % cols,
            ))));
        }

        Ok(Self { rows, cols, tokens })
    }

    /// Creates a board from nested rows, e.g. `[["C", "A"], ["T", "S"]]`.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut tokens = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(BoardError::new(BoardErrorKind::WrongTokenCount {
                    rows: rows.len(),
                    cols,
                    found: tokens.len() + row.len(),
                }));
            }
            tokens.extend(row.iter().map(|t| t.as_ref().to_string()));
        }
        Self::new(rows.len(), cols, tokens)
    }

    /// Builds a square board from a user-typed configuration.
    ///
    /// If the input holds exactly one whitespace-separated token per cell,
    /// each token fills a cell (so `QU` can be entered). Otherwise every
    /// letter fills one cell in row-major order and extra letters are
    /// dropped.
    #[instrument(fields(size = %size))]
    pub fn from_letters(config: &str, size: BoardSize) -> Result<Self, BoardError> {
        let needed = size.cells();

        let words: Vec<&str> = config.split_whitespace().collect();
        if words.len() == needed && needed > 1 {
            let tokens = words.into_iter().map(str::to_string).collect();
            return Self::new(size.side(), size.side(), tokens);
        }

        let letters: Vec<String> = config
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .map(String::from)
            .collect();
        if letters.len() < needed {
            return Err(BoardError::new(BoardErrorKind::TooShort {
                needed,
                given: letters.len(),
            }));
        }

        let tokens = letters.into_iter().take(needed).collect();
        Self::new(size.side(), size.side(), tokens)
    }

    /// Creates a board from tokens already known to fit.
    pub(crate) fn from_parts(rows: usize, cols: usize, tokens: Vec<String>) -> Self {
        debug_assert_eq!(tokens.len(), rows * cols);
        debug_assert!(tokens.iter().all(|t| !t.is_empty()));
        Self { rows, cols, tokens }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Token at the given cell, if it is on the board.
    pub fn token(&self, cell: Coordinate) -> Option<&str> {
        if self.contains(cell) {
            Some(&self.tokens[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }

    /// Tokens grouped by row.
    pub fn token_rows(&self) -> Vec<Vec<String>> {
        self.tokens.chunks(self.cols).map(<[String]>::to_vec).collect()
    }

    /// Concatenates the tokens along a path.
    pub fn spell(&self, path: &Path) -> String {
        path.cells()
            .iter()
            .filter_map(|cell| self.token(*cell))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.tokens.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|t| format!("{:<2}", t)).collect();
            write!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Ordered, repetition-free sequence of adjacent cells spelling a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<Coordinate>,
}

impl Path {
    /// The cells in order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for the empty path.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the path visits the cell.
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(cells: Vec<Coordinate>) -> Self {
        Self { cells }
    }
}

impl From<&[Coordinate]> for Path {
    fn from(cells: &[Coordinate]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}

//! Letter cubes and the random "shake" that lays them out.

use super::types::{Board, BoardSize};
use rand::Rng;
use tracing::{debug, instrument};

/// The sixteen cubes of the 4x4 game.
pub const STANDARD_CUBES: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// The twenty-five cubes of the 5x5 game.
pub const BIG_CUBES: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCNSTW", "CEIILT", "CEILPT", "CEIPST", "DDLNOR", "DDHNOT", "DHHLOR", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU",
];

impl BoardSize {
    /// The cube set for this size.
    pub fn cubes(self) -> &'static [&'static str] {
        match self {
            BoardSize::Standard => &STANDARD_CUBES,
            BoardSize::Big => &BIG_CUBES,
        }
    }
}

/// How a rolled `Q` face is written on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QFace {
    /// `Q` becomes the two-letter token `QU`.
    #[default]
    Qu,
    /// `Q` stays a bare `Q`.
    Bare,
}

/// Shakes the cubes: one random face per cube, then every position
/// swapped with a random position in row-major order.
#[instrument(skip(rng))]
pub fn roll<R: Rng + ?Sized>(size: BoardSize, rng: &mut R, q_face: QFace) -> Board {
    let mut tokens: Vec<String> = size
        .cubes()
        .iter()
        .map(|cube| {
            let faces: Vec<char> = cube.chars().collect();
            let face = faces[rng.gen_range(0..faces.len())];
            match (face, q_face) {
                ('Q', QFace::Qu) => "QU".to_string(),
                (face, _) => face.to_string(),
            }
        })
        .collect();

    for i in 0..tokens.len() {
        let j = rng.gen_range(0..tokens.len());
        tokens.swap(i, j);
    }

    let board = Board::from_parts(size.side(), size.side(), tokens);
    debug!(board = %board, "Rolled board");
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_roll_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [BoardSize::Standard, BoardSize::Big] {
            let board = roll(size, &mut rng, QFace::Qu);
            assert_eq!(board.rows(), size.side());
            assert_eq!(board.cell_count(), size.cells());
            assert!(board.coordinates().all(|c| board.token(c).is_some_and(|t| !t.is_empty())));
        }
    }

    #[test]
    fn test_roll_is_deterministic_for_seed() {
        let a = roll(BoardSize::Standard, &mut StdRng::seed_from_u64(42), QFace::Qu);
        let b = roll(BoardSize::Standard, &mut StdRng::seed_from_u64(42), QFace::Qu);
        assert_eq!(a, b);
    }

    #[test]
    fn test_faces_come_from_the_cube_set() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = roll(BoardSize::Standard, &mut rng, QFace::Bare);
        for cell in board.coordinates() {
            let face = board.token(cell).and_then(|t| t.chars().next()).unwrap();
            assert!(
                STANDARD_CUBES.iter().any(|cube| cube.contains(face)),
                "{} is on no standard cube",
                face
            );
        }
    }

    #[test]
    fn test_q_face_setting() {
        // BJKQXZ is the only big cube with a Q; roll until it shows.
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen_qu = false;
        for _ in 0..200 {
            let board = roll(BoardSize::Big, &mut rng, QFace::Qu);
            let tokens: Vec<&str> = board.coordinates().filter_map(|c| board.token(c)).collect();
            assert!(!tokens.contains(&"Q"));
            seen_qu |= tokens.contains(&"QU");
        }
        assert!(seen_qu);
    }
}

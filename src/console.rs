//! Line-based terminal presentation.
//!
//! Reads from any `BufRead` and writes to any `Write`, so a whole game can
//! be scripted in tests.

use boggle_core::{Board, Coordinate, Path, Player, RoundComplete, RoundObserver, WordClaim};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{instrument, warn};

const WELCOME: &str = "Welcome to Boggle! You are about to match wits with a computer \
that has read the whole dictionary. Good luck.";

const INSTRUCTIONS: &str = "The board is a grid of letter cubes. Find words by tracing \
letters that touch horizontally, vertically or diagonally, using each cube at most once \
per word. Words need at least four letters and count only once. A four-letter word \
scores one point, and each extra letter adds another. You go first; when you run out, \
the computer finds everything you missed.";

/// Renders the board, bracketing highlighted cells.
pub fn render_board(board: &Board, highlight: &[Coordinate]) -> String {
    let mut lines = Vec::with_capacity(board.rows());
    for row in 0..board.rows() {
        let mut line = String::new();
        for col in 0..board.cols() {
            let cell = Coordinate::new(row, col);
            let token = board.token(cell).unwrap_or("?");
            if highlight.contains(&cell) {
                line.push_str(&format!("[{:<2}]", token));
            } else {
                line.push_str(&format!(" {:<2} ", token));
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Terminal front end for a game session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `pause` is how long a found word stays highlighted.
    pub fn new(input: R, output: W, pause: Duration) -> Self {
        Self {
            input,
            output,
            pause,
        }
    }

    /// Returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Shows a prompt and reads one line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks a question; only `yes` (any case) counts as yes.
    pub fn ask_yes(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    /// Greets the player.
    pub fn welcome(&mut self) -> io::Result<()> {
        self.say(WELCOME)?;
        self.say("")
    }

    /// Explains the rules and waits for return.
    pub fn instructions(&mut self) -> io::Result<()> {
        self.say(INSTRUCTIONS)?;
        self.read_line("\nHit return when you're ready...")?;
        Ok(())
    }

    /// Draws the board.
    pub fn show_board(&mut self, board: &Board, highlight: &[Coordinate]) -> io::Result<()> {
        self.say("")?;
        self.say(render_board(board, highlight))?;
        self.say("")
    }

    /// Prints both players' words and the final score.
    #[instrument(skip_all)]
    pub fn show_results(&mut self, round: &RoundComplete) -> io::Result<()> {
        let scores = round.scoreboard();
        self.say("")?;
        for player in [Player::Human, Player::Computer] {
            let tally = scores.tally(player);
            let mut words = round.words_for(player);
            words.sort_unstable();
            self.say(format!(
                "{}: {} words, {} points",
                player,
                tally.words(),
                tally.points()
            ))?;
            if !words.is_empty() {
                self.say(format!("  {}", words.join(" ")))?;
            }
        }
        Ok(())
    }

    fn highlight(&mut self, board: &Board, word: &str, path: &Path) -> io::Result<()> {
        self.say(format!("\n{}:", word))?;
        self.say(render_board(board, path.cells()))?;
        self.output.flush()?;
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> RoundObserver for Console<R, W> {
    fn path_found(&mut self, board: &Board, word: &str, path: &Path) {
        if let Err(e) = self.highlight(board, word, path) {
            warn!(error = %e, "Failed to show path");
        }
    }

    fn word_recorded(&mut self, claim: &WordClaim) {
        let line = format!(
            "  {:<8} +{}  {}",
            claim.player().to_string(),
            claim.score(),
            claim.word()
        );
        if let Err(e) = self.say(line) {
            warn!(error = %e, "Failed to show word");
        }
    }
}

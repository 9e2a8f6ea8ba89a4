//! Interactive game session: rounds played over a [`Console`].

use crate::config::GameConfig;
use crate::console::Console;
use boggle_core::{Board, HumanTurn, Lexicon, RoundComplete, RoundSetup, Scoreboard, TrieLexicon};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Loads the dictionary, asking for another path while loading fails.
///
/// Returns `None` if the player gives up with an empty line or end of input.
#[instrument(skip(console, path), fields(path = %path.display()))]
pub fn open_dictionary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: PathBuf,
) -> io::Result<Option<TrieLexicon>> {
    let mut path = path;
    loop {
        match TrieLexicon::load(&path) {
            Ok(lexicon) => {
                info!(words = lexicon.len(), path = %path.display(), "Dictionary loaded");
                return Ok(Some(lexicon));
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Dictionary failed to load");
                console.say(format!(
                    "I couldn't read the dictionary at {}: {}",
                    path.display(),
                    e.message
                ))?;
            }
        }

        match console.read_line("Enter another dictionary path (ENTER to quit): ")? {
            Some(line) if !line.trim().is_empty() => path = PathBuf::from(line.trim()),
            _ => return Ok(None),
        }
    }
}

/// Plays rounds until the player declines another.
pub struct GameSession<'a, L: ?Sized, R, W> {
    config: &'a GameConfig,
    lexicon: &'a L,
    console: Console<R, W>,
    rng: StdRng,
}

impl<'a, L, R, W> GameSession<'a, L, R, W>
where
    L: Lexicon + ?Sized,
    R: BufRead,
    W: Write,
{
    /// Creates a session. A configured seed makes rolled boards repeatable.
    pub fn new(config: &'a GameConfig, lexicon: &'a L, console: Console<R, W>) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            lexicon,
            console,
            rng,
        }
    }

    /// Returns the console, for inspecting scripted output.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Greets the player and plays until they stop. Returns each round's score.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<Vec<Scoreboard>> {
        self.console.welcome()?;
        self.console.instructions()?;

        let mut results = Vec::new();
        let mut setup = RoundSetup::new();
        loop {
            let done = self.play_round(setup)?;
            results.push(done.scoreboard());

            if !self.console.ask_yes("\nWould you like to play again? ")? {
                break;
            }
            setup = done.restart();
        }

        info!(rounds = results.len(), "Session over");
        self.console.say("\nThanks for playing!")?;
        Ok(results)
    }

    /// Plays one round from board setup to final scores.
    #[instrument(skip(self, setup))]
    pub fn play_round(&mut self, setup: RoundSetup) -> io::Result<RoundComplete> {
        let mut human = self.set_up_board(setup)?;
        self.console.show_board(human.board(), &[])?;
        self.human_turn(&mut human)?;

        self.console.say("\nMy turn. Here is everything you missed:")?;
        let done = human.finish().play(
            self.lexicon,
            self.config.computer_limits(),
            &mut self.console,
        );
        if *done.truncated() {
            self.console.say("(I ran out of time before checking every path.)")?;
        }

        self.console.show_results(&done)?;
        Ok(done)
    }

    fn set_up_board(&mut self, setup: RoundSetup) -> io::Result<HumanTurn> {
        if self.console.ask_yes("Would you like to configure the board? ")? {
            match self.prompt_board()? {
                Some(board) => return Ok(setup.with_board(board)),
                None => warn!("No configuration entered, rolling instead"),
            }
        }
        Ok(setup.roll(*self.config.board_size(), &mut self.rng, self.config.q_face()))
    }

    fn prompt_board(&mut self) -> io::Result<Option<Board>> {
        let size = *self.config.board_size();
        let prompt = format!(
            "Enter {} letters, row by row (separate with spaces to use QU): ",
            size.cells()
        );
        loop {
            let Some(line) = self.console.read_line(&prompt)? else {
                return Ok(None);
            };
            match Board::from_letters(&line, size) {
                Ok(board) => return Ok(Some(board)),
                Err(e) if e.is_too_short() => {
                    self.console
                        .say(format!("That's not enough: {}. Try again.", e.kind))?;
                }
                Err(e) => {
                    self.console.say(format!("{}. Try again.", e.kind))?;
                }
            }
        }
    }

    fn human_turn(&mut self, human: &mut HumanTurn) -> io::Result<()> {
        loop {
            let Some(line) = self
                .console
                .read_line("Enter a word (ENTER when you're done): ")?
            else {
                return Ok(());
            };
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }

            if let Err(reason) = human.submit(word, self.lexicon, &mut self.console) {
                self.console
                    .say(format!("Sorry, that word is invalid: {}.", reason))?;
            }
        }
    }
}

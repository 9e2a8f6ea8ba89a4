//! Boggle library - terminal game built on `boggle_core`
//!
//! # Architecture
//!
//! - **Config**: TOML game settings with CLI overrides
//! - **Console**: line-based presentation over any reader and writer
//! - **Session**: the interactive round loop
//! - **Report**: non-interactive solve and check output
//!
//! # Example
//!
//! ```
//! use boggle::{Console, GameConfig, GameSession};
//! use boggle_core::TrieLexicon;
//! use std::time::Duration;
//!
//! let config = GameConfig::default().with_seed(7);
//! let lexicon = TrieLexicon::from_words(["RATE", "TEAR"]);
//! let script = "\nno\n\nno\n";
//! let console = Console::new(script.as_bytes(), Vec::new(), Duration::ZERO);
//!
//! let mut session = GameSession::new(&config, &lexicon, console);
//! let rounds = session.run().unwrap();
//! assert_eq!(rounds.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod report;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Presentation
pub use console::{Console, render_board};

// Crate-level exports - Reports
pub use report::{CheckOutcome, ScoredWord, SolveReport, check_words};

// Crate-level exports - Session
pub use session::{GameSession, open_dictionary};

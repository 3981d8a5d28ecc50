//! Line-oriented interactive prompts.
//!
//! `asker` asks a human a question over a text stream and returns a validated
//! answer. There are two kinds of question:
//!
//! - [`Ui::ask`] - free text, with defaults, required answers, validators and
//!   masked (unechoed) input
//! - [`Ui::select`] - pick one item of a list, by 1-based number or by exact
//!   text
//!
//! # Quick Start
//!
//! ```no_run
//! use asker::{Options, Ui};
//!
//! let mut ui = Ui::stdio();
//!
//! let name = ui.ask("What is your name?", &Options::new().default("alan").looping(true))?;
//! let (lang, index) = ui.select(
//!     "Which language do you prefer to use?",
//!     &["go", "Go", "golang"],
//!     &Options::new().default("Go"),
//! )?;
//! # Ok::<(), asker::AskError>(())
//! ```
//!
//! # Features
//!
//! - **`terminal`** (default) - Enable [`RawTerminal`] echo control and
//!   [`Ui::stdio`]
//!
//! # Architecture
//!
//! Reading and deciding are kept apart. A [`LineSource`] produces raw lines;
//! [`resolve_answer`] and [`Selection::resolve`] are pure functions from a
//! line to an answer or an [`AskError`]; [`Ui`] runs the loop between them
//! and owns the retry policy.
//!
//! ```text
//! Ui::ask / Ui::select
//! ├── EchoGuard        (masked reads only)
//! ├── LineSource       → raw line
//! └── resolver         → answer | retryable error | terminal error
//! ```
//!
//! # Testing
//!
//! Any `Read` works as input, and [`MockEcho`] stands in for a terminal:
//!
//! ```
//! use asker::{MockEcho, Options, Ui};
//!
//! let echo = MockEcho::terminal();
//! let mut ui = Ui::new("hunter2\n".as_bytes(), Vec::new()).with_echo_control(echo.clone());
//! let secret = ui.ask("Password?", &Options::new().mask(true)).unwrap();
//! assert_eq!(secret, "hunter2");
//! assert!(!echo.is_disabled());
//! ```

mod echo;
mod error;
mod interrupt;
mod line;
mod options;
mod resolve;
mod select;
mod ui;

pub use echo::{EchoControl, EchoGuard, MockEcho, NoEcho};
pub use error::AskError;
pub use interrupt::{InterruptibleSource, Interrupter};
pub use line::{trim_terminator, LineReader, LineSource};
pub use options::{Options, Validator};
pub use resolve::resolve_answer;
pub use select::Selection;
pub use ui::Ui;

#[cfg(feature = "terminal")]
pub use echo::RawTerminal;

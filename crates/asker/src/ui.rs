//! The caller-facing prompts.

use std::io::{self, Read, Write};

use crate::echo::{EchoControl, EchoGuard, NoEcho};
use crate::interrupt::{InterruptibleSource, Interrupter};
use crate::line::{LineReader, LineSource};
use crate::resolve::resolve_answer;
use crate::select::Selection;
use crate::{AskError, Options};

/// Asks questions over a pair of streams.
///
/// Every call is independent: it writes the question, then reads lines until
/// one is accepted. In loop mode invalid answers are reported on the writer
/// and the question is asked again, without limit; otherwise the first invalid
/// answer is returned as an error. End of input and interruption always end
/// the call.
///
/// # Example
///
/// ```
/// use asker::{Options, Ui};
///
/// let mut out = Vec::new();
/// let mut ui = Ui::new("\n".as_bytes(), &mut out);
/// let name = ui
///     .ask("What is your name?", &Options::new().default("alan").required(true))
///     .unwrap();
/// assert_eq!(name, "alan");
/// ```
pub struct Ui<W: Write> {
    source: Box<dyn LineSource>,
    writer: W,
    echo: Box<dyn EchoControl>,
}

impl<W: Write> Ui<W> {
    /// Prompt on `writer`, reading answers from `reader`.
    ///
    /// The reader is not treated as a terminal, so masking has no effect
    /// until an echo control is set with [`with_echo_control`](Self::with_echo_control).
    pub fn new<R>(reader: R, writer: W) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::with_source(LineReader::new(reader), writer)
    }

    /// Prompt with a custom line source.
    pub fn with_source<S>(source: S, writer: W) -> Self
    where
        S: LineSource + 'static,
    {
        Self {
            source: Box::new(source),
            writer,
            echo: Box::new(NoEcho),
        }
    }

    /// Like [`new`](Self::new), but reads on a worker thread so a pending
    /// prompt can be aborted through the returned [`Interrupter`].
    pub fn interruptible<R>(reader: R, writer: W) -> (Self, Interrupter)
    where
        R: Read + Send + 'static,
    {
        let (source, interrupter) = InterruptibleSource::spawn(LineReader::new(reader));
        (Self::with_source(source, writer), interrupter)
    }

    /// Control echo through `echo` when masked input is requested.
    pub fn with_echo_control<E>(mut self, echo: E) -> Self
    where
        E: EchoControl + 'static,
    {
        self.echo = Box::new(echo);
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Ask for a free-text answer.
    ///
    /// Writes `query` and a prompt line mentioning the default, then resolves
    /// each line with [`resolve_answer`].
    pub fn ask(&mut self, query: &str, opts: &Options) -> Result<String, AskError> {
        writeln!(self.writer, "{}", query)?;
        let prompt = ask_prompt_line(opts);

        loop {
            let raw = self.prompt_and_read(&prompt, opts.mask)?;
            match resolve_answer(&raw, opts) {
                Ok(answer) => return Ok(answer),
                Err(err) => self.reject(err, opts)?,
            }
        }
    }

    /// Ask the user to pick one of `items`.
    ///
    /// Returns the chosen item and its zero-based index. The defaults in
    /// `opts` are checked before anything is written or read; a bad default
    /// is an error even in loop mode.
    pub fn select<S: AsRef<str>>(
        &mut self,
        query: &str,
        items: &[S],
        opts: &Options,
    ) -> Result<(String, usize), AskError> {
        let selection = Selection::new(items, opts)?;

        write!(self.writer, "{}\n\n{}\n", query, selection.render(opts))?;
        let prompt = selection.prompt_line(opts);

        loop {
            let raw = self.prompt_and_read(&prompt, opts.mask)?;
            match selection.resolve(&raw) {
                Ok(choice) => return Ok(choice),
                Err(err) => self.reject(err, opts)?,
            }
        }
    }

    fn prompt_and_read(&mut self, prompt: &str, masked: bool) -> Result<String, AskError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let guard = EchoGuard::acquire(self.echo.as_mut(), masked)?;
        let hidden = guard.is_active();
        let line = self.source.read_line(masked);
        drop(guard);

        if hidden {
            // The user's Enter was not echoed.
            writeln!(self.writer)?;
        }
        line
    }

    /// Report an invalid answer in loop mode, or give up on it.
    fn reject(&mut self, err: AskError, opts: &Options) -> Result<(), AskError> {
        if !(opts.looping && err.is_retryable()) {
            return Err(err);
        }
        log::debug!("invalid answer, asking again: {}", err);
        write!(self.writer, "{}\n\n", err)?;
        Ok(())
    }
}

#[cfg(feature = "terminal")]
impl Ui<io::Stdout> {
    /// Prompt on the process terminal.
    ///
    /// Masked input switches the terminal to raw mode for the duration of the
    /// read.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout()).with_echo_control(crate::echo::RawTerminal)
    }

    /// Like [`stdio`](Self::stdio), with an [`Interrupter`] for signal
    /// handlers.
    pub fn stdio_interruptible() -> (Self, Interrupter) {
        let (ui, interrupter) = Self::interruptible(io::stdin(), io::stdout());
        (ui.with_echo_control(crate::echo::RawTerminal), interrupter)
    }
}

fn ask_prompt_line(opts: &Options) -> String {
    match opts.default.as_deref().and_then(|d| opts.default_hint(d)) {
        Some(hint) => format!("Enter a value (Default is {}): ", hint),
        None => "Enter a value: ".to_string(),
    }
}

//! Terminal echo control for masked input.
//!
//! Echo is switched off only for the duration of one read, through
//! [`EchoGuard`]. Dropping the guard switches it back on, whichever way the
//! read ended.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Abstraction over terminal echo for testability.
pub trait EchoControl: Send {
    /// Whether the input stream is a terminal whose echo can be controlled.
    fn is_terminal(&self) -> bool;

    /// Stop echoing typed characters.
    fn disable_echo(&mut self) -> io::Result<()>;

    /// Echo typed characters again.
    fn restore_echo(&mut self) -> io::Result<()>;
}

/// Echo control for streams that are not terminals.
///
/// Used for readers handed to [`Ui::new`](crate::Ui::new); masking is then a
/// no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEcho;

impl EchoControl for NoEcho {
    fn is_terminal(&self) -> bool {
        false
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn restore_echo(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Echo control of the process terminal, through crossterm raw mode.
///
/// Raw mode also turns off line editing and signal generation; the line
/// reader handles backspace and Ctrl-C itself while masked.
#[cfg(feature = "terminal")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RawTerminal;

#[cfg(feature = "terminal")]
impl EchoControl for RawTerminal {
    fn is_terminal(&self) -> bool {
        use std::io::IsTerminal;
        io::stdin().is_terminal()
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn restore_echo(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

/// Echo suppression lifetime guard.
///
/// Created for every read. When masking was requested and the control reports
/// a terminal, echo is off until the guard is dropped.
pub struct EchoGuard<'a> {
    control: &'a mut dyn EchoControl,
    active: bool,
}

impl<'a> EchoGuard<'a> {
    pub fn acquire(control: &'a mut dyn EchoControl, masked: bool) -> io::Result<Self> {
        let active = masked && control.is_terminal();
        if active {
            control.disable_echo()?;
            log::trace!("echo disabled");
        }
        Ok(Self { control, active })
    }

    /// Whether echo is currently suppressed by this guard.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for EchoGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = self.control.restore_echo() {
                log::debug!("failed to restore echo: {}", e);
            } else {
                log::trace!("echo restored");
            }
        }
    }
}

/// Mock echo control for testing.
///
/// Clones share state, so a test can keep one handle and give the other to a
/// [`Ui`](crate::Ui).
#[derive(Debug, Clone)]
pub struct MockEcho {
    is_terminal: bool,
    disabled: Arc<AtomicBool>,
    disable_count: Arc<AtomicUsize>,
}

impl MockEcho {
    /// A mock terminal with echo on.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            disabled: Arc::new(AtomicBool::new(false)),
            disable_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A mock that is not a terminal; masking never touches it.
    pub fn non_terminal() -> Self {
        Self {
            is_terminal: false,
            ..Self::terminal()
        }
    }

    /// Whether echo is currently off.
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    /// How many times echo has been switched off.
    pub fn disable_count(&self) -> usize {
        self.disable_count.load(Ordering::SeqCst)
    }
}

impl EchoControl for MockEcho {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        self.disabled.store(true, Ordering::SeqCst);
        self.disable_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore_echo(&mut self) -> io::Result<()> {
        self.disabled.store(false, Ordering::SeqCst);
        Ok(())
    }
}

//! Interruptible line reading.
//!
//! A blocking `read` cannot be cancelled from another thread, so the reader is
//! moved onto a worker thread. The worker and every [`Interrupter`] post into
//! the same channel; the prompting thread takes whichever event comes first.
//!
//! At most one interrupt is outstanding at a time. Interrupts raised before
//! the previous one was taken collapse into it, so repeated Ctrl-C presses
//! abort one read, not every read that follows.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::line::{LineReader, LineSource};
use crate::AskError;

enum Event {
    Line(Result<String, AskError>),
    Interrupt,
}

/// Handle used to abort a pending prompt.
///
/// Cheap to clone and `Send`, so it can be moved into a signal handler:
///
/// ```ignore
/// let (mut ui, interrupter) = Ui::interruptible(reader, writer);
/// ctrlc::set_handler(move || interrupter.interrupt())?;
/// ```
#[derive(Clone)]
pub struct Interrupter {
    events: Sender<Event>,
    /// An interrupt was posted and not yet taken by a read.
    raised: Arc<AtomicBool>,
}

impl Interrupter {
    /// Abort the read currently in progress, or the next one if none is.
    ///
    /// Calling this again before that read has returned has no further
    /// effect.
    pub fn interrupt(&self) {
        if self.raised.swap(true, Ordering::SeqCst) {
            log::trace!("interrupt already pending");
            return;
        }
        log::debug!("interrupt requested");
        // The prompt side is gone; nothing left to interrupt.
        let _ = self.events.send(Event::Interrupt);
    }
}

/// A [`LineSource`] that reads on a worker thread and can be interrupted.
pub struct InterruptibleSource {
    requests: Sender<()>,
    events: Receiver<Event>,
    raised: Arc<AtomicBool>,
    /// Masking of the question currently waiting, read by the worker per byte.
    masked: Arc<AtomicBool>,
    /// A line was requested and not yet delivered.
    pending: bool,
}

impl InterruptibleSource {
    /// Move `reader` onto a worker thread.
    pub fn spawn<R>(reader: LineReader<R>) -> (Self, Interrupter)
    where
        R: Read + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<()>();
        let (event_tx, event_rx) = mpsc::channel();
        let masked = Arc::new(AtomicBool::new(false));
        let raised = Arc::new(AtomicBool::new(false));

        let worker_tx = event_tx.clone();
        let worker_masked = Arc::clone(&masked);
        thread::spawn(move || {
            let mut reader = reader;
            let is_masked = || worker_masked.load(Ordering::SeqCst);
            for () in request_rx {
                let line = reader.read_line_with(&is_masked);
                if worker_tx.send(Event::Line(line)).is_err() {
                    break;
                }
            }
        });

        let source = Self {
            requests: request_tx,
            events: event_rx,
            raised: Arc::clone(&raised),
            masked,
            pending: false,
        };
        let interrupter = Interrupter {
            events: event_tx,
            raised,
        };
        (source, interrupter)
    }
}

impl LineSource for InterruptibleSource {
    fn read_line(&mut self, masked: bool) -> Result<String, AskError> {
        // A read left over from an interrupted question follows this one's mode.
        self.masked.store(masked, Ordering::SeqCst);

        if !self.pending {
            // A dead worker means the reader is gone for good.
            self.requests
                .send(())
                .map_err(|_| AskError::EndOfInput)?;
            self.pending = true;
        }

        match self.events.recv() {
            Ok(Event::Line(line)) => {
                self.pending = false;
                line
            }
            Ok(Event::Interrupt) => {
                self.raised.store(false, Ordering::SeqCst);
                Err(AskError::Interrupted)
            }
            Err(_) => Err(AskError::EndOfInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineReader;
    use std::io::{self, Read};
    use std::time::Duration;

    /// A reader that never yields data until its sender is dropped.
    struct Blocking(Receiver<u8>);

    impl Read for Blocking {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.recv() {
                Ok(byte) => {
                    buf[0] = byte;
                    Ok(1)
                }
                Err(_) => Ok(0),
            }
        }
    }

    #[test]
    fn reads_lines_through_worker() {
        let (mut source, _interrupter) =
            InterruptibleSource::spawn(LineReader::new("one\ntwo\n".as_bytes()));
        assert_eq!(source.read_line(false).unwrap(), "one");
        assert_eq!(source.read_line(false).unwrap(), "two");
        assert!(matches!(source.read_line(false), Err(AskError::EndOfInput)));
    }

    #[test]
    fn interrupt_unblocks_pending_read() {
        let (_bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            interrupter.interrupt();
        });

        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));
        handle.join().unwrap();
    }

    #[test]
    fn line_after_interrupt_goes_to_next_read() {
        let (bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));

        for byte in b"late\n" {
            bytes_tx.send(*byte).unwrap();
        }
        assert_eq!(source.read_line(false).unwrap(), "late");
    }

    #[test]
    fn repeated_interrupts_abort_one_read() {
        let (bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        interrupter.interrupt();
        interrupter.interrupt();
        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));

        for byte in b"x\n" {
            bytes_tx.send(*byte).unwrap();
        }
        assert_eq!(source.read_line(false).unwrap(), "x");
    }

    #[test]
    fn interrupt_after_one_was_taken_counts_again() {
        let (_bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));
        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));
    }

    #[test]
    fn leftover_read_follows_new_masking() {
        let (bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        // Leaves an unmasked read blocked on the worker.
        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            for byte in b"ab\x03\n" {
                bytes_tx.send(*byte).unwrap();
            }
        });

        assert!(matches!(source.read_line(true), Err(AskError::Interrupted)));
        handle.join().unwrap();
    }

    #[test]
    fn leftover_read_handles_backspace_when_masked() {
        let (bytes_tx, bytes_rx) = mpsc::channel::<u8>();
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new(Blocking(bytes_rx)));

        interrupter.interrupt();
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            for byte in b"pasx\x7fs\n" {
                bytes_tx.send(*byte).unwrap();
            }
        });

        assert_eq!(source.read_line(true).unwrap(), "pass");
        handle.join().unwrap();
    }

    #[test]
    fn interrupt_before_read_is_delivered() {
        let (mut source, interrupter) =
            InterruptibleSource::spawn(LineReader::new("unused\n".as_bytes()));
        interrupter.interrupt();
        // Nothing was requested from the worker yet, so the interrupt is first.
        assert!(matches!(source.read_line(false), Err(AskError::Interrupted)));
    }
}

//! Reading single answer lines from a byte stream.

use std::io::{self, Read};

use crate::AskError;

const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Abstraction over the stream answers are read from.
pub trait LineSource: Send {
    /// Read one line, without its terminator.
    ///
    /// `masked` is set while echo is suppressed. The terminal is then in raw
    /// mode, so control bytes like Ctrl-C and backspace arrive as plain input.
    ///
    /// Returns [`AskError::EndOfInput`] when the stream ends before any byte
    /// was read.
    fn read_line(&mut self, masked: bool) -> Result<String, AskError>;
}

/// Line reader over any [`Read`] implementation.
///
/// Bytes are pulled one at a time so nothing past the terminator is consumed;
/// a later question reads exactly where this one stopped. Both `\n` and `\r`
/// end a line, and a `\r\n` pair counts once.
///
/// # Example
///
/// ```
/// use asker::{LineReader, LineSource};
///
/// let mut reader = LineReader::new("first\r\nsecond\n".as_bytes());
/// assert_eq!(reader.read_line(false).unwrap(), "first");
/// assert_eq!(reader.read_line(false).unwrap(), "second");
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    /// The previous line ended in `\r`; a leading `\n` belongs to it.
    after_cr: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            after_cr: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read + Send> LineSource for LineReader<R> {
    fn read_line(&mut self, masked: bool) -> Result<String, AskError> {
        self.read_line_with(&|| masked)
    }
}

impl<R: Read> LineReader<R> {
    /// Read one line, checking `masked` again for every control byte.
    ///
    /// Lets a read that was started unmasked pick up a masked question that
    /// is now waiting on it.
    pub(crate) fn read_line_with(&mut self, masked: &dyn Fn() -> bool) -> Result<String, AskError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut read_any = false;

        loop {
            let Some(byte) = self.next_byte()? else {
                self.after_cr = false;
                if !read_any {
                    return Err(AskError::EndOfInput);
                }
                break;
            };

            if !read_any && std::mem::take(&mut self.after_cr) && byte == b'\n' {
                continue;
            }
            read_any = true;

            match byte {
                b'\n' => break,
                b'\r' => {
                    self.after_cr = true;
                    break;
                }
                CTRL_C if masked() => return Err(AskError::Interrupted),
                BACKSPACE | DELETE if masked() => pop_char(&mut buf),
                other => buf.push(other),
            }
        }

        String::from_utf8(buf).map_err(|e| {
            AskError::Io(io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))
        })
    }
}

/// Remove the last UTF-8 character from a partially typed line.
fn pop_char(buf: &mut Vec<u8>) {
    while let Some(byte) = buf.pop() {
        // Stop once a char boundary (non-continuation byte) was removed.
        if byte & 0b1100_0000 != 0b1000_0000 {
            break;
        }
    }
}

/// Strip a trailing line terminator, if any.
///
/// Readers already do this; resolvers call it again so they can be handed
/// raw text from any source.
pub fn trim_terminator(raw: &str) -> &str {
    raw.trim_end_matches(['\r', '\n'])
}

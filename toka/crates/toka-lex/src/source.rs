//! Character source for streaming input.
//!
//! This module provides the `CharSource` struct which decodes UTF-8 from any
//! [`Read`] implementation one character at a time, strictly in order and
//! without seeking. It tracks byte offset and line/column information for
//! error reporting.

use std::io::{self, BufRead, BufReader, Read};

use toka_util::Span;

/// A UTF-8 decoding reader over a byte stream.
///
/// End-of-input is reported as `Ok(None)` and stays sticky; malformed UTF-8
/// is reported as an [`io::ErrorKind::InvalidData`] error. A NUL byte is an
/// ordinary character.
///
/// # Example
///
/// ```
/// use toka_lex::source::CharSource;
///
/// let mut source = CharSource::from_text("ab");
/// assert_eq!(source.read_char().unwrap(), Some('a'));
/// assert_eq!(source.read_char().unwrap(), Some('b'));
/// assert_eq!(source.read_char().unwrap(), None);
/// ```
pub struct CharSource<R> {
    /// The buffered byte stream being decoded.
    reader: BufReader<R>,

    /// Byte offset of the next character.
    position: usize,

    /// Line of the next character (1-based).
    line: u32,

    /// Column of the next character (1-based, in characters).
    column: u32,

    /// Span of the most recently decoded character.
    last: Span,

    /// Whether the underlying stream has reported end-of-input.
    at_end: bool,
}

impl<R: Read> CharSource<R> {
    /// Creates a new character source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            position: 0,
            line: 1,
            column: 1,
            last: Span::DUMMY,
            at_end: false,
        }
    }

    /// Reads the next character from the stream.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(c))` for each decoded character
    /// - `Ok(None)` once the stream is exhausted (and on every later call)
    /// - `Err(_)` if the stream fails or contains malformed UTF-8
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.at_end {
            return Ok(None);
        }

        let first = match self.read_byte()? {
            Some(b) => b,
            None => {
                self.at_end = true;
                return Ok(None);
            }
        };

        let width = utf8_width(first);
        if width == 0 {
            return Err(invalid_utf8(format!(
                "invalid UTF-8 start byte 0x{:02x} at offset {}",
                first, self.position
            )));
        }

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = match self.read_byte()? {
                Some(b) => b,
                None => {
                    self.at_end = true;
                    return Err(invalid_utf8(format!(
                        "truncated UTF-8 sequence at offset {}",
                        self.position
                    )));
                }
            };
        }

        let c = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| {
                invalid_utf8(format!("invalid UTF-8 sequence at offset {}", self.position))
            })?;

        self.advance(c);
        Ok(Some(c))
    }

    /// Returns true once the stream has reported end-of-input.
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Returns the line of the next character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the next character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the next character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the span of the most recently decoded character.
    ///
    /// This is [`Span::DUMMY`] until the first character is read.
    pub fn last_span(&self) -> Span {
        self.last
    }

    /// Updates position tracking after decoding `c`.
    fn advance(&mut self, c: char) {
        let start = self.position;
        self.position += c.len_utf8();
        self.last = Span::new(start, self.position, self.line, self.column);
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<'a> CharSource<&'a [u8]> {
    /// Creates a character source over in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `first`, or 0 if
/// `first` cannot start a sequence.
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

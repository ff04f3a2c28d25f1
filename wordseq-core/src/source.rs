//! Code-point sources.
//!
//! The segmenter pulls one code point at a time and needs one code point of
//! lookahead. [`CodepointSource`] captures exactly that: `read` consumes,
//! `peek` looks without consuming.
//!
//! - [`CharSource`] adapts any `Iterator<Item = char>`, including
//!   `str::chars()`. It never fails.
//! - [`Utf8Source`] decodes a byte stream. Invalid UTF-8 is replaced with
//!   U+FFFD, one replacement per maximal invalid subsequence, the same way
//!   `String::from_utf8_lossy` does it.

use std::io::{self, BufRead, BufReader, Read};
use std::iter::Peekable;

/// A readable stream of code points with one code point of lookahead.
pub trait CodepointSource {
    /// Consumes and returns the next code point, `Ok(None)` at end of input.
    fn read(&mut self) -> io::Result<Option<char>>;

    /// Returns the next code point without consuming it.
    ///
    /// A subsequent `read` returns the same code point.
    fn peek(&mut self) -> io::Result<Option<char>>;
}

impl<S: CodepointSource + ?Sized> CodepointSource for &mut S {
    #[inline]
    fn read(&mut self) -> io::Result<Option<char>> {
        (**self).read()
    }

    #[inline]
    fn peek(&mut self) -> io::Result<Option<char>> {
        (**self).peek()
    }
}

/// Infallible source over an iterator of `char`s.
#[derive(Debug, Clone)]
pub struct CharSource<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> CharSource<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
        }
    }
}

impl<I: Iterator<Item = char>> CodepointSource for CharSource<I> {
    #[inline]
    fn read(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }

    #[inline]
    fn peek(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.peek().copied())
    }
}

/// Lossy UTF-8 decoder over a buffered byte reader.
#[derive(Debug)]
pub struct Utf8Source<R> {
    reader: R,
    peeked: Option<char>,
    bytes_read: u64,
}

impl<R: Read> Utf8Source<BufReader<R>> {
    /// Wraps an unbuffered reader in a `BufReader`.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> Utf8Source<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            bytes_read: 0,
        }
    }

    /// Bytes consumed from the reader so far, including any held in lookahead.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    #[inline]
    fn consume_byte(&mut self) {
        self.reader.consume(1);
        self.bytes_read += 1;
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.consume_byte();

        if lead < 0x80 {
            return Ok(Some(lead as char));
        }
        let width = sequence_width(lead);
        if width == 0 {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }

        let mut scalar = u32::from(lead) & (0x7F >> width);
        for i in 1..width {
            match self.peek_byte()? {
                Some(b) if continuation_ok(lead, i, b) => {
                    self.consume_byte();
                    scalar = (scalar << 6) | u32::from(b & 0x3F);
                }
                // Leave the offending byte for the next decode.
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }
        Ok(Some(
            char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }
}

impl<R: BufRead> CodepointSource for Utf8Source<R> {
    fn read(&mut self) -> io::Result<Option<char>> {
        match self.peeked.take() {
            Some(c) => Ok(Some(c)),
            None => self.decode(),
        }
    }

    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.decode()?;
        }
        Ok(self.peeked)
    }
}

/// Encoded length implied by a lead byte, 0 if it cannot start a sequence.
#[inline]
fn sequence_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Checks the `i`th byte of a sequence, rejecting overlongs, surrogates
/// and values above U+10FFFF at the second byte.
#[inline]
fn continuation_ok(lead: u8, i: usize, b: u8) -> bool {
    if i == 1 {
        match lead {
            0xE0 => (0xA0..=0xBF).contains(&b),
            0xED => (0x80..=0x9F).contains(&b),
            0xF0 => (0x90..=0xBF).contains(&b),
            0xF4 => (0x80..=0x8F).contains(&b),
            _ => (0x80..=0xBF).contains(&b),
        }
    } else {
        (0x80..=0xBF).contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<S: CodepointSource>(mut source: S) -> String {
        let mut out = String::new();
        while let Some(c) = source.read().unwrap() {
            out.push(c);
        }
        out
    }

    fn lossy(bytes: &[u8]) -> String {
        drain(Utf8Source::new(Cursor::new(bytes.to_vec())))
    }

    #[test]
    fn char_source_peek_then_read() {
        let mut src = CharSource::new("ab".chars());
        assert_eq!(src.peek().unwrap(), Some('a'));
        assert_eq!(src.peek().unwrap(), Some('a'));
        assert_eq!(src.read().unwrap(), Some('a'));
        assert_eq!(src.read().unwrap(), Some('b'));
        assert_eq!(src.peek().unwrap(), None);
        assert_eq!(src.read().unwrap(), None);
    }

    #[test]
    fn utf8_valid_text() {
        let text = "héllo 学生 👍🏽\r\n";
        assert_eq!(lossy(text.as_bytes()), text);
    }

    #[test]
    fn utf8_peek_then_read() {
        let mut src = Utf8Source::new(Cursor::new("ж!".as_bytes()));
        assert_eq!(src.peek().unwrap(), Some('ж'));
        assert_eq!(src.bytes_read(), 2);
        assert_eq!(src.read().unwrap(), Some('ж'));
        assert_eq!(src.read().unwrap(), Some('!'));
        assert_eq!(src.peek().unwrap(), None);
        assert_eq!(src.read().unwrap(), None);
    }

    #[test]
    fn utf8_matches_std_lossy() {
        let cases: &[&[u8]] = &[
            b"\xff",
            b"a\x80b",
            b"\xe2\x82",
            b"\xe2\x82a",
            b"\xf0\x9f\x91",
            b"\xc0\xaf",
            b"\xed\xa0\x80",
            b"\xf4\x90\x80\x80",
            b"\xf5abc",
            b"ok\xe2\x82\xacok",
            b"\xf0\x9f\x98\x80\xf0",
        ];
        for bytes in cases {
            assert_eq!(lossy(bytes), String::from_utf8_lossy(bytes), "{bytes:?}");
        }
    }

    #[test]
    fn small_buffer_boundaries() {
        let text = "añ€𝄞".repeat(5);
        let reader = BufReader::with_capacity(1, Cursor::new(text.clone().into_bytes()));
        assert_eq!(drain(Utf8Source::new(reader)), text);
    }

    #[test]
    fn from_reader_buffers() {
        let src = Utf8Source::from_reader(&b"xyz"[..]);
        assert_eq!(drain(src), "xyz");
    }

    struct Flaky {
        data: Cursor<Vec<u8>>,
        interrupt: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if std::mem::take(&mut self.interrupt) {
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let flaky = Flaky {
            data: Cursor::new(b"hi".to_vec()),
            interrupt: true,
        };
        assert_eq!(drain(Utf8Source::from_reader(flaky)), "hi");
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
        }
    }

    #[test]
    fn other_errors_propagate() {
        let mut src = Utf8Source::from_reader(Broken);
        let err = src.read().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(src.peek().is_err());
    }
}

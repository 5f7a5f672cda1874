use std::fmt;

/// A `fmt::Write` sink over a byte slice that always keeps room for a
/// terminator after the written bytes.
///
/// Output that does not fit is cut at the last whole character, and the write
/// reports `fmt::Error` so that formatting stops early.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// `buf` must not be empty.
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        debug_assert!(!buf.is_empty());
        Cursor { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - 1 - self.pos
    }

    /// Write a terminator after the output and return the output's length.
    pub(crate) fn finish(self) -> usize {
        self.buf[self.pos] = 0;
        self.pos
    }
}

impl fmt::Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.remaining();
        let n = if s.len() <= remaining {
            s.len()
        } else {
            floor_char_boundary(s, remaining)
        };
        self.buf[self.pos..self.pos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.pos += n;
        if n < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

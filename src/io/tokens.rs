use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated token stream over a line-oriented reader.
///
/// Tokens are pulled one line at a time, so line numbers stay available for
/// error messages. A token that is only peeked is not consumed.
pub struct TokenReader<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
    buf: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
            buf: String::new(),
        }
    }

    /// Number of lines pulled from the underlying reader so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.front().map(String::as_str))
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.pop_front())
    }

    /// Drops the unread tokens of the current line and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> io::Result<bool> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            self.pending
                .extend(self.buf.split_whitespace().map(str::to_string));
        }
        Ok(true)
    }
}

//! Line-oriented tokenizer shared by the header parser and the decoder.

use std::io::{BufRead, Lines};
use std::str::SplitWhitespace;

use crate::error::IoResult;

/// One non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source stream.
    pub line: usize,
    text: String,
}

impl Record {
    /// Whitespace-separated tokens of the line.
    pub fn tokens(&self) -> SplitWhitespace<'_> {
        self.text.split_whitespace()
    }
}

/// Yields non-blank lines from a reader, keeping track of line numbers.
///
/// Blank and whitespace-only lines are consumed silently; they advance the
/// line counter but never produce a [`Record`].
#[derive(Debug)]
pub struct LineReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Number of the last line consumed (0 before the first read).
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Next non-blank line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates read failures, including invalid UTF-8.
    pub fn next_record(&mut self) -> IoResult<Option<Record>> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            if text.split_whitespace().next().is_some() {
                return Ok(Some(Record {
                    line: self.line,
                    text,
                }));
            }
        }
        Ok(None)
    }
}

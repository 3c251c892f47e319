//! Code point cursor with line/column tracking.
//!
//! The cursor walks a `&str` one code point at a time and keeps 1-based
//! line and column counters. Columns count code points, not bytes, so a
//! CJK character or an emoji advances the column by exactly one.
//!
//! # Line Breaks
//!
//! `\n`, `\r` and `\r\n` each count as one logical break. Consuming `\r`
//! starts the new line; a `\n` directly after a `\r` is absorbed without
//! counting again.
//!
//! # Line Start
//!
//! The cursor also remembers whether anything other than spaces and tabs
//! has been consumed since the last break. Header markers are only headers
//! in that state.

use memchr::memchr3;
use tale_ir::{Span, Token, TokenKind};

use crate::classify::{is_horizontal_whitespace, is_line_break};

/// A position in the source: byte offset plus line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mark {
    pub pos: usize,
    pub line: u32,
    pub column: u32,
}

/// Text consumed by one cursor operation, with the position of its first
/// code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub start: Mark,
}

impl<'a> Lexeme<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Attach a kind. The span saturates at `u32::MAX`.
    pub fn into_token(self, kind: TokenKind) -> Token<'a> {
        let start = offset(self.start.pos);
        let end = offset(self.start.pos + self.text.len());
        Token::new(
            kind,
            self.text,
            self.start.line,
            self.start.column,
            Span::new(start, end),
        )
    }
}

#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Code point cursor over the scanner input.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of `current`.
    pos: usize,
    /// Decoded code point at `pos`, `None` at EOF.
    current: Option<char>,
    line: u32,
    column: u32,
    /// Only spaces and tabs consumed since the last line break.
    line_start: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            current: src.chars().next(),
            line: 1,
            column: 1,
            line_start: true,
        }
    }

    /// The code point under the cursor, `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The code point after `current`.
    pub fn peek(&self) -> Option<char> {
        let width = self.current.map_or(0, char::len_utf8);
        self.src[self.pos + width..].chars().next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// At EOF or on a line break.
    #[inline]
    pub fn at_end_of_line(&self) -> bool {
        self.current.map_or(true, is_line_break)
    }

    /// Nothing but spaces and tabs since the start of the line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.line_start
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Source text between two byte offsets previously reported by the
    /// cursor (always code point boundaries).
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Everything consumed since `start`.
    #[inline]
    pub fn lexeme_from(&self, start: Mark) -> Lexeme<'a> {
        Lexeme {
            text: self.slice(start.pos, self.pos),
            start,
        }
    }

    /// Consume the current code point. No-op at EOF.
    pub fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };
        match c {
            '\r' => self.begin_line(),
            '\n' => {
                let after_cr = self.pos > 0 && self.src.as_bytes()[self.pos - 1] == b'\r';
                if !after_cr {
                    self.begin_line();
                }
            }
            ' ' | '\t' => self.bump_column(1),
            _ => {
                self.bump_column(1);
                self.line_start = false;
            }
        }
        self.pos += c.len_utf8();
        self.current = self.src[self.pos..].chars().next();
    }

    /// Columns saturate at `u32::MAX` on absurdly long lines.
    #[inline]
    fn bump_column(&mut self, n: u32) {
        self.column = self.column.saturating_add(n);
    }

    fn begin_line(&mut self) {
        self.line += 1;
        self.column = 1;
        self.line_start = true;
    }

    /// Consume while `pred` holds for the current code point.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> Lexeme<'a> {
        let start = self.mark();
        while let Some(c) = self.current {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        self.lexeme_from(start)
    }

    /// Consume until `pred` holds for the current code point, or EOF.
    pub fn eat_until(&mut self, pred: impl Fn(char) -> bool) -> Lexeme<'a> {
        self.eat_while(|c| !pred(c))
    }

    /// Consume exactly one code point (empty at EOF).
    pub fn eat_one(&mut self) -> Lexeme<'a> {
        let start = self.mark();
        self.advance();
        self.lexeme_from(start)
    }

    /// Consume one logical line break: `\r\n`, `\r` or `\n`.
    ///
    /// Empty if the cursor is not on a break.
    pub fn eat_line_break(&mut self) -> Lexeme<'a> {
        let start = self.mark();
        match self.current {
            Some('\r') => {
                let crlf = self.peek() == Some('\n');
                self.advance();
                if crlf {
                    self.advance();
                }
            }
            Some('\n') => self.advance(),
            _ => {}
        }
        self.lexeme_from(start)
    }

    /// Consume prose up to the next line break, `<`, or EOF.
    ///
    /// Jumps with `memchr3` and advances the column by the number of code
    /// points skipped. The skipped run contains no line break, so the line
    /// counter cannot change.
    pub fn skip_to_prose_delim(&mut self) -> Lexeme<'a> {
        let start = self.mark();
        let remaining = &self.src.as_bytes()[self.pos..];
        let len = memchr3(b'\n', b'\r', b'<', remaining).unwrap_or(remaining.len());
        let skipped = &self.src[self.pos..self.pos + len];

        self.bump_column(u32::try_from(skipped.chars().count()).unwrap_or(u32::MAX));
        if !skipped.chars().all(is_horizontal_whitespace) {
            self.line_start = false;
        }
        self.pos += len;
        self.current = self.src[self.pos..].chars().next();
        self.lexeme_from(start)
    }
}

#[cfg(test)]
mod tests;

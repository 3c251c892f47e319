//! The Tale scanner: a pull-based state machine producing one token per call.
//!
//! # Design
//!
//! [`Scanner::next_token`] looks at the top of the [`CaptureStack`] and
//! dispatches to one of three routines:
//!
//! - empty stack: top level (prose, header starts, action starts)
//! - `InputHeader` / `StateHeader`: header arguments up to end of line
//! - `Name` / `Action`: action name and arguments up to `>`
//!
//! The scanner never fails. Malformed input degrades to well-defined token
//! sequences; an action still open at EOF is visible through
//! [`Scanner::captures`] and ends with `Eof` instead of `ActionEnd`.

use std::iter::FusedIterator;

use tale_ir::{Token, TokenKind};
use tracing::trace;

use crate::capture::{CaptureMode, CaptureStack};
use crate::classify::{
    is_action_end, is_action_start, is_header_marker, is_horizontal_whitespace, is_whitespace,
    INPUT_HEADER_MARKER, STATE_HEADER_MARKER,
};
use crate::cursor::{Cursor, Lexeme};

/// Scanner over one source text.
///
/// Single use: drain it to `Eof` and drop it. A fresh scan needs a fresh
/// scanner.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    captures: CaptureStack,
    /// The current block (since the last header, or the start of input)
    /// has produced a `Text` token.
    block_has_text: bool,
    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            captures: CaptureStack::new(),
            block_has_text: false,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` when the source is exhausted. Subsequent calls keep
    /// returning `Eof` at the same line and column.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = match self.captures.top() {
            None => self.top_level(),
            Some(CaptureMode::InputHeader) => self.header_arg(INPUT_HEADER_MARKER),
            Some(CaptureMode::StateHeader) => self.header_arg(STATE_HEADER_MARKER),
            Some(CaptureMode::Action | CaptureMode::Name) => self.action(),
        };
        trace!(?token, "scanned");
        token
    }

    /// Modes still open, bottom first.
    ///
    /// Non-empty after `Eof` means an action was left unterminated. Header
    /// lines always close at their line break or at EOF.
    pub fn captures(&self) -> &[CaptureMode] {
        self.captures.as_slice()
    }

    pub fn is_capturing(&self) -> bool {
        !self.captures.is_empty()
    }

    // ─── EOF ──────────────────────────────────────────────────────────

    fn eof(&self) -> Token<'a> {
        self.cursor
            .lexeme_from(self.cursor.mark())
            .into_token(TokenKind::Eof)
    }

    // ─── Top Level ────────────────────────────────────────────────────

    /// Loop until something token-worthy is found. Prose scans that commit
    /// no text (blank regions, indentation before a marker) go around again.
    fn top_level(&mut self) -> Token<'a> {
        loop {
            let Some(c) = self.cursor.current() else {
                return self.eof();
            };
            if self.cursor.at_line_start() {
                if let Some(mode) = CaptureMode::for_header_marker(c) {
                    return self.header_start(c, mode);
                }
            }
            if is_action_start(c) {
                return self.action_start();
            }
            if let Some(text) = self.prose() {
                self.block_has_text = true;
                return text.into_token(TokenKind::Text);
            }
        }
    }

    fn header_start(&mut self, marker: char, mode: CaptureMode) -> Token<'a> {
        let run = self.cursor.eat_while(|c| c == marker);
        self.captures.push(mode);
        self.block_has_text = false;
        let kind = match mode {
            CaptureMode::StateHeader => TokenKind::StateHeader,
            _ => TokenKind::InputHeader,
        };
        run.into_token(kind)
    }

    fn action_start(&mut self) -> Token<'a> {
        let start = self.cursor.eat_one();
        self.captures.push(CaptureMode::Action);
        self.captures.push(CaptureMode::Name);
        start.into_token(TokenKind::Action)
    }

    // ─── Headers ──────────────────────────────────────────────────────

    /// One argument or the end of the header line.
    ///
    /// A run of the header's own marker closes the header only when nothing
    /// but whitespace follows it on the line; otherwise the run is an
    /// argument like any other word.
    fn header_arg(&mut self, marker: char) -> Token<'a> {
        self.cursor.eat_while(is_horizontal_whitespace);
        let closing = self.cursor.eat_while(|c| c == marker);
        self.cursor.eat_while(is_horizontal_whitespace);

        if self.cursor.at_end_of_line() {
            self.captures.pop();
            let line_break = self.cursor.eat_line_break();
            let end = if closing.is_empty() {
                line_break
            } else {
                closing
            };
            return end.into_token(TokenKind::HeaderEnd);
        }

        if !closing.is_empty() {
            return closing.into_token(TokenKind::Arg);
        }

        self.cursor
            .eat_until(|c| is_whitespace(c) || c == marker)
            .into_token(TokenKind::Arg)
    }

    // ─── Actions ──────────────────────────────────────────────────────

    /// Name, argument, or `>`. Actions may span lines, so all whitespace
    /// between words is skipped.
    fn action(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_whitespace);
        let Some(c) = self.cursor.current() else {
            // Unterminated action: the stack stays open for the parser to see.
            return self.eof();
        };

        if is_action_end(c) {
            let end = self.cursor.eat_one();
            self.captures
                .pop_matching_in_order(&[CaptureMode::Name, CaptureMode::Action]);
            return end.into_token(TokenKind::ActionEnd);
        }

        let word = self
            .cursor
            .eat_until(|c| is_whitespace(c) || is_action_end(c));
        if self.captures.top_is(CaptureMode::Name) {
            self.captures.pop();
            word.into_token(TokenKind::Name)
        } else {
            word.into_token(TokenKind::Arg)
        }
    }

    // ─── Prose ────────────────────────────────────────────────────────

    /// Scan prose line by line until a header, an action, or EOF.
    ///
    /// Committed text runs from `start` to `end`. Blank lines after the last
    /// committed line are padding: they join the text only if another
    /// contentful line (or an action, when text exists) follows. Blank lines
    /// before any text of the block move `start` past them.
    ///
    /// Prose resuming after an action in a block that already has text is a
    /// continuation: its blank lines are padding from the start, so
    /// `"..<x>\n\nmore"` keeps both breaks.
    ///
    /// Returns `None` when no text was committed.
    fn prose(&mut self) -> Option<Lexeme<'a>> {
        let mut start = self.cursor.mark();
        let mut end = start.pos;
        let mut started = self.block_has_text;

        loop {
            self.cursor.eat_while(is_horizontal_whitespace);

            match self.cursor.current() {
                Some(c) if is_action_start(c) => {
                    if end > start.pos {
                        end = self.cursor.pos();
                    }
                    break;
                }
                Some(c) if is_header_marker(c) && self.cursor.at_line_start() => break,
                _ if self.cursor.at_end_of_line() => {
                    if self.cursor.is_eof() {
                        break;
                    }
                    self.cursor.eat_line_break();
                    if !started {
                        start = self.cursor.mark();
                        end = start.pos;
                    }
                }
                _ => {
                    self.cursor.skip_to_prose_delim();
                    end = self.cursor.pos();
                    started = true;
                    // Stopped on `<` (handled next pass), a line break, or EOF.
                    self.cursor.eat_line_break();
                }
            }
        }

        if end == start.pos {
            return None;
        }
        Some(Lexeme {
            text: self.cursor.slice(start.pos, end),
            start,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

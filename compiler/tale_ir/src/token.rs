//! Token types for the Tale scanner.
//!
//! A token is a kind, the exact source text it covers, and the line/column
//! of its first code point. Literals borrow from the source: every token the
//! scanner produces covers one contiguous range of the input.

use super::Span;
use std::fmt;

/// Token categories.
///
/// Discriminants are arranged in contiguous ranges with gaps for growth:
///
/// | Range | Category   |
/// |-------|------------|
/// | 0     | Control    |
/// | 1-15  | Values     |
/// | 16-31 | Delimiters |
/// | 32-47 | Keywords   |
///
/// The scanner only emits `Eof`, `Text`, `Arg`, `Name`, `InputHeader`,
/// `StateHeader`, `HeaderEnd`, `Action` and `ActionEnd`. The rest are
/// reserved for the grammar layer (see [`TokenKind::is_reserved`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Control (0) ===
    Eof = 0,

    // === Values (1-15) ===
    /// Free-form prose.
    Text = 1,
    /// Header or action argument.
    Arg = 2,
    /// Action verb, the first word after `<`.
    Name = 3,
    Number = 4,
    Flag = 5,

    // === Delimiters (16-31) ===
    /// Run of `>` opening an input header.
    InputHeader = 16,
    /// Run of `=` opening a state header.
    StateHeader = 17,
    /// Closing marker run, or the line break ending a header line.
    HeaderEnd = 18,
    /// `<`
    Action = 19,
    /// `>` closing an action.
    ActionEnd = 20,
    Insert = 21,
    InsertEnd = 22,
    Quote = 23,

    // === Keywords (32-47) ===
    Is = 32,
    Has = 33,
    And = 34,
    Or = 35,
    Not = 36,
    Unknown = 37,
}

impl TokenKind {
    /// Human-readable name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "End of File",

            TokenKind::Text => "Text",
            TokenKind::Arg => "Argument",
            TokenKind::Name => "Name",
            TokenKind::Number => "Number",
            TokenKind::Flag => "Flag",

            TokenKind::InputHeader => "Input Header",
            TokenKind::StateHeader => "State Header",
            TokenKind::HeaderEnd => "Header End",
            TokenKind::Action => "Action",
            TokenKind::ActionEnd => "Action End",
            TokenKind::Insert => "Insert",
            TokenKind::InsertEnd => "Insert End",
            TokenKind::Quote => "Quote",

            TokenKind::Is => "Keyword: is",
            TokenKind::Has => "Keyword: has",
            TokenKind::And => "Keyword: and",
            TokenKind::Or => "Keyword: or",
            TokenKind::Not => "Keyword: not",
            TokenKind::Unknown => "Keyword: unknown",
        }
    }

    /// Returns `true` for kinds the scanner never produces.
    ///
    /// Consumers must not assume these are absent from the type, only from
    /// the scanner's output.
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Flag
                | TokenKind::Insert
                | TokenKind::InsertEnd
                | TokenKind::Quote
                | TokenKind::Is
                | TokenKind::Has
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Unknown
        )
    }

    /// Returns `true` for the keyword range.
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 32..=47)
    }

    /// Look up a condition keyword. Case-sensitive.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "is" => Some(TokenKind::Is),
            "has" => Some(TokenKind::Has),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            "unknown" => Some(TokenKind::Unknown),
            _ => None,
        }
    }

    /// The literal for kinds whose text never varies.
    ///
    /// Header starts and ends carry marker runs of any length, so they have
    /// no fixed lexeme.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Action => Some("<"),
            TokenKind::ActionEnd => Some(">"),
            TokenKind::Eof => Some(""),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its literal and position.
///
/// `line` and `column` are 1-based and count code points. For zero-width
/// tokens (`Eof`, an empty `HeaderEnd`) they are where scanning stopped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, literal: &'a str, line: u32, column: u32, span: Span) -> Self {
        Token {
            kind,
            literal,
            line,
            column,
            span,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{} [{}]",
            self.kind, self.literal, self.line, self.column, self.span
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}:{}",
            self.kind, self.literal, self.line, self.column
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(Token<'static>, 40);
}

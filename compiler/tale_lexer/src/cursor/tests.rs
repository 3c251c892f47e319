use super::*;
use crate::classify::{is_horizontal_whitespace, is_whitespace};
use pretty_assertions::assert_eq;

fn position(cursor: &Cursor<'_>) -> (u32, u32) {
    (cursor.line(), cursor.column())
}

/// Advance to EOF, returning the final (line, column).
fn end_position(source: &str) -> (u32, u32) {
    let mut cursor = Cursor::new(source);
    while !cursor.is_eof() {
        cursor.advance();
    }
    position(&cursor)
}

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!(position(&cursor), (1, 1));
    assert!(cursor.at_line_start());
}

#[test]
fn advance_moves_by_code_point() {
    let mut cursor = Cursor::new("世界!");
    cursor.advance();
    assert_eq!(cursor.current(), Some('界'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(position(&cursor), (1, 2));
}

#[test]
fn empty_source_is_eof() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert!(cursor.at_end_of_line());
    assert_eq!(cursor.peek(), None);
    cursor.advance();
    assert_eq!(cursor.mark(), Mark { pos: 0, line: 1, column: 1 });
}

#[test]
fn peek_at_last_char_is_none() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.peek(), None);
}

// === Columns ===

#[test]
fn columns_count_code_points_not_bytes() {
    assert_eq!(end_position("Hello, 世界!"), (1, 11));
    assert_eq!(end_position("😞"), (1, 2));
}

// === Line Breaks ===

#[test]
fn lf_starts_new_line() {
    assert_eq!(end_position("a\nb"), (2, 2));
}

#[test]
fn lone_cr_starts_new_line() {
    assert_eq!(end_position("a\rb"), (2, 2));
}

#[test]
fn crlf_counts_once() {
    assert_eq!(end_position("a\r\nb"), (2, 2));
    assert_eq!(end_position("\r\n\r\n"), (3, 1));
}

#[test]
fn lf_cr_counts_twice() {
    assert_eq!(end_position("\n\r"), (3, 1));
}

#[test]
fn mixed_breaks() {
    // \r, \r\n, \n -> three breaks
    assert_eq!(end_position("x\r\r\n\ny"), (4, 2));
}

#[test]
fn column_resets_after_break() {
    let mut cursor = Cursor::new("abc\r\nd");
    for _ in 0..4 {
        cursor.advance();
    }
    // On the '\n' of the CRLF pair, already on line 2.
    assert_eq!(cursor.current(), Some('\n'));
    assert_eq!(position(&cursor), (2, 1));
    cursor.advance();
    assert_eq!(position(&cursor), (2, 1));
}

// === Line Start ===

#[test]
fn line_start_survives_indentation() {
    let mut cursor = Cursor::new(" \t>");
    cursor.eat_while(is_horizontal_whitespace);
    assert!(cursor.at_line_start());
    assert_eq!(cursor.current(), Some('>'));
}

#[test]
fn line_start_cleared_by_content_and_restored_by_break() {
    let mut cursor = Cursor::new("x\n");
    cursor.advance();
    assert!(!cursor.at_line_start());
    cursor.advance();
    assert!(cursor.at_line_start());
}

// === Eating ===

#[test]
fn eat_while_reports_start_position() {
    let mut cursor = Cursor::new("  greet  ");
    cursor.eat_while(is_horizontal_whitespace);
    let word = cursor.eat_until(is_whitespace);
    assert_eq!(word.text, "greet");
    assert_eq!(word.start, Mark { pos: 2, line: 1, column: 3 });
}

#[test]
fn eat_while_nothing_is_empty() {
    let mut cursor = Cursor::new("abc");
    let lexeme = cursor.eat_while(is_whitespace);
    assert!(lexeme.is_empty());
    assert_eq!(lexeme.start.pos, 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_one_at_eof_is_empty() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.eat_one().text, "a");
    assert!(cursor.eat_one().is_empty());
}

#[test]
fn eat_line_break_variants() {
    for (source, expected) in [("\r\nx", "\r\n"), ("\rx", "\r"), ("\nx", "\n"), ("\n\rx", "\n")] {
        let mut cursor = Cursor::new(source);
        let lexeme = cursor.eat_line_break();
        assert_eq!(lexeme.text, expected, "source {source:?}");
        assert_eq!(position(&cursor), (2, 1), "source {source:?}");
    }
}

#[test]
fn eat_line_break_off_break_is_empty() {
    let mut cursor = Cursor::new("x");
    assert!(cursor.eat_line_break().is_empty());
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn skip_to_prose_delim_stops_at_break_and_action() {
    let mut cursor = Cursor::new("If 世界 > world<x>\nmore");
    let run = cursor.skip_to_prose_delim();
    assert_eq!(run.text, "If 世界 > world");
    assert_eq!(cursor.current(), Some('<'));
    assert_eq!(position(&cursor), (1, 14));
    assert!(!cursor.at_line_start());
}

#[test]
fn skip_to_prose_delim_runs_to_eof() {
    let mut cursor = Cursor::new("no delimiters");
    assert_eq!(cursor.skip_to_prose_delim().text, "no delimiters");
    assert!(cursor.is_eof());
    assert_eq!(position(&cursor), (1, 14));
}

#[test]
fn skip_to_prose_delim_matches_char_by_char_advance() {
    let source = "a 😞 b\tc\rd";
    let mut fast = Cursor::new(source);
    fast.skip_to_prose_delim();
    let mut slow = Cursor::new(source);
    slow.eat_until(|c| c == '\r' || c == '\n' || c == '<');
    assert_eq!(fast.mark(), slow.mark());
    assert_eq!(fast.at_line_start(), slow.at_line_start());
}

#[test]
fn eat_line_break_takes_cr_lf_as_one_break() {
    let mut cursor = Cursor::new("\r\n\r\n");
    assert_eq!(cursor.eat_line_break().text, "\r\n");
    assert_eq!(position(&cursor), (2, 1));
    assert_eq!(cursor.eat_line_break().text, "\r\n");
    assert_eq!(position(&cursor), (3, 1));
    assert!(cursor.is_eof());
}

#[test]
fn column_saturates_on_advance() {
    let mut cursor = Cursor::new("a b");
    cursor.column = u32::MAX - 1;
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.column(), u32::MAX);
    assert_eq!(cursor.line(), 1);
}

#[test]
fn column_saturates_on_prose_skip() {
    let mut cursor = Cursor::new("long line");
    cursor.column = u32::MAX - 3;
    let run = cursor.skip_to_prose_delim();
    assert_eq!(run.text, "long line");
    assert_eq!(cursor.column(), u32::MAX);
    assert!(cursor.is_eof());
}

// === Tokens ===

#[test]
fn lexeme_into_token_carries_span_and_position() {
    let mut cursor = Cursor::new("世 abc");
    cursor.eat_until(|c| c == 'a');
    let word = cursor.eat_while(|c| c.is_ascii_alphabetic());
    let token = word.into_token(TokenKind::Arg);
    assert_eq!(token.literal, "abc");
    assert_eq!((token.line, token.column), (1, 3));
    assert_eq!(token.span, Span::new(4, 7));
}

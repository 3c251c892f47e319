use super::*;
use pretty_assertions::assert_eq;

#[test]
fn tokenize_collects_through_eof() {
    init_tracing();
    let tokens = tokenize("= start\nOnce upon a time <set told>");
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.literal)).collect();
    assert_eq!(
        summary,
        [
            (TokenKind::StateHeader, "="),
            (TokenKind::Arg, "start"),
            (TokenKind::HeaderEnd, "\n"),
            (TokenKind::Text, "Once upon a time "),
            (TokenKind::Action, "<"),
            (TokenKind::Name, "set"),
            (TokenKind::Arg, "told"),
            (TokenKind::ActionEnd, ">"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn tokenize_empty_source() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(tokens[0].span, Span::point(0));
}

#[test]
fn tokenize_matches_manual_pull() {
    let source = "> a >\n<b c>\nd";
    let mut scanner = Scanner::new(source);
    let mut pulled = Vec::new();
    loop {
        let token = scanner.next_token();
        pulled.push(token);
        if token.is_eof() {
            break;
        }
    }
    assert_eq!(tokenize(source), pulled);
}

#[test]
fn fixed_lexemes_match_scanned_literals() {
    for token in tokenize("<a>") {
        if let Some(lexeme) = token.kind.fixed_lexeme() {
            assert_eq!(token.literal, lexeme);
        }
    }
}

#[test]
fn scanner_never_emits_reserved_kinds() {
    let source = "> is has >\n= and or not =\nunknown <is not> 42 --flag";
    assert!(tokenize(source).iter().all(|t| !t.kind.is_reserved()));
}

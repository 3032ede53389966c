use super::*;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    aatbe_lexer::lex(source).unwrap()
}

#[test]
fn peek_does_not_consume() {
    let toks = tokens("fn main");
    let cursor = Cursor::new(&toks);
    assert_eq!(cursor.peek().unwrap().text, "fn");
    assert_eq!(cursor.peek().unwrap().text, "fn");
    assert_eq!(cursor.peek_at(1).unwrap().text, "main");
    assert!(cursor.peek_at(2).is_none());
    assert!(cursor.peek_at(usize::MAX).is_none());
}

#[test]
fn typed_and_text_predicates() {
    let toks = tokens(r#"( "(" x"#);
    let cursor = Cursor::new(&toks);
    assert!(cursor.peek_is(TokenKind::Symbol, "("));
    assert!(!cursor.peek_is(TokenKind::String, "("));
    assert!(cursor.peek_text("("));
    // The string token `"("` also has text `(`.
    assert!(cursor.peek_text_at("(", 1));
    assert!(cursor.peek_kind(TokenKind::Symbol));
    assert!(!cursor.peek_kind(TokenKind::Identifier));
}

#[test]
fn read_variants_only_consume_on_match() {
    let toks = tokens("struct Test {");
    let mut cursor = Cursor::new(&toks);

    assert!(cursor.read_if(TokenKind::Keyword, "fn").is_none());
    assert_eq!(cursor.position(), 0);
    assert!(cursor.read_if(TokenKind::Keyword, "struct").is_some());
    assert!(cursor.read_text("Other").is_none());
    assert_eq!(cursor.read_text("Test").unwrap().kind, TokenKind::Identifier);
    assert_eq!(cursor.read().unwrap().text, "{");
    assert!(cursor.is_at_end());
    assert!(cursor.read().is_none());
    assert_eq!(cursor.position(), 3);
}

#[test]
fn spans_at_boundaries() {
    let toks = tokens("a  bc ");
    let mut cursor = Cursor::new(&toks);
    assert_eq!(cursor.previous_span(), Span::DUMMY);
    assert_eq!(cursor.current_span(), Span::new(0, 1));
    cursor.read();
    cursor.read();
    assert_eq!(cursor.previous_span(), Span::new(3, 5));
    assert_eq!(cursor.current_span(), Span::point(5));
}

#[test]
fn empty_stream() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert!(cursor.peek().is_none());
    assert_eq!(cursor.current_span(), Span::DUMMY);
    assert_eq!(cursor.token_count(), 0);
}

#[test]
fn restore_rewinds() {
    let toks = tokens("a b c");
    let mut cursor = Cursor::new(&toks);
    cursor.read();
    let snap = cursor.snapshot();
    cursor.read();
    cursor.read();
    assert!(cursor.is_at_end());
    cursor.restore(snap);
    assert_eq!(cursor.peek().unwrap().text, "b");
}

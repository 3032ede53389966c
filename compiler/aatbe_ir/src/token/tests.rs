use super::*;

#[test]
fn signed_value_reinterprets_bits() {
    let neg = Token::new(TokenKind::Number, "-267", (-267i64) as u64, Span::new(0, 4));
    assert_eq!(neg.signed_value(), -267);

    let pos = Token::new(TokenKind::Number, "12", 12, Span::new(0, 2));
    assert_eq!(pos.signed_value(), 12);
}

#[test]
fn is_checks_kind_and_text() {
    let tok = Token::new(TokenKind::Symbol, "->", 0, Span::new(3, 5));
    assert!(tok.is(TokenKind::Symbol, "->"));
    assert!(!tok.is(TokenKind::Keyword, "->"));
    assert!(!tok.is(TokenKind::Symbol, "-"));
}

#[test]
fn display_mentions_kind() {
    let kw = Token::new(TokenKind::Keyword, "fn", 0, Span::new(0, 2));
    assert_eq!(kw.to_string(), "keyword `fn`");

    let eof = Token::new(TokenKind::EndOfFile, "<eof>", 0, Span::point(9));
    assert!(eof.is_eof());
    assert_eq!(eof.to_string(), "end of file");
}

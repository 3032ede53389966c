use super::*;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    lex(source).unwrap()
}

fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    tokens(source).into_iter().map(|t| (t.kind, t.text)).collect()
}

fn lex_err(source: &str) -> LexError {
    lex(source).unwrap_err()
}

// === End of file ===

#[test]
fn empty_source_is_eof_forever() {
    let mut lexer = Lexer::new("");
    for _ in 0..3 {
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok, Token::new(TokenKind::EndOfFile, "<eof>", 0, Span::new(0, 0)));
    }
}

#[test]
fn eof_after_trailing_whitespace_points_at_end() {
    let mut lexer = Lexer::new("fn \n\t");
    assert_eq!(lexer.next_token().unwrap().text, "fn");
    let eof = lexer.next_token().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.span, Span::new(5, 5));
}

#[test]
fn all_whitespace_kinds_are_skipped() {
    let toks = tokens("\x0b\x0c fn\r\n");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].span, Span::new(3, 5));
}

// === Numbers ===

#[test]
fn decimal_keeps_separators_in_text() {
    let toks = tokens("1234_567");
    assert_eq!(toks[0].kind, TokenKind::Number);
    assert_eq!(toks[0].text, "1234_567");
    assert_eq!(toks[0].value, 1_234_567);
}

#[test]
fn negative_number_is_twos_complement() {
    let toks = tokens("-1234_567");
    assert_eq!(toks[0].text, "-1234_567");
    assert_eq!(toks[0].signed_value(), -1_234_567);
}

#[test]
fn hex_numbers() {
    let toks = tokens("0x1234 0XfF_0");
    assert_eq!(toks[0].text, "0x1234");
    assert_eq!(toks[0].value, 0x1234);
    assert_eq!(toks[1].text, "0XfF_0");
    assert_eq!(toks[1].value, 0xff0);
}

#[test]
fn empty_hex_body_is_invalid() {
    assert_eq!(lex_err("0x"), LexError::new(LexErrorKind::InvalidNumber, Span::new(0, 2)));
    assert_eq!(lex_err("0x_ 1").kind, LexErrorKind::InvalidNumber);
}

#[test]
fn number_limits() {
    assert_eq!(tokens("18446744073709551615")[0].value, u64::MAX);
    assert_eq!(tokens("0xFFFF_FFFF_FFFF_FFFF")[0].value, u64::MAX);
    assert_eq!(tokens("-9223372036854775808")[0].signed_value(), i64::MIN);

    assert_eq!(lex_err("18446744073709551616").kind, LexErrorKind::NumberOverflow);
    assert_eq!(lex_err("0x1_0000_0000_0000_0000").kind, LexErrorKind::NumberOverflow);
    assert_eq!(lex_err("-9223372036854775809").kind, LexErrorKind::NumberOverflow);
}

#[test]
fn number_stops_at_letters() {
    assert_eq!(
        kinds_and_texts("10int8 12ab"),
        vec![
            (TokenKind::Number, "10".to_string()),
            (TokenKind::Identifier, "int8".to_string()),
            (TokenKind::Number, "12".to_string()),
            (TokenKind::Identifier, "ab".to_string()),
        ]
    );
    let toks = tokens("10int8");
    assert_eq!(toks[0].span, Span::new(0, 2));
    assert_eq!(toks[1].span, Span::new(2, 6));
}

#[test]
fn minus_binds_to_adjacent_digit_only() {
    assert_eq!(
        kinds_and_texts("a-1 a - 1"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Number, "-1".to_string()),
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Symbol, "-".to_string()),
            (TokenKind::Number, "1".to_string()),
        ]
    );
}

// === Booleans ===

#[test]
fn booleans_are_whole_words() {
    let toks = tokens("true false truest false_");
    assert_eq!((toks[0].kind, toks[0].value), (TokenKind::Boolean, 1));
    assert_eq!((toks[1].kind, toks[1].value), (TokenKind::Boolean, 0));
    assert_eq!((toks[2].kind, toks[2].text.as_str()), (TokenKind::Identifier, "truest"));
    assert_eq!((toks[3].kind, toks[3].text.as_str()), (TokenKind::Identifier, "false_"));
}

// === Characters ===

#[test]
fn character_literals() {
    let toks = tokens(r"'a' '\n' '0' '\\'");
    let got: Vec<_> = toks.iter().map(|t| (t.kind, t.text.as_str(), t.value)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Char, "a", u64::from('a')),
            (TokenKind::Char, "\n", u64::from('\n')),
            (TokenKind::Char, "0", u64::from('0')),
            (TokenKind::Char, "\\", u64::from('\\')),
        ]
    );
    assert_eq!(toks[1].span, Span::new(4, 8));
}

#[test]
fn character_errors() {
    assert_eq!(lex_err("''"), LexError::new(LexErrorKind::EmptyChar, Span::new(0, 2)));
    assert_eq!(
        lex_err(r"'\''"),
        LexError::new(LexErrorKind::InvalidEscape('\''), Span::new(0, 3))
    );
    assert_eq!(lex_err(r"'\q'").kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(lex_err("'a"), LexError::new(LexErrorKind::UnterminatedChar, Span::new(0, 2)));
    assert_eq!(lex_err("'ab'").kind, LexErrorKind::UnterminatedChar);
    assert_eq!(lex_err("'").kind, LexErrorKind::UnterminatedChar);
    assert_eq!(lex_err(r"'\").kind, LexErrorKind::UnterminatedChar);
}

// === Strings ===

#[test]
fn string_literals_are_unescaped() {
    assert_eq!(
        kinds_and_texts(r#""a" "abc" "a\nb" "say \"hi\"""#),
        vec![
            (TokenKind::String, "a".to_string()),
            (TokenKind::String, "abc".to_string()),
            (TokenKind::String, "a\nb".to_string()),
            (TokenKind::String, "say \"hi\"".to_string()),
        ]
    );
}

#[test]
fn string_may_span_lines() {
    let toks = tokens("\"line\nbreak\"");
    assert_eq!(toks[0].text, "line\nbreak");
    assert_eq!(toks[0].span, Span::new(0, 12));
}

#[test]
fn string_errors() {
    assert_eq!(
        lex_err("\"abc"),
        LexError::new(LexErrorKind::UnterminatedString, Span::new(0, 4))
    );
    assert_eq!(lex_err(r#""a\qb""#).kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(lex_err(r#""a\'b""#).kind, LexErrorKind::InvalidEscape('\''));
    assert_eq!(lex_err(r#""abc\"#).kind, LexErrorKind::UnterminatedString);
}

// === Identifiers and keywords ===

#[test]
fn identifiers() {
    let texts: Vec<_> = tokens("ident _ident ident_ id3nt _1d3nt_ ident? ident!")
        .into_iter()
        .map(|t| {
            assert_eq!(t.kind, TokenKind::Identifier);
            t.text
        })
        .collect();
    assert_eq!(
        texts,
        vec!["ident", "_ident", "ident_", "id3nt", "_1d3nt_", "ident?", "ident!"]
    );
}

#[test]
fn only_one_trailing_marker() {
    assert_eq!(
        kinds_and_texts("a?? b!="),
        vec![
            (TokenKind::Identifier, "a?".to_string()),
            (TokenKind::Unexpected, "?".to_string()),
            (TokenKind::Identifier, "b!".to_string()),
            (TokenKind::Symbol, "=".to_string()),
        ]
    );
}

#[test]
fn keywords_and_type_words() {
    for kw in KEYWORDS {
        let toks = tokens(kw);
        assert_eq!(toks[0].kind, TokenKind::Keyword, "{kw}");
    }
    for word in ["int32", "uint8", "float64", "str", "bool", "char"] {
        assert_eq!(tokens(word)[0].kind, TokenKind::Identifier, "{word}");
    }
}

// === Symbols ===

#[test]
fn every_symbol_lexes_alone() {
    let input = "+ - * / % = == != < > <= >= && || ! -> <- |> <| .. ... . & | ^ ~ >> << \
                 { } [ ] ( ) , ; @ : += -= *= /= %= ++ --";
    for (tok, expected) in tokens(input).iter().zip(input.split_whitespace()) {
        assert_eq!(tok.kind, TokenKind::Symbol);
        assert_eq!(tok.text, expected);
    }
    assert_eq!(tokens(input).len(), input.split_whitespace().count());
}

#[test]
fn longest_symbol_wins() {
    let texts = |s: &str| -> Vec<String> { tokens(s).into_iter().map(|t| t.text).collect() };
    assert_eq!(texts("a<=b"), vec!["a", "<=", "b"]);
    assert_eq!(texts("...."), vec!["...", "."]);
    assert_eq!(texts("<<="), vec!["<<", "="]);
    assert_eq!(texts("->="), vec!["->", "="]);
    assert_eq!(texts("a+++b"), vec!["a", "++", "+", "b"]);
}

// === Unexpected input ===

#[test]
fn unexpected_characters_carry_code_point() {
    let toks = tokens("# λ");
    assert_eq!(toks[0], Token::new(TokenKind::Unexpected, "#", 35, Span::new(0, 1)));
    assert_eq!(toks[1], Token::new(TokenKind::Unexpected, "λ", 0x3bb, Span::new(2, 4)));
}

#[test]
fn interior_nul_is_not_end_of_input() {
    let toks = tokens("a\0b");
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[1].kind, TokenKind::Unexpected);
    assert_eq!(toks[1].value, 0);
}

// === Whole declarations ===

#[test]
fn function_declaration() {
    use TokenKind::{Identifier, Keyword, String, Symbol};
    let got: Vec<_> = tokens(r#"fn main -> int32 = printf("Hello")"#)
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        got,
        vec![Keyword, Identifier, Symbol, Identifier, Symbol, Identifier, Symbol, String, Symbol]
    );
}

// === Iterator ===

#[test]
fn iterator_ends_after_eof() {
    let items: Vec<_> = Lexer::new("fn main").collect();
    assert_eq!(items.len(), 3);
    assert!(items[2].as_ref().unwrap().is_eof());
}

#[test]
fn iterator_ends_after_error() {
    let mut lexer = Lexer::new("x \"abc");
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn lex_excludes_eof() {
    assert_eq!(tokens("fn main = 1").len(), 4);
    assert!(tokens("  ").is_empty());
}

mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decimal_round_trip(n in any::<u64>()) {
            let toks = lex(&n.to_string()).unwrap();
            prop_assert_eq!(toks.len(), 1);
            prop_assert_eq!(toks[0].value, n);
        }

        #[test]
        fn hex_round_trip(n in any::<u64>()) {
            let toks = lex(&format!("0x{n:X}")).unwrap();
            prop_assert_eq!(toks[0].value, n);
        }

        #[test]
        fn negative_round_trip(n in i64::MIN..0i64) {
            let toks = lex(&n.to_string()).unwrap();
            prop_assert_eq!(toks.len(), 1);
            prop_assert_eq!(toks[0].signed_value(), n);
        }

        #[test]
        fn spans_are_ordered_and_gaps_are_whitespace(
            source in "[a-z0-9_ \t\n+*/=<>!.,;(){}\\[\\]-]{0,48}"
        ) {
            if let Ok(toks) = lex(&source) {
                let mut prev_end = 0usize;
                for tok in &toks {
                    let range = tok.span.to_range();
                    prop_assert!(range.start >= prev_end);
                    prop_assert!(range.end > range.start);
                    prop_assert!(source[prev_end..range.start].chars().all(is_whitespace));
                    prev_end = range.end;
                }
                prop_assert!(source[prev_end..].chars().all(is_whitespace));
            }
        }
    }
}

use super::*;

#[test]
fn every_listed_keyword_is_recognized() {
    for kw in KEYWORDS {
        assert!(is_keyword(kw), "{kw} should be a keyword");
    }
    assert_eq!(KEYWORDS.len(), 27);
}

#[test]
fn type_words_are_not_keywords() {
    for word in ["int32", "uint8", "float64", "bool", "char", "str", "main", "printf"] {
        assert!(!is_keyword(word), "{word} should not be a keyword");
    }
}

#[test]
fn lookup_is_case_and_length_exact() {
    assert!(!is_keyword("Fn"));
    assert!(!is_keyword("f"));
    assert!(!is_keyword("structs"));
    assert!(!is_keyword("continues"));
    assert!(!is_keyword("extern?"));
    assert!(!is_keyword(""));
}

use super::*;
use aatbe_ir::ast::{ExpressionKind, ModuleStatement, Visibility};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    aatbe_lexer::lex(source).unwrap()
}

fn module(source: &str) -> ModuleNode {
    parse_module(&tokens(source)).into_result().unwrap()
}

// === Speculation ===

#[test]
fn failed_try_parse_leaves_peek_unchanged() {
    let toks = tokens("fn main(x int32)");
    let mut p = Parser::new(&toks);
    p.read();
    let before = p.peek().cloned();

    let result = p.try_parse(|p| {
        p.read();
        p.read();
        p.expect_symbol(":")
    });

    assert!(result.is_err());
    assert_eq!(p.peek().cloned(), before);
}

#[test]
fn successful_try_parse_keeps_progress() {
    let toks = tokens("a b");
    let mut p = Parser::new(&toks);
    let name = p.try_parse(|p| p.expect_identifier().map(|t| t.text.clone())).unwrap();
    assert_eq!(name, "a");
    assert_eq!(p.peek().unwrap().text, "b");
}

#[test]
fn nested_try_parse_restores_to_each_start() {
    let toks = tokens("a b c");
    let mut p = Parser::new(&toks);
    let outer = p.try_parse(|p| {
        p.read();
        let inner = p.try_parse(|p| {
            p.read();
            p.expect_symbol(";")
        });
        assert!(inner.is_err());
        assert_eq!(p.cursor().position(), 1);
        p.expect_symbol(";")
    });
    assert!(outer.is_err());
    assert_eq!(p.cursor().position(), 0);
}

// === Modules ===

#[test]
fn hello_world() {
    let m = module(
        r#"
        extern fn puts(s: str) -> int32
        fn main = {
            puts("hello");
            0
        }
        "#,
    );
    assert_eq!(m.len(), 2);
    let main = m.functions().nth(1).unwrap();
    assert_eq!(main.name, "main");
    let Some(body) = &main.body else {
        panic!("main has no body");
    };
    let ExpressionKind::Block(statements) = body.kind() else {
        panic!("body is {}", body.kind_name());
    };
    assert_eq!(statements.len(), 2);
}

#[test]
fn struct_and_functions_in_order() {
    let m = module("struct Test { a: foo; public b: baz } fn get(t: &Test) -> baz = t.b");
    let names: Vec<&str> = m.statements.iter().map(ModuleStatement::name).collect();
    assert_eq!(names, vec!["Test", "get"]);
    let decl = m.structs().next().unwrap();
    assert_eq!(decl.members.get(1).unwrap().visibility, Visibility::Public);
}

#[test]
fn canonical_display() {
    let m = module("fn add(a: int64, b: int64) -> int64 = a + b\nstruct P { x: int8 }");
    assert_eq!(
        m.to_string(),
        "Function(add, args (a : int64, b : int64, ), ret int64) = a + b\nStruct(P, members (x : int8, ))\n"
    );
}

#[test]
fn empty_module() {
    let output = parse_module(&[]);
    assert!(!output.has_errors());
    assert!(output.module.is_empty());
}

// === Recovery ===

#[test]
fn recovers_after_each_bad_statement() {
    let output = parse_module(&tokens(
        "fn good = 1\nval nope\nfn bad(x) = 2\nstruct Broken { a }\nfn also_good",
    ));

    let kinds: Vec<ParseErrorKind> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::UnexpectedToken,
            ParseErrorKind::ExpectedToken,
            ParseErrorKind::ExpectedToken,
        ]
    );

    let names: Vec<&str> = output.module.statements.iter().map(ModuleStatement::name).collect();
    assert_eq!(names, vec!["good", "also_good"]);
}

#[test]
fn errors_are_in_source_order() {
    let output = parse_module(&tokens("1 2 fn a(:) struct"));
    let starts: Vec<u32> = output.errors.iter().map(|e| e.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(output.errors.len(), 3);
}

#[test]
fn into_result_returns_errors() {
    let errors = parse_module(&tokens("struct")).into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_diagnostic().code.as_str(), "E1004");
}

// === Entry points ===

#[test]
fn expression_entry_requires_full_input() {
    let err = parse_expression(&tokens("a b")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.message, "unexpected identifier `b` after the end of the input");
}

#[test]
fn terminal_entry() {
    assert_eq!(parse_terminal(&tokens("7")).unwrap(), Terminal::integer(7));
}

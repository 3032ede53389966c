use super::*;
use aatbe_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

const BROKEN: &str = "fn good = 1\nval nope\nfn bad(x) = 2\nstruct Broken { a }\nfn also_good";

// === Clean input ===

#[test]
fn summarizes_declarations() {
    let summary = check_source(
        "struct Point { x: float64; y: float64 }\nfn origin() -> Point",
        &FrontendConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.statements.len(), 2);
    assert!(summary.statements[0].starts_with("struct Point"));
    assert!(summary.statements[1].starts_with("fn origin()"));
    assert_eq!(
        summary.structs,
        vec![StructSummary {
            name: "Point".to_string(),
            fields: vec![
                ("x".to_string(), "float64".to_string()),
                ("y".to_string(), "float64".to_string()),
            ],
        }]
    );
    assert!(summary.type_count >= 2);
}

#[test]
fn empty_source_is_clean() {
    let summary = check_source("", &FrontendConfig::default()).unwrap();
    assert_eq!(summary, FrontendSummary::default());
}

#[test]
fn lowering_can_be_skipped() {
    let config = FrontendConfig {
        lower_types: false,
        ..FrontendConfig::default()
    };
    let summary = check_source("fn f(x: Missing)", &config).unwrap();
    assert_eq!(summary.statements.len(), 1);
    assert!(summary.structs.is_empty());
    assert_eq!(summary.type_count, 0);
}

// === Failures ===

#[test]
fn lex_errors_stop_the_pipeline() {
    let diags = check_source("fn s = \"abc", &FrontendConfig::default()).unwrap_err();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("unterminated string literal"));
}

#[test]
fn parse_errors_are_all_reported() {
    let diags = check_source(BROKEN, &FrontendConfig::default()).unwrap_err();
    assert_eq!(diags.len(), 3);
    assert!(diags.iter().all(Diagnostic::is_error));
    assert!(diags.iter().any(|d| !d.notes.is_empty()));
}

#[test]
fn notes_can_be_stripped() {
    let config = FrontendConfig {
        render_notes: false,
        ..FrontendConfig::default()
    };
    let diags = check_source(BROKEN, &config).unwrap_err();
    assert!(diags.iter().all(|d| d.notes.is_empty()));
}

#[test]
fn error_limit() {
    let limited = FrontendConfig {
        max_errors: 1,
        ..FrontendConfig::default()
    };
    assert_eq!(check_source(BROKEN, &limited).unwrap_err().len(), 1);

    let unlimited = FrontendConfig {
        max_errors: 0,
        ..FrontendConfig::default()
    };
    assert_eq!(check_source(BROKEN, &unlimited).unwrap_err().len(), 3);
}

#[test]
fn type_errors_after_clean_parse() {
    let diags = check_source("fn f(x: Missing)", &FrontendConfig::default()).unwrap_err();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E2001);
    assert_eq!(diags[0].message, "unknown type `Missing`");
}

#[test]
fn analyze_keeps_error_stages_apart() {
    let errors = analyze("fn f(x: Missing)", &FrontendConfig::default()).unwrap_err();
    assert!(matches!(errors.as_slice(), [FrontendError::Type(_)]));

    let errors = analyze(BROKEN, &FrontendConfig::default()).unwrap_err();
    assert!(errors.iter().all(|e| matches!(e, FrontendError::Parse(_))));
}

// === Rendering ===

#[test]
fn renders_plain_text() {
    let source = "fn f(x: Missing)";
    let diags = check_source(source, &FrontendConfig::default()).unwrap_err();
    let text = render_diagnostics(source, &diags);

    assert!(text.starts_with("error[E2001]: unknown type `Missing`\n"));
    assert!(text.contains(" 1 | fn f(x: Missing)"));
    assert!(text.ends_with("error: aborting due to previous error\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn rendering_nothing_is_empty() {
    assert_eq!(render_diagnostics("fn main", &[]), "");
}

#[test]
fn tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
}

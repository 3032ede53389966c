//! Aatbe front-end pipeline.
//!
//! [`check_source`] runs one compilation unit through the lexer, the
//! parser and type lowering and reports either a summary of what was
//! declared or the diagnostics a driver would print. Code generation and
//! the command line are out of scope; this crate is the boundary they
//! consume.

use std::sync::Once;

use aatbe_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};
use aatbe_fmt::{format_statement, FormatConfig};
use aatbe_ir::ast::ModuleNode;
use aatbe_lexer::LexError;
use aatbe_parse::ParseError;
use aatbe_types::{lower_module, TypeError, TypeSystem};
use thiserror::Error;
use tracing::{debug, info};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Pipeline options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Run type lowering after a clean parse.
    pub lower_types: bool,
    /// Report at most this many diagnostics; 0 means no limit.
    pub max_errors: usize,
    /// Keep "while parsing ..." and similar notes in diagnostics.
    pub render_notes: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            lower_types: true,
            max_errors: 50,
            render_notes: true,
        }
    }
}

/// Any failure of the front end.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl FrontendError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            FrontendError::Lex(err) => err.to_diagnostic(),
            FrontendError::Parse(err) => err.to_diagnostic(),
            FrontendError::Type(err) => err.to_diagnostic(),
        }
    }
}

/// A struct and its field types as rendered by the type system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructSummary {
    pub name: String,
    pub fields: Vec<(String, String)>,
}

/// What a clean compilation unit declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontendSummary {
    /// Each statement as printed by `aatbe_fmt`.
    pub statements: Vec<String>,
    /// Lowered structs in declaration order; empty when lowering is off.
    pub structs: Vec<StructSummary>,
    /// Number of semantic types created by lowering.
    pub type_count: usize,
}

/// Lex, parse and (optionally) lower `source`.
pub fn analyze(
    source: &str,
    config: &FrontendConfig,
) -> Result<FrontendSummary, Vec<FrontendError>> {
    let tokens = aatbe_lexer::lex(source).map_err(|err| vec![FrontendError::from(err)])?;
    debug!(tokens = tokens.len(), "lexed");

    let mut module = aatbe_parse::parse_module(&tokens)
        .into_result()
        .map_err(|errors| errors.into_iter().map(FrontendError::from).collect::<Vec<_>>())?;
    debug!(statements = module.len(), "parsed");

    let mut summary = FrontendSummary {
        statements: module
            .statements
            .iter()
            .map(|s| format_statement(s, FormatConfig::default()))
            .collect(),
        ..FrontendSummary::default()
    };

    if config.lower_types {
        let (structs, type_count) = TypeSystem::scope(|types| lower(&mut module, types))
            .map_err(|errors| errors.into_iter().map(FrontendError::from).collect::<Vec<_>>())?;
        summary.structs = structs;
        summary.type_count = type_count;
    }

    info!(
        statements = summary.statements.len(),
        structs = summary.structs.len(),
        "front end finished"
    );
    Ok(summary)
}

fn lower(
    module: &mut ModuleNode,
    types: &mut TypeSystem<'_>,
) -> Result<(Vec<StructSummary>, usize), Vec<TypeError>> {
    lower_module(module, types)?;
    let types: &TypeSystem<'_> = types;

    let structs = module
        .structs()
        .filter_map(|decl| types.resolve_slot(decl.ty))
        .filter_map(|id| types.get(id).as_struct())
        .map(|s| StructSummary {
            name: s.name().to_string(),
            fields: s
                .fields()
                .map(|(name, ty)| (name.to_string(), types.display(ty)))
                .collect(),
        })
        .collect();
    Ok((structs, types.len()))
}

/// Like [`analyze`], but failures come back as diagnostics ready to render.
pub fn check_source(
    source: &str,
    config: &FrontendConfig,
) -> Result<FrontendSummary, Vec<Diagnostic>> {
    analyze(source, config).map_err(|errors| {
        let limit = if config.max_errors == 0 {
            errors.len()
        } else {
            config.max_errors
        };
        errors
            .iter()
            .take(limit)
            .map(|err| {
                let mut diag = err.to_diagnostic();
                if !config.render_notes {
                    diag.notes.clear();
                }
                diag
            })
            .collect()
    })
}

/// Render diagnostics as plain text, followed by a summary line.
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), source, ColorMode::Never, false);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

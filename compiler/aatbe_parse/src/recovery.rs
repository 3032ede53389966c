//! Statement-level error recovery.
//!
//! After a declaration fails, the parser skips ahead to the next token
//! that can start one: `fn`, `extern` or `struct`.

use aatbe_ir::{Token, TokenKind};

use crate::Parser;

/// Keywords that begin a module statement.
pub(crate) const STATEMENT_START: &[&str] = &["fn", "extern", "struct"];

fn starts_statement(token: &Token) -> bool {
    token.kind == TokenKind::Keyword && STATEMENT_START.contains(&token.text.as_str())
}

impl Parser<'_> {
    /// Skip at least one token, then stop before the next statement start.
    ///
    /// An `fn` directly after a skipped `extern` belongs to the failed
    /// declaration and is skipped too.
    pub(crate) fn synchronize(&mut self) {
        let mut last = self.read();
        while let Some(next) = self.peek() {
            let continues_extern =
                next.is(TokenKind::Keyword, "fn") && last.is_some_and(|t| t.is(TokenKind::Keyword, "extern"));
            if starts_statement(next) && !continues_extern {
                break;
            }
            last = self.read();
        }
    }
}

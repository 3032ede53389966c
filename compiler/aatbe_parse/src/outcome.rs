//! Parse results.
//!
//! A production either yields its node or a [`ParseError`]; there is no
//! third state to mis-read. [`ParseResultExt`] adds the two lifts grammar
//! code needs: converting a success into an enclosing node type, and
//! tagging a failure with what was being parsed.

use crate::ParseError;

pub type ParseResult<T> = Result<T, ParseError>;

pub trait ParseResultExt<T> {
    /// Convert a success into `U`, forwarding an error untouched.
    fn wrap_with<U: From<T>>(self) -> ParseResult<U>;

    /// Attach parsing context to an error.
    fn in_context(self, context: &'static str) -> ParseResult<T>;
}

impl<T> ParseResultExt<T> for ParseResult<T> {
    #[inline]
    fn wrap_with<U: From<T>>(self) -> ParseResult<U> {
        self.map(U::from)
    }

    #[inline]
    fn in_context(self, context: &'static str) -> ParseResult<T> {
        self.map_err(|err| err.with_context(context))
    }
}

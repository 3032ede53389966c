//! Error codes for all front-end diagnostics.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type lowering errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated character literal
    E0002,
    /// Empty character literal
    E0003,
    /// Invalid escape sequence
    E0004,
    /// Malformed number literal
    E0005,
    /// Number literal does not fit in 64 bits
    E0006,

    // Parser Errors (E1xxx)
    /// Invalid token
    E1001,
    /// Unexpected token
    E1002,
    /// Unexpected end of file
    E1003,
    /// Expected a specific token
    E1004,
    /// Expected a type
    E1005,
    /// Expected a literal or identifier
    E1006,
    /// Expected a symbol
    E1007,
    /// Invalid operator
    E1008,
    /// Expected an expression
    E1009,

    // Type Errors (E2xxx)
    /// Unknown type name
    E2001,
    /// Struct declared twice
    E2002,
    /// Struct member declared twice
    E2003,
    /// Field added to a non-struct type
    E2004,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
        }
    }

    /// One-line description for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated character literal",
            ErrorCode::E0003 => "empty character literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E0005 => "malformed number literal",
            ErrorCode::E0006 => "number literal out of range",
            ErrorCode::E1001 => "invalid token",
            ErrorCode::E1002 => "unexpected token",
            ErrorCode::E1003 => "unexpected end of file",
            ErrorCode::E1004 => "expected token",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "expected literal or identifier",
            ErrorCode::E1007 => "expected symbol",
            ErrorCode::E1008 => "invalid operator",
            ErrorCode::E1009 => "expected expression",
            ErrorCode::E2001 => "unknown type name",
            ErrorCode::E2002 => "duplicate struct",
            ErrorCode::E2003 => "duplicate struct member",
            ErrorCode::E2004 => "field added to a non-struct type",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Literal and identifier leaves.

use std::fmt;

use super::TypeNode;

/// Smallest AST leaf: a literal or an identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Terminal {
    Boolean(bool),
    /// Integer literal. `value` holds two's complement bits for negative
    /// literals; `ty` is the literal's suffix type, `int64` when absent.
    Integer {
        value: u64,
        ty: TypeNode,
    },
    Character(char),
    String(String),
    Identifier(String),
    /// `()`
    Unit,
}

impl Terminal {
    /// Integer literal with the default `int64` type.
    pub fn integer(value: u64) -> Self {
        Terminal::Integer {
            value,
            ty: TypeNode::DEFAULT_INTEGER,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Terminal::Boolean(_) => "Boolean",
            Terminal::Integer { .. } => "Integer",
            Terminal::Character(_) => "Character",
            Terminal::String(_) => "String",
            Terminal::Identifier(_) => "Identifier",
            Terminal::Unit => "Unit",
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Terminal::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Terminal::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Append `text` to `out`, escaping the characters the lexer decodes.
pub fn escape_literal(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Boolean(b) => write!(f, "{b}"),
            Terminal::Integer { value, ty } => {
                if ty.is_signed_integer() {
                    write!(f, "{}", *value as i64)?;
                } else {
                    write!(f, "{value}")?;
                }
                if *ty != TypeNode::DEFAULT_INTEGER {
                    write!(f, "{ty}")?;
                }
                Ok(())
            }
            Terminal::Character(c) => {
                let mut buf = String::new();
                escape_literal(c.encode_utf8(&mut [0; 4]), &mut buf);
                write!(f, "'{buf}'")
            }
            Terminal::String(s) => {
                let mut buf = String::with_capacity(s.len());
                escape_literal(s, &mut buf);
                write!(f, "\"{buf}\"")
            }
            Terminal::Identifier(name) => f.write_str(name),
            Terminal::Unit => f.write_str("()"),
        }
    }
}

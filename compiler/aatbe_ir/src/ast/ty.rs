//! Syntactic type annotations.
//!
//! These describe what the programmer wrote. Semantic types live in
//! `aatbe_types` and are reached through `TypeSlot`s.

use std::fmt;

/// Bit width of an integer type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub const ALL: [IntWidth; 4] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64];

    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.bits() == bits)
    }
}

/// Bit width of a floating-point type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum FloatWidth {
    W32,
    W64,
}

impl FloatWidth {
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::W32 => 32,
            FloatWidth::W64 => 64,
        }
    }
}

/// A type as written in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeNode {
    /// `int8`, `int16`, `int32`, `int64`
    SInt(IntWidth),
    /// `uint8`, `uint16`, `uint32`, `uint64`
    UInt(IntWidth),
    /// `float32`, `float64`
    Float(FloatWidth),
    Bool,
    Char,
    Str,
    /// `()`
    Unit,
    /// `[T]`
    Slice(Box<TypeNode>),
    /// `[T; N]`
    Array(Box<TypeNode>, u64),
    /// `&T`
    Ref(Box<TypeNode>),
    /// `*T`
    Pointer(Box<TypeNode>),
    /// A named type, resolved to a struct during lowering.
    Typename(String),
}

impl TypeNode {
    /// Type of an integer literal without a suffix.
    pub const DEFAULT_INTEGER: TypeNode = TypeNode::SInt(IntWidth::W64);

    /// Look up a builtin type word such as `int32` or `str`.
    pub fn primitive(name: &str) -> Option<TypeNode> {
        let ty = match name {
            "bool" => TypeNode::Bool,
            "char" => TypeNode::Char,
            "str" => TypeNode::Str,
            "float32" => TypeNode::Float(FloatWidth::W32),
            "float64" => TypeNode::Float(FloatWidth::W64),
            _ => {
                let (signed, digits) = match name.strip_prefix("uint") {
                    Some(rest) => (false, rest),
                    None => (true, name.strip_prefix("int")?),
                };
                if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let width = IntWidth::from_bits(digits.parse().ok()?)?;
                if signed {
                    TypeNode::SInt(width)
                } else {
                    TypeNode::UInt(width)
                }
            }
        };
        Some(ty)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, TypeNode::SInt(_) | TypeNode::UInt(_))
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(self, TypeNode::SInt(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::SInt(_) => "SInt",
            TypeNode::UInt(_) => "UInt",
            TypeNode::Float(_) => "Float",
            TypeNode::Bool => "Bool",
            TypeNode::Char => "Char",
            TypeNode::Str => "Str",
            TypeNode::Unit => "Unit",
            TypeNode::Slice(_) => "Slice",
            TypeNode::Array(..) => "Array",
            TypeNode::Ref(_) => "Ref",
            TypeNode::Pointer(_) => "Pointer",
            TypeNode::Typename(_) => "Typename",
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::SInt(w) => write!(f, "int{}", w.bits()),
            TypeNode::UInt(w) => write!(f, "uint{}", w.bits()),
            TypeNode::Float(w) => write!(f, "float{}", w.bits()),
            TypeNode::Bool => f.write_str("bool"),
            TypeNode::Char => f.write_str("char"),
            TypeNode::Str => f.write_str("str"),
            TypeNode::Unit => f.write_str("()"),
            TypeNode::Slice(inner) => write!(f, "[{inner}]"),
            TypeNode::Array(inner, size) => write!(f, "[{inner}; {size}]"),
            TypeNode::Ref(inner) => write!(f, "&{inner}"),
            TypeNode::Pointer(inner) => write!(f, "*{inner}"),
            TypeNode::Typename(name) => f.write_str(name),
        }
    }
}

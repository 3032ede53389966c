//! Semantic type descriptors.

use aatbe_ir::ast::{FloatWidth, IntWidth};

use crate::{StructType, TypeId};

/// A type descriptor stored in a [`TypeSystem`](crate::TypeSystem).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BaseType<'id> {
    Struct(StructType<'id>),
    Int { width: IntWidth, signed: bool },
    Float { width: FloatWidth },
    Bool,
    Char,
    Unit,
    Array { element: TypeId<'id>, size: u64 },
    Pointer { element: TypeId<'id> },
    Void,
    Unknown,
}

impl<'id> BaseType<'id> {
    pub fn as_struct(&self) -> Option<&StructType<'id>> {
        match self {
            BaseType::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn as_struct_mut(&mut self) -> Option<&mut StructType<'id>> {
        match self {
            BaseType::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Width and signedness of an integer type.
    pub fn as_int(&self) -> Option<(IntWidth, bool)> {
        match *self {
            BaseType::Int { width, signed } => Some((width, signed)),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<FloatWidth> {
        match *self {
            BaseType::Float { width } => Some(width),
            _ => None,
        }
    }

    /// Element type and length of an array type.
    pub fn as_array(&self) -> Option<(TypeId<'id>, u64)> {
        match *self {
            BaseType::Array { element, size } => Some((element, size)),
            _ => None,
        }
    }

    /// Pointee of a pointer type.
    pub fn as_pointer(&self) -> Option<TypeId<'id>> {
        match *self {
            BaseType::Pointer { element } => Some(element),
            _ => None,
        }
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, BaseType::Struct(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            BaseType::Struct(_) => "Struct",
            BaseType::Int { .. } => "Int",
            BaseType::Float { .. } => "Float",
            BaseType::Bool => "Bool",
            BaseType::Char => "Char",
            BaseType::Unit => "Unit",
            BaseType::Array { .. } => "Array",
            BaseType::Pointer { .. } => "Pointer",
            BaseType::Void => "Void",
            BaseType::Unknown => "Unknown",
        }
    }
}

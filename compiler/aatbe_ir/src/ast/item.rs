//! Module-level declarations and their bindings.

use std::fmt;

use super::{Expression, TypeNode};
use crate::{Span, TypeSlot};

/// Visibility of a struct member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    Public,
    #[default]
    Internal,
}

/// `name: type` in a function signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterBinding {
    pub name: String,
    pub ty: TypeNode,
    pub span: Span,
    /// Filled by type lowering.
    pub resolved: TypeSlot,
}

impl ParameterBinding {
    pub fn new(name: impl Into<String>, ty: TypeNode, span: Span) -> Self {
        ParameterBinding {
            name: name.into(),
            ty,
            span,
            resolved: TypeSlot::EMPTY,
        }
    }
}

impl fmt::Display for ParameterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.ty)
    }
}

/// `[public] name: type` in a struct body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberBinding {
    pub name: String,
    pub ty: TypeNode,
    pub visibility: Visibility,
    pub span: Span,
    /// Filled by type lowering.
    pub resolved: TypeSlot,
}

impl MemberBinding {
    pub fn new(name: impl Into<String>, ty: TypeNode, visibility: Visibility, span: Span) -> Self {
        MemberBinding {
            name: name.into(),
            ty,
            visibility,
            span,
            resolved: TypeSlot::EMPTY,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

impl fmt::Display for MemberBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_public() {
            f.write_str("public ")?;
        }
        write!(f, "{} : {}", self.name, self.ty)
    }
}

/// Ordered parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParameterList {
    bindings: Vec<ParameterBinding>,
}

/// Ordered member list.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MemberList {
    bindings: Vec<MemberBinding>,
}

macro_rules! binding_list {
    ($list:ident, $binding:ident) => {
        impl $list {
            pub fn new(bindings: Vec<$binding>) -> Self {
                $list { bindings }
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.bindings.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.bindings.is_empty()
            }

            pub fn get(&self, index: usize) -> Option<&$binding> {
                self.bindings.get(index)
            }

            /// First binding with the given name.
            pub fn find(&self, name: &str) -> Option<&$binding> {
                self.bindings.iter().find(|b| b.name == name)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $binding> {
                self.bindings.iter()
            }

            pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, $binding> {
                self.bindings.iter_mut()
            }
        }

        impl<'a> IntoIterator for &'a $list {
            type Item = &'a $binding;
            type IntoIter = std::slice::Iter<'a, $binding>;

            fn into_iter(self) -> Self::IntoIter {
                self.bindings.iter()
            }
        }

        impl fmt::Display for $list {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                for binding in &self.bindings {
                    write!(f, "{binding}, ")?;
                }
                f.write_str(")")
            }
        }
    };
}

binding_list!(ParameterList, ParameterBinding);
binding_list!(MemberList, MemberBinding);

/// `[extern] fn name [(params [, ...])] [-> type] [= body]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub is_extern: bool,
    pub name: String,
    pub params: ParameterList,
    pub return_type: TypeNode,
    pub body: Option<Expression>,
    pub is_variadic: bool,
    pub span: Span,
    /// Resolved return type, filled by type lowering.
    pub ty: TypeSlot,
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extern {
            f.write_str("extern ")?;
        }
        write!(f, "Function({}, args (", self.name)?;
        for param in &self.params {
            write!(f, "{param}, ")?;
        }
        if self.is_variadic {
            f.write_str("..., ")?;
        }
        write!(f, "), ret {})", self.return_type)?;
        if let Some(body) = &self.body {
            write!(f, " = {body}")?;
        }
        Ok(())
    }
}

/// `struct Name { member; member }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructDecl {
    pub name: String,
    pub members: MemberList,
    pub span: Span,
    /// The registered struct type, filled by type lowering.
    pub ty: TypeSlot,
}

impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Struct({}, members {})", self.name, self.members)
    }
}

/// A top-level declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModuleStatement {
    Function(FunctionDecl),
    Struct(StructDecl),
}

impl ModuleStatement {
    pub fn name(&self) -> &str {
        match self {
            ModuleStatement::Function(func) => &func.name,
            ModuleStatement::Struct(decl) => &decl.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ModuleStatement::Function(func) => func.span,
            ModuleStatement::Struct(decl) => decl.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ModuleStatement::Function(_) => "Function",
            ModuleStatement::Struct(_) => "Struct",
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            ModuleStatement::Function(func) => Some(func),
            ModuleStatement::Struct(_) => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructDecl> {
        match self {
            ModuleStatement::Struct(decl) => Some(decl),
            ModuleStatement::Function(_) => None,
        }
    }
}

impl From<FunctionDecl> for ModuleStatement {
    fn from(func: FunctionDecl) -> Self {
        ModuleStatement::Function(func)
    }
}

impl From<StructDecl> for ModuleStatement {
    fn from(decl: StructDecl) -> Self {
        ModuleStatement::Struct(decl)
    }
}

impl fmt::Display for ModuleStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatement::Function(func) => func.fmt(f),
            ModuleStatement::Struct(decl) => decl.fmt(f),
        }
    }
}

/// A parsed compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModuleNode {
    pub statements: Vec<ModuleStatement>,
}

impl ModuleNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: ModuleStatement) {
        self.statements.push(statement);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.statements.iter().filter_map(ModuleStatement::as_function)
    }

    pub fn structs(&self) -> impl Iterator<Item = &StructDecl> {
        self.statements.iter().filter_map(ModuleStatement::as_struct)
    }
}

impl fmt::Display for ModuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

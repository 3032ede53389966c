//! Lowering AST type annotations into a [`TypeSystem`].
//!
//! Runs in two passes so declaration order does not matter:
//!
//! 1. every struct is registered by name;
//! 2. member, parameter and return types are lowered and their
//!    `TypeSlot`s filled.
//!
//! Errors do not stop lowering. A failed annotation leaves its slot empty.

use aatbe_ir::ast::{IntWidth, ModuleNode, ModuleStatement, TypeNode};
use aatbe_ir::Span;
use aatbe_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{TypeError, TypeId, TypeSystem};

/// Lower every type annotation in `module`.
pub fn lower_module<'id>(module: &mut ModuleNode, types: &mut TypeSystem<'id>) -> Result<(), Vec<TypeError>> {
    let mut errors = Vec::new();
    register_structs(module, types, &mut errors);

    for statement in &mut module.statements {
        match statement {
            ModuleStatement::Struct(decl) => {
                let Some(target) = types.resolve_slot(decl.ty) else {
                    continue;
                };
                let mut seen: FxHashMap<String, Span> = FxHashMap::default();
                for member in decl.members.iter_mut() {
                    if let Some(&first) = seen.get(&member.name) {
                        errors.push(TypeError::DuplicateMember {
                            struct_name: decl.name.clone(),
                            member: member.name.clone(),
                            span: member.span,
                            first,
                        });
                        continue;
                    }
                    seen.insert(member.name.clone(), member.span);

                    match lower_type(types, &member.ty, member.span) {
                        Ok(id) => {
                            types.fill_slot(&mut member.resolved, id);
                            if let Err(err) = types.add_field(target, &member.name, id) {
                                errors.push(err);
                            }
                        }
                        Err(err) => errors.push(err),
                    }
                }
            }
            ModuleStatement::Function(func) => {
                for param in func.params.iter_mut() {
                    match lower_type(types, &param.ty, param.span) {
                        Ok(id) => types.fill_slot(&mut param.resolved, id),
                        Err(err) => errors.push(err),
                    }
                }
                match lower_type(types, &func.return_type, func.span) {
                    Ok(id) => types.fill_slot(&mut func.ty, id),
                    Err(err) => errors.push(err),
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn register_structs(module: &mut ModuleNode, types: &mut TypeSystem<'_>, errors: &mut Vec<TypeError>) {
    let mut first_spans: FxHashMap<String, Span> = FxHashMap::default();
    for decl in module.statements.iter_mut().filter_map(|s| match s {
        ModuleStatement::Struct(decl) => Some(decl),
        ModuleStatement::Function(_) => None,
    }) {
        if let Some(&first) = first_spans.get(&decl.name) {
            errors.push(TypeError::DuplicateStruct {
                name: decl.name.clone(),
                span: decl.span,
                first,
            });
            continue;
        }
        first_spans.insert(decl.name.clone(), decl.span);

        let id = types.create_struct(&decl.name);
        types.fill_slot(&mut decl.ty, id);
        debug!(name = %decl.name, id = id.index(), "registered struct");
    }
}

/// Lower one syntactic type. `span` locates the annotation for errors.
///
/// `str`, slices and references lower to pointers; named types must be
/// structs already registered in `types`.
pub fn lower_type<'id>(types: &mut TypeSystem<'id>, node: &TypeNode, span: Span) -> Result<TypeId<'id>, TypeError> {
    ensure_sufficient_stack(|| {
        let id = match node {
            TypeNode::SInt(width) => types.create_int(*width, true),
            TypeNode::UInt(width) => types.create_int(*width, false),
            TypeNode::Float(width) => types.create_float(*width),
            TypeNode::Bool => types.create_bool(),
            TypeNode::Char => types.create_char(),
            TypeNode::Unit => types.create_unit(),
            TypeNode::Str => {
                let byte = types.create_int(IntWidth::W8, true);
                types.create_pointer(byte)
            }
            TypeNode::Slice(inner) | TypeNode::Ref(inner) | TypeNode::Pointer(inner) => {
                let element = lower_type(types, inner, span)?;
                types.create_pointer(element)
            }
            TypeNode::Array(inner, size) => {
                let element = lower_type(types, inner, span)?;
                types.create_array(element, *size)
            }
            TypeNode::Typename(name) => types.lookup_struct(name).ok_or_else(|| TypeError::UnknownType {
                name: name.clone(),
                span,
            })?,
        };
        Ok(id)
    })
}

//! The type arena.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use aatbe_ir::ast::{FloatWidth, IntWidth};
use aatbe_ir::TypeSlot;
use rustc_hash::FxHashMap;

use crate::{BaseType, StructType, TypeError, TypeId};

/// Source of per-instance stamps recorded in `TypeSlot`s.
///
/// Stamps identify an instance across the whole process, so they cannot
/// live in the instance. A `u64` does not wrap within any real run, which
/// keeps every stamp unique.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Arena of type descriptors for one compilation unit.
///
/// Ids are arena indices. Types are never removed, and every descriptor
/// except a struct is interned, so equal primitives share an id.
pub struct TypeSystem<'id> {
    types: Vec<BaseType<'id>>,
    interned: FxHashMap<BaseType<'id>, TypeId<'id>>,
    structs: FxHashMap<String, TypeId<'id>>,
    stamp: u64,
}

impl<'id> TypeSystem<'id> {
    /// Run `f` with a fresh type system whose ids cannot escape the call.
    pub fn scope<R>(f: impl for<'brand> FnOnce(&mut TypeSystem<'brand>) -> R) -> R {
        let mut types = TypeSystem {
            types: Vec::new(),
            interned: FxHashMap::default(),
            structs: FxHashMap::default(),
            stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
        };
        f(&mut types)
    }

    fn push(&mut self, ty: BaseType<'id>) -> TypeId<'id> {
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    fn intern(&mut self, ty: BaseType<'id>) -> TypeId<'id> {
        if let Some(&id) = self.interned.get(&ty) {
            return id;
        }
        let id = self.push(ty.clone());
        self.interned.insert(ty, id);
        id
    }

    /// Create a new, empty struct. The first struct with a name is the one
    /// [`Self::lookup_struct`] finds.
    pub fn create_struct(&mut self, name: &str) -> TypeId<'id> {
        let id = self.push(BaseType::Struct(StructType::new(name)));
        self.structs.entry(name.to_string()).or_insert(id);
        id
    }

    pub fn create_int(&mut self, width: IntWidth, signed: bool) -> TypeId<'id> {
        self.intern(BaseType::Int { width, signed })
    }

    pub fn create_float(&mut self, width: FloatWidth) -> TypeId<'id> {
        self.intern(BaseType::Float { width })
    }

    pub fn create_bool(&mut self) -> TypeId<'id> {
        self.intern(BaseType::Bool)
    }

    pub fn create_char(&mut self) -> TypeId<'id> {
        self.intern(BaseType::Char)
    }

    pub fn create_unit(&mut self) -> TypeId<'id> {
        self.intern(BaseType::Unit)
    }

    pub fn create_array(&mut self, element: TypeId<'id>, size: u64) -> TypeId<'id> {
        self.intern(BaseType::Array { element, size })
    }

    pub fn create_pointer(&mut self, element: TypeId<'id>) -> TypeId<'id> {
        self.intern(BaseType::Pointer { element })
    }

    pub fn create_void(&mut self) -> TypeId<'id> {
        self.intern(BaseType::Void)
    }

    pub fn create_unknown(&mut self) -> TypeId<'id> {
        self.intern(BaseType::Unknown)
    }

    /// The descriptor behind `id`.
    #[inline]
    pub fn get(&self, id: TypeId<'id>) -> &BaseType<'id> {
        // Ids are only minted by `push` on this instance.
        &self.types[id.index() as usize]
    }

    pub fn lookup_struct(&self, name: &str) -> Option<TypeId<'id>> {
        self.structs.get(name).copied()
    }

    /// Add or retype a field of the struct `target`.
    pub fn add_field(&mut self, target: TypeId<'id>, name: &str, field: TypeId<'id>) -> Result<(), TypeError> {
        if !self.get(target).is_struct() {
            return Err(TypeError::NotAStruct {
                field: name.to_string(),
                ty: self.display(target),
            });
        }
        if let Some(s) = self.types[target.index() as usize].as_struct_mut() {
            s.add_field(name, field);
        }
        Ok(())
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Every id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = TypeId<'id>> {
        (0..self.types.len() as u32).map(TypeId::new)
    }

    /// Record `id` in an AST slot.
    pub fn fill_slot(&self, slot: &mut TypeSlot, id: TypeId<'id>) {
        slot.fill(self.stamp, id.index());
    }

    /// Read a slot filled by this type system. Slots that are empty or
    /// were filled by another instance read as `None`.
    pub fn resolve_slot(&self, slot: TypeSlot) -> Option<TypeId<'id>> {
        let entry = slot.entry()?;
        (entry.owner == self.stamp && (entry.index as usize) < self.types.len())
            .then_some(TypeId::new(entry.index))
    }

    /// Render a type the way it is written in source.
    pub fn display(&self, id: TypeId<'id>) -> String {
        let mut out = String::new();
        self.write_type(id, &mut out);
        out
    }

    fn write_type(&self, id: TypeId<'id>, out: &mut String) {
        match self.get(id) {
            BaseType::Struct(s) => out.push_str(s.name()),
            BaseType::Int { width, signed } => {
                let prefix = if *signed { "int" } else { "uint" };
                let _ = write!(out, "{prefix}{}", width.bits());
            }
            BaseType::Float { width } => {
                let _ = write!(out, "float{}", width.bits());
            }
            BaseType::Bool => out.push_str("bool"),
            BaseType::Char => out.push_str("char"),
            BaseType::Unit => out.push_str("()"),
            BaseType::Array { element, size } => {
                out.push('[');
                self.write_type(*element, out);
                let _ = write!(out, "; {size}]");
            }
            BaseType::Pointer { element } => {
                out.push('*');
                self.write_type(*element, out);
            }
            BaseType::Void => out.push_str("void"),
            BaseType::Unknown => out.push_str("{unknown}"),
        }
    }
}

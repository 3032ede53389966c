//! Struct descriptors.

use crate::TypeId;

/// A named struct with fields in insertion order.
///
/// Fields hold handles rather than descriptors, so a field may name a
/// type created after the struct, including the struct itself.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructType<'id> {
    name: String,
    fields: Vec<(String, TypeId<'id>)>,
}

impl<'id> StructType<'id> {
    pub fn new(name: impl Into<String>) -> Self {
        StructType {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a field, or retype an existing one in place.
    ///
    /// Returns the previous type when the field already existed.
    pub fn add_field(&mut self, name: impl Into<String>, ty: TypeId<'id>) -> Option<TypeId<'id>> {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, ty)),
            None => {
                self.fields.push((name, ty));
                None
            }
        }
    }

    pub fn field(&self, name: &str) -> Option<TypeId<'id>> {
        self.fields.iter().find(|(existing, _)| existing == name).map(|&(_, ty)| ty)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, TypeId<'id>)> + '_ {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Number of fields.
    pub fn size(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests;

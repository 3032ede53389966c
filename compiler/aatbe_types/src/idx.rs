//! Branded type handles.

use std::fmt;
use std::marker::PhantomData;

/// Invariant lifetime marker. `'id` can be neither shortened nor extended,
/// so two brands only unify when they are the same brand.
type Brand<'id> = PhantomData<fn(&'id ()) -> &'id ()>;

/// Handle to a type in the [`TypeSystem`](crate::TypeSystem) branded `'id`.
///
/// The raw value is the arena index. Handles are compared by index.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TypeId<'id> {
    index: u32,
    brand: Brand<'id>,
}

impl TypeId<'_> {
    #[inline]
    pub(crate) fn new(index: u32) -> Self {
        TypeId {
            index,
            brand: PhantomData,
        }
    }

    /// Position in the owning arena.
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Debug for TypeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.index)
    }
}

//! Resolved-type slots carried by AST nodes.
//!
//! The parser leaves every slot empty. Semantic analysis records the
//! handle of the resolved type together with the stamp of the type
//! system that minted it, so a slot can only be read back through the
//! same type system instance.

/// Stamp and index of a resolved semantic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SlotEntry {
    /// Identity of the owning type system instance.
    pub owner: u64,
    /// Arena index within that instance.
    pub index: u32,
}

/// An initially empty slot for a resolved semantic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeSlot(Option<SlotEntry>);

impl TypeSlot {
    pub const EMPTY: TypeSlot = TypeSlot(None);

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn entry(&self) -> Option<SlotEntry> {
        self.0
    }

    /// Record a resolved type. Overwrites any earlier resolution.
    #[inline]
    pub fn fill(&mut self, owner: u64, index: u32) {
        self.0 = Some(SlotEntry { owner, index });
    }
}

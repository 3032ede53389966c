//! Parser snapshots for speculative parsing.
//!
//! A snapshot is only the cursor index: the parser allocates nothing
//! outside the values it returns, so restoring the index undoes a failed
//! attempt completely. Snapshots order by position, so the later of two
//! compares greater.

/// Saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParserSnapshot {
    cursor_pos: usize,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize) -> Self {
        ParserSnapshot { cursor_pos }
    }

    /// Token index this snapshot restores to.
    #[inline]
    pub fn position(self) -> usize {
        self.cursor_pos
    }
}

#[cfg(test)]
mod tests;

mod contiguous;
mod linked;

pub use contiguous::VecChain;
pub use linked::LinkedChain;

/// Sequence interface the merge-insertion engine is written against.
///
/// - A `Cursor` names one element, or the position one past the last element.
/// - Cursors are only carried across a mutation when the method says so; everything else
///   re-derives positions from `front`.
/// - `Unit` is a run of elements detached from the chain, owned until it is attached again.
pub trait Chain {
    type Cursor: Copy + Eq + std::fmt::Debug;
    type Unit;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn front(&self) -> Self::Cursor;

    /// Moves `steps` elements forward. Landing one past the last element is allowed.
    fn advance(&self, cursor: Self::Cursor, steps: usize) -> Self::Cursor;

    fn value(&self, cursor: Self::Cursor) -> u64;

    /// Exchanges `[first, left_last]` with the run that directly follows it and ends at
    /// `right_last`. Returns the cursor after `right_last`'s old position.
    fn swap_halves(
        &mut self,
        first: Self::Cursor,
        left_last: Self::Cursor,
        right_last: Self::Cursor,
    ) -> Self::Cursor;

    /// Removes `count` elements starting at `at`. The returned cursor names the element
    /// that followed the removed run and stays valid for further traversal.
    fn detach(&mut self, at: Self::Cursor, count: usize) -> (Self::Unit, Self::Cursor);

    /// Inserts `unit` so that its first element ends up where `at` was.
    fn attach(&mut self, at: Self::Cursor, unit: Self::Unit);

    /// Last element of a detached unit.
    fn representative(&self, unit: &Self::Unit) -> u64;
}

use crate::{Removal, ViewContext};

/// The capability set a UI runtime provides to the reconciler.
///
/// Positions are view-slot positions (`0..view_count()`), not data indexes. The host owns the
/// views, their bound items and their contexts; the reconciler only tells it what to change.
///
/// Contract:
/// - `insert_view` with `position == view_count()` appends.
/// - A removal that returns [`Removal::Pending`] keeps its view in place (and counted) until the
///   host reports completion via [`crate::Reconciler::complete_removal`].
/// - Removals requested with `skip_animation = true` complete synchronously.
pub trait ViewHost<T> {
    /// Number of views currently in the slot, including views whose removal is pending.
    fn view_count(&self) -> usize;

    /// Creates (or recycles) a view bound to `item` and inserts it at `position`.
    fn insert_view(&mut self, position: usize, item: &T, context: ViewContext);

    /// Removes the view at `position`.
    fn remove_view(&mut self, position: usize, return_to_cache: bool, skip_animation: bool)
    -> Removal;

    /// Moves an existing view to another slot without rebinding it.
    fn move_view(&mut self, from: usize, to: usize);

    /// Binds an existing view to a different item and refreshes its bindings.
    fn rebind_view(&mut self, position: usize, item: &T, context: ViewContext);

    /// Replaces the context of a view whose bound item stays the same.
    fn update_context(&mut self, position: usize, context: ViewContext);

    fn bound_item(&self, position: usize) -> Option<&T>;

    fn view_context(&self, position: usize) -> Option<ViewContext>;

    /// Measures the rendered height of the first view. `0` means "not laid out yet".
    fn measure_item_height(&mut self) -> u32;

    /// Remaining visible distance between the last rendered view and the bottom edge of the
    /// viewport. Positive values mean more rows would be visible.
    fn distance_to_bottom(&self) -> i64;

    /// Called whenever the buffer heights may have changed.
    fn buffers_changed(&mut self, _top: u64, _bottom: u64) {}
}

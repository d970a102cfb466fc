use alloc::vec::Vec;

use virtual_repeat::{BatchStatus, Error, Reconciler, RepeatOptions, Splice, WindowState};

use crate::SlotHost;

/// A framework-neutral controller that owns a sequence and keeps a [`SlotHost`] window in sync
/// with it through a `virtual_repeat::Reconciler`.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `replace_items` / `splice` (and the `push`, `remove`, `set` shorthands) when data changes
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick, to finish removal animations
#[derive(Clone, Debug)]
pub struct Controller<T> {
    items: Vec<T>,
    reconciler: Reconciler<T>,
    host: SlotHost<T>,
}

impl<T: Clone + PartialEq> Controller<T> {
    pub fn new(options: RepeatOptions, host: SlotHost<T>) -> Self {
        Self {
            items: Vec::new(),
            reconciler: Reconciler::new(options),
            host,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn reconciler(&self) -> &Reconciler<T> {
        &self.reconciler
    }

    pub fn host(&self) -> &SlotHost<T> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SlotHost<T> {
        &mut self.host
    }

    pub fn state(&self) -> WindowState {
        self.reconciler.state(&self.host)
    }

    pub fn is_settled(&self) -> bool {
        self.reconciler.is_settled()
    }

    /// Swaps in a new sequence instance.
    pub fn replace_items(&mut self, items: Vec<T>, now_ms: u64) -> BatchStatus {
        self.host.set_now(now_ms);
        self.items = items;
        self.reconciler.instance_changed(&mut self.host, &self.items)
    }

    /// Removes `removed_count` items at `index` and inserts `insert` in their place.
    ///
    /// Like `Vec::splice`, but out-of-range requests are reported instead of panicking.
    pub fn splice(
        &mut self,
        index: usize,
        removed_count: usize,
        insert: impl IntoIterator<Item = T>,
        now_ms: u64,
    ) -> Result<BatchStatus, Error> {
        let inserted: Vec<T> = insert.into_iter().collect();
        let len = self.items.len();
        if index > len || removed_count > len - index {
            return Err(Error::SpliceOutOfBounds {
                index,
                added_count: inserted.len(),
                len,
            });
        }

        let splice = Splice::new(index, removed_count, inserted.len());
        self.items.splice(index..index + removed_count, inserted);
        splice.validate(self.items.len())?;

        self.host.set_now(now_ms);
        let status = self
            .reconciler
            .instance_mutated(&mut self.host, &self.items, &[splice]);
        vdebug!(
            index,
            removed_count,
            added_count = splice.added_count,
            ?status,
            "Controller::splice"
        );
        Ok(status)
    }

    pub fn push(&mut self, item: T, now_ms: u64) -> BatchStatus {
        let index = self.items.len();
        self.items.push(item);
        self.host.set_now(now_ms);
        self.reconciler
            .instance_mutated(&mut self.host, &self.items, &[Splice::insert(index, 1)])
    }

    pub fn remove(&mut self, index: usize, now_ms: u64) -> Result<BatchStatus, Error> {
        self.splice(index, 1, None, now_ms)
    }

    /// Replaces the item at `index` in place.
    pub fn set(&mut self, index: usize, item: T, now_ms: u64) -> Result<BatchStatus, Error> {
        self.splice(index, 1, Some(item), now_ms)
    }

    /// Applies a new viewport height; the window capacity follows immediately.
    pub fn on_viewport_size(&mut self, viewport_height: u32) -> BatchStatus {
        self.host.set_viewport_height(viewport_height);
        let options = self
            .reconciler
            .options()
            .with_viewport_height(viewport_height);
        self.reconciler.set_options(options);
        self.reconciler.instance_changed(&mut self.host, &self.items)
    }

    /// Call this when the UI reports a scroll position change.
    ///
    /// Returns `false` when the window could not follow yet; the scroll position is kept and
    /// applied by the `tick` that settles the pending batch.
    pub fn on_scroll(&mut self, scroll_top: u64) -> bool {
        self.host.set_scroll_top(scroll_top);
        self.reconciler
            .handle_scroll(&mut self.host, &self.items, scroll_top)
    }

    /// Advances removal animations.
    ///
    /// Returns `None` when no animation finished by `now_ms`, otherwise the status after
    /// reporting every finished removal.
    pub fn tick(&mut self, now_ms: u64) -> Result<Option<BatchStatus>, Error> {
        let finished = self.host.finish_due_removals(now_ms);
        if finished.is_empty() {
            return Ok(None);
        }

        let mut status = BatchStatus::Pending;
        for removal in finished {
            vtrace!(removal = removal.0, now_ms, "Controller::tick: removal finished");
            status = self.reconciler.complete_removal(&mut self.host, removal)?;
        }
        if status == BatchStatus::Applied {
            let scroll_top = self.host.scroll_top();
            self.reconciler
                .handle_scroll(&mut self.host, &self.items, scroll_top);
        }
        Ok(Some(status))
    }
}

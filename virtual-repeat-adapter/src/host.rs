use alloc::vec::Vec;

use virtual_repeat::{Removal, RemovalId, ViewContext, ViewHost};

/// Stable identity of a view instance across recycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

/// Counters describing how much view work the host performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostStats {
    /// Views built from scratch.
    pub created: u64,
    /// Views taken from the cache instead of being built.
    pub recycled: u64,
    pub rebound: u64,
    pub context_updates: u64,
    pub moved: u64,
    pub removed: u64,
}

#[derive(Clone, Copy, Debug)]
struct Leaving {
    removal: RemovalId,
    done_at_ms: u64,
    return_to_cache: bool,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    id: ViewId,
    item: T,
    context: ViewContext,
    leaving: Option<Leaving>,
}

/// A rendered view as seen from outside the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedView<'a, T> {
    pub id: ViewId,
    pub item: &'a T,
    pub context: ViewContext,
    /// The view is playing its removal animation.
    pub leaving: bool,
}

/// A framework-neutral, in-memory [`ViewHost`].
///
/// Views live in slots, one item each. Removed views go to a cache and are reused by later
/// insertions. With a removal duration set, animated removals stay in their slot until
/// [`SlotHost::finish_due_removals`] reports them finished.
#[derive(Clone, Debug)]
pub struct SlotHost<T> {
    slots: Vec<Slot<T>>,
    cache: Vec<ViewId>,
    next_view: u64,
    next_removal: u64,
    item_height: u32,
    viewport_height: u32,
    scroll_top: u64,
    top_buffer: u64,
    bottom_buffer: u64,
    removal_duration_ms: u64,
    now_ms: u64,
    stats: HostStats,
}

impl<T> SlotHost<T> {
    pub fn new(item_height: u32, viewport_height: u32) -> Self {
        Self {
            slots: Vec::new(),
            cache: Vec::new(),
            next_view: 0,
            next_removal: 0,
            item_height,
            viewport_height,
            scroll_top: 0,
            top_buffer: 0,
            bottom_buffer: 0,
            removal_duration_ms: 0,
            now_ms: 0,
            stats: HostStats::default(),
        }
    }

    /// Animates removals for `duration_ms`. `0` makes every removal synchronous.
    pub fn with_removal_duration(mut self, duration_ms: u64) -> Self {
        self.removal_duration_ms = duration_ms;
        self
    }

    pub fn removal_duration_ms(&self) -> u64 {
        self.removal_duration_ms
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        self.item_height = item_height;
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) {
        self.scroll_top = scroll_top;
    }

    /// Sets the clock used to schedule removal animations.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn buffers(&self) -> (u64, u64) {
        (self.top_buffer, self.bottom_buffer)
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }

    pub fn cached_views(&self) -> usize {
        self.cache.len()
    }

    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|s| s.leaving.is_some())
    }

    pub fn rendered(&self) -> impl Iterator<Item = RenderedView<'_, T>> + '_ {
        self.slots.iter().map(|s| RenderedView {
            id: s.id,
            item: &s.item,
            context: s.context,
            leaving: s.leaving.is_some(),
        })
    }

    /// Drops every view whose removal animation has ended by `now_ms` and returns the removal
    /// ids to report back to the reconciler, oldest first.
    pub fn finish_due_removals(&mut self, now_ms: u64) -> Vec<RemovalId> {
        self.now_ms = now_ms;
        let mut done = Vec::new();
        let mut i = 0;
        while i < self.slots.len() {
            match self.slots[i].leaving {
                Some(leaving) if leaving.done_at_ms <= now_ms => {
                    let slot = self.slots.remove(i);
                    self.discard(slot.id, leaving.return_to_cache);
                    done.push(leaving.removal);
                }
                _ => i += 1,
            }
        }
        done.sort_unstable();
        done
    }

    fn discard(&mut self, id: ViewId, return_to_cache: bool) {
        self.stats.removed += 1;
        if return_to_cache {
            self.cache.push(id);
        }
    }

    fn acquire(&mut self) -> ViewId {
        if let Some(id) = self.cache.pop() {
            self.stats.recycled += 1;
            return id;
        }
        self.stats.created += 1;
        self.next_view += 1;
        ViewId(self.next_view)
    }
}

impl<T: Clone> ViewHost<T> for SlotHost<T> {
    fn view_count(&self) -> usize {
        self.slots.len()
    }

    fn insert_view(&mut self, position: usize, item: &T, context: ViewContext) {
        let id = self.acquire();
        let position = position.min(self.slots.len());
        self.slots.insert(
            position,
            Slot {
                id,
                item: item.clone(),
                context,
                leaving: None,
            },
        );
    }

    fn remove_view(
        &mut self,
        position: usize,
        return_to_cache: bool,
        skip_animation: bool,
    ) -> Removal {
        if position >= self.slots.len() {
            vwarn!(position, views = self.slots.len(), "remove_view: no such slot");
            return Removal::Done;
        }
        if skip_animation || self.removal_duration_ms == 0 {
            let slot = self.slots.remove(position);
            self.discard(slot.id, return_to_cache);
            return Removal::Done;
        }

        self.next_removal += 1;
        let removal = RemovalId(self.next_removal);
        let done_at_ms = self.now_ms.saturating_add(self.removal_duration_ms);
        vtrace!(position, removal = removal.0, done_at_ms, "remove_view: animating");
        self.slots[position].leaving = Some(Leaving {
            removal,
            done_at_ms,
            return_to_cache,
        });
        Removal::Pending(removal)
    }

    fn move_view(&mut self, from: usize, to: usize) {
        if from >= self.slots.len() {
            return;
        }
        let slot = self.slots.remove(from);
        let to = to.min(self.slots.len());
        self.slots.insert(to, slot);
        self.stats.moved += 1;
    }

    fn rebind_view(&mut self, position: usize, item: &T, context: ViewContext) {
        let Some(slot) = self.slots.get_mut(position) else {
            return;
        };
        slot.item = item.clone();
        slot.context = context;
        self.stats.rebound += 1;
    }

    fn update_context(&mut self, position: usize, context: ViewContext) {
        let Some(slot) = self.slots.get_mut(position) else {
            return;
        };
        slot.context = context;
        self.stats.context_updates += 1;
    }

    fn bound_item(&self, position: usize) -> Option<&T> {
        self.slots.get(position).map(|s| &s.item)
    }

    fn view_context(&self, position: usize) -> Option<ViewContext> {
        self.slots.get(position).map(|s| s.context)
    }

    fn measure_item_height(&mut self) -> u32 {
        if self.slots.is_empty() {
            return 0;
        }
        self.item_height
    }

    fn distance_to_bottom(&self) -> i64 {
        let rendered = self.slots.len() as u64 * self.item_height as u64;
        let bottom_edge = self
            .top_buffer
            .saturating_add(rendered)
            .saturating_sub(self.scroll_top);
        self.viewport_height as i64 - bottom_edge.min(i64::MAX as u64) as i64
    }

    fn buffers_changed(&mut self, top: u64, bottom: u64) {
        self.top_buffer = top;
        self.bottom_buffer = bottom;
    }
}

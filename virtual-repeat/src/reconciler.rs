use alloc::vec::Vec;

use crate::splice::merge_splice;
use crate::window::Window;
use crate::{
    BatchStatus, Error, Placement, Removal, RemovalId, RepeatOptions, Splice, ViewContext,
    ViewHost, WindowState,
};

/// End of the window a replacement row enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
}

/// A replacement view to insert once a pending removal completes.
#[derive(Clone, Copy, Debug)]
struct Refill {
    removal: RemovalId,
    edge: Edge,
    /// Index in the final sequence.
    index: usize,
}

/// Maps a row of the partially removed sequence (every removal so far applied, no additions)
/// to its index in the final sequence.
#[derive(Clone, Copy, Debug, Default)]
struct RowMap {
    splice_index: usize,
    added_before: usize,
    added: usize,
    still_removed: usize,
}

impl RowMap {
    fn final_index(&self, row: usize) -> usize {
        if row < self.splice_index {
            row + self.added_before
        } else if row < self.splice_index + self.still_removed {
            // Goes away with the current splice; the closing sweep rebinds it.
            self.splice_index + self.added_before
        } else {
            row - self.still_removed + self.added_before + self.added
        }
    }
}

/// Bookkeeping of a removal phase.
///
/// A leaving view keeps its host slot until its removal completes and its replacement row is
/// only materialized then. The rendered rows are therefore the pending top refills, the live
/// views, then the pending bottom refills.
#[derive(Debug, Default)]
struct RemovalPhase {
    outstanding: Vec<RemovalId>,
    refills: Vec<Refill>,
    /// One entry per host slot; `true` marks a view whose removal is pending.
    leaving: Vec<bool>,
    rows: RowMap,
}

impl RemovalPhase {
    fn new(view_count: usize) -> Self {
        Self {
            leaving: alloc::vec![false; view_count],
            ..Self::default()
        }
    }

    fn live(&self) -> usize {
        self.leaving.iter().filter(|leaving| !**leaving).count()
    }

    fn pending(&self, edge: Edge) -> usize {
        self.refills.iter().filter(|r| r.edge == edge).count()
    }

    /// Host slot of the `nth` live view.
    fn live_slot(&self, nth: usize) -> Option<usize> {
        self.leaving
            .iter()
            .enumerate()
            .filter(|(_, leaving)| !**leaving)
            .nth(nth)
            .map(|(slot, _)| slot)
    }

    fn take_refill(&mut self, edge: Edge) -> Option<Refill> {
        let pos = self.refills.iter().rposition(|r| r.edge == edge)?;
        Some(self.refills.remove(pos))
    }
}

/// A splice batch suspended on asynchronous view removals.
#[derive(Clone, Debug)]
struct InFlight<T> {
    items: Vec<T>,
    /// Ordered by index.
    splices: Vec<Splice>,
    outstanding: Vec<RemovalId>,
    refills: Vec<Refill>,
}

/// Work that arrived while a batch was in flight, coalesced into one batch.
#[derive(Clone, Debug)]
enum Queued<T> {
    Splices { items: Vec<T>, splices: Vec<Splice> },
    Replace { items: Vec<T> },
}

/// Keeps a window of recycled views and two scroll buffers consistent with a backing sequence.
///
/// The reconciler holds no views and no items of its own; every operation receives the host
/// (see [`ViewHost`]) and the current sequence snapshot. It is driven through two entry points:
/// - [`Reconciler::instance_changed`] when the host swaps in a new sequence instance
/// - [`Reconciler::instance_mutated`] when the host observes a batch of splices
///
/// Host view disposal may be asynchronous. A batch whose removals are pending stays in flight
/// until [`Reconciler::complete_removal`] has been called for each of them; batches arriving in
/// the meantime are merged into a single queued batch and applied afterwards, in order.
#[derive(Clone, Debug)]
pub struct Reconciler<T> {
    options: RepeatOptions,
    window: Window,
    needs_layout: bool,
    in_flight: Option<InFlight<T>>,
    queued: Option<Queued<T>>,
}

impl<T: Clone + PartialEq> Reconciler<T> {
    pub fn new(options: RepeatOptions) -> Self {
        vdebug!(
            viewport_height = options.viewport_height,
            buffer_size = options.buffer_size,
            "Reconciler::new"
        );
        Self {
            options,
            window: Window::default(),
            needs_layout: false,
            in_flight: None,
            queued: None,
        }
    }

    pub fn options(&self) -> &RepeatOptions {
        &self.options
    }

    /// Replaces the options. The window capacity is recomputed on the next
    /// [`Reconciler::instance_changed`].
    pub fn set_options(&mut self, options: RepeatOptions) {
        if self.options == options {
            return;
        }
        self.options = options;
        self.needs_layout = true;
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn item_height(&self) -> u32 {
        self.window.item_height
    }

    pub fn is_measured(&self) -> bool {
        self.window.is_measured()
    }

    /// `true` when no batch is waiting on asynchronous removals.
    pub fn is_settled(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn has_queued(&self) -> bool {
        self.queued.is_some()
    }

    /// Removals the in-flight batch is waiting on.
    pub fn outstanding_removals(&self) -> &[RemovalId] {
        self.in_flight
            .as_ref()
            .map(|f| f.outstanding.as_slice())
            .unwrap_or(&[])
    }

    /// Classifies a data index against the current window.
    pub fn placement<H: ViewHost<T> + ?Sized>(&self, host: &H, index: usize) -> Placement {
        self.window.placement(index, host.view_count())
    }

    pub fn state<H: ViewHost<T> + ?Sized>(&self, host: &H) -> WindowState {
        WindowState {
            item_height: self.window.item_height,
            top_buffer: self.window.top,
            bottom_buffer: self.window.bottom,
            first_index: self.window.top_items(),
            view_count: host.view_count(),
            max_views: self.window.max_views,
            settled: self.is_settled(),
        }
    }

    /// Forgets the window, the measured height and any pending work (the host unbound).
    pub fn reset(&mut self) {
        vdebug!("Reconciler::reset");
        self.window = Window::default();
        self.needs_layout = false;
        self.in_flight = None;
        self.queued = None;
    }

    /// Renders the first item on its own so the host can measure the row height.
    ///
    /// Returns `false` (and does nothing) for an empty sequence.
    pub fn create_first_item<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
    ) -> bool {
        let Some(first) = items.first() else {
            return false;
        };
        vtrace!("create_first_item");
        host.insert_view(host.view_count(), first, ViewContext::new(0, 1));
        true
    }

    /// Handles the host swapping in a new sequence instance.
    ///
    /// Views are kept and rebound in place starting at the current first index; unchanged views
    /// are left alone, extra views are dropped from the tail and missing ones appended.
    pub fn instance_changed<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
    ) -> BatchStatus {
        if self.in_flight.is_some() {
            vdebug!(len = items.len(), "instance_changed: queued behind in-flight batch");
            self.queued = Some(Queued::Replace {
                items: items.to_vec(),
            });
            return BatchStatus::Queued;
        }
        self.replace(host, items);
        BatchStatus::Applied
    }

    /// Handles a batch of splices observed on the current sequence.
    ///
    /// `items` is the sequence after the splices were applied. Splices are trusted; see
    /// [`crate::validate_batch`] for an explicit check.
    pub fn instance_mutated<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        splices: &[Splice],
    ) -> BatchStatus {
        if self.in_flight.is_some() {
            vdebug!(
                splices = splices.len(),
                "instance_mutated: queued behind in-flight batch"
            );
            self.enqueue_splices(items, splices);
            return BatchStatus::Queued;
        }

        self.run_splices(host, items, splices)
    }

    /// Reports that a pending view removal finished.
    ///
    /// Once the last outstanding removal of the in-flight batch completes, its addition phase
    /// runs and queued batches are drained one at a time.
    pub fn complete_removal<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        id: RemovalId,
    ) -> Result<BatchStatus, Error> {
        let Some(mut flight) = self.in_flight.take() else {
            return Err(Error::UnknownRemoval(id));
        };
        let Some(pos) = flight.outstanding.iter().position(|p| *p == id) else {
            self.in_flight = Some(flight);
            return Err(Error::UnknownRemoval(id));
        };
        flight.outstanding.remove(pos);
        vtrace!(removal = id.0, remaining = flight.outstanding.len(), "complete_removal");

        let mut i = 0;
        while i < flight.refills.len() {
            if flight.refills[i].removal == id {
                let refill = flight.refills.remove(i);
                self.materialize(host, &flight.items, refill.edge, refill.index);
            } else {
                i += 1;
            }
        }
        self.notify_buffers(host);

        if !flight.outstanding.is_empty() {
            self.in_flight = Some(flight);
            return Ok(BatchStatus::Pending);
        }

        self.finish_splices(host, &flight.items, &flight.splices);
        vdebug!(splices = flight.splices.len(), "in-flight batch settled");
        Ok(self.drain_queue(host))
    }

    /// Slides the window so the first view shows the row at `scroll_top`.
    ///
    /// Views leaving one end are moved to the other and rebound. Returns `false` when the
    /// window can't move yet: nothing rendered, no item height, or a batch in flight.
    pub fn handle_scroll<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        scroll_top: u64,
    ) -> bool {
        if self.in_flight.is_some() || !self.window.is_measured() {
            return false;
        }
        let view_count = host.view_count();
        if view_count == 0 {
            return false;
        }

        let len = items.len();
        let row = self.window.item_height as u64;
        let current = self.window.top_items();
        let max_first = (current + self.window.bottom_items()).min(len.saturating_sub(view_count));
        let target = ((scroll_top / row) as usize).min(max_first);
        if target == current {
            return true;
        }
        vtrace!(from = current, to = target, "handle_scroll");

        if target.abs_diff(current) >= view_count {
            for slot in 0..view_count {
                let index = target + slot;
                if let Some(item) = items.get(index) {
                    host.rebind_view(slot, item, ViewContext::new(index, len));
                }
            }
        } else if target > current {
            for index in current + view_count..target + view_count {
                let Some(item) = items.get(index) else {
                    break;
                };
                host.move_view(0, view_count - 1);
                host.rebind_view(view_count - 1, item, ViewContext::new(index, len));
            }
        } else {
            for index in (target..current).rev() {
                let Some(item) = items.get(index) else {
                    break;
                };
                host.move_view(view_count - 1, 0);
                host.rebind_view(0, item, ViewContext::new(index, len));
            }
        }

        let moved = target.abs_diff(current) as u64 * row;
        if target > current {
            self.window.bottom = self.window.bottom.saturating_sub(moved);
        } else {
            self.window.bottom = self.window.bottom.saturating_add(moved);
        }
        self.window.top = target as u64 * row;
        self.sync_views(host, items);
        self.notify_buffers(host);
        true
    }

    fn replace<H: ViewHost<T> + ?Sized>(&mut self, host: &mut H, items: &[T]) {
        if !items.is_empty() && host.view_count() == 0 {
            self.create_first_item(host, items);
        }
        self.calc_initial_heights(host, items.len());
        let first = self.window.top_items();
        self.in_place_process_items(host, items, first);
        vdebug!(
            len = items.len(),
            first,
            views = host.view_count(),
            "instance_changed applied"
        );
    }

    /// Measures the row height (once) and derives capacity and buffers for `items_len` rows.
    fn calc_initial_heights<H: ViewHost<T> + ?Sized>(&mut self, host: &mut H, items_len: usize) {
        let same_len = self.window.max_views > 0
            && !self.needs_layout
            && self.window.items_len == items_len;
        if same_len {
            return;
        }
        if items_len == 0 {
            self.window.items_len = 0;
            self.window.top = 0;
            self.window.bottom = 0;
            self.notify_buffers(host);
            return;
        }

        if !self.window.is_measured() {
            let height = host.measure_item_height();
            if height == 0 {
                vdebug!("item height not available yet");
                return;
            }
            self.window.item_height = height;
        }

        let row = self.window.item_height as u64;
        self.needs_layout = false;
        self.window.items_len = items_len;
        self.window.max_views = self.options.capacity(self.window.item_height);

        let new_bottom = row * items_len.saturating_sub(self.window.max_views) as u64;
        if self.window.top >= new_bottom {
            self.window.top = new_bottom;
            self.window.bottom = 0;
        } else {
            self.window.top = self.window.top_items() as u64 * row;
            self.window.bottom = new_bottom - self.window.top;
        }
        vdebug!(
            item_height = self.window.item_height,
            max_views = self.window.max_views,
            top = self.window.top,
            bottom = self.window.bottom,
            "calc_initial_heights"
        );
        self.notify_buffers(host);
    }

    fn in_place_process_items<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        first: usize,
    ) {
        let len = items.len();
        let fill_to = len.min(self.window.max_views);
        let keep = if self.window.is_measured() { fill_to } else { len };

        let mut views = host.view_count();
        while views > keep {
            views -= 1;
            self.release(host, views);
        }

        for slot in 0..views {
            let index = first + slot;
            let Some(item) = items.get(index) else {
                vtrace!(index, "in_place_process_items: no item for view");
                continue;
            };
            let context = ViewContext::new(index, len);
            if host.bound_item(slot) == Some(item) {
                if host.view_context(slot) != Some(context) {
                    host.update_context(slot, context);
                }
                continue;
            }
            host.rebind_view(slot, item, context);
        }

        for slot in views..fill_to {
            let index = first + slot;
            let Some(item) = items.get(index) else {
                break;
            };
            host.insert_view(host.view_count(), item, ViewContext::new(index, len));
        }
        self.window.items_len = len;
    }

    /// Runs a batch, leaving it in flight when a removal is pending.
    fn run_splices<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        splices: &[Splice],
    ) -> BatchStatus {
        if splices.iter().all(Splice::is_in_place) {
            self.replace_in_place(host, items, splices);
            return BatchStatus::Applied;
        }
        let splices = ordered(splices);

        let mut phase = RemovalPhase::new(host.view_count());
        let mut added_before = 0;
        for splice in &splices {
            let index = splice.index.saturating_sub(added_before);
            for done in 1..=splice.removed_count {
                phase.rows = RowMap {
                    splice_index: index,
                    added_before,
                    added: splice.added_count,
                    still_removed: splice.removed_count - done,
                };
                self.remove_view_at(host, items, index, &mut phase);
            }
            added_before += splice.added_count;
        }

        if !phase.outstanding.is_empty() {
            vdebug!(
                pending = phase.outstanding.len(),
                "splice batch waiting on removals"
            );
            self.in_flight = Some(InFlight {
                items: items.to_vec(),
                splices,
                outstanding: phase.outstanding,
                refills: phase.refills,
            });
            return BatchStatus::Pending;
        }

        self.finish_splices(host, items, &splices);
        vdebug!(splices = splices.len(), "splice batch applied");
        BatchStatus::Applied
    }

    /// Re-materializes replaced rows that are rendered; nothing moves.
    fn replace_in_place<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        splices: &[Splice],
    ) {
        for splice in splices {
            for index in splice.added_range() {
                let view_count = host.view_count();
                let Placement::Inside(slot) = self.window.placement(index, view_count) else {
                    continue;
                };
                if slot >= view_count {
                    continue;
                }
                let Some(item) = items.get(index) else {
                    continue;
                };
                vtrace!(index, slot, "replace_in_place");
                self.release(host, slot);
                host.insert_view(slot, item, ViewContext::new(index, items.len()));
            }
        }
    }

    fn finish_splices<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        splices: &[Splice],
    ) {
        self.handle_added_splices(host, items, splices);
        self.sync_views(host, items);
        self.window.items_len = items.len();
    }

    /// Removes one row: either a rendered row (refilled from a buffer) or buffer space.
    ///
    /// `index` is in the coordinates of the sequence with every removal so far applied and no
    /// additions, which is what the window describes during the removal phase.
    fn remove_view_at<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        index: usize,
        phase: &mut RemovalPhase,
    ) {
        let first = self.window.top_items();
        let top_refills = phase.pending(Edge::Top);
        let live = phase.live();
        let rendered = top_refills + live + phase.pending(Edge::Bottom);

        if index < first {
            if self.window.bottom_items() == 0 || !self.slide_down(host, items, rendered, phase) {
                self.window.shrink_top();
            }
        } else if index - first >= rendered {
            self.window.shrink_bottom();
        } else {
            let row = index - first;
            let owner = if (top_refills..top_refills + live).contains(&row) {
                self.remove_live_view(host, row - top_refills, phase)
            } else {
                vtrace!(index, "remove_view_at: replacement row not materialized yet");
                let edge = if row < top_refills {
                    Edge::Top
                } else {
                    Edge::Bottom
                };
                phase.take_refill(edge).map(|refill| refill.removal)
            };
            self.refill(host, items, first + rendered - 1, owner, phase);
        }
        self.notify_buffers(host);
    }

    /// Removes the `nth` live view. Returns the removal its replacement has to wait for.
    fn remove_live_view<H: ViewHost<T> + ?Sized>(
        &self,
        host: &mut H,
        nth: usize,
        phase: &mut RemovalPhase,
    ) -> Option<RemovalId> {
        let slot = phase.live_slot(nth)?;
        vtrace!(slot, "remove_view_at: rendered");
        match host.remove_view(slot, true, false) {
            Removal::Done => {
                phase.leaving.remove(slot);
                None
            }
            Removal::Pending(id) => {
                phase.leaving[slot] = true;
                phase.outstanding.push(id);
                Some(id)
            }
        }
    }

    /// Pulls one row from a buffer into the window after a rendered row went away: the row
    /// after the window (`last_row`) while the bottom buffer holds one, else the row before it.
    ///
    /// Without an `owner` to wait for, the replacement is materialized right away.
    fn refill<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        last_row: usize,
        owner: Option<RemovalId>,
        phase: &mut RemovalPhase,
    ) {
        let first = self.window.top_items();
        let (edge, index) = if self.window.bottom_items() > 0 {
            self.window.shrink_bottom();
            (Edge::Bottom, phase.rows.final_index(last_row))
        } else if first > 0 {
            self.window.shrink_top();
            (Edge::Top, phase.rows.final_index(first - 1))
        } else {
            return;
        };

        match owner {
            Some(removal) => phase.refills.push(Refill {
                removal,
                edge,
                index,
            }),
            None => {
                if let Some(slot) = self.materialize(host, items, edge, index) {
                    phase.leaving.insert(slot, false);
                }
            }
        }
    }

    /// A row above the window went away: shift the window down by recycling its first rendered
    /// row as the row after its last.
    fn slide_down<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        rendered: usize,
        phase: &mut RemovalPhase,
    ) -> bool {
        if rendered == 0 || items.is_empty() {
            return false;
        }
        let first = self.window.top_items();
        let index = phase
            .rows
            .final_index(first + rendered - 1)
            .min(items.len() - 1);

        if let Some(refill) = phase.refills.iter_mut().find(|r| r.edge == Edge::Top) {
            refill.edge = Edge::Bottom;
            refill.index = index;
        } else if let Some(slot) = phase.live_slot(0) {
            let Some(item) = items.get(index) else {
                return false;
            };
            vtrace!(index, slot, "slide_down");
            let last = host.view_count() - 1;
            host.move_view(slot, last);
            host.rebind_view(last, item, ViewContext::new(index, items.len()));
            phase.leaving.remove(slot);
            phase.leaving.push(false);
        }
        self.window.shrink_bottom();
        true
    }

    fn handle_added_splices<H: ViewHost<T> + ?Sized>(
        &mut self,
        host: &mut H,
        items: &[T],
        splices: &[Splice],
    ) {
        let len = items.len();
        for splice in splices {
            for index in splice.added_range() {
                let has_distance = host.distance_to_bottom() > 0;
                let view_count = host.view_count();
                let placement = self.window.placement(index, view_count);

                if view_count == 0 || placement.is_inside() || has_distance {
                    let Some(item) = items.get(index) else {
                        vtrace!(index, "handle_added_splices: no item");
                        continue;
                    };
                    let position = match placement {
                        Placement::Before => 0,
                        Placement::Inside(slot) => slot.min(view_count),
                        Placement::After => view_count,
                    };
                    vtrace!(index, position, has_distance, "handle_added_splices: materialize");
                    host.insert_view(position, item, ViewContext::new(index, len));

                    if !self.window.is_measured() {
                        self.calc_initial_heights(host, 1);
                    } else if host.view_count() > self.window.max_views {
                        if has_distance {
                            self.release(host, 0);
                            self.window.grow_top();
                        } else {
                            let last = host.view_count() - 1;
                            self.release(host, last);
                            self.window.grow_bottom();
                        }
                    }
                } else if placement == Placement::Before {
                    self.window.grow_top();
                } else {
                    self.window.grow_bottom();
                }
            }
        }
        self.notify_buffers(host);
    }

    /// Brings every view in line with its slot: the context always, the bound item when a
    /// multi-splice batch left a view holding a row from another position.
    fn sync_views<H: ViewHost<T> + ?Sized>(&self, host: &mut H, items: &[T]) {
        let first = self.window.top_items();
        let len = items.len();
        for slot in 0..host.view_count() {
            let index = first + slot;
            let context = ViewContext::new(index, len);
            match items.get(index) {
                Some(item) if host.bound_item(slot) != Some(item) => {
                    vtrace!(index, slot, "sync_views: rebinding displaced view");
                    host.rebind_view(slot, item, context);
                }
                _ => {
                    if host.view_context(slot) != Some(context) {
                        host.update_context(slot, context);
                    }
                }
            }
        }
    }

    /// Inserts the view for `index` at one end of the window and returns its slot.
    fn materialize<H: ViewHost<T> + ?Sized>(
        &self,
        host: &mut H,
        items: &[T],
        edge: Edge,
        index: usize,
    ) -> Option<usize> {
        let index = index.min(items.len().checked_sub(1)?);
        let item = items.get(index)?;
        let slot = match edge {
            Edge::Top => 0,
            Edge::Bottom => host.view_count(),
        };
        host.insert_view(slot, item, ViewContext::new(index, items.len()));
        Some(slot)
    }

    /// Synchronous removal (returned to cache, no animation).
    fn release<H: ViewHost<T> + ?Sized>(&self, host: &mut H, position: usize) {
        if let Removal::Pending(_id) = host.remove_view(position, true, true) {
            vwarn!(
                removal = _id.0,
                position,
                "host deferred a removal requested without animation"
            );
        }
    }

    fn notify_buffers<H: ViewHost<T> + ?Sized>(&self, host: &mut H) {
        host.buffers_changed(self.window.top, self.window.bottom);
    }

    fn enqueue_splices(&mut self, items: &[T], splices: &[Splice]) {
        let splices = ordered(splices);
        match &mut self.queued {
            Some(Queued::Replace { items: latest }) => {
                *latest = items.to_vec();
            }
            Some(Queued::Splices {
                items: latest,
                splices: merged,
            }) => {
                for splice in splices {
                    merge_splice(merged, splice);
                }
                *latest = items.to_vec();
            }
            None => {
                let mut merged = Vec::with_capacity(splices.len());
                for splice in splices {
                    merge_splice(&mut merged, splice);
                }
                self.queued = Some(Queued::Splices {
                    items: items.to_vec(),
                    splices: merged,
                });
            }
        }
    }

    fn drain_queue<H: ViewHost<T> + ?Sized>(&mut self, host: &mut H) -> BatchStatus {
        while let Some(next) = self.queued.take() {
            match next {
                Queued::Replace { items } => {
                    vdebug!(len = items.len(), "draining queued replacement");
                    self.replace(host, &items);
                }
                Queued::Splices { items, splices } => {
                    vdebug!(splices = splices.len(), "draining queued splices");
                    if self.run_splices(host, &items, &splices) == BatchStatus::Pending {
                        return BatchStatus::Pending;
                    }
                }
            }
        }
        BatchStatus::Applied
    }
}

/// A batch sorted by index. Splices of one batch never overlap, so each one is also expressed
/// against the sequence with the splices before it applied.
fn ordered(splices: &[Splice]) -> Vec<Splice> {
    let mut ordered = splices.to_vec();
    ordered.sort_by_key(|s| s.index);
    ordered
}

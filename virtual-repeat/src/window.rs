use crate::Placement;

/// Scalar state of the rendered window: item height, capacity and the two buffer accumulators.
///
/// The buffers stand in for rows that exist in the backing sequence but are not materialized as
/// views: `top_buffer / item_height` rows before the first view and `bottom_buffer / item_height`
/// rows after the last one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    pub(crate) item_height: u32,
    pub(crate) top: u64,
    pub(crate) bottom: u64,
    pub(crate) max_views: usize,
    pub(crate) items_len: usize,
}

impl Window {
    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn is_measured(&self) -> bool {
        self.item_height > 0
    }

    pub fn top_buffer(&self) -> u64 {
        self.top
    }

    pub fn bottom_buffer(&self) -> u64 {
        self.bottom
    }

    /// Window capacity (`0` until measured).
    pub fn max_views(&self) -> usize {
        self.max_views
    }

    /// Rows represented by the top buffer; also the data index of the first view.
    pub fn top_items(&self) -> usize {
        self.rows(self.top)
    }

    pub fn bottom_items(&self) -> usize {
        self.rows(self.bottom)
    }

    fn rows(&self, height: u64) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        (height / self.item_height as u64) as usize
    }

    /// View-slot position of a data index; `-1` when nothing is rendered.
    pub fn view_index(&self, index: usize, view_count: usize) -> isize {
        if view_count == 0 {
            return -1;
        }
        index as isize - self.top_items() as isize
    }

    /// Classifies a data index against the current buffers.
    ///
    /// Must be re-evaluated after every buffer mutation; a single batch moves the window.
    pub fn placement(&self, index: usize, view_count: usize) -> Placement {
        let first = self.top_items();
        if view_count == 0 || index < first {
            Placement::Before
        } else if index - first >= self.max_views {
            Placement::After
        } else {
            Placement::Inside(index - first)
        }
    }

    fn row_height(&self) -> u64 {
        self.item_height as u64
    }

    pub(crate) fn grow_top(&mut self) {
        self.top = self.top.saturating_add(self.row_height());
    }

    pub(crate) fn shrink_top(&mut self) {
        self.top = self.top.saturating_sub(self.row_height());
    }

    pub(crate) fn grow_bottom(&mut self) {
        self.bottom = self.bottom.saturating_add(self.row_height());
    }

    pub(crate) fn shrink_bottom(&mut self) {
        self.bottom = self.bottom.saturating_sub(self.row_height());
    }
}

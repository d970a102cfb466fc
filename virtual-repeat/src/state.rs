/// A lightweight, serializable snapshot of the reconciler's window.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub item_height: u32,
    pub top_buffer: u64,
    pub bottom_buffer: u64,
    /// Data index bound to the first view.
    pub first_index: usize,
    pub view_count: usize,
    pub max_views: usize,
    /// `false` while a batch waits on asynchronous removals.
    pub settled: bool,
}

impl WindowState {
    /// Rows accounted for by the buffers and the rendered views.
    pub fn represented_len(&self) -> usize {
        if self.item_height == 0 {
            return self.view_count;
        }
        let rows = |h: u64| (h / self.item_height as u64) as usize;
        rows(self.top_buffer) + self.view_count + rows(self.bottom_buffer)
    }

    /// Data indexes covered by the rendered views.
    pub fn rendered_range(&self) -> core::ops::Range<usize> {
        self.first_index..self.first_index + self.view_count
    }
}

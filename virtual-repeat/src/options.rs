/// Configuration for [`crate::Reconciler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatOptions {
    /// Height of the scroll container in the scroll axis.
    pub viewport_height: u32,

    /// Extra views rendered beyond two viewports' worth of rows.
    pub buffer_size: usize,

    /// Explicit window capacity.
    ///
    /// When unset, the capacity is derived from `viewport_height`, the measured item height and
    /// `buffer_size` (see [`RepeatOptions::capacity`]).
    pub max_views: Option<usize>,
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            viewport_height: 0,
            buffer_size: 5,
            max_views: None,
        }
    }
}

impl RepeatOptions {
    pub fn new(viewport_height: u32) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_max_views(mut self, max_views: Option<usize>) -> Self {
        self.max_views = max_views;
        self
    }

    /// Number of rows that fit in the viewport, plus one for a partially visible row.
    pub fn elements_in_view(&self, item_height: u32) -> usize {
        if item_height == 0 {
            return 0;
        }
        self.viewport_height.div_ceil(item_height) as usize + 1
    }

    /// Window capacity for a given item height.
    ///
    /// `max_views` wins when set; otherwise two viewports of rows plus `buffer_size`.
    pub fn capacity(&self, item_height: u32) -> usize {
        if let Some(max_views) = self.max_views {
            return max_views;
        }
        self.elements_in_view(item_height)
            .saturating_mul(2)
            .saturating_add(self.buffer_size)
    }
}

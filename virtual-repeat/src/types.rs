/// Per-view metadata exposed to templates (`$index`, `$first`, `$last`, ...).
///
/// Every flag is derived from the view's data index and the length of the backing sequence, so
/// two contexts compare equal exactly when a template would render them the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewContext {
    pub index: usize,
    pub first: bool,
    pub last: bool,
    pub middle: bool,
    pub even: bool,
    pub odd: bool,
}

impl ViewContext {
    pub fn new(index: usize, len: usize) -> Self {
        let first = index == 0;
        let last = len > 0 && index == len - 1;
        let even = index % 2 == 0;
        Self {
            index,
            first,
            last,
            middle: !(first || last),
            even,
            odd: !even,
        }
    }
}

/// Where a data index falls relative to the rendered window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Represented by the top buffer.
    Before,
    /// Maps to a view slot (which may not be materialized yet when the window is not full).
    Inside(usize),
    /// Represented by the bottom buffer.
    After,
}

impl Placement {
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside(_))
    }
}

/// Host-chosen handle for a view disposal that completes later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemovalId(pub u64);

impl core::fmt::Display for RemovalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "removal#{}", self.0)
    }
}

/// Result of [`crate::ViewHost::remove_view`].
///
/// A pending view keeps occupying its slot (and counting towards
/// [`crate::ViewHost::view_count`]) until the host reports completion through
/// [`crate::Reconciler::complete_removal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Removal {
    Done,
    Pending(RemovalId),
}

/// What happened to a replacement or splice batch handed to the reconciler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchStatus {
    /// The window fully reflects the batch (and any queued batches drained behind it).
    Applied,
    /// The batch is waiting on asynchronous view removals.
    Pending,
    /// Another batch is in flight; this one was coalesced into the queue.
    Queued,
}

use crate::RemovalId;

/// Errors reported at the host boundary.
///
/// Reconciliation itself never fails; these cover splice validation and the completion side of
/// the two-phase removal protocol.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("splice at {index} inserting {added_count} item(s) exceeds sequence length {len}")]
    SpliceOutOfBounds {
        index: usize,
        added_count: usize,
        len: usize,
    },

    #[error("splices at {first} and {second} insert overlapping ranges")]
    OverlappingSplices { first: usize, second: usize },

    #[error("{0} is not an outstanding removal")]
    UnknownRemoval(RemovalId),
}

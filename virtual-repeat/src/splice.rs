use alloc::vec::Vec;
use core::ops::Range;

use crate::Error;

/// A single contiguous change to the backing sequence.
///
/// `index` is expressed in the coordinates of the sequence *after* the change: `removed_count`
/// items that used to start at `index` were replaced by `added_count` new ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Splice {
    pub index: usize,
    pub removed_count: usize,
    pub added_count: usize,
}

impl Splice {
    pub fn new(index: usize, removed_count: usize, added_count: usize) -> Self {
        Self {
            index,
            removed_count,
            added_count,
        }
    }

    pub fn insert(index: usize, added_count: usize) -> Self {
        Self::new(index, 0, added_count)
    }

    pub fn remove(index: usize, removed_count: usize) -> Self {
        Self::new(index, removed_count, 0)
    }

    pub fn replace(index: usize, count: usize) -> Self {
        Self::new(index, count, count)
    }

    /// `true` when the splice swaps items without changing the sequence length.
    pub fn is_in_place(&self) -> bool {
        self.removed_count == self.added_count
    }

    pub fn is_noop(&self) -> bool {
        self.removed_count == 0 && self.added_count == 0
    }

    /// Net change in sequence length.
    pub fn delta(&self) -> isize {
        self.added_count as isize - self.removed_count as isize
    }

    /// Indexes of the inserted items in the post-change sequence.
    pub fn added_range(&self) -> Range<usize> {
        self.index..self.index.saturating_add(self.added_count)
    }

    /// Checks the splice against the post-change sequence length.
    pub fn validate(&self, len: usize) -> Result<(), Error> {
        if self.index.saturating_add(self.added_count) > len {
            return Err(Error::SpliceOutOfBounds {
                index: self.index,
                added_count: self.added_count,
                len,
            });
        }
        Ok(())
    }
}

/// Validates a whole batch against the post-change sequence length.
///
/// Batches may arrive in any order, but the inserted ranges must not overlap.
pub fn validate_batch(splices: &[Splice], len: usize) -> Result<(), Error> {
    for splice in splices {
        splice.validate(len)?;
    }

    let mut ranges: Vec<Range<usize>> = splices
        .iter()
        .filter(|s| s.added_count > 0)
        .map(Splice::added_range)
        .collect();
    ranges.sort_unstable_by_key(|r| r.start);
    for pair in ranges.windows(2) {
        if pair[0].end > pair[1].start {
            return Err(Error::OverlappingSplices {
                first: pair[0].start,
                second: pair[1].start,
            });
        }
    }
    Ok(())
}

/// Composes `splice` (expressed against the sequence after every splice in `splices`) into an
/// ordered, non-overlapping splice list.
///
/// Splices that intersect or touch are merged, splices that follow the new one are shifted by
/// its length delta, and a merge that cancels out (nothing removed, nothing added) is dropped.
pub fn merge_splice(splices: &mut Vec<Splice>, mut splice: Splice) {
    let mut inserted = false;
    let mut insertion_offset = 0isize;

    let mut i = 0;
    while i < splices.len() {
        splices[i].index = shift(splices[i].index, insertion_offset);
        if inserted {
            i += 1;
            continue;
        }

        let current = splices[i];
        let overlap = intersect(
            splice.index,
            splice.index + splice.removed_count,
            current.index,
            current.index + current.added_count,
        );

        match overlap {
            Some(overlap) => {
                splices.remove(i);
                insertion_offset -= current.delta();

                splice.added_count = splice.added_count + current.added_count - overlap;
                let removed_count = splice.removed_count + current.removed_count - overlap;
                if splice.added_count == 0 && removed_count == 0 {
                    inserted = true;
                } else {
                    splice.removed_count = removed_count;
                    splice.index = splice.index.min(current.index);
                }
            }
            None if splice.index < current.index => {
                inserted = true;
                splices.insert(i, splice);
                i += 1;

                let delta = splice.delta();
                splices[i].index = shift(splices[i].index, delta);
                insertion_offset += delta;
                i += 1;
            }
            None => i += 1,
        }
    }

    if !inserted {
        splices.push(splice);
    }
}

fn shift(index: usize, by: isize) -> usize {
    index.saturating_add_signed(by)
}

/// Length of the intersection of `[start1, end1)` and `[start2, end2)`.
///
/// Touching ranges intersect with length 0; disjoint ranges return `None`.
fn intersect(start1: usize, end1: usize, start2: usize, end2: usize) -> Option<usize> {
    if end1 < start2 || end2 < start1 {
        return None;
    }
    if end1 == start2 || end2 == start1 {
        return Some(0);
    }
    if start1 < start2 {
        Some(end1.min(end2) - start2)
    } else {
        Some(end1.min(end2) - start1)
    }
}

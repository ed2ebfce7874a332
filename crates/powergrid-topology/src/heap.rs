//! Binary min-heap of station ids with lazy deletion.
//!
//! Deactivating a station does not touch the heap. Stale entries are only
//! discarded when they reach the root during a query, so every station costs
//! at most one pop over its whole life.
//!
//! # Layout
//!
//! Slot `i` has children `2i + 1` and `2i + 2`. Every slot's id is smaller
//! than its children's ids (ids are unique, so ties never occur).
//!
//! ```text
//!            1
//!          /   \
//!         3     2
//!        / \   /
//!       7   4 5
//! ```

use crate::StationId;

/// Min-heap over station ids.
///
/// Entries are seeded with [`push_unordered`](MinHeap::push_unordered) and
/// ordered once by [`heapify`](MinHeap::heapify). After that the heap only
/// shrinks.
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    slots: Vec<StationId>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append an entry without restoring heap order.
    ///
    /// Call [`heapify`](MinHeap::heapify) once all entries are seeded.
    pub fn push_unordered(&mut self, station: StationId) {
        self.slots.push(station);
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Restore heap order below slot `index`.
    pub fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.slots[right] < self.slots[left] {
                right
            } else {
                left
            };
            if self.slots[smaller] >= self.slots[index] {
                break;
            }
            self.slots.swap(smaller, index);
            index = smaller;
        }
    }

    /// Establish heap order over all entries in linear time.
    pub fn heapify(&mut self) {
        for index in (0..self.slots.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// The smallest entry, stale or not.
    pub fn peek_minimum(&self) -> Option<StationId> {
        self.slots.first().copied()
    }

    /// Permanently discard the smallest entry.
    pub fn pop_minimum(&mut self) -> Option<StationId> {
        let last = self.slots.pop()?;
        let Some(root) = self.slots.first_mut() else {
            return Some(last);
        };
        let minimum = std::mem::replace(root, last);
        self.sift_down(0);
        Some(minimum)
    }

    /// Smallest entry for which `is_online` holds.
    ///
    /// Offline entries found at the root are popped for good. Returns `None`
    /// once the heap runs dry.
    pub fn minimum_where<F>(&mut self, is_online: F) -> Option<StationId>
    where
        F: Fn(StationId) -> bool,
    {
        while let Some(station) = self.peek_minimum() {
            if is_online(station) {
                return Some(station);
            }
            tracing::trace!(%station, "discarding offline station from grid heap");
            self.pop_minimum();
        }
        None
    }

    /// Check the heap invariant over every slot.
    pub fn is_heap(&self) -> bool {
        (1..self.slots.len()).all(|i| self.slots[(i - 1) / 2] < self.slots[i])
    }

    /// Entries in slot order.
    pub fn as_slice(&self) -> &[StationId] {
        &self.slots
    }
}

impl FromIterator<StationId> for MinHeap {
    fn from_iter<I: IntoIterator<Item = StationId>>(iter: I) -> Self {
        let mut heap = Self {
            slots: iter.into_iter().collect(),
        };
        heap.heapify();
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<StationId> {
        raw.iter().copied().map(StationId).collect()
    }

    fn drain(heap: &mut MinHeap) -> Vec<u32> {
        let mut out = Vec::new();
        while let Some(id) = heap.pop_minimum() {
            assert!(heap.is_heap());
            out.push(id.value());
        }
        out
    }

    #[test]
    fn heapify_establishes_invariant() {
        let mut heap = MinHeap::new();
        for id in ids(&[9, 4, 7, 1, 8, 2, 6, 3, 5]) {
            heap.push_unordered(id);
        }
        assert!(!heap.is_heap());
        heap.heapify();
        assert!(heap.is_heap());
        assert_eq!(heap.peek_minimum(), Some(StationId(1)));
    }

    #[test]
    fn pop_yields_ascending_order() {
        let mut heap: MinHeap = ids(&[5, 3, 10, 1, 4, 2, 9]).into_iter().collect();
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 4, 5, 9, 10]);
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_single_and_empty() {
        let mut heap: MinHeap = ids(&[42]).into_iter().collect();
        assert_eq!(heap.pop_minimum(), Some(StationId(42)));
        assert_eq!(heap.pop_minimum(), None);
        assert_eq!(heap.peek_minimum(), None);
    }

    #[test]
    fn sift_down_picks_smaller_child() {
        let mut heap = MinHeap::new();
        for id in ids(&[8, 3, 2]) {
            heap.push_unordered(id);
        }
        heap.sift_down(0);
        assert_eq!(heap.as_slice(), &ids(&[2, 3, 8])[..]);
    }

    #[test]
    fn minimum_where_skips_offline_entries() {
        let mut heap: MinHeap = ids(&[1, 2, 3, 4, 5]).into_iter().collect();
        let offline = [StationId(1), StationId(2)];

        let found = heap.minimum_where(|s| !offline.contains(&s));
        assert_eq!(found, Some(StationId(3)));
        // Both stale entries were discarded, the online root stays
        assert_eq!(heap.len(), 3);
        assert!(heap.is_heap());
    }

    #[test]
    fn minimum_where_does_not_pop_online_root() {
        let mut heap: MinHeap = ids(&[6, 2, 4]).into_iter().collect();
        assert_eq!(heap.minimum_where(|_| true), Some(StationId(2)));
        assert_eq!(heap.minimum_where(|_| true), Some(StationId(2)));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn minimum_where_exhausts_heap() {
        let mut heap: MinHeap = ids(&[3, 1, 2]).into_iter().collect();
        assert_eq!(heap.minimum_where(|_| false), None);
        assert!(heap.is_empty());
    }
}

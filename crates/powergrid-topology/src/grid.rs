//! Power grids: connected components of the interconnection.

use crate::heap::MinHeap;
use crate::station::StationStore;
use crate::StationId;

/// Index of a grid inside its interconnection.
///
/// Stations refer to their grid by this handle rather than owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridId(pub usize);

impl GridId {
    /// Placeholder for stations not yet reached by discovery.
    pub const UNASSIGNED: Self = Self(usize::MAX);

    /// Get the raw index.
    pub const fn value(self) -> usize {
        self.0
    }
}

/// A maximal set of connected stations.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    heap: MinHeap,
    size: usize,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member station. Heap order is restored by [`seal`](Grid::seal).
    pub(crate) fn add_station(&mut self, station: StationId) {
        self.heap.push_unordered(station);
        self.size += 1;
    }

    /// Finish construction by heapifying the member ids.
    pub(crate) fn seal(&mut self) {
        self.heap.heapify();
    }

    /// Number of member stations, online or not.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Heap entries still held. Shrinks as offline stations are discarded.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if every entry has been discarded.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest online station in this grid, if any remain.
    pub fn minimum_online(&mut self, stations: &StationStore) -> Option<StationId> {
        self.heap.minimum_where(|id| stations.is_online(id))
    }

    /// Entries still held, in heap slot order.
    pub fn entries(&self) -> &[StationId] {
        self.heap.as_slice()
    }
}

//! Station identifiers and the dense station store.
//!
//! Stations are addressed by 1-based ids. The store allocates one extra slot
//! so that `stations[id]` is the station itself; slot 0 is never handed out.

use crate::grid::GridId;
use crate::{Error, Result};

/// Identifier of a power station, unique across the whole interconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StationId(pub u32);

impl StationId {
    /// Create a station id.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Slot index in the station store.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this id addresses a station in an interconnection of
    /// `station_count` stations.
    pub fn check(self, station_count: u32) -> Result<Self> {
        if self.0 == 0 || self.0 > station_count {
            return Err(Error::StationOutOfRange {
                station: self,
                station_count,
            });
        }
        Ok(self)
    }
}

impl From<u32> for StationId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-station mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    /// The grid this station belongs to. Assigned once during discovery.
    pub grid: GridId,
    /// Online stations can be returned by a maintenance check.
    pub online: bool,
}

impl Default for Station {
    fn default() -> Self {
        Self {
            grid: GridId::UNASSIGNED,
            online: true,
        }
    }
}

/// Dense table of stations indexed by id.
#[derive(Debug, Clone)]
pub struct StationStore {
    stations: Vec<Station>,
}

impl StationStore {
    /// Allocate `size` stations addressable as `1..=size`, all online and
    /// not yet assigned to a grid.
    pub fn new(size: u32) -> Self {
        Self {
            stations: vec![Station::default(); size as usize + 1],
        }
    }

    /// Number of addressable stations.
    pub fn len(&self) -> u32 {
        (self.stations.len() - 1) as u32
    }

    /// Check if the store holds no stations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a station. Panics if `id` is 0 or beyond the store.
    #[inline]
    pub fn get(&self, id: StationId) -> &Station {
        assert_ne!(id.0, 0, "station ids start at 1");
        &self.stations[id.index()]
    }

    /// Get a station mutably. Panics if `id` is 0 or beyond the store.
    #[inline]
    pub fn get_mut(&mut self, id: StationId) -> &mut Station {
        assert_ne!(id.0, 0, "station ids start at 1");
        &mut self.stations[id.index()]
    }

    /// Whether a station is online.
    #[inline]
    pub fn is_online(&self, id: StationId) -> bool {
        self.get(id).online
    }

    /// Bind a station to its grid.
    pub(crate) fn assign(&mut self, id: StationId, grid: GridId) {
        let station = self.get_mut(id);
        debug_assert_eq!(station.grid, GridId::UNASSIGNED, "station {} assigned twice", id);
        station.grid = grid;
    }

    /// Iterate over all station ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = StationId> {
        (1..=self.len()).map(StationId)
    }
}

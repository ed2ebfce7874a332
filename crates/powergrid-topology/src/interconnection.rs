//! The power grid interconnection and its maintenance operations.

use crate::builder::{discover, Adjacency};
use crate::grid::{Grid, GridId};
use crate::station::StationStore;
use crate::{Error, Result, StationId};

/// All stations and the grids they partition into.
///
/// Topology is fixed at construction. Afterwards only station activity
/// changes, and only from online to offline.
#[derive(Debug, Clone)]
pub struct Interconnection {
    stations: StationStore,
    grids: Vec<Grid>,
}

impl Interconnection {
    /// Build an interconnection of `station_count` stations.
    ///
    /// Connection endpoints must lie in `1..=station_count`; out-of-range
    /// endpoints, station 0 included, panic. Use
    /// [`try_new`](Interconnection::try_new) for untrusted input.
    ///
    /// ```
    /// use powergrid_topology::{Interconnection, StationId};
    ///
    /// let mut grid = Interconnection::new(3, [(1, 2)]);
    /// assert_eq!(grid.grid_count(), 2);
    ///
    /// grid.move_offline(StationId(1));
    /// assert_eq!(grid.resolve_maintenance_check(StationId(1)), Some(StationId(2)));
    /// assert_eq!(grid.resolve_maintenance_check(StationId(3)), Some(StationId(3)));
    /// ```
    pub fn new<I>(station_count: u32, connections: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let connections = connections
            .into_iter()
            .map(|(a, b)| (StationId(a), StationId(b)));
        Self::from_adjacency(station_count, &Adjacency::new(station_count, connections))
    }

    /// Build an interconnection, rejecting empty station sets and connection
    /// endpoints outside `1..=station_count`.
    pub fn try_new<I>(station_count: u32, connections: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        if station_count == 0 {
            return Err(Error::EmptyInterconnection);
        }
        let connections = connections
            .into_iter()
            .map(|(a, b)| {
                Ok((
                    StationId(a).check(station_count)?,
                    StationId(b).check(station_count)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_adjacency(station_count, &Adjacency::new(station_count, connections)))
    }

    fn from_adjacency(station_count: u32, adjacency: &Adjacency) -> Self {
        let (stations, grids) = discover(adjacency, station_count);
        tracing::debug!(
            stations = station_count,
            grids = grids.len(),
            "interconnection assembled"
        );
        Self { stations, grids }
    }

    /// Number of stations.
    pub fn station_count(&self) -> u32 {
        self.stations.len()
    }

    /// Number of grids.
    pub fn grid_count(&self) -> usize {
        self.grids.len()
    }

    /// The grid a station belongs to.
    pub fn grid_of(&self, station: StationId) -> GridId {
        self.stations.get(station).grid
    }

    /// Look up a grid.
    pub fn grid(&self, id: GridId) -> &Grid {
        &self.grids[id.value()]
    }

    /// All grids, indexed by [`GridId`].
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Whether a station is online.
    pub fn is_online(&self, station: StationId) -> bool {
        self.stations.is_online(station)
    }

    /// Take a station offline. Taking an offline station offline again has no
    /// further effect.
    pub fn move_offline(&mut self, station: StationId) {
        self.stations.get_mut(station).online = false;
    }

    /// Resolve a maintenance check addressed to `station`.
    ///
    /// An online station handles the check itself. Otherwise the check goes
    /// to the smallest online station in the same grid, or `None` if none
    /// remain.
    pub fn resolve_maintenance_check(&mut self, station: StationId) -> Option<StationId> {
        let record = *self.stations.get(station);
        if record.online {
            return Some(station);
        }
        self.grids[record.grid.value()].minimum_online(&self.stations)
    }

    /// [`move_offline`](Interconnection::move_offline) with range checking.
    pub fn try_move_offline(&mut self, station: StationId) -> Result<()> {
        let station = station.check(self.station_count())?;
        self.move_offline(station);
        Ok(())
    }

    /// [`resolve_maintenance_check`](Interconnection::resolve_maintenance_check)
    /// with range checking.
    pub fn try_resolve_maintenance_check(&mut self, station: StationId) -> Result<Option<StationId>> {
        let station = station.check(self.station_count())?;
        Ok(self.resolve_maintenance_check(station))
    }
}

//! Connected-component discovery.
//!
//! Builds an adjacency list from the connection list, then walks it with an
//! explicit stack so deep grids never exhaust the call stack. Every unvisited
//! station starts a new grid; every station reached from it joins that grid.

use crate::grid::{Grid, GridId};
use crate::station::StationStore;
use crate::StationId;

/// Undirected adjacency list indexed by station id.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbors: Vec<Vec<StationId>>,
}

impl Adjacency {
    /// Build from undirected connections.
    ///
    /// Panics if an endpoint lies outside `1..=station_count`.
    pub fn new<I>(station_count: u32, connections: I) -> Self
    where
        I: IntoIterator<Item = (StationId, StationId)>,
    {
        let mut neighbors = vec![Vec::new(); station_count as usize + 1];
        for (a, b) in connections {
            assert!(a.0 != 0 && b.0 != 0, "connection {}-{} uses reserved station 0", a, b);
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
        }
        Self { neighbors }
    }

    /// Stations directly connected to `station`.
    pub fn of(&self, station: StationId) -> &[StationId] {
        &self.neighbors[station.index()]
    }
}

/// Partition stations into grids.
///
/// Returns the station store with every station bound to its grid, and the
/// grids with their heaps already built.
pub fn discover(adjacency: &Adjacency, station_count: u32) -> (StationStore, Vec<Grid>) {
    let mut stations = StationStore::new(station_count);
    let mut grids = Vec::new();
    let mut visited = vec![false; station_count as usize + 1];
    let mut stack = Vec::new();

    for start in stations.ids() {
        if visited[start.index()] {
            continue;
        }

        let grid_id = GridId(grids.len());
        let mut grid = Grid::new();
        stack.push(start);

        while let Some(station) = stack.pop() {
            if visited[station.index()] {
                continue;
            }
            visited[station.index()] = true;
            stations.assign(station, grid_id);
            grid.add_station(station);

            stack.extend(
                adjacency
                    .of(station)
                    .iter()
                    .copied()
                    .filter(|n| !visited[n.index()]),
            );
        }

        grids.push(grid);
    }

    for grid in &mut grids {
        grid.seal();
    }

    (stations, grids)
}

//! Power Grid Maintenance Topology
//!
//! A static interconnection of power stations split into grids (connected
//! components). After construction, stations can only go offline. A
//! maintenance check addressed to a station is handled by the station itself
//! while it is online, and otherwise by the online station with the smallest
//! id in the same grid.
//!
//! # Structure
//!
//! - [`StationStore`]: dense 1-based table of station state
//! - [`builder`]: connected-component discovery with an explicit stack
//! - [`MinHeap`]: per-grid min-heap of station ids with lazy deletion
//! - [`Interconnection`]: the aggregate, routing checks and deactivations
//!
//! # Lazy Deletion
//!
//! Moving a station offline is a single flag write. Offline ids are dropped
//! from their grid's heap only when a check finds them at the root, so each
//! station is popped at most once over its life.
//!
//! ```
//! use powergrid_topology::{Interconnection, StationId};
//!
//! let mut grid = Interconnection::new(5, [(1, 2), (2, 3), (3, 4), (4, 5)]);
//! grid.move_offline(StationId(1));
//! assert_eq!(grid.resolve_maintenance_check(StationId(1)), Some(StationId(2)));
//! grid.move_offline(StationId(2));
//! assert_eq!(grid.resolve_maintenance_check(StationId(1)), Some(StationId(3)));
//! ```

pub mod builder;
pub mod demo;
mod error;
mod grid;
mod heap;
mod interconnection;
mod query;
mod station;

pub use error::{Error, Result};
pub use grid::{Grid, GridId};
pub use heap::MinHeap;
pub use interconnection::Interconnection;
pub use query::{
    encode_resolution, process_queries, process_queries_strict, Operation, MOVE_OFFLINE_CODE,
    NO_ONLINE_STATION, RESOLVE_CODE,
};
pub use station::{Station, StationId, StationStore};

//! Error types for powergrid-topology.

use thiserror::Error;

use crate::StationId;

/// Result type for powergrid-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the checked construction and query paths.
///
/// The unchecked paths (`Interconnection::new`, `resolve_maintenance_check`,
/// `move_offline`) never return these; they trust the caller's ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A station id outside `1..=station_count`.
    #[error("station {station} out of range 1..={station_count}")]
    StationOutOfRange {
        station: StationId,
        station_count: u32,
    },

    /// An interconnection with no stations.
    #[error("interconnection must contain at least one station")]
    EmptyInterconnection,

    /// An operation code other than resolve (1) or move offline (2).
    #[error("unknown operation code {code}")]
    UnknownOperation { code: i64 },
}

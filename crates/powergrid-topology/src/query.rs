//! Maintenance operations and batch query processing.
//!
//! Queries arrive as `(code, station)` pairs:
//!
//! | Code | Operation                              | Result        |
//! |------|----------------------------------------|---------------|
//! | 1    | resolve maintenance check for station  | one integer   |
//! | 2    | move station offline                   | none          |
//! | else | ignored                                | none          |
//!
//! Results are integers so that batch output matches the plain driver
//! contract: the resolved station id, or [`NO_ONLINE_STATION`] when the
//! station's grid has nothing left online.

use crate::{Error, Interconnection, Result, StationId};

/// Result value when no station in the grid is online.
pub const NO_ONLINE_STATION: i64 = -1;

/// Operation code for a maintenance check.
pub const RESOLVE_CODE: i64 = 1;

/// Operation code for moving a station offline.
pub const MOVE_OFFLINE_CODE: i64 = 2;

/// A decoded maintenance operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Resolve a maintenance check addressed to a station.
    Resolve(StationId),
    /// Move a station offline.
    MoveOffline(StationId),
    /// An unrecognised code. Skipped without producing a result.
    Unknown { code: i64 },
}

impl Operation {
    /// Decode a `(code, station)` pair, keeping unknown codes as
    /// [`Operation::Unknown`].
    pub const fn decode(code: i64, station: u32) -> Self {
        match code {
            RESOLVE_CODE => Self::Resolve(StationId(station)),
            MOVE_OFFLINE_CODE => Self::MoveOffline(StationId(station)),
            code => Self::Unknown { code },
        }
    }

    /// Decode a `(code, station)` pair, rejecting unknown codes.
    pub fn decode_strict(code: i64, station: u32) -> Result<Self> {
        match Self::decode(code, station) {
            Self::Unknown { code } => Err(Error::UnknownOperation { code }),
            op => Ok(op),
        }
    }

    /// The station this operation addresses, if any.
    pub const fn station(&self) -> Option<StationId> {
        match self {
            Self::Resolve(station) | Self::MoveOffline(station) => Some(*station),
            Self::Unknown { .. } => None,
        }
    }
}

/// Convert a resolution into its integer form.
pub fn encode_resolution(resolution: Option<StationId>) -> i64 {
    resolution.map_or(NO_ONLINE_STATION, |s| i64::from(s.value()))
}

impl Interconnection {
    /// Apply one operation, returning a result for maintenance checks.
    pub fn apply(&mut self, op: Operation) -> Option<i64> {
        match op {
            Operation::Resolve(station) => {
                Some(encode_resolution(self.resolve_maintenance_check(station)))
            }
            Operation::MoveOffline(station) => {
                self.move_offline(station);
                None
            }
            Operation::Unknown { code } => {
                tracing::warn!(code, "skipping unknown operation code");
                None
            }
        }
    }

    /// Apply one operation with range checking on its station.
    pub fn try_apply(&mut self, op: Operation) -> Result<Option<i64>> {
        if let Some(station) = op.station() {
            station.check(self.station_count())?;
        }
        Ok(self.apply(op))
    }

    /// Apply operations in order, collecting one result per maintenance check.
    pub fn run<I>(&mut self, ops: I) -> Vec<i64>
    where
        I: IntoIterator<Item = Operation>,
    {
        ops.into_iter().filter_map(|op| self.apply(op)).collect()
    }
}

/// Build an interconnection and run raw `(code, station)` queries against it.
///
/// Unknown codes are skipped. Ids are trusted.
///
/// ```
/// use powergrid_topology::process_queries;
///
/// let results = process_queries(5, &[(1, 2), (2, 3), (3, 4), (4, 5)], &[(1, 3), (2, 1), (1, 1), (2, 2), (1, 2)]);
/// assert_eq!(results, vec![3, 2, 3]);
/// ```
pub fn process_queries(station_count: u32, connections: &[(u32, u32)], queries: &[(i64, u32)]) -> Vec<i64> {
    let mut interconnection = Interconnection::new(station_count, connections.iter().copied());
    interconnection.run(
        queries
            .iter()
            .map(|&(code, station)| Operation::decode(code, station)),
    )
}

/// Like [`process_queries`], but fails on the first out-of-range id or
/// unknown operation code.
pub fn process_queries_strict(
    station_count: u32,
    connections: &[(u32, u32)],
    queries: &[(i64, u32)],
) -> Result<Vec<i64>> {
    let mut interconnection = Interconnection::try_new(station_count, connections.iter().copied())?;
    let mut results = Vec::new();
    for &(code, station) in queries {
        let op = Operation::decode_strict(code, station)?;
        if let Some(result) = interconnection.try_apply(op)? {
            results.push(result);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_codes() {
        assert_eq!(Operation::decode(1, 4), Operation::Resolve(StationId(4)));
        assert_eq!(Operation::decode(2, 4), Operation::MoveOffline(StationId(4)));
        assert_eq!(Operation::decode(3, 4), Operation::Unknown { code: 3 });
        assert_eq!(Operation::decode(-1, 4), Operation::Unknown { code: -1 });
    }

    #[test]
    fn decode_strict_rejects_unknown() {
        assert_eq!(
            Operation::decode_strict(7, 1),
            Err(Error::UnknownOperation { code: 7 })
        );
        assert_eq!(Operation::decode_strict(1, 1), Ok(Operation::Resolve(StationId(1))));
    }

    #[test]
    fn unknown_codes_produce_no_result() {
        let results = process_queries(2, &[(1, 2)], &[(0, 1), (1, 1), (9, 2), (2, 1), (1, 1)]);
        assert_eq!(results, vec![1, 2]);
    }

    #[test]
    fn sentinel_for_drained_grid() {
        let results = process_queries(3, &[], &[(1, 1), (2, 1), (1, 1)]);
        assert_eq!(results, vec![1, NO_ONLINE_STATION]);
    }

    #[test]
    fn move_offline_produces_no_result() {
        let results = process_queries(1, &[], &[(2, 1), (2, 1), (2, 1), (2, 1)]);
        assert!(results.is_empty());
    }

    #[test]
    fn strict_matches_lenient_on_valid_input() {
        let connections = [(2, 4), (1, 2), (5, 4), (4, 6), (2, 6), (3, 6), (4, 1)];
        let queries = [(1, 1), (2, 1), (2, 6), (1, 6), (1, 3), (2, 2), (1, 2), (2, 4)];
        assert_eq!(
            process_queries_strict(6, &connections, &queries).unwrap(),
            process_queries(6, &connections, &queries)
        );
    }

    #[test]
    fn strict_rejects_unknown_code_and_bad_ids() {
        assert_eq!(
            process_queries_strict(2, &[], &[(1, 1), (5, 1)]),
            Err(Error::UnknownOperation { code: 5 })
        );
        assert_eq!(
            process_queries_strict(2, &[], &[(2, 3)]),
            Err(Error::StationOutOfRange {
                station: StationId(3),
                station_count: 2,
            })
        );
        assert_eq!(
            process_queries_strict(2, &[(1, 3)], &[]),
            Err(Error::StationOutOfRange {
                station: StationId(3),
                station_count: 2,
            })
        );
    }

    #[test]
    #[should_panic(expected = "station ids start at 1")]
    fn lenient_batch_panics_on_station_zero() {
        process_queries(3, &[], &[(1, 0)]);
    }

    #[test]
    fn encode_resolution_values() {
        assert_eq!(encode_resolution(None), -1);
        assert_eq!(encode_resolution(Some(StationId(17))), 17);
    }
}

//! Built-in reference scenarios with known results.

use crate::process_queries;

/// A self-contained maintenance scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Number of stations, addressed `1..=station_count`.
    pub station_count: u32,
    /// Undirected connections between stations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub connections: Vec<(u32, u32)>,
    /// Raw `(code, station)` queries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub queries: Vec<(i64, u32)>,
}

impl Scenario {
    /// Create a scenario from borrowed connection and query lists.
    pub fn new(station_count: u32, connections: &[(u32, u32)], queries: &[(i64, u32)]) -> Self {
        Self {
            station_count,
            connections: connections.to_vec(),
            queries: queries.to_vec(),
        }
    }

    /// Run the scenario leniently.
    pub fn run(&self) -> Vec<i64> {
        process_queries(self.station_count, &self.connections, &self.queries)
    }
}

/// The reference scenarios paired with the results they must produce.
pub fn scenarios() -> Vec<(Scenario, Vec<i64>)> {
    vec![
        (
            Scenario::new(
                5,
                &[(1, 2), (2, 3), (3, 4), (4, 5)],
                &[(1, 3), (2, 1), (1, 1), (2, 2), (1, 2)],
            ),
            vec![3, 2, 3],
        ),
        (Scenario::new(3, &[], &[(1, 1), (2, 1), (1, 1)]), vec![1, -1]),
        (
            Scenario::new(1, &[], &[(1, 1), (2, 1), (2, 1), (2, 1), (2, 1)]),
            vec![1],
        ),
        (
            Scenario::new(
                2,
                &[(1, 2)],
                &[(1, 1), (1, 2), (1, 2), (2, 2), (2, 2), (1, 1), (1, 2), (1, 1)],
            ),
            vec![1, 2, 2, 1, 1, 1],
        ),
        (
            Scenario::new(
                2,
                &[(2, 1)],
                &[(2, 1), (1, 2), (2, 1), (1, 1), (1, 2), (1, 1), (1, 1), (2, 1), (2, 2)],
            ),
            vec![2, 2, 2, 2, 2],
        ),
        (
            Scenario::new(
                6,
                &[(2, 4), (1, 2), (5, 4), (4, 6), (2, 6), (3, 6), (4, 1)],
                &[
                    (1, 1), (1, 1), (2, 1), (2, 6), (1, 6), (1, 6), (1, 3), (1, 4), (1, 4), (2, 2),
                    (1, 2), (2, 1), (1, 4), (2, 1), (1, 6), (1, 5), (1, 2), (2, 5), (1, 2), (2, 4),
                ],
            ),
            vec![1, 1, 2, 2, 3, 4, 4, 3, 4, 3, 5, 3, 3],
        ),
        (
            Scenario::new(
                17,
                &[
                    (17, 9), (9, 14), (1, 3), (10, 12), (6, 2), (3, 12), (3, 15), (8, 11), (9, 4), (13, 1),
                    (1, 8), (12, 8), (17, 7), (17, 16), (9, 12), (13, 3), (1, 16), (15, 12), (7, 14),
                ],
                &[
                    (2, 10), (1, 12), (1, 13), (2, 1), (2, 7), (2, 3), (2, 11), (1, 9), (2, 11), (2, 4),
                    (2, 5), (2, 7), (1, 14), (2, 1), (1, 1), (1, 7), (2, 4), (2, 3), (2, 14), (1, 1),
                    (2, 15), (1, 15), (1, 6), (2, 15), (2, 10), (1, 1), (1, 17), (2, 9), (1, 12), (1, 17),
                    (1, 4), (1, 5), (2, 7), (2, 8), (1, 14), (1, 16), (1, 3), (2, 17),
                ],
            ),
            vec![12, 13, 9, 14, 8, 8, 8, 8, 6, 8, 17, 12, 17, 8, -1, 12, 16, 12],
        ),
    ]
}

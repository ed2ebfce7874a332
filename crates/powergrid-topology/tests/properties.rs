//! Property tests comparing the interconnection against a brute-force model.

use powergrid_topology::{Interconnection, Operation, StationId, NO_ONLINE_STATION};
use proptest::prelude::*;

/// Reference model: grids by label propagation, checks by linear scan.
struct Model {
    label: Vec<usize>,
    online: Vec<bool>,
}

impl Model {
    fn new(n: u32, connections: &[(u32, u32)]) -> Self {
        let n = n as usize;
        let mut label: Vec<usize> = (0..=n).collect();
        // Relabel until no connection joins two labels
        loop {
            let mut changed = false;
            for &(a, b) in connections {
                let (a, b) = (a as usize, b as usize);
                let min = label[a].min(label[b]);
                if label[a] != min || label[b] != min {
                    let old = [label[a], label[b]];
                    for l in label.iter_mut() {
                        if old.contains(l) {
                            *l = min;
                        }
                    }
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        Self {
            label,
            online: vec![true; n + 1],
        }
    }

    fn resolve(&self, s: usize) -> i64 {
        if self.online[s] {
            return s as i64;
        }
        (1..self.label.len())
            .find(|&i| self.label[i] == self.label[s] && self.online[i])
            .map_or(NO_ONLINE_STATION, |i| i as i64)
    }
}

fn scenario() -> impl Strategy<Value = (u32, Vec<(u32, u32)>, Vec<(i64, u32)>)> {
    (1u32..40).prop_flat_map(|n| {
        let edges = prop::collection::vec((1..=n, 1..=n), 0..60);
        let queries = prop::collection::vec((0i64..4, 1..=n), 0..120);
        (Just(n), edges, queries)
    })
}

proptest! {
    #[test]
    fn matches_reference_model((n, connections, queries) in scenario()) {
        let mut grid = Interconnection::new(n, connections.iter().copied());
        let mut model = Model::new(n, &connections);

        for (code, station) in queries {
            let op = Operation::decode(code, station);
            let got = grid.apply(op);
            match op {
                Operation::Resolve(s) => {
                    prop_assert_eq!(got, Some(model.resolve(s.index())));
                }
                Operation::MoveOffline(s) => {
                    model.online[s.index()] = false;
                    prop_assert_eq!(got, None);
                }
                Operation::Unknown { .. } => {
                    prop_assert_eq!(got, None);
                }
            }
        }
    }

    #[test]
    fn every_station_in_exactly_one_grid((n, connections, _q) in scenario()) {
        let grid = Interconnection::new(n, connections.iter().copied());
        let total: usize = grid.grids().iter().map(|g| g.size()).sum();
        prop_assert_eq!(total, n as usize);

        let mut seen = vec![false; n as usize + 1];
        for g in grid.grids() {
            for id in g.entries() {
                prop_assert!(!seen[id.index()], "station {} in two grids", id);
                seen[id.index()] = true;
            }
        }
        prop_assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn connected_stations_share_a_grid((n, connections, _q) in scenario()) {
        let grid = Interconnection::new(n, connections.iter().copied());
        for &(a, b) in &connections {
            prop_assert_eq!(grid.grid_of(StationId(a)), grid.grid_of(StationId(b)));
        }
    }

    #[test]
    fn offline_station_never_returned((n, connections, queries) in scenario()) {
        let mut grid = Interconnection::new(n, connections.iter().copied());
        let mut offline = vec![false; n as usize + 1];

        for (code, station) in queries {
            match Operation::decode(code, station) {
                Operation::MoveOffline(s) => {
                    grid.move_offline(s);
                    offline[s.index()] = true;
                }
                Operation::Resolve(s) => {
                    if let Some(found) = grid.resolve_maintenance_check(s) {
                        prop_assert!(!offline[found.index()]);
                        prop_assert!(grid.is_online(found));
                        prop_assert_eq!(grid.grid_of(found), grid.grid_of(s));
                    }
                }
                Operation::Unknown { .. } => {}
            }
        }
    }

    #[test]
    fn draining_a_grid_yields_sentinel((n, connections, _q) in scenario()) {
        let mut grid = Interconnection::new(n, connections.iter().copied());
        let target = grid.grid_of(StationId(1));
        let members: Vec<StationId> = (1..=n)
            .map(StationId)
            .filter(|&s| grid.grid_of(s) == target)
            .collect();

        for &s in &members {
            grid.move_offline(s);
        }
        for &s in &members {
            prop_assert_eq!(grid.resolve_maintenance_check(s), None);
        }
        prop_assert!(grid.grid(target).is_empty());
    }
}

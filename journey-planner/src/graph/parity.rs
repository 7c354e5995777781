//! Degree parity analysis.
//!
//! A connected multigraph has a closed Eulerian circuit exactly when every
//! station has even degree. With `2k` odd-degree stations it instead
//! decomposes into `k` edge-disjoint open trails; that count is the
//! theoretical minimum for covering every route once.

use crate::domain::Station;

use super::{Component, RouteGraph};

impl RouteGraph {
    /// Stations in `component` with odd degree, in ascending order.
    ///
    /// By the handshake lemma the returned list always has even length.
    pub fn odd_stations(&self, component: &Component) -> Vec<Station> {
        component
            .stations()
            .filter(|station| self.degree(station) % 2 == 1)
            .cloned()
            .collect()
    }
}

/// Minimum number of trails covering a connected component that has
/// `odd_count` odd-degree stations: one closed circuit when there are
/// none, `odd_count / 2` open trails otherwise.
pub fn minimum_trails(odd_count: usize) -> usize {
    if odd_count == 0 { 1 } else { odd_count / 2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteId};

    fn station(s: &str) -> Station {
        Station::new(s).unwrap()
    }

    fn route(id: &str, a: &str, b: &str) -> Route {
        Route::new(
            RouteId::parse(id).unwrap(),
            station(a),
            station(b),
            10,
            2,
            None,
        )
    }

    #[test]
    fn path_has_odd_ends() {
        let graph = RouteGraph::build(vec![
            route("R001", "A", "B"),
            route("R002", "B", "C"),
            route("R003", "C", "D"),
        ])
        .unwrap();
        let component = graph.components().remove(0);
        let odd = graph.odd_stations(&component);
        assert_eq!(odd, vec![station("A"), station("D")]);
    }

    #[test]
    fn cycle_has_no_odd_stations() {
        let graph = RouteGraph::build(vec![
            route("R001", "A", "B"),
            route("R002", "B", "C"),
            route("R003", "C", "A"),
        ])
        .unwrap();
        let component = graph.components().remove(0);
        assert!(graph.odd_stations(&component).is_empty());
    }

    #[test]
    fn loop_keeps_parity_even() {
        let graph =
            RouteGraph::build(vec![route("R001", "A", "B"), route("R002", "A", "A")]).unwrap();
        let component = graph.components().remove(0);
        // The loop adds 2 to A's degree, so A stays odd from R001 alone
        assert_eq!(
            graph.odd_stations(&component),
            vec![station("A"), station("B")]
        );
    }

    #[test]
    fn odd_station_count_is_even() {
        let graph = RouteGraph::build(vec![
            route("R001", "A", "B"),
            route("R002", "A", "C"),
            route("R003", "A", "D"),
            route("R004", "B", "C"),
        ])
        .unwrap();
        let component = graph.components().remove(0);
        assert_eq!(graph.odd_stations(&component).len() % 2, 0);
    }

    #[test]
    fn minimum_trail_counts() {
        assert_eq!(minimum_trails(0), 1);
        assert_eq!(minimum_trails(2), 1);
        assert_eq!(minimum_trails(4), 2);
        assert_eq!(minimum_trails(8), 4);
    }
}

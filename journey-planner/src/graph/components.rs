//! Connected component discovery.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::domain::Station;

use super::RouteGraph;

/// A maximal set of stations mutually reachable via routes.
///
/// Only stations with at least one incident route belong to a component,
/// so every component has at least one route. Both endpoints of any route
/// always land in the same component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    stations: BTreeSet<Station>,
}

impl Component {
    /// Stations of the component, in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Returns true if `station` belongs to this component.
    pub fn contains(&self, station: &Station) -> bool {
        self.stations.contains(station)
    }

    /// Number of stations in the component.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the component has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl RouteGraph {
    /// Partition the graph's stations into connected components.
    ///
    /// Breadth-first search from the smallest unvisited station, repeated
    /// until every station is covered; components come back in ascending
    /// order of their smallest station. The search is queue-based, never
    /// recursive, so arbitrarily large networks cannot overflow the stack.
    pub fn components(&self) -> Vec<Component> {
        let mut visited: HashSet<&Station> = HashSet::new();
        let mut components = Vec::new();

        for start in self.adjacency.keys() {
            if visited.contains(start) {
                continue;
            }

            let mut stations = BTreeSet::new();
            let mut queue: VecDeque<&Station> = VecDeque::new();
            visited.insert(start);
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                stations.insert(current.clone());
                for (neighbour, _) in self.incident(current) {
                    if visited.insert(neighbour) {
                        queue.push_back(neighbour);
                    }
                }
            }

            components.push(Component { stations });
        }

        components
    }

    /// Number of routes whose endpoints lie in `component`.
    ///
    /// An undirected route belongs to the component containing its
    /// endpoints (both are always in the same one), counted once.
    pub fn component_route_count(&self, component: &Component) -> usize {
        self.routes
            .values()
            .filter(|route| component.contains(&route.endpoint_a))
            .count()
    }
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
    fn single_component() {
        let graph =
            RouteGraph::build(vec![route("R001", "A", "B"), route("R002", "B", "C")]).unwrap();
        let components = graph.components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 3);
        assert!(components[0].contains(&station("A")));
        assert!(components[0].contains(&station("C")));
    }

    #[test]
    fn disjoint_routes_give_two_components() {
        let graph =
            RouteGraph::build(vec![route("R001", "A", "B"), route("R002", "C", "D")]).unwrap();
        let components = graph.components();
        assert_eq!(components.len(), 2);
        // Discovery order is ascending by smallest station
        assert!(components[0].contains(&station("A")));
        assert!(components[1].contains(&station("C")));
    }

    #[test]
    fn components_are_station_disjoint() {
        let graph = RouteGraph::build(vec![
            route("R001", "A", "B"),
            route("R002", "C", "D"),
            route("R003", "D", "E"),
        ])
        .unwrap();
        let components = graph.components();
        assert_eq!(components.len(), 2);
        for s in components[0].stations() {
            assert!(!components[1].contains(s));
        }
    }

    #[test]
    fn loop_station_forms_component() {
        let graph = RouteGraph::build(vec![route("R001", "A", "A")]).unwrap();
        let components = graph.components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 1);
    }

    #[test]
    fn component_route_counts_partition_the_routes() {
        let graph = RouteGraph::build(vec![
            route("R001", "A", "B"),
            route("R002", "B", "A"),
            route("R003", "C", "D"),
        ])
        .unwrap();
        let components = graph.components();
        let counts: Vec<usize> = components
            .iter()
            .map(|c| graph.component_route_count(c))
            .collect();
        assert_eq!(counts, vec![2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), graph.route_count());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = RouteGraph::build(vec![]).unwrap();
        assert!(graph.components().is_empty());
    }
}

//! Route multigraph construction and analysis.
//!
//! The graph is undirected and permits multi-edges: two distinct routes
//! may share both endpoints, and a route may loop back to its own
//! station. It is built once from a route list and is read-only
//! afterwards; the decomposition tracks consumed routes in its own state
//! and never mutates the graph.

mod components;
mod parity;

pub use components::Component;
pub use parity::minimum_trails;

use std::collections::BTreeMap;

use crate::domain::{Route, RouteId, Station};

/// Error returned when the multigraph cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Two input routes share the same code.
    #[error("duplicate route code: {0}")]
    DuplicateRouteId(RouteId),
}

/// Undirected route multigraph.
///
/// Owns the route registry and the adjacency structure. Every route
/// appears in both endpoints' adjacency lists (twice in the same list for
/// a loop, so loops contribute 2 to the degree). Adjacency lists are
/// sorted by ascending route code at build time; walks always take the
/// lowest-coded unconsumed route, so repeated runs on the same input
/// produce identical output.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    routes: BTreeMap<RouteId, Route>,
    adjacency: BTreeMap<Station, Vec<(Station, RouteId)>>,
}

impl RouteGraph {
    /// Build the multigraph from a list of routes.
    ///
    /// Returns an error if two routes share a code.
    pub fn build(routes: Vec<Route>) -> Result<Self, BuildError> {
        let mut registry: BTreeMap<RouteId, Route> = BTreeMap::new();
        let mut adjacency: BTreeMap<Station, Vec<(Station, RouteId)>> = BTreeMap::new();

        for route in routes {
            if registry.contains_key(&route.id) {
                return Err(BuildError::DuplicateRouteId(route.id));
            }
            adjacency
                .entry(route.endpoint_a.clone())
                .or_default()
                .push((route.endpoint_b.clone(), route.id));
            adjacency
                .entry(route.endpoint_b.clone())
                .or_default()
                .push((route.endpoint_a.clone(), route.id));
            registry.insert(route.id, route);
        }

        // Fixed edge-selection order: ascending route code
        for incident in adjacency.values_mut() {
            incident.sort_by_key(|&(_, id)| id);
        }

        Ok(Self {
            routes: registry,
            adjacency,
        })
    }

    /// Look up a route by code.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// Number of routes in the graph.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Incident `(neighbour, route)` pairs for a station, sorted by route
    /// code. A loop appears twice. Unknown stations have no incidences.
    pub fn incident(&self, station: &Station) -> &[(Station, RouteId)] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Degree of a station: the number of incident route ends.
    pub fn degree(&self, station: &Station) -> usize {
        self.incident(station).len()
    }

    /// All stations with at least one incident route, in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }
}

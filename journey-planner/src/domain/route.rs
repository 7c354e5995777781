//! Route record type.

use std::fmt;

use super::{RouteId, Station};

/// One bidirectional transit route between two stations.
///
/// A route is an undirected link: it can be traversed in either direction
/// and its endpoints are an unordered pair. Routes where both endpoints
/// are the same station (loops) are legal and count twice towards that
/// station's degree.
///
/// Routes are immutable once constructed. The graph owns the only `Route`
/// values; everything downstream refers to a route by its `RouteId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route code
    pub id: RouteId,

    /// One endpoint of the link
    pub endpoint_a: Station,

    /// The other endpoint (may equal `endpoint_a` for a loop)
    pub endpoint_b: Station,

    /// Traversal time in minutes
    pub minutes: u32,

    /// Number of intermediate stops
    pub stops: u32,

    /// Optional free-text annotation (e.g. "express")
    pub tag: Option<String>,
}

impl Route {
    /// Create a new route.
    pub fn new(
        id: RouteId,
        endpoint_a: Station,
        endpoint_b: Station,
        minutes: u32,
        stops: u32,
        tag: Option<String>,
    ) -> Self {
        Self {
            id,
            endpoint_a,
            endpoint_b,
            minutes,
            stops,
            tag,
        }
    }

    /// Returns true if both endpoints are the same station.
    pub fn is_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    /// The endpoint opposite `station`.
    ///
    /// For a loop both ends coincide, so the same station comes back.
    /// If `station` is not an endpoint at all, `endpoint_a` is returned;
    /// callers only ask from a station the route is incident to.
    pub fn other_end(&self, station: &Station) -> &Station {
        if *station == self.endpoint_a {
            &self.endpoint_b
        } else {
            &self.endpoint_a
        }
    }
}

impl fmt::Display for Route {
    /// Formats as the canonical route listing line, e.g.
    /// `R001: York <> Leeds (25 minutes, 3 stops | express)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} <> {} ({} minutes, {} stops",
            self.id, self.endpoint_a, self.endpoint_b, self.minutes, self.stops
        )?;
        if let Some(tag) = &self.tag {
            write!(f, " | {tag}")?;
        }
        write!(f, ")")
    }
}

//! Minimum journey cover for bidirectional transit routes.
//!
//! Given a set of routes (each an undirected link between two stations),
//! this crate partitions the route network into connected components and
//! decomposes each into the fewest edge-disjoint trails that together
//! traverse every route exactly once. Per component the trail count is
//! the theorem-minimum: one closed circuit when every station has even
//! degree, `k` open trails when there are `2k` odd-degree stations.
//!
//! The pipeline is `parse` → [`plan::plan_journeys`] → `render`; the
//! planning core is a pure, deterministic function of the route list.

pub mod decompose;
pub mod domain;
pub mod graph;
pub mod parse;
pub mod plan;
pub mod render;

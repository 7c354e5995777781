//! Minimum edge-disjoint trail cover of a connected component.
//!
//! A connected multigraph with all-even degrees has a closed Eulerian
//! circuit; with `2k` odd-degree stations it decomposes into exactly `k`
//! edge-disjoint open trails. The construction here walks greedily from
//! odd-degree stations until none remain, then splices any leftover
//! closed circuits into the trails already built, so the final trail
//! count always matches the theorem.
//!
//! Consumed-route bookkeeping lives in a set local to each call; the
//! graph itself is never mutated, so decompositions of different
//! components are fully independent.

mod trail;

pub use trail::{Decomposition, Trail, TrailError, TrailStep};

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{RouteId, Station};
use crate::graph::{Component, RouteGraph, minimum_trails};

/// Error returned when the decomposition post-conditions fail.
///
/// This is a defect signal: it means the algorithm produced an invalid
/// cover, never that the input was bad. Callers should treat it as fatal
/// for the whole computation rather than salvage a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompositionError {
    /// The trails do not cover the component's routes exactly
    #[error("covered {covered} of {expected} routes in component")]
    IncompleteCover { covered: usize, expected: usize },

    /// The trail count is not the theoretical minimum
    #[error("produced {produced} trails, expected {expected}")]
    WrongTrailCount { produced: usize, expected: usize },

    /// A constructed step sequence is not a valid trail
    #[error("invalid trail: {0}")]
    InvalidTrail(#[from] TrailError),

    /// An all-even component must yield a closed circuit
    #[error("expected a closed circuit, got an open trail")]
    OpenCircuit,
}

/// Decompose one connected component into the minimum number of
/// edge-disjoint trails covering every one of its routes exactly once.
///
/// The number of trails is `max(1, odd / 2)` where `odd` is the count of
/// odd-degree stations in the component. All tie-breaking is
/// deterministic (ascending station names and route codes), so repeated
/// runs produce identical trails.
pub fn decompose_component(
    graph: &RouteGraph,
    component: &Component,
) -> Result<Decomposition, DecompositionError> {
    let odd = graph.odd_stations(component);
    let expected_trails = minimum_trails(odd.len());
    let expected_routes = graph.component_route_count(component);

    let mut consumed: HashSet<RouteId> = HashSet::with_capacity(expected_routes);
    let mut raw: Vec<Vec<TrailStep>> = Vec::with_capacity(expected_trails);

    if odd.is_empty() {
        // All degrees even: a single closed circuit exists. The greedy
        // walk can return to its start before exhausting the component
        // (figure-eight shapes); the splice loop below picks up the rest.
        if let Some(start) = component.stations().next() {
            let walk = greedy_walk(graph, start, &mut consumed);
            trace!(start = %start, steps = walk.len(), "circuit walk");
            if !walk.is_empty() {
                raw.push(walk);
            }
        }
    } else {
        // Walk from the smallest station whose remaining degree is odd
        // until none are left. Each walk ends at another odd-degree
        // station, flipping both ends to even, so exactly `odd / 2`
        // walks happen and none is empty.
        loop {
            let start = component
                .stations()
                .find(|station| residual_degree(graph, station, &consumed) % 2 == 1)
                .cloned();
            let Some(start) = start else {
                break;
            };
            let walk = greedy_walk(graph, &start, &mut consumed);
            trace!(start = %start, steps = walk.len(), "open walk");
            if !walk.is_empty() {
                raw.push(walk);
            }
        }
    }

    splice_remaining(graph, &mut consumed, &mut raw);

    debug!(
        trails = raw.len(),
        routes = consumed.len(),
        odd = odd.len(),
        "component decomposed"
    );

    // Post-conditions: exact cover with the theorem-minimum trail count.
    if consumed.len() != expected_routes {
        return Err(DecompositionError::IncompleteCover {
            covered: consumed.len(),
            expected: expected_routes,
        });
    }
    if raw.len() != expected_trails {
        return Err(DecompositionError::WrongTrailCount {
            produced: raw.len(),
            expected: expected_trails,
        });
    }

    let trails = raw
        .into_iter()
        .map(Trail::new)
        .collect::<Result<Vec<_>, _>>()?;

    if odd.is_empty() && !trails[0].is_closed() {
        return Err(DecompositionError::OpenCircuit);
    }

    Ok(Decomposition { trails })
}

/// Remaining degree of a station once consumed routes are discounted.
fn residual_degree(graph: &RouteGraph, station: &Station, consumed: &HashSet<RouteId>) -> usize {
    graph
        .incident(station)
        .iter()
        .filter(|(_, id)| !consumed.contains(id))
        .count()
}

/// Walk from `start`, always taking the lowest-coded unconsumed route at
/// the current station, until no unconsumed route remains there.
///
/// An explicit loop rather than recursion: trail length is bounded only
/// by the route count, which may be large.
fn greedy_walk(
    graph: &RouteGraph,
    start: &Station,
    consumed: &mut HashSet<RouteId>,
) -> Vec<TrailStep> {
    let mut steps = Vec::new();
    let mut current = start.clone();

    loop {
        let next = graph
            .incident(&current)
            .iter()
            .find(|(_, id)| !consumed.contains(id));
        let Some((neighbour, id)) = next else {
            break;
        };
        consumed.insert(*id);
        steps.push(TrailStep {
            from: current.clone(),
            to: neighbour.clone(),
            route: *id,
        });
        current = neighbour.clone();
    }

    steps
}

/// Consume any routes left over after the initial walks.
///
/// At this point every remaining degree is even, so the leftovers form
/// closed sub-circuits that touch the trails already built (the component
/// is connected). Walk a circuit from the first trail station that still
/// has unconsumed routes and insert its steps into that trail at that
/// station, keeping the trail count fixed. Appending leftovers as fresh
/// trails instead would break the minimum-count guarantee.
fn splice_remaining(
    graph: &RouteGraph,
    consumed: &mut HashSet<RouteId>,
    raw: &mut Vec<Vec<TrailStep>>,
) {
    loop {
        // First station (in trail order, then step order) with an
        // unconsumed incident route. Scanning in a fixed order keeps the
        // output deterministic.
        let mut anchor: Option<(usize, usize, Station)> = None;
        'scan: for (t, steps) in raw.iter().enumerate() {
            // Walks are never empty, so steps[0] exists
            if residual_degree(graph, &steps[0].from, consumed) > 0 {
                anchor = Some((t, 0, steps[0].from.clone()));
                break 'scan;
            }
            for (i, step) in steps.iter().enumerate() {
                if residual_degree(graph, &step.to, consumed) > 0 {
                    anchor = Some((t, i + 1, step.to.clone()));
                    break 'scan;
                }
            }
        }

        let Some((t, position, station)) = anchor else {
            break;
        };

        let circuit = greedy_walk(graph, &station, consumed);
        trace!(at = %station, steps = circuit.len(), "splicing circuit");
        raw[t].splice(position..position, circuit);
    }
}

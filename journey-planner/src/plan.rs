//! Whole-network journey planning.
//!
//! Ties the pipeline together: build the route multigraph, discover its
//! connected components, decompose each into the minimum set of
//! edge-disjoint trails, and aggregate the results into a single plan.
//! The whole computation is a pure function of the input route list.

use tracing::debug;

use crate::decompose::{DecompositionError, Trail, decompose_component};
use crate::domain::Route;
use crate::graph::{BuildError, RouteGraph, minimum_trails};

/// Error returned when a plan cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The input route list could not form a graph
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A component decomposition violated its post-conditions
    #[error(transparent)]
    Decomposition(#[from] DecompositionError),

    /// Trails across all components do not cover the input exactly
    #[error("trails cover {covered} routes, input had {expected}")]
    IncompleteCover { covered: usize, expected: usize },
}

/// One journey: a single vehicle trail with its total traversal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// The trail the vehicle follows
    pub trail: Trail,

    /// Sum of the constituent routes' minutes
    pub minutes: u64,
}

/// The full journey plan for a route network.
///
/// Journeys appear in component discovery order, then trail construction
/// order within each component. The graph rides along so renderers can
/// look up route details by code.
#[derive(Debug)]
pub struct JourneyPlan {
    /// The route graph the plan was computed over
    pub graph: RouteGraph,

    /// All journeys, every route covered exactly once across them
    pub journeys: Vec<Journey>,

    /// Number of connected components in the network
    pub component_count: usize,

    /// Theoretical minimum journey count: the sum over components of
    /// `max(1, odd_degree_stations / 2)`. Always equals `journeys.len()`.
    pub minimum_journeys: usize,
}

impl JourneyPlan {
    /// Total minutes across all journeys.
    pub fn total_minutes(&self) -> u64 {
        self.journeys.iter().map(|journey| journey.minutes).sum()
    }

    /// Total routes covered across all journeys.
    pub fn routes_covered(&self) -> usize {
        self.journeys.iter().map(|journey| journey.trail.len()).sum()
    }
}

/// Plan the minimum set of journeys that together traverse every route
/// exactly once.
///
/// An empty route list yields an empty plan. Duplicate route codes are
/// rejected; everything else is handled.
pub fn plan_journeys(routes: Vec<Route>) -> Result<JourneyPlan, PlanError> {
    let expected = routes.len();
    let graph = RouteGraph::build(routes)?;
    let components = graph.components();

    debug!(
        routes = graph.route_count(),
        components = components.len(),
        "route graph built"
    );

    let mut journeys = Vec::new();
    let mut minimum_journeys = 0;

    for component in &components {
        let odd = graph.odd_stations(component);
        minimum_journeys += minimum_trails(odd.len());

        let decomposition = decompose_component(&graph, component)?;
        for trail in decomposition.trails {
            let minutes = trail
                .route_ids()
                .filter_map(|id| graph.route(id))
                .map(|route| u64::from(route.minutes))
                .sum();
            journeys.push(Journey { trail, minutes });
        }
    }

    let covered: usize = journeys.iter().map(|journey| journey.trail.len()).sum();
    if covered != expected {
        return Err(PlanError::IncompleteCover { covered, expected });
    }

    Ok(JourneyPlan {
        graph,
        journeys,
        component_count: components.len(),
        minimum_journeys,
    })
}

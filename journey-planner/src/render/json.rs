//! JSON document types for journey plans.
//!
//! Dedicated serialization structs, built from a plan rather than derived
//! on the domain types, so the wire shape can evolve independently.

use serde::Serialize;

use crate::plan::JourneyPlan;

/// Top-level JSON document for a journey plan.
#[derive(Debug, Serialize)]
pub struct JourneyPlanDoc {
    /// Number of connected components in the network
    pub component_count: usize,

    /// Theoretical minimum journey count
    pub minimum_journeys: usize,

    /// Total minutes across all journeys
    pub total_minutes: u64,

    /// The journeys, in plan order
    pub journeys: Vec<JourneyDoc>,
}

/// One journey in the JSON document.
#[derive(Debug, Serialize)]
pub struct JourneyDoc {
    /// 1-based position in the plan
    pub index: usize,

    /// Total minutes for this journey
    pub total_minutes: u64,

    /// Routes traversed, in traversal order
    pub routes: Vec<RouteDoc>,

    /// The station-to-station legs of the trail
    pub legs: Vec<LegDoc>,
}

/// A route's details.
#[derive(Debug, Serialize)]
pub struct RouteDoc {
    /// Route code
    pub id: String,

    /// One endpoint
    pub endpoint_a: String,

    /// The other endpoint
    pub endpoint_b: String,

    /// Traversal time in minutes
    pub minutes: u32,

    /// Number of intermediate stops
    pub stops: u32,

    /// Optional annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// One directed leg of a journey.
#[derive(Debug, Serialize)]
pub struct LegDoc {
    /// Departure station
    pub from: String,

    /// Arrival station
    pub to: String,

    /// Route taken
    pub route: String,
}

impl JourneyPlanDoc {
    /// Build the document from a plan.
    pub fn from_plan(plan: &JourneyPlan) -> Self {
        let journeys = plan
            .journeys
            .iter()
            .enumerate()
            .map(|(i, journey)| {
                let routes = journey
                    .trail
                    .route_ids()
                    .filter_map(|id| plan.graph.route(id))
                    .map(|route| RouteDoc {
                        id: route.id.as_str().to_string(),
                        endpoint_a: route.endpoint_a.as_str().to_string(),
                        endpoint_b: route.endpoint_b.as_str().to_string(),
                        minutes: route.minutes,
                        stops: route.stops,
                        tag: route.tag.clone(),
                    })
                    .collect();

                let legs = journey
                    .trail
                    .steps()
                    .iter()
                    .map(|step| LegDoc {
                        from: step.from.as_str().to_string(),
                        to: step.to.as_str().to_string(),
                        route: step.route.as_str().to_string(),
                    })
                    .collect();

                JourneyDoc {
                    index: i + 1,
                    total_minutes: journey.minutes,
                    routes,
                    legs,
                }
            })
            .collect();

        Self {
            component_count: plan.component_count,
            minimum_journeys: plan.minimum_journeys,
            total_minutes: plan.total_minutes(),
            journeys,
        }
    }
}

/// Render a plan as pretty-printed JSON.
pub fn to_json(plan: &JourneyPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JourneyPlanDoc::from_plan(plan))
}

//! Rendering journey plans.
//!
//! The planner itself only produces data; this module turns a
//! [`JourneyPlan`](crate::plan::JourneyPlan) into the human-readable
//! journey listing or a JSON document.

mod json;

pub use json::{JourneyDoc, JourneyPlanDoc, LegDoc, RouteDoc, to_json};

use std::fmt::{self, Write};

use crate::plan::JourneyPlan;

/// Render a plan as the human-readable journey listing.
pub fn render_text(plan: &JourneyPlan) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, plan);
    out
}

fn write_text(out: &mut impl Write, plan: &JourneyPlan) -> fmt::Result {
    writeln!(out, "Number of connected components: {}", plan.component_count)?;
    writeln!(out, "Total minimum journeys needed: {}", plan.minimum_journeys)?;

    for (index, journey) in plan.journeys.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Journey {}:", index + 1)?;
        writeln!(out, "Routes:")?;
        for id in journey.trail.route_ids() {
            if let Some(route) = plan.graph.route(id) {
                writeln!(out, "• {route}")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Suggested Sequence:")?;
        for step in journey.trail.steps() {
            let tag = plan
                .graph
                .route(step.route)
                .and_then(|route| route.tag.as_deref());
            match tag {
                Some(tag) => writeln!(
                    out,
                    "– From {}, take {} to {} | {}.",
                    step.from, step.route, step.to, tag
                )?,
                None => writeln!(out, "– From {}, take {} to {}.", step.from, step.route, step.to)?,
            }
        }

        writeln!(out)?;
        writeln!(out, "Total Time: {} minutes", journey.minutes)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total Time Across All Journeys: {} minutes",
        plan.total_minutes()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteId, Station};
    use crate::plan::plan_journeys;

    fn route(id: &str, a: &str, b: &str, minutes: u32, tag: Option<&str>) -> Route {
        Route::new(
            RouteId::parse(id).unwrap(),
            Station::new(a).unwrap(),
            Station::new(b).unwrap(),
            minutes,
            1,
            tag.map(str::to_string),
        )
    }

    #[test]
    fn single_route_listing() {
        let plan = plan_journeys(vec![route("R001", "X", "Y", 5, None)]).unwrap();
        let text = render_text(&plan);
        assert_eq!(
            text,
            "\
Number of connected components: 1
Total minimum journeys needed: 1

Journey 1:
Routes:
• R001: X <> Y (5 minutes, 1 stops)

Suggested Sequence:
– From X, take R001 to Y.

Total Time: 5 minutes

Total Time Across All Journeys: 5 minutes
"
        );
    }

    #[test]
    fn tag_shows_in_routes_and_sequence() {
        let plan = plan_journeys(vec![route("R001", "X", "Y", 5, Some("express"))]).unwrap();
        let text = render_text(&plan);
        assert!(text.contains("• R001: X <> Y (5 minutes, 1 stops | express)"));
        assert!(text.contains("– From X, take R001 to Y | express."));
    }

    #[test]
    fn two_journeys_numbered_in_order() {
        let plan = plan_journeys(vec![
            route("R001", "A", "B", 5, None),
            route("R002", "C", "D", 7, None),
        ])
        .unwrap();
        let text = render_text(&plan);
        assert!(text.contains("Number of connected components: 2"));
        assert!(text.contains("Total minimum journeys needed: 2"));
        assert!(text.contains("Journey 1:"));
        assert!(text.contains("Journey 2:"));
        assert!(text.contains("Total Time Across All Journeys: 12 minutes"));
    }

    #[test]
    fn empty_plan_renders_totals_only() {
        let plan = plan_journeys(vec![]).unwrap();
        let text = render_text(&plan);
        assert!(text.contains("Number of connected components: 0"));
        assert!(text.contains("Total Time Across All Journeys: 0 minutes"));
        assert!(!text.contains("Journey 1:"));
    }
}

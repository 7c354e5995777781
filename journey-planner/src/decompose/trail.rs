//! Trail types.

use std::collections::HashSet;

use crate::domain::{RouteId, Station};

/// One traversal of one route within a trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailStep {
    /// Station the traversal departs from
    pub from: Station,

    /// Station the traversal arrives at
    pub to: Station,

    /// Route being traversed
    pub route: RouteId,
}

/// Error returned when a step sequence does not form a valid trail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrailError {
    /// A trail needs at least one step
    #[error("trail must have at least one step")]
    Empty,

    /// Consecutive steps must share a station
    #[error("steps {0} and {1} do not share a station")]
    Discontinuous(usize, usize),

    /// A route may be traversed at most once per trail
    #[error("route {0} is traversed twice")]
    RepeatedRoute(RouteId),
}

/// An edge-disjoint walk over the route graph.
///
/// Consecutive steps share a station and no route code repeats; both
/// invariants are checked at construction, so any `Trail` value is a
/// valid walk. A trail is *closed* when it ends at its starting station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    steps: Vec<TrailStep>,
}

impl Trail {
    /// Validate a step sequence and wrap it as a trail.
    pub fn new(steps: Vec<TrailStep>) -> Result<Self, TrailError> {
        if steps.is_empty() {
            return Err(TrailError::Empty);
        }
        for i in 1..steps.len() {
            if steps[i - 1].to != steps[i].from {
                return Err(TrailError::Discontinuous(i - 1, i));
            }
        }
        let mut seen: HashSet<RouteId> = HashSet::with_capacity(steps.len());
        for step in &steps {
            if !seen.insert(step.route) {
                return Err(TrailError::RepeatedRoute(step.route));
            }
        }
        Ok(Self { steps })
    }

    /// The steps of the trail, in traversal order.
    pub fn steps(&self) -> &[TrailStep] {
        &self.steps
    }

    /// Number of routes traversed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: trails have at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Station where the trail starts.
    pub fn start(&self) -> &Station {
        &self.steps[0].from
    }

    /// Station where the trail ends.
    pub fn end(&self) -> &Station {
        &self.steps[self.steps.len() - 1].to
    }

    /// Returns true if the trail returns to its starting station.
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// Stations visited, in order: the start, then each step's arrival.
    pub fn station_sequence(&self) -> Vec<&Station> {
        let mut sequence = Vec::with_capacity(self.steps.len() + 1);
        sequence.push(self.start());
        for step in &self.steps {
            sequence.push(&step.to);
        }
        sequence
    }

    /// Route codes traversed, in order.
    pub fn route_ids(&self) -> impl Iterator<Item = RouteId> + '_ {
        self.steps.iter().map(|step| step.route)
    }
}

/// The minimum trail cover of one connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// Trails in construction order; their routes partition the
    /// component's route set.
    pub trails: Vec<Trail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str, route: &str) -> TrailStep {
        TrailStep {
            from: Station::new(from).unwrap(),
            to: Station::new(to).unwrap(),
            route: RouteId::parse(route).unwrap(),
        }
    }

    #[test]
    fn valid_open_trail() {
        let trail = Trail::new(vec![step("A", "B", "R001"), step("B", "C", "R002")]).unwrap();
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.start().as_str(), "A");
        assert_eq!(trail.end().as_str(), "C");
        assert!(!trail.is_closed());
    }

    #[test]
    fn valid_closed_trail() {
        let trail = Trail::new(vec![
            step("A", "B", "R001"),
            step("B", "C", "R002"),
            step("C", "A", "R003"),
        ])
        .unwrap();
        assert!(trail.is_closed());
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Trail::new(vec![]), Err(TrailError::Empty));
    }

    #[test]
    fn discontinuity_rejected() {
        let err = Trail::new(vec![step("A", "B", "R001"), step("C", "D", "R002")]).unwrap_err();
        assert_eq!(err, TrailError::Discontinuous(0, 1));
    }

    #[test]
    fn repeated_route_rejected() {
        let err = Trail::new(vec![step("A", "B", "R001"), step("B", "A", "R001")]).unwrap_err();
        assert_eq!(err, TrailError::RepeatedRoute(RouteId::parse("R001").unwrap()));
    }

    #[test]
    fn station_sequence() {
        let trail = Trail::new(vec![step("A", "B", "R001"), step("B", "C", "R002")]).unwrap();
        let names: Vec<&str> = trail
            .station_sequence()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn loop_step_is_a_valid_trail() {
        let trail = Trail::new(vec![step("A", "A", "R001")]).unwrap();
        assert!(trail.is_closed());
        assert_eq!(trail.len(), 1);
    }
}

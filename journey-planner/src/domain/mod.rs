//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated route data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod route;
mod route_id;
mod station;

pub use route::Route;
pub use route_id::{InvalidRouteId, RouteId};
pub use station::{InvalidStation, Station};

//! Route plan assembly.
//!
//! Ties the pieces together: pick a visiting order (see
//! [`sequencing`](crate::sequencing)), then walk it accumulating per-stop
//! distance and arrival time into a serializable
//! [`RoutePlan`](crate::models::RoutePlan).

mod formatter;

pub use formatter::{plan_route, plan_route_with_default_speed, DEFAULT_AVG_SPEED_KMH};

//! # routeseq
//!
//! Multi-stop delivery route sequencing for logistics services. Given a
//! start location and an unordered set of delivery stops, computes a
//! visiting order minimizing total travel distance — exhaustive search for
//! small stop sets, nearest-neighbor construction above that — then derives
//! per-stop arrival timing and aggregate route metrics.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Stop, SequencedStop, RoutePlan)
//! - [`distance`] — Location-to-location travel distance estimation
//! - [`evaluation`] — Open-path route cost evaluation
//! - [`sequencing`] — Stop ordering strategies (exact and nearest-neighbor)
//! - [`planning`] — Route plan assembly with timing and savings metrics

pub mod distance;
pub mod evaluation;
pub mod models;
pub mod planning;
pub mod sequencing;

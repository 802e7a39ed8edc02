//! Domain model types for route sequencing.
//!
//! All values are request-scoped: stops arrive on the request, the plan
//! goes out on the response, nothing is persisted or shared across
//! requests.

mod plan;
mod stop;

pub use plan::{RoutePlan, SequencedStop};
pub use stop::Stop;

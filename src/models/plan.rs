//! Route plan output types.
//!
//! Field names match the dispatch service's wire format, so a plan can be
//! serialized straight into a response body.

use serde::{Deserialize, Serialize};

/// A stop placed at its position within a planned route.
///
/// # Examples
///
/// ```
/// use routeseq::models::SequencedStop;
///
/// let entry = SequencedStop {
///     shipment_id: "s1".into(),
///     sequence: 1,
///     location: "C".into(),
///     estimated_arrival: "+1.0h".into(),
///     distance_from_previous: 59.0,
/// };
/// assert_eq!(entry.sequence, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedStop {
    /// Shipment identifier carried to this stop.
    pub shipment_id: String,
    /// 1-based position in the visiting order.
    pub sequence: usize,
    /// Location identifier of this stop.
    pub location: String,
    /// Cumulative arrival offset from departure, e.g. `"+2.7h"`.
    pub estimated_arrival: String,
    /// Distance from the previous location in km, rounded to 2 decimals.
    pub distance_from_previous: f64,
}

/// A planned route: the visiting order plus aggregate metrics.
///
/// Derived entirely from a chosen stop order; constructed fresh per request
/// and discarded after the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Stops in visiting order with per-stop timing and distance.
    pub optimized_sequence: Vec<SequencedStop>,
    /// Total travel distance from origin through all stops, km, 2 decimals.
    pub total_distance_km: f64,
    /// Total travel time at the assumed average speed, hours, 2 decimals.
    pub total_time_hours: f64,
    /// Claimed fuel savings versus an unoptimized baseline, in percent.
    ///
    /// The baseline currently re-evaluates the chosen order itself, so this
    /// is structurally zero — it is not a genuine savings figure. Kept in
    /// the wire format for compatibility; see [`crate::planning`].
    pub fuel_savings_percent: f64,
}

impl RoutePlan {
    /// A plan with no stops and all aggregates zero.
    pub fn empty() -> Self {
        Self {
            optimized_sequence: Vec::new(),
            total_distance_km: 0.0,
            total_time_hours: 0.0,
            fuel_savings_percent: 0.0,
        }
    }

    /// Number of stops in this plan.
    pub fn num_stops(&self) -> usize {
        self.optimized_sequence.len()
    }

    /// Returns `true` if this plan visits no stops.
    pub fn is_empty(&self) -> bool {
        self.optimized_sequence.is_empty()
    }
}

impl Default for RoutePlan {
    fn default() -> Self {
        Self::empty()
    }
}

//! Delivery stop type.

use serde::{Deserialize, Serialize};

/// A single delivery point to visit.
///
/// Pairs a shipment with the location identifier it must be delivered to.
/// Stops are immutable once received; sequencers reorder them but never
/// alter, drop, or duplicate them.
///
/// # Examples
///
/// ```
/// use routeseq::models::Stop;
///
/// let stop = Stop::new("SHP-001", "Mumbai");
/// assert_eq!(stop.shipment_id, "SHP-001");
/// assert_eq!(stop.location, "Mumbai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Shipment identifier carried to this stop.
    pub shipment_id: String,
    /// Location identifier where the shipment is delivered.
    pub location: String,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(shipment_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            location: location.into(),
        }
    }
}

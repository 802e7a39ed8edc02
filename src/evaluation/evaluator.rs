//! Total distance of an ordered stop sequence.

use crate::distance;
use crate::models::Stop;

/// Computes the total travel distance of visiting `stops` in the given
/// order, starting from `origin`.
///
/// Open-path cost: there is no return leg to the origin. An empty sequence
/// costs `0.0`. Pure function of its inputs; both sequencers and the plan
/// formatter rely on it producing the same total for the same order.
///
/// # Examples
///
/// ```
/// use routeseq::evaluation::route_distance;
/// use routeseq::models::Stop;
///
/// let stops = vec![Stop::new("s3", "C"), Stop::new("s2", "B"), Stop::new("s1", "A")];
/// // Start→C (59) + C→B (51) + B→A (51)
/// assert_eq!(route_distance("Start", &stops), 161.0);
/// assert_eq!(route_distance("Start", &[]), 0.0);
/// ```
pub fn route_distance(origin: &str, stops: &[Stop]) -> f64 {
    let mut total = 0.0;
    let mut current = origin;
    for stop in stops {
        total += distance::estimate(current, &stop.location);
        current = &stop.location;
    }
    total
}

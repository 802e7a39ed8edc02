//! String-hash travel distance oracle.

/// Estimates the travel distance between two locations, in kilometers.
///
/// Stand-in for a geocoding or distance-matrix service: the distance is
/// derived from the location identifiers themselves, so it is deterministic
/// within a process run, symmetric, and exactly `0.0` for identical
/// identifiers. Distinct identifiers map into the `[50, 499]` km band.
///
/// The estimate carries no metric-space guarantees beyond symmetry and zero
/// self-distance; in particular the triangle inequality does not hold.
///
/// # Examples
///
/// ```
/// use routeseq::distance::estimate;
///
/// assert_eq!(estimate("Start", "A"), 61.0);
/// assert_eq!(estimate("A", "Start"), 61.0);
/// assert_eq!(estimate("Start", "Start"), 0.0);
/// ```
pub fn estimate(from: &str, to: &str) -> f64 {
    if from == to {
        return 0.0;
    }
    let spread = (location_weight(from) - location_weight(to)).abs() % 450;
    50.0 + spread as f64
}

/// Sums the Unicode scalar values of a location identifier.
fn location_weight(location: &str) -> i64 {
    location.chars().map(|c| c as i64).sum()
}

//! Stop ordering strategies.
//!
//! - [`ExactSequencer`] — Exhaustive permutation search, O(n!)
//! - [`NearestNeighborSequencer`] — Greedy nearest-unvisited construction, O(n²)
//!
//! [`sequence`] picks between them by stop count. At or below
//! [`EXACT_SEARCH_MAX_STOPS`] the exhaustive search runs — at the threshold
//! that is 8! = 40,320 candidate orders, cheap enough to finish inside a
//! synchronous request. Above it the greedy construction keeps the work
//! polynomial at the cost of optimality.

mod exact;
mod nearest_neighbor;

pub use exact::ExactSequencer;
pub use nearest_neighbor::NearestNeighborSequencer;

use crate::models::Stop;

/// Largest stop count handled by exhaustive permutation search.
///
/// The tuning knob for worst-case sequencing latency: the exact search
/// evaluates `n!` orders, the greedy fallback `O(n²)` distance estimates.
pub const EXACT_SEARCH_MAX_STOPS: usize = 8;

/// An ordering strategy over delivery stops.
///
/// Every implementation returns a permutation of the input stop set — same
/// stops, same length, nothing duplicated or dropped — and is deterministic
/// for a given input order.
pub trait Sequencer {
    /// Reorders `stops` into the visiting order chosen by this strategy,
    /// starting from `origin`.
    fn sequence(&self, origin: &str, stops: &[Stop]) -> Vec<Stop>;
}

/// Orders stops with the strategy suited to the problem size.
///
/// Stop counts up to [`EXACT_SEARCH_MAX_STOPS`] get the globally optimal
/// [`ExactSequencer`]; larger inputs fall back to the
/// [`NearestNeighborSequencer`] approximation.
///
/// # Examples
///
/// ```
/// use routeseq::models::Stop;
/// use routeseq::sequencing::sequence;
///
/// let stops = vec![
///     Stop::new("s1", "A"),
///     Stop::new("s2", "B"),
///     Stop::new("s3", "C"),
/// ];
/// let route = sequence("Start", &stops);
/// let order: Vec<&str> = route.iter().map(|s| s.shipment_id.as_str()).collect();
/// assert_eq!(order, ["s3", "s2", "s1"]);
/// ```
pub fn sequence(origin: &str, stops: &[Stop]) -> Vec<Stop> {
    if stops.len() <= EXACT_SEARCH_MAX_STOPS {
        ExactSequencer.sequence(origin, stops)
    } else {
        NearestNeighborSequencer.sequence(origin, stops)
    }
}

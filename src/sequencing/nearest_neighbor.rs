//! Nearest-neighbor greedy construction.

use super::Sequencer;
use crate::distance;
use crate::models::Stop;

/// Greedy nearest-unvisited construction.
///
/// Starts at the origin and repeatedly appends the closest unvisited stop,
/// scanning candidates in input order so the earliest position wins ties.
/// Deterministic for a given input order but not globally optimal — the
/// polynomial-time fallback past the exhaustive-search threshold.
///
/// # Complexity
///
/// O(n²) distance estimates.
///
/// # Examples
///
/// ```
/// use routeseq::models::Stop;
/// use routeseq::sequencing::{NearestNeighborSequencer, Sequencer};
///
/// let stops = vec![Stop::new("s1", "A"), Stop::new("s2", "C")];
/// let route = NearestNeighborSequencer.sequence("Start", &stops);
/// // Start→C is 59 km, Start→A is 61 km: C comes first.
/// let order: Vec<&str> = route.iter().map(|s| s.location.as_str()).collect();
/// assert_eq!(order, ["C", "A"]);
/// ```
pub struct NearestNeighborSequencer;

impl Sequencer for NearestNeighborSequencer {
    fn sequence(&self, origin: &str, stops: &[Stop]) -> Vec<Stop> {
        let mut visited = vec![false; stops.len()];
        let mut route = Vec::with_capacity(stops.len());
        let mut current = origin;

        for _ in 0..stops.len() {
            // Find the nearest unvisited stop; strict < keeps the earliest
            // input position on ties.
            let mut best: Option<(usize, f64)> = None;
            for (i, stop) in stops.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let d = distance::estimate(current, &stop.location);
                if best.is_none() || d < best.expect("checked is_none").1 {
                    best = Some((i, d));
                }
            }

            let (next, _) = best.expect("an unvisited stop remains on every pass");
            visited[next] = true;
            route.push(stops[next].clone());
            current = &stops[next].location;
        }

        route
    }
}

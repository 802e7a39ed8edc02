//! Exhaustive permutation search.

use super::Sequencer;
use crate::distance;
use crate::models::Stop;

/// Exhaustive search over every visiting order.
///
/// Enumerates permutations in lexicographic order over the input positions
/// (the recursion always tries remaining stops in ascending input index)
/// and keeps the first order achieving the minimum total distance, so
/// equal-cost alternatives resolve deterministically for a given input
/// order. Globally optimal with respect to the distance estimate.
///
/// # Complexity
///
/// O(n · n!) distance estimates; intended only at or below
/// [`EXACT_SEARCH_MAX_STOPS`](super::EXACT_SEARCH_MAX_STOPS).
///
/// # Examples
///
/// ```
/// use routeseq::models::Stop;
/// use routeseq::sequencing::{ExactSequencer, Sequencer};
///
/// let stops = vec![
///     Stop::new("s1", "A"),
///     Stop::new("s2", "B"),
///     Stop::new("s3", "C"),
/// ];
/// let route = ExactSequencer.sequence("Start", &stops);
/// let order: Vec<&str> = route.iter().map(|s| s.location.as_str()).collect();
/// assert_eq!(order, ["C", "B", "A"]);
/// ```
pub struct ExactSequencer;

impl Sequencer for ExactSequencer {
    fn sequence(&self, origin: &str, stops: &[Stop]) -> Vec<Stop> {
        // Nothing to search for 0 or 1 stops.
        if stops.len() <= 1 {
            return stops.to_vec();
        }

        let mut order = Vec::with_capacity(stops.len());
        let mut taken = vec![false; stops.len()];
        let mut best: Option<(Vec<usize>, f64)> = None;
        search(stops, origin, 0.0, &mut order, &mut taken, &mut best);

        let (indices, _) = best.expect("two or more stops always yield a permutation");
        indices.iter().map(|&i| stops[i].clone()).collect()
    }
}

/// Depth-first permutation enumeration with incremental cost accumulation.
///
/// The cost carried down the recursion adds the same legs in the same order
/// as [`route_distance`](crate::evaluation::route_distance), so leaf totals
/// are bit-identical to a re-evaluation of the finished order.
fn search(
    stops: &[Stop],
    current: &str,
    cost: f64,
    order: &mut Vec<usize>,
    taken: &mut [bool],
    best: &mut Option<(Vec<usize>, f64)>,
) {
    if order.len() == stops.len() {
        // Strict improvement only: the first minimum found wins ties.
        if best.is_none() || cost < best.as_ref().expect("checked is_none").1 {
            *best = Some((order.clone(), cost));
        }
        return;
    }

    for i in 0..stops.len() {
        if taken[i] {
            continue;
        }
        taken[i] = true;
        order.push(i);
        let leg = distance::estimate(current, &stops[i].location);
        search(stops, &stops[i].location, cost + leg, order, taken, best);
        order.pop();
        taken[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::route_distance;
    use proptest::prelude::*;

    fn all_permutations(n: usize) -> Vec<Vec<usize>> {
        fn go(n: usize, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            if prefix.len() == n {
                out.push(prefix.clone());
                return;
            }
            for i in 0..n {
                if prefix.contains(&i) {
                    continue;
                }
                prefix.push(i);
                go(n, prefix, out);
                prefix.pop();
            }
        }
        let mut out = Vec::new();
        go(n, &mut Vec::new(), &mut out);
        out
    }

    fn apply(stops: &[Stop], indices: &[usize]) -> Vec<Stop> {
        indices.iter().map(|&i| stops[i].clone()).collect()
    }

    fn sorted_ids(stops: &[Stop]) -> Vec<&str> {
        let mut ids: Vec<&str> = stops.iter().map(|s| s.shipment_id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_empty() {
        assert!(ExactSequencer.sequence("Start", &[]).is_empty());
    }

    #[test]
    fn test_singleton() {
        let stops = vec![Stop::new("s1", "A")];
        assert_eq!(ExactSequencer.sequence("Start", &stops), stops);
    }

    #[test]
    fn test_reference_scenario() {
        let stops = vec![
            Stop::new("s1", "A"),
            Stop::new("s2", "B"),
            Stop::new("s3", "C"),
        ];
        let route = ExactSequencer.sequence("Start", &stops);
        let order: Vec<&str> = route.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(order, ["C", "B", "A"]);
        assert_eq!(route_distance("Start", &route), 161.0);
    }

    #[test]
    fn test_optimal_among_all_permutations() {
        let stops = vec![
            Stop::new("s1", "Mumbai"),
            Stop::new("s2", "Delhi"),
            Stop::new("s3", "Pune"),
            Stop::new("s4", "Nagpur"),
            Stop::new("s5", "Surat"),
        ];
        let route = ExactSequencer.sequence("Chennai", &stops);
        let best = route_distance("Chennai", &route);
        for perm in all_permutations(stops.len()) {
            let candidate = apply(&stops, &perm);
            assert!(best <= route_distance("Chennai", &candidate));
        }
    }

    #[test]
    fn test_tie_break_keeps_input_order() {
        // Identical locations make every permutation cost the same; the
        // first one enumerated is the input order itself.
        let stops = vec![
            Stop::new("s1", "A"),
            Stop::new("s2", "A"),
            Stop::new("s3", "A"),
        ];
        assert_eq!(ExactSequencer.sequence("Start", &stops), stops);
    }

    #[test]
    fn test_permutation_of_input() {
        let stops = vec![
            Stop::new("s1", "X1"),
            Stop::new("s2", "Y2"),
            Stop::new("s3", "Z3"),
            Stop::new("s4", "W4"),
        ];
        let route = ExactSequencer.sequence("Hub", &stops);
        assert_eq!(route.len(), stops.len());
        assert_eq!(sorted_ids(&route), sorted_ids(&stops));
    }

    proptest! {
        #[test]
        fn prop_globally_optimal(
            origin in "[A-Za-z]{1,8}",
            locations in prop::collection::vec("[A-Za-z]{1,8}", 0..5),
        ) {
            let stops: Vec<Stop> = locations
                .iter()
                .enumerate()
                .map(|(i, loc)| Stop::new(format!("s{i}"), loc.clone()))
                .collect();
            let route = ExactSequencer.sequence(&origin, &stops);
            prop_assert_eq!(sorted_ids(&route), sorted_ids(&stops));
            let best = route_distance(&origin, &route);
            for perm in all_permutations(stops.len()) {
                let candidate = apply(&stops, &perm);
                prop_assert!(best <= route_distance(&origin, &candidate));
            }
        }
    }
}

//! Plan construction and metric formatting.

use crate::distance;
use crate::evaluation::route_distance;
use crate::models::{RoutePlan, SequencedStop, Stop};
use crate::sequencing;

/// Average travel speed assumed when deriving arrival times, in km/h.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 60.0;

/// Plans a delivery route from `origin` through `stops`.
///
/// Chooses a visiting order — exhaustive search at small stop counts,
/// nearest-neighbor above, see [`sequencing::sequence`] — then derives each
/// stop's 1-based sequence number, distance from the previous location, and
/// cumulative arrival offset at `avg_speed_kmh`, plus aggregate totals.
///
/// Zero and one stop are handled directly without running a sequencer: an
/// empty plan with zero aggregates, or a single-entry plan with zero
/// savings.
///
/// # Examples
///
/// ```
/// use routeseq::models::Stop;
/// use routeseq::planning::{plan_route, DEFAULT_AVG_SPEED_KMH};
///
/// let stops = vec![
///     Stop::new("s1", "A"),
///     Stop::new("s2", "B"),
///     Stop::new("s3", "C"),
/// ];
/// let plan = plan_route("Start", &stops, DEFAULT_AVG_SPEED_KMH);
/// assert_eq!(plan.total_distance_km, 161.0);
/// assert_eq!(plan.total_time_hours, 2.68);
/// assert_eq!(plan.optimized_sequence[0].location, "C");
/// ```
pub fn plan_route(origin: &str, stops: &[Stop], avg_speed_kmh: f64) -> RoutePlan {
    if stops.is_empty() {
        return RoutePlan::empty();
    }
    if let [stop] = stops {
        return single_stop_plan(origin, stop, avg_speed_kmh);
    }

    let route = sequencing::sequence(origin, stops);
    format_plan(origin, &route, avg_speed_kmh)
}

/// [`plan_route`] at [`DEFAULT_AVG_SPEED_KMH`].
pub fn plan_route_with_default_speed(origin: &str, stops: &[Stop]) -> RoutePlan {
    plan_route(origin, stops, DEFAULT_AVG_SPEED_KMH)
}

/// Formats a chosen visiting order into a plan.
fn format_plan(origin: &str, route: &[Stop], avg_speed_kmh: f64) -> RoutePlan {
    let total_distance = route_distance(origin, route);
    let mut sequence = Vec::with_capacity(route.len());
    let mut elapsed_hours = 0.0;
    let mut current = origin;

    for (idx, stop) in route.iter().enumerate() {
        let leg = distance::estimate(current, &stop.location);
        elapsed_hours += leg / avg_speed_kmh;
        sequence.push(SequencedStop {
            shipment_id: stop.shipment_id.clone(),
            sequence: idx + 1,
            location: stop.location.clone(),
            estimated_arrival: format!("+{:.1}h", elapsed_hours),
            distance_from_previous: round2(leg),
        });
        current = &stop.location;
    }

    RoutePlan {
        optimized_sequence: sequence,
        total_distance_km: round2(total_distance),
        total_time_hours: round2(total_distance / avg_speed_kmh),
        fuel_savings_percent: round1(fuel_savings(origin, route, total_distance)),
    }
}

/// Percentage saved by the chosen order against a baseline, clipped at 0.
///
/// The baseline currently re-evaluates the chosen order itself, so the
/// figure is structurally zero rather than a comparison against an
/// unoptimized ordering. Kept until the intended baseline is settled; the
/// wire format depends on the field being present.
fn fuel_savings(origin: &str, route: &[Stop], optimized_distance: f64) -> f64 {
    let baseline = route_distance(origin, route);
    if baseline <= 0.0 {
        // Every stop at the origin's location: nothing to compare.
        return 0.0;
    }
    ((baseline - optimized_distance) / baseline * 100.0).max(0.0)
}

fn single_stop_plan(origin: &str, stop: &Stop, avg_speed_kmh: f64) -> RoutePlan {
    let dist = distance::estimate(origin, &stop.location);
    let hours = dist / avg_speed_kmh;
    RoutePlan {
        optimized_sequence: vec![SequencedStop {
            shipment_id: stop.shipment_id.clone(),
            sequence: 1,
            location: stop.location.clone(),
            estimated_arrival: format!("+{:.1}h", hours),
            distance_from_previous: round2(dist),
        }],
        total_distance_km: round2(dist),
        total_time_hours: round2(hours),
        fuel_savings_percent: 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

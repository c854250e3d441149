//! Day distribution: mapping a place set onto a fixed number of trip days.
//!
//! Places are clustered geographically, each cluster is ordered in isolation,
//! and the ordered clusters are laid onto days. A one-pass correction then
//! feeds any starved day from the fullest one so no day sits empty while
//! enough places exist to cover it.

use tracing::debug;

use crate::cluster::cluster_places;
use crate::place::Place;
use crate::route::optimize_route;

/// Preferred minimum cluster size. Caps the cluster count so groups keep
/// enough members to be geographically meaningful.
const CLUSTER_TARGET_SIZE: usize = 3;

/// Partition `places` across exactly `number_of_days` ordered day lists.
///
/// Every input place lands on exactly one day, and the result always has
/// `number_of_days` entries even when some stay empty. With no more places
/// than days each place gets its own day, in input order, and the remaining
/// days are left empty. Total over any finite input.
pub fn distribute_by_days(places: &[Place], number_of_days: usize) -> Vec<Vec<Place>> {
    if number_of_days == 0 || places.is_empty() {
        return vec![Vec::new(); number_of_days];
    }

    if places.len() <= number_of_days {
        let mut days = vec![Vec::new(); number_of_days];
        for (day, place) in days.iter_mut().zip(places) {
            day.push(place.clone());
        }
        return days;
    }

    let cluster_count = number_of_days.min(places.len().div_ceil(CLUSTER_TARGET_SIZE));
    let clusters = cluster_places(places, cluster_count);
    let routed: Vec<Vec<Place>> = clusters
        .iter()
        .map(|cluster| optimize_route(cluster))
        .collect();

    debug!(
        "distributing - places={}, days={}, clusters={}",
        places.len(),
        number_of_days,
        routed.len()
    );

    let mut days = assign_clusters_to_days(routed, number_of_days);
    fill_empty_days(&mut days);

    days
}

/// Lay ordered clusters onto days: one cluster per day while they fit,
/// wrapping round-robin if clustering ever yields more groups than days.
fn assign_clusters_to_days(
    clusters: Vec<Vec<Place>>,
    number_of_days: usize,
) -> Vec<Vec<Place>> {
    let mut days: Vec<Vec<Place>> = vec![Vec::new(); number_of_days];
    for (index, cluster) in clusters.into_iter().enumerate() {
        days[index % number_of_days].extend(cluster);
    }
    days
}

/// One-pass starvation correction: each empty day, scanned left to right,
/// takes the back half (rounded up, order kept) of the currently fullest day.
/// Runs once; a correction that empties its donor is not corrected again.
fn fill_empty_days(days: &mut [Vec<Place>]) {
    for index in 0..days.len() {
        if !days[index].is_empty() {
            continue;
        }

        let Some(donor) = fullest_day(days) else {
            continue;
        };
        let donor_len = days[donor].len();
        if donor_len == 0 {
            continue;
        }

        let moved = days[donor].split_off(donor_len - donor_len.div_ceil(2));
        days[index] = moved;
    }
}

/// Index of the day holding the most places, the first such day on ties.
fn fullest_day(days: &[Vec<Place>]) -> Option<usize> {
    let mut fullest: Option<usize> = None;
    for (index, day) in days.iter().enumerate() {
        match fullest {
            Some(current) if days[current].len() >= day.len() => {}
            _ => fullest = Some(index),
        }
    }
    fullest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::PlaceCategory;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id, PlaceCategory::Sightseeing, lat, lng)
    }

    fn sizes(days: &[Vec<Place>]) -> Vec<usize> {
        days.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_round_robin_wraps_extra_clusters() {
        let clusters = vec![
            vec![place("a1", 35.0, 139.0), place("a2", 35.0, 139.1)],
            vec![place("b1", 36.0, 139.0)],
            vec![place("c1", 37.0, 139.0)],
        ];

        let days = assign_clusters_to_days(clusters, 2);

        assert_eq!(sizes(&days), vec![3, 1]);
        assert_eq!(days[0][2].id, "c1", "Third cluster wraps onto day 1");
    }

    #[test]
    fn test_fill_takes_back_half_of_fullest_day() {
        let mut days = vec![
            vec![
                place("a", 35.0, 139.0),
                place("b", 35.0, 139.1),
                place("c", 35.0, 139.2),
                place("d", 35.0, 139.3),
                place("e", 35.0, 139.4),
            ],
            Vec::new(),
        ];

        fill_empty_days(&mut days);

        assert_eq!(sizes(&days), vec![2, 3]);
        // The moved tail keeps its visiting order.
        assert_eq!(days[1][0].id, "c");
        assert_eq!(days[1][2].id, "e");
    }

    #[test]
    fn test_fill_donor_tie_goes_to_first_day() {
        let mut days = vec![
            vec![place("a1", 35.0, 139.0), place("a2", 35.0, 139.1)],
            vec![place("b1", 36.0, 139.0), place("b2", 36.0, 139.1)],
            Vec::new(),
        ];

        fill_empty_days(&mut days);

        assert_eq!(sizes(&days), vec![1, 2, 1]);
        assert_eq!(days[2][0].id, "a2");
    }

    #[test]
    fn test_fill_runs_once_per_empty_day() {
        // A single-place donor is drained entirely and not refilled.
        let mut days = vec![vec![place("only", 35.0, 139.0)], Vec::new()];

        fill_empty_days(&mut days);

        assert_eq!(sizes(&days), vec![0, 1]);
    }

    #[test]
    fn test_fill_leaves_all_empty_days_alone() {
        let mut days: Vec<Vec<Place>> = vec![Vec::new(), Vec::new()];

        fill_empty_days(&mut days);

        assert_eq!(sizes(&days), vec![0, 0]);
    }
}

//! Geographic clustering of places.
//!
//! Iterative centroid refinement seeded by farthest-point traversal. The day
//! distributor feeds each resulting cluster to the router, so clusters need to
//! be geographically coherent but not perfectly balanced.

use tracing::debug;

use crate::haversine::haversine_km;
use crate::place::Place;

/// Assignment/update rounds allowed before the loop is cut off.
const MAX_ROUNDS: usize = 10;

/// A centroid that moved no more than this many degrees on either axis
/// counts as settled.
const CONVERGENCE_EPSILON_DEG: f64 = 1e-4;

/// Partition `places` into at most `k` geographically coherent clusters.
///
/// Clusters come back ordered by their seeding order, members in input order,
/// and every cluster non-empty: a centroid that ends up with no members is
/// dropped rather than padded, so fewer than `k` clusters is a legal result.
/// With `places.len() <= k` every place becomes its own singleton cluster and
/// no iteration runs. A `k` of zero is treated as one.
pub fn cluster_places(places: &[Place], k: usize) -> Vec<Vec<Place>> {
    if places.is_empty() {
        return Vec::new();
    }
    let k = k.max(1);

    if places.len() <= k {
        return places.iter().map(|place| vec![place.clone()]).collect();
    }

    let mut centroids = seed_centroids(places, k);

    let mut rounds = 0;
    while rounds < MAX_ROUNDS {
        rounds += 1;
        let assignment = assign_to_nearest(places, &centroids);
        let moved = update_centroids(places, &assignment, &mut centroids);
        if moved <= CONVERGENCE_EPSILON_DEG {
            break;
        }
    }

    // Membership is re-derived from the final centroid positions so the last
    // update round is reflected in the output.
    let assignment = assign_to_nearest(places, &centroids);
    let mut clusters: Vec<Vec<Place>> = vec![Vec::new(); centroids.len()];
    for (place, &slot) in places.iter().zip(&assignment) {
        clusters[slot].push(place.clone());
    }
    clusters.retain(|cluster| !cluster.is_empty());

    debug!(
        "clustering settled - places={}, k={}, rounds={}, clusters={}",
        places.len(),
        k,
        rounds,
        clusters.len()
    );

    clusters
}

/// Farthest-point seeding: the first place opens the list, then each further
/// seed is the place whose nearest already-chosen seed is farthest away.
/// Ties keep the earliest candidate in input order.
fn seed_centroids(places: &[Place], k: usize) -> Vec<(f64, f64)> {
    let mut centroids = vec![places[0].coords()];

    while centroids.len() < k {
        let mut best = places[0].coords();
        let mut best_dist = nearest_centroid_km(places[0].coords(), &centroids);

        for place in &places[1..] {
            let dist = nearest_centroid_km(place.coords(), &centroids);
            if dist > best_dist {
                best_dist = dist;
                best = place.coords();
            }
        }

        centroids.push(best);
    }

    centroids
}

fn nearest_centroid_km(point: (f64, f64), centroids: &[(f64, f64)]) -> f64 {
    centroids
        .iter()
        .map(|&centroid| haversine_km(point, centroid))
        .fold(f64::INFINITY, f64::min)
}

/// Nearest-centroid index for every place; ties go to the lowest index.
fn assign_to_nearest(places: &[Place], centroids: &[(f64, f64)]) -> Vec<usize> {
    places
        .iter()
        .map(|place| {
            let mut nearest = 0;
            let mut nearest_dist = haversine_km(place.coords(), centroids[0]);
            for (slot, &centroid) in centroids.iter().enumerate().skip(1) {
                let dist = haversine_km(place.coords(), centroid);
                if dist < nearest_dist {
                    nearest_dist = dist;
                    nearest = slot;
                }
            }
            nearest
        })
        .collect()
}

/// Move each centroid to the arithmetic mean of its members; a centroid with
/// no members keeps its position. Returns the largest single-axis movement in
/// degrees.
fn update_centroids(
    places: &[Place],
    assignment: &[usize],
    centroids: &mut [(f64, f64)],
) -> f64 {
    let mut sums = vec![(0.0_f64, 0.0_f64, 0_usize); centroids.len()];
    for (place, &slot) in places.iter().zip(assignment) {
        sums[slot].0 += place.lat;
        sums[slot].1 += place.lng;
        sums[slot].2 += 1;
    }

    let mut max_moved = 0.0_f64;
    for (centroid, (lat_sum, lng_sum, count)) in centroids.iter_mut().zip(sums) {
        if count == 0 {
            continue;
        }
        let next = (lat_sum / count as f64, lng_sum / count as f64);
        max_moved = max_moved
            .max((next.0 - centroid.0).abs())
            .max((next.1 - centroid.1).abs());
        *centroid = next;
    }

    max_moved
}

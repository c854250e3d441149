//! Visiting-order construction for one day's places.
//!
//! Nearest-neighbor construction anchored at the geographic center, refined
//! by 2-opt segment reversal. Larger inputs are first pre-sorted by activity
//! category so similar stops start out adjacent before distance takes over.

use std::cmp::Ordering;

use tracing::debug;

use crate::haversine::haversine_km;
use crate::place::Place;

/// Inputs at or below this size skip the pre-sort and refinement; any order
/// found greedily is already as short as it gets.
const SMALL_INPUT_LEN: usize = 3;

/// Full 2-opt passes allowed before the loop is cut off.
const MAX_REFINE_PASSES: usize = 100;

/// A reversal must shorten the tour by more than this many kilometers to be
/// accepted; blocks oscillation between near-equal edge pairs.
const IMPROVEMENT_EPSILON_KM: f64 = 0.001;

/// Order `places` into a single visiting sequence.
///
/// Always returns a permutation of the input. Three or fewer places get the
/// plain greedy order; larger inputs are category pre-sorted, built greedily,
/// then refined. The refined tour is never longer than the greedy tour it
/// started from.
pub fn optimize_route(places: &[Place]) -> Vec<Place> {
    if places.len() <= 1 {
        return places.to_vec();
    }
    if places.len() <= SMALL_INPUT_LEN {
        return nearest_neighbor_route(places);
    }

    let presorted = category_presort(places);
    let tour = nearest_neighbor_route(&presorted);
    two_opt(tour)
}

/// Stable sort by category visiting priority, then latitude ascending.
fn category_presort(places: &[Place]) -> Vec<Place> {
    let mut sorted = places.to_vec();
    sorted.sort_by(|a, b| {
        a.category
            .route_priority()
            .cmp(&b.category.route_priority())
            .then(a.lat.partial_cmp(&b.lat).unwrap_or(Ordering::Equal))
    });
    sorted
}

/// Greedy construction: start at the place nearest the centroid of the whole
/// input, then repeatedly append the nearest unvisited place. Ties keep the
/// earliest candidate in input order.
fn nearest_neighbor_route(places: &[Place]) -> Vec<Place> {
    if places.len() <= 1 {
        return places.to_vec();
    }

    let count = places.len() as f64;
    let center = (
        places.iter().map(|p| p.lat).sum::<f64>() / count,
        places.iter().map(|p| p.lng).sum::<f64>() / count,
    );

    let mut start = 0;
    let mut start_dist = haversine_km(center, places[0].coords());
    for (index, place) in places.iter().enumerate().skip(1) {
        let dist = haversine_km(center, place.coords());
        if dist < start_dist {
            start_dist = dist;
            start = index;
        }
    }

    let mut visited = vec![false; places.len()];
    let mut tour = Vec::with_capacity(places.len());
    visited[start] = true;
    tour.push(places[start].clone());
    let mut current = start;

    while tour.len() < places.len() {
        let mut next: Option<usize> = None;
        let mut next_dist = f64::INFINITY;
        for (index, place) in places.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let dist = haversine_km(places[current].coords(), place.coords());
            if dist < next_dist {
                next_dist = dist;
                next = Some(index);
            }
        }

        // NaN coordinates never compare smaller than anything; fall back to
        // input order so the tour still covers every place.
        let next = match next {
            Some(index) => index,
            None => match visited.iter().position(|&seen| !seen) {
                Some(index) => index,
                None => break,
            },
        };

        visited[next] = true;
        tour.push(places[next].clone());
        current = next;
    }

    tour
}

/// 2-opt refinement: reverse tour segments whenever doing so shortens the
/// total by more than the acceptance tolerance, in full passes capped at
/// [`MAX_REFINE_PASSES`].
///
/// The tour is open: the final place has no outgoing edge, so when the second
/// cut sits on the last index that place stands in for its own follow-on and
/// the comparison costs nothing for the missing edge.
fn two_opt(mut route: Vec<Place>) -> Vec<Place> {
    let n = route.len();
    if n <= SMALL_INPUT_LEN {
        return route;
    }

    let mut passes = 0;
    let mut improved = true;
    while improved && passes < MAX_REFINE_PASSES {
        improved = false;
        passes += 1;

        for i in 0..n - 2 {
            for j in i + 2..n {
                let next_i = i + 1;
                let next_j = if j + 1 < n { j + 1 } else { j };

                let current = haversine_km(route[i].coords(), route[next_i].coords())
                    + haversine_km(route[j].coords(), route[next_j].coords());
                let candidate = haversine_km(route[i].coords(), route[j].coords())
                    + haversine_km(route[next_i].coords(), route[next_j].coords());

                if candidate < current - IMPROVEMENT_EPSILON_KM {
                    route[next_i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    debug!("2-opt finished - places={}, passes={}", n, passes);

    route
}

use trip_planner::itinerary::distribute_by_days;
use trip_planner::place::{Place, PlaceCategory};
use trip_planner::stats::calculate_itinerary_stats;

fn place(id: &'static str, lat: f64, lng: f64) -> Place {
    Place::new(id, id, PlaceCategory::Sightseeing, lat, lng)
}

#[test]
fn plans_a_weekend_and_reports_totals() {
    let places = vec![
        place("sensoji", 35.7148, 139.7967),
        place("nakamise", 35.7119, 139.7965),
        place("ueno", 35.7156, 139.7745),
        place("crossing", 35.6595, 139.7005),
        place("hachiko", 35.6590, 139.7006),
    ];

    let days = distribute_by_days(&places, 2);

    assert_eq!(days.len(), 2);
    assert!(days.iter().all(|day| !day.is_empty()));

    let total: usize = days.iter().map(Vec::len).sum();
    assert_eq!(total, places.len());

    let stats = calculate_itinerary_stats(&days);
    assert_eq!(stats.total.places, 5);
    assert_eq!(stats.per_day.len(), 2);
}

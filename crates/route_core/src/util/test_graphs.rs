use route_reader::RouteRecord;

/// The example route table:
///
/// ```text
/// id, city, to, ticket_average, distance, hours
/// 0, Braga, 0, 0, 0, 0
/// 1, Lisbon, 0, 40, 50, 5
/// 2, Porto, 0, 25, 30, 1.5
/// 2, Porto, 1, 30, 26, 1.5
/// ```
pub fn sample_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(0, "Braga", 0, 0.0, 0.0, 0.0),
        RouteRecord::new(1, "Lisbon", 0, 40.0, 50.0, 5.0),
        RouteRecord::new(2, "Porto", 0, 25.0, 30.0, 1.5),
        RouteRecord::new(2, "Porto", 1, 30.0, 26.0, 1.5),
    ]
}

/// Routes where going Braga -> Porto -> Lisbon (0.1 + 0.1) beats the direct
/// connection Braga -> Lisbon (1.0).
pub fn detour_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(0, "Braga", 0, 0.0, 0.0, 0.0),
        RouteRecord::new(1, "Lisbon", 1, 0.0, 0.0, 0.0),
        RouteRecord::new(0, "Braga", 1, 100.0, 100.0, 5.0),
        RouteRecord::new(0, "Braga", 2, 10.0, 10.0, 1.0),
        RouteRecord::new(2, "Porto", 1, 10.0, 10.0, 1.0),
    ]
}

//! Human readable output of routes
use crate::{constants::CityId, planner::Route};
use rustc_hash::FxHashMap;

pub const NO_ROUTE: &str = "No route found";

/// Renders `route` as `Name1 -> Name2 -> ... -> NameN (Weight: X.XX)`.
///
/// Cities without a name are shown as `#<id>`.
pub fn render_route(route: &Route, names: &FxHashMap<CityId, String>) -> String {
    if route.is_unreachable() {
        return NO_ROUTE.to_string();
    }

    let cities: Vec<String> = route
        .cities
        .iter()
        .map(|id| match names.get(id) {
            Some(name) => name.clone(),
            None => format!("#{}", id),
        })
        .collect();

    format!("{} (Weight: {:.2})", cities.join(" -> "), route.weight)
}

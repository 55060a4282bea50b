//! Cheapest route from a fixed origin city

use crate::{
    constants::{CityId, Weight},
    graph::{DuplicateEdgePolicy, Graph},
    graph_builder::{GraphBuilder, NamePolicy},
    render::render_route,
    search::dijkstra::Dijkstra,
    weights::WeightPreferences,
};
use log::warn;
use route_reader::RouteRecord;

/// A route between two cities, origin and destination included.
///
/// An empty route with infinite weight means no route exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub cities: Vec<CityId>,
    pub weight: Weight,
}

impl Route {
    pub fn new(cities: Vec<CityId>, weight: Weight) -> Self {
        Route { cities, weight }
    }

    pub fn unreachable() -> Self {
        Route {
            cities: Vec::new(),
            weight: f64::INFINITY,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Parameters of the route planner
#[derive(Debug, Clone, Copy)]
pub struct PlannerParams {
    pub(crate) origin: CityId,
    pub(crate) preferences: WeightPreferences,
    pub(crate) duplicate_policy: DuplicateEdgePolicy,
    pub(crate) name_policy: NamePolicy,
}

impl PlannerParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn origin(mut self, origin: CityId) -> Self {
        self.origin = origin;
        self
    }

    pub fn preferences(mut self, preferences: WeightPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }
}

impl Default for PlannerParams {
    fn default() -> Self {
        PlannerParams {
            origin: 0,
            preferences: WeightPreferences::default(),
            duplicate_policy: DuplicateEdgePolicy::default(),
            name_policy: NamePolicy::default(),
        }
    }
}

pub struct RoutePlanner {
    origin: CityId,
    g: Graph,
}

impl RoutePlanner {
    /// Builds the route graph from `records`.
    ///
    /// Fails only for invalid weight preferences.
    pub fn new(records: &[RouteRecord], params: PlannerParams) -> anyhow::Result<Self> {
        let g = GraphBuilder::new(records)
            .preferences(params.preferences)
            .duplicate_policy(params.duplicate_policy)
            .name_policy(params.name_policy)
            .build()?;

        Ok(RoutePlanner {
            origin: params.origin,
            g,
        })
    }

    pub fn origin(&self) -> CityId {
        self.origin
    }

    pub fn graph(&self) -> &Graph {
        &self.g
    }

    /// Cheapest route from the origin to `destination`
    pub fn shortest_to(&self, destination: CityId) -> Route {
        let Some(source) = self.g.node_index_of(self.origin) else {
            warn!("Origin city {} is not part of the route table", self.origin);
            return Route::unreachable();
        };
        let Some(target) = self.g.node_index_of(destination) else {
            warn!("Destination city {} is not part of the route table", destination);
            return Route::unreachable();
        };

        let mut dijkstra = Dijkstra::new(&self.g);
        match dijkstra.search(source, target) {
            Some(sp) => Route::new(
                sp.nodes.iter().map(|n| self.g.nodes[n.index()].id).collect(),
                sp.weight,
            ),
            None => Route::unreachable(),
        }
    }

    /// Renders `route` with the city names of this graph
    pub fn render(&self, route: &Route) -> String {
        render_route(route, self.g.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_graphs::{detour_routes, sample_routes};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn direct_route_is_cheapest() {
        let planner = RoutePlanner::new(&sample_routes(), PlannerParams::default()).unwrap();

        // Direct: 0.61, via Lisbon: 1.0 + 0.612
        let route = planner.shortest_to(2);
        assert_eq!(route.cities, vec![0, 2]);
        assert_abs_diff_eq!(route.weight, 0.61, epsilon = 1e-9);
        assert_eq!(planner.render(&route), "Braga -> Porto (Weight: 0.61)");

        // Direct: 1.0, via Porto: 0.61 + 0.612
        let route = planner.shortest_to(1);
        assert_eq!(route.cities, vec![0, 1]);
        assert_abs_diff_eq!(route.weight, 1.0, epsilon = 1e-9);
        assert_eq!(planner.render(&route), "Braga -> Lisbon (Weight: 1.00)");
    }

    #[test]
    fn detour_is_cheapest() {
        let planner = RoutePlanner::new(&detour_routes(), PlannerParams::default()).unwrap();

        // Direct: 1.0, via Porto: 0.1 + 0.1
        let route = planner.shortest_to(1);
        assert_eq!(route.cities, vec![0, 2, 1]);
        assert_abs_diff_eq!(route.weight, 0.2, epsilon = 1e-9);
        assert_eq!(planner.render(&route), "Braga -> Porto -> Lisbon (Weight: 0.20)");
    }

    #[test]
    fn route_to_origin() {
        let planner = RoutePlanner::new(&sample_routes(), PlannerParams::default()).unwrap();

        let route = planner.shortest_to(0);
        assert_eq!(route, Route::new(vec![0], 0.0));
        assert_eq!(planner.render(&route), "Braga (Weight: 0.00)");
    }

    #[test]
    fn unknown_destination() {
        let planner = RoutePlanner::new(&sample_routes(), PlannerParams::default()).unwrap();

        let route = planner.shortest_to(42);
        assert!(route.is_unreachable());
        assert_eq!(route.weight, f64::INFINITY);
        assert_eq!(planner.render(&route), "No route found");
    }

    #[test]
    fn unknown_origin() {
        let params = PlannerParams::new().origin(42);
        let planner = RoutePlanner::new(&sample_routes(), params).unwrap();

        assert_eq!(planner.origin(), 42);
        assert!(planner.shortest_to(1).is_unreachable());
    }

    #[test]
    fn unreachable_destination() {
        let records = vec![
            RouteRecord::new(0, "Braga", 1, 10.0, 50.0, 1.0),
            RouteRecord::new(2, "Faro", 3, 20.0, 80.0, 2.0),
        ];
        let planner = RoutePlanner::new(&records, PlannerParams::default()).unwrap();

        assert_eq!(planner.shortest_to(1).cities, vec![0, 1]);
        assert_eq!(planner.shortest_to(3), Route::unreachable());
    }

    #[test]
    fn other_origin() {
        let params = PlannerParams::new().origin(1);
        let planner = RoutePlanner::new(&sample_routes(), params).unwrap();

        let route = planner.shortest_to(2);
        assert_eq!(route.cities, vec![1, 2]);
        assert_abs_diff_eq!(route.weight, 0.612, epsilon = 1e-9);
    }

    #[test]
    fn plan_from_csv() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../route_reader/test_data/routes.csv");
        let records = route_reader::read_routes(&path).unwrap();
        let planner = RoutePlanner::new(&records, PlannerParams::default()).unwrap();

        assert_eq!(planner.graph().nodes.len(), 3);
        assert_eq!(planner.graph().edges.len(), 3);
        assert_eq!(
            planner.render(&planner.shortest_to(2)),
            "Braga -> Porto (Weight: 0.61)"
        );
    }

    #[test]
    fn invalid_preferences() {
        let params = PlannerParams::new().preferences(WeightPreferences::new(0.2, 0.2));
        assert!(RoutePlanner::new(&sample_routes(), params).is_err());
    }

    proptest! {
        #[test]
        fn route_to_self_is_free(
            rows in prop::collection::vec((0i64..6, 0i64..6, 0.0f64..100.0, 0.0f64..100.0), 1..30)
        ) {
            let records: Vec<RouteRecord> = rows
                .into_iter()
                .map(|(from, to, price, dist)| RouteRecord::new(from, "X", to, price, dist, 0.0))
                .collect();
            let origin = records[0].origin_id;
            let planner = RoutePlanner::new(&records, PlannerParams::new().origin(origin)).unwrap();

            prop_assert_eq!(planner.shortest_to(origin), Route::new(vec![origin], 0.0));
            for id in 0..8 {
                let route = planner.shortest_to(id);
                if route.is_unreachable() {
                    prop_assert_eq!(route.weight, f64::INFINITY);
                } else {
                    prop_assert_eq!(route.cities.first(), Some(&origin));
                    prop_assert_eq!(route.cities.last(), Some(&id));
                    prop_assert!(route.weight >= 0.0);
                }
            }
        }
    }
}

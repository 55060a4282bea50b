//! Re-exports of the most commonly used items in `route_core`.
pub use crate::planner::{PlannerParams, Route, RoutePlanner};
pub use crate::weights::WeightPreferences;

pub use crate::search;

pub use crate::graph::node_index;
pub use crate::graph::DuplicateEdgePolicy;
pub use crate::graph::Graph;
pub use crate::graph_builder::{GraphBuilder, NamePolicy};
pub use crate::render::render_route;

pub use route_reader::{read_routes, RouteRecord};

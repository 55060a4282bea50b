//! Crate to plan the cheapest route between cities.
//!
//! Every route of a route table is weighted by a blend of its normalized
//! ticket price and distance. The cheapest route is then found with
//! Dijkstra's algorithm on the resulting undirected graph.
//!
//! # Basic usage
//! ```no_run
//! use route_core::prelude::*;
//! use std::path::Path;
//!
//! // Read the route table
//! let records = read_routes(Path::new("path/to/routes.csv")).expect("Failed to read routes");
//!
//! // Build the graph with the default weighting, starting at city 0
//! let planner = RoutePlanner::new(&records, PlannerParams::default()).expect("Invalid parameters");
//!
//! // Search
//! let route = planner.shortest_to(2);
//! println!("{}", planner.render(&route));
//!```
pub mod constants;
pub mod graph;
pub mod graph_builder;
pub mod planner;
pub mod prelude;
pub mod render;
pub mod search;
pub mod statistics;
pub mod util;
pub mod weights;

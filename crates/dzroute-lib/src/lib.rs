//! dzroute library entry points.
//!
//! This crate exposes helpers to fetch and cache the drivable road network of
//! an Algerian city, derive a catalog of place names for its intersections,
//! and compute shortest driving routes between two named places. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod overpass;
pub mod path;
pub mod routing;
pub mod store;

pub use catalog::PlaceCatalog;
pub use dataset::{default_network_path, ensure_city_network};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph};
pub use network::{NodeId, NodePosition, RoadNetwork, RoadNode, Segment};
pub use output::{RouteOutputKind, RouteRenderMode, RouteSummary};
pub use overpass::{fetch_drive_network, fetch_drive_network_from_source};
pub use path::{find_route_a_star, find_route_dijkstra};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
pub use store::{load_network, save_network};

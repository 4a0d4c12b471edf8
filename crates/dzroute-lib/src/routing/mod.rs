//! Route planning between named places of a road network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Algorithms are encapsulated behind the [`RoutePlanner`] trait so new
//! strategies can be added without modifying the orchestration logic.

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;

use crate::catalog::PlaceCatalog;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::network::{NodeId, RoadNetwork};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (weighted graph).
    Dijkstra,
    /// A* search guided by straight-line distance.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request using the default algorithm.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::default(),
        }
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    /// Total driving distance in meters.
    pub total_length: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Resolves both place names through the catalog, handles the trivial
/// same-place case, and otherwise runs the selected shortest-path search on a
/// graph derived from the network. A start and goal in disconnected
/// components fail with [`Error::RouteNotFound`].
pub fn plan_route(
    network: &RoadNetwork,
    catalog: &PlaceCatalog,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let start_id = catalog.resolve(&request.start)?;
    let goal_id = catalog.resolve(&request.goal)?;

    if start_id == goal_id {
        return Ok(RoutePlan {
            algorithm: request.algorithm,
            start: start_id,
            goal: goal_id,
            steps: vec![start_id],
            total_length: 0.0,
        });
    }

    let graph = build_graph(network);
    let planner = select_planner(request);
    let steps = planner
        .find_path(&graph, Some(network), start_id, goal_id)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    let total_length = route_length(&graph, &steps);

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start_id,
        goal: goal_id,
        steps,
        total_length,
    })
}

/// Sum the per-hop minimum edge lengths along a route.
fn route_length(graph: &Graph, steps: &[NodeId]) -> f64 {
    steps
        .windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .filter(|edge| edge.target == pair[1])
                .map(|edge| edge.length)
                .fold(f64::INFINITY, f64::min)
        })
        .filter(|length| length.is_finite())
        .sum()
}

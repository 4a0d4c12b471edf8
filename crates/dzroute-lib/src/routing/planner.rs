//! Route planning strategies.
//!
//! Each pathfinding algorithm is encapsulated in its own planner struct so
//! the `plan_route` orchestrator stays free of algorithm-specific branching.

use crate::graph::Graph;
use crate::network::{NodeId, RoadNetwork};
use crate::path::{find_route_a_star, find_route_dijkstra};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        network: Option<&RoadNetwork>,
        start: NodeId,
        goal: NodeId,
    ) -> Option<Vec<NodeId>>;

    /// Whether this planner uses node positions when they are available.
    fn uses_positions(&self) -> bool {
        false
    }
}

/// Dijkstra's algorithm planner for weighted traversal without a heuristic.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        _network: Option<&RoadNetwork>,
        start: NodeId,
        goal: NodeId,
    ) -> Option<Vec<NodeId>> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner using straight-line distance between node positions as an
/// admissible heuristic. Falls back to a zero heuristic when positions are
/// missing.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        network: Option<&RoadNetwork>,
        start: NodeId,
        goal: NodeId,
    ) -> Option<Vec<NodeId>> {
        find_route_a_star(graph, network, start, goal)
    }

    fn uses_positions(&self) -> bool {
        true
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_planner_returns_correct_algorithm() {
        let planner = DijkstraPlanner;
        assert_eq!(planner.algorithm(), RouteAlgorithm::Dijkstra);
        assert!(!planner.uses_positions());
    }

    #[test]
    fn a_star_planner_returns_correct_algorithm() {
        let planner = AStarPlanner;
        assert_eq!(planner.algorithm(), RouteAlgorithm::AStar);
        assert!(planner.uses_positions());
    }

    #[test]
    fn select_planner_chooses_requested_type() {
        let request = RouteRequest::dijkstra("A", "B");
        let planner = select_planner(&request);
        assert_eq!(planner.algorithm(), RouteAlgorithm::Dijkstra);
    }
}

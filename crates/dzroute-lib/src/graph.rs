use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::network::{NodeId, RoadNetwork};

/// Directed edge within the routing graph.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: NodeId,
    pub length: f64,
}

/// Graph structure used by the pathfinding algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Return the outgoing edges for a given node identifier.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build the routing graph for a loaded road network.
///
/// Segments referencing nodes that are not part of the network are dropped so
/// corrupt provider data cannot leak dangling edges into a search.
pub fn build_graph(network: &RoadNetwork) -> Graph {
    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::with_capacity(network.nodes.len());
    let mut skipped = 0usize;

    for (&node_id, segments) in network.segments.iter() {
        if !network.nodes.contains_key(&node_id) {
            skipped += segments.len();
            continue;
        }

        let mut edges = Vec::with_capacity(segments.len());
        for segment in segments {
            if !network.nodes.contains_key(&segment.target) {
                skipped += 1;
                continue;
            }
            edges.push(Edge {
                target: segment.target,
                length: segment.length,
            });
        }
        edges.sort_by(|a, b| a.target.cmp(&b.target).then(a.length.total_cmp(&b.length)));
        adjacency.insert(node_id, edges);
    }

    for &node_id in network.nodes.keys() {
        adjacency.entry(node_id).or_default();
    }

    if skipped > 0 {
        warn!(skipped, "ignored road segments referencing unknown nodes");
    }

    Graph {
        adjacency: Arc::new(adjacency),
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use dzroute_lib::{build_graph, NodeId, RoadNetwork, RoadNode, Segment};

fn node(id: NodeId) -> RoadNode {
    RoadNode {
        id,
        name: None,
        position: None,
    }
}

fn fixture_network() -> RoadNetwork {
    let mut nodes = HashMap::new();
    for id in [1, 2, 3] {
        nodes.insert(id, node(id));
    }

    let mut segments: HashMap<NodeId, Vec<Segment>> = HashMap::new();
    segments.insert(
        1,
        vec![
            Segment { target: 3, length: 30.0 },
            Segment { target: 2, length: 20.0 },
        ],
    );
    segments.insert(2, vec![Segment { target: 1, length: 20.0 }]);
    segments.insert(3, Vec::new());

    RoadNetwork {
        nodes,
        segments: Arc::new(segments),
    }
}

#[test]
fn graph_mirrors_network_segments() {
    let network = fixture_network();
    let graph = build_graph(&network);

    let edges: Vec<_> = graph
        .neighbours(1)
        .iter()
        .map(|edge| (edge.target, edge.length))
        .collect();
    assert_eq!(edges, vec![(2, 20.0), (3, 30.0)], "edges sorted by target");
}

#[test]
fn segments_to_missing_nodes_are_dropped() {
    let mut network = fixture_network();
    let mut segments = (*network.segments).clone();
    segments.entry(2).or_default().push(Segment { target: 99, length: 5.0 });
    network.segments = Arc::new(segments);

    let graph = build_graph(&network);
    let targets: Vec<_> = graph.neighbours(2).iter().map(|edge| edge.target).collect();
    assert_eq!(targets, vec![1], "dangling segment is not an edge");
}

#[test]
fn every_node_gets_an_adjacency_entry() {
    let network = fixture_network();
    let graph = build_graph(&network);
    assert!(graph.neighbours(3).is_empty());
}

#[test]
fn unknown_node_has_no_neighbours() {
    let network = fixture_network();
    let graph = build_graph(&network);
    assert!(graph.neighbours(42).is_empty());
}

use std::collections::HashMap;
use std::sync::Arc;

use dzroute_lib::{Error, NodeId, PlaceCatalog, RoadNetwork, RoadNode};

fn network_with_nodes(nodes: Vec<(NodeId, Option<&str>)>) -> RoadNetwork {
    let nodes: HashMap<NodeId, RoadNode> = nodes
        .into_iter()
        .map(|(id, name)| {
            (
                id,
                RoadNode {
                    id,
                    name: name.map(str::to_string),
                    position: None,
                },
            )
        })
        .collect();

    RoadNetwork {
        nodes,
        segments: Arc::new(HashMap::new()),
    }
}

#[test]
fn synthesizes_labels_for_unnamed_nodes() {
    let network = network_with_nodes(vec![(7, None), (12, Some("Rue Didouche Mourad"))]);
    let catalog = PlaceCatalog::build(&network);

    assert_eq!(catalog.display_name(7), Some("Unnamed Node 7"));
    assert_eq!(catalog.display_name(12), Some("Rue Didouche Mourad"));
    assert_eq!(catalog.resolve("Unnamed Node 7").expect("resolves"), 7);
}

#[test]
fn duplicate_names_resolve_to_lowest_id() {
    let network = network_with_nodes(vec![
        (9, Some("Place des Martyrs")),
        (3, Some("Place des Martyrs")),
        (5, Some("Place des Martyrs")),
    ]);
    let catalog = PlaceCatalog::build(&network);

    assert_eq!(catalog.resolve("Place des Martyrs").expect("resolves"), 3);
    assert_eq!(catalog.len(), 3, "every node keeps its own entry");
}

#[test]
fn blank_input_fails_to_resolve() {
    let network = network_with_nodes(vec![(1, Some("Kasbah"))]);
    let catalog = PlaceCatalog::build(&network);

    for input in ["", "   ", "\t"] {
        let error = catalog.resolve(input).expect_err("blank input");
        assert!(matches!(error, Error::PlaceNotFound { .. }));
    }
}

#[test]
fn close_names_are_suggested() {
    let network = network_with_nodes(vec![
        (1, Some("Rue Didouche Mourad")),
        (2, Some("Boulevard Zighout Youcef")),
    ]);
    let catalog = PlaceCatalog::build(&network);

    let error = catalog
        .resolve("Rue Didouche Mourid")
        .expect_err("misspelled name");
    match error {
        Error::PlaceNotFound { suggestions, .. } => {
            assert!(suggestions.contains(&"Rue Didouche Mourad".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unrelated_names_get_no_suggestions() {
    let network = network_with_nodes(vec![(1, Some("Kasbah"))]);
    let catalog = PlaceCatalog::build(&network);

    let error = catalog.resolve("zzzzzzzz").expect_err("unknown name");
    match error {
        Error::PlaceNotFound { suggestions, .. } => assert!(suggestions.is_empty()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn names_are_sorted_for_listing() {
    let network = network_with_nodes(vec![
        (1, Some("Telemly")),
        (2, Some("Bab El Oued")),
        (3, Some("Hydra")),
    ]);
    let catalog = PlaceCatalog::build(&network);

    assert_eq!(catalog.names(), vec!["Bab El Oued", "Hydra", "Telemly"]);
}

#[test]
fn empty_network_yields_empty_catalog() {
    let network = network_with_nodes(Vec::new());
    let catalog = PlaceCatalog::build(&network);
    assert!(catalog.is_empty());
    assert!(catalog.names().is_empty());
}

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use assert_cmd::Command;
use predicates::prelude::*;

use dzroute_lib::{save_network, NodeId, RoadNetwork, RoadNode, Segment};
use tempfile::tempdir;

fn dzroute() -> Command {
    Command::cargo_bin("dzroute").expect("binary builds")
}

fn named_node(id: NodeId, name: &str) -> RoadNode {
    RoadNode {
        id,
        name: Some(name.to_string()),
        position: None,
    }
}

fn link(segments: &mut HashMap<NodeId, Vec<Segment>>, a: NodeId, b: NodeId, length: f64) {
    segments.entry(a).or_default().push(Segment { target: b, length });
    segments.entry(b).or_default().push(Segment { target: a, length });
}

/// Seed the cached database a city command would otherwise download.
fn seed_fixture(path: &Path) {
    let mut nodes = HashMap::new();
    nodes.insert(1, named_node(1, "Kasbah"));
    nodes.insert(2, named_node(2, "Place des Martyrs"));
    nodes.insert(3, named_node(3, "Bab El Oued"));
    nodes.insert(4, named_node(4, "Telemly"));

    let mut segments = HashMap::new();
    link(&mut segments, 1, 2, 400.0);
    link(&mut segments, 2, 3, 600.0);
    link(&mut segments, 1, 4, 2500.0);
    link(&mut segments, 4, 3, 800.0);

    let network = RoadNetwork {
        nodes,
        segments: Arc::new(segments),
    };
    save_network(path, &network).expect("fixture saves");
}

#[test]
fn route_uses_cached_database() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args(["route", "--city", "Alger", "--from", "Kasbah", "--to", "Bab El Oued"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Kasbah -> Bab El Oued (2 hops, 1000 m, algorithm: a-star)",
        ))
        .stdout(predicate::str::contains("Place des Martyrs"));
}

#[test]
fn dijkstra_algorithm_can_be_selected() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args([
            "route",
            "--city",
            "Alger",
            "--from",
            "Kasbah",
            "--to",
            "Bab El Oued",
            "--algorithm",
            "dijkstra",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dijkstra"));
}

#[test]
fn json_route_is_serialized() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args([
            "route", "--city", "Alger", "--from", "Kasbah", "--to", "Telemly", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"a-star\""))
        .stdout(predicate::str::contains("\"name\": \"Telemly\""));
}

#[test]
fn unknown_place_suggests_alternatives() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args(["route", "--city", "Alger", "--from", "Kasbahh", "--to", "Telemly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown place name: Kasbahh"))
        .stderr(predicate::str::contains("Kasbah"));
}

#[test]
fn places_lists_catalog_names() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args(["places", "--city", "Alger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bab El Oued"))
        .stdout(predicate::str::contains("Telemly"));
}

#[test]
fn places_filter_narrows_output() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args(["places", "--city", "Alger", "--contains", "bab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bab El Oued"))
        .stdout(predicate::str::contains("Kasbah").not());
}

#[test]
fn download_reports_cached_location() {
    let dir = tempdir().expect("tempdir");
    let db = dir.path().join("alger.db");
    seed_fixture(&db);

    dzroute()
        .arg("--data-dir")
        .arg(&db)
        .args(["download", "--city", "Alger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Road network available at"));
}

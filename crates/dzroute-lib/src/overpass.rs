use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::network::{NodeId, NodePosition, RoadNetwork, RoadNode, Segment};

const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
const ENDPOINT_ENV: &str = "DZROUTE_OVERPASS_URL";
const SOURCE_ENV: &str = "DZROUTE_NETWORK_SOURCE";
const QUERY_TIMEOUT: Duration = Duration::from_secs(180);

/// Highway classes that make up the drivable road network.
const DRIVE_HIGHWAY_FILTER: &str = "motorway|motorway_link|trunk|trunk_link|primary|primary_link|\
                                    secondary|secondary_link|tertiary|tertiary_link|unclassified|\
                                    residential|living_street";

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: NodeId,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    Way {
        nodes: Vec<NodeId>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    #[serde(other)]
    Other,
}

/// Direction of travel permitted along a way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnewayDirection {
    Both,
    Forward,
    Reverse,
}

impl OnewayDirection {
    fn from_tags(tags: &HashMap<String, String>) -> Self {
        match tags.get("oneway").map(String::as_str) {
            Some("yes") | Some("true") | Some("1") => Self::Forward,
            Some("-1") | Some("reverse") => Self::Reverse,
            _ => Self::Both,
        }
    }
}

/// Fetch the drivable road network for an Algerian city.
///
/// The query is answered by the Overpass API unless the
/// `DZROUTE_NETWORK_SOURCE` environment variable points at a local
/// Overpass-JSON file, which tests and offline runs use instead. Provider
/// failures surface as errors and are never retried here.
pub fn fetch_drive_network(city: &str) -> Result<RoadNetwork> {
    match env::var(SOURCE_ENV) {
        Ok(source) => fetch_drive_network_from_source(city, Path::new(&source)),
        Err(_) => {
            let payload = query_overpass(city)?;
            parse_drive_network(city, &payload)
        }
    }
}

/// Fetch the road network from a local Overpass-JSON file instead of the
/// live API. Used by tests to avoid network access.
pub fn fetch_drive_network_from_source(city: &str, source: &Path) -> Result<RoadNetwork> {
    info!(source = %source.display(), city, "loading road network from local override");
    let payload = fs::read_to_string(source)?;
    parse_drive_network(city, &payload)
}

fn query_overpass(city: &str) -> Result<String> {
    let endpoint = env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let query = drive_network_query(city);
    debug!(%endpoint, city, "querying overpass for the drive network");

    let client = Client::builder()
        .timeout(QUERY_TIMEOUT)
        .user_agent(concat!("dzroute/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .post(&endpoint)
        .form(&[("data", query)])
        .send()?
        .error_for_status()?;

    Ok(response.text()?)
}

/// Overpass QL query selecting drivable ways inside the administrative area
/// of the city, plus the nodes they reference.
fn drive_network_query(city: &str) -> String {
    let place = city.replace('"', "\\\"");
    format!(
        r#"[out:json][timeout:180];
area["name"="{place}, Algeria"]["boundary"="administrative"]->.city;
way(area.city)["highway"~"^({DRIVE_HIGHWAY_FILTER})$"]["area"!~"yes"];
(._;>;);
out body;"#
    )
}

fn parse_drive_network(city: &str, payload: &str) -> Result<RoadNetwork> {
    let response: OverpassResponse = serde_json::from_str(payload)?;
    build_network(city, response)
}

fn build_network(city: &str, response: OverpassResponse) -> Result<RoadNetwork> {
    let mut nodes: HashMap<NodeId, RoadNode> = HashMap::new();
    let mut ways: Vec<(Vec<NodeId>, HashMap<String, String>)> = Vec::new();

    for element in response.elements {
        match element {
            OverpassElement::Node { id, lat, lon, tags } => {
                nodes.insert(
                    id,
                    RoadNode {
                        id,
                        name: tags.get("name").cloned(),
                        position: Some(NodePosition { lat, lon }),
                    },
                );
            }
            OverpassElement::Way {
                nodes: way_nodes,
                tags,
            } => ways.push((way_nodes, tags)),
            OverpassElement::Other => {}
        }
    }

    if nodes.is_empty() || ways.is_empty() {
        return Err(Error::DatasetUnavailable {
            place: city.to_string(),
            message: "overpass returned no drivable ways for this place".to_string(),
        });
    }

    let mut segments: HashMap<NodeId, Vec<Segment>> = HashMap::new();
    let mut dangling = 0usize;
    for (way_nodes, tags) in ways {
        let direction = OnewayDirection::from_tags(&tags);
        for pair in way_nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(a), Some(b)) = (nodes.get(&from), nodes.get(&to)) else {
                dangling += 1;
                continue;
            };
            let (Some(position_a), Some(position_b)) = (a.position, b.position) else {
                dangling += 1;
                continue;
            };

            let length = position_a.distance_to(&position_b);
            match direction {
                OnewayDirection::Forward => {
                    segments.entry(from).or_default().push(Segment { target: to, length });
                }
                OnewayDirection::Reverse => {
                    segments.entry(to).or_default().push(Segment { target: from, length });
                }
                OnewayDirection::Both => {
                    segments.entry(from).or_default().push(Segment { target: to, length });
                    segments.entry(to).or_default().push(Segment { target: from, length });
                }
            }
        }
    }

    for &id in nodes.keys() {
        segments.entry(id).or_default();
    }

    if dangling > 0 {
        warn!(dangling, "ignored way segments referencing missing nodes");
    }
    info!(
        city,
        nodes = nodes.len(),
        segments = segments.values().map(Vec::len).sum::<usize>(),
        "road network assembled"
    );

    Ok(RoadNetwork {
        nodes,
        segments: Arc::new(segments),
    })
}

use std::collections::HashMap;
use std::sync::Arc;

/// Numeric identifier for a road network node. Matches the 64-bit signed
/// identifiers used by OpenStreetMap nodes.
pub type NodeId = i64;

/// Mean Earth radius used for great-circle distances, in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic coordinates for a road network node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub lat: f64,
    pub lon: f64,
}

impl NodePosition {
    /// Haversine great-circle distance to another position in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Intersection or way point of the road network.
///
/// Most road nodes carry no `name` tag; the place catalog synthesizes a
/// display label for those.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub position: Option<NodePosition>,
}

/// Directed road segment leaving a node, with its length in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub target: NodeId,
    pub length: f64,
}

/// In-memory representation of a city's drivable road network.
///
/// Networks are immutable for the duration of a query and are rebuilt when a
/// different city is selected. Segment storage is shared so routing graphs
/// derived from the network clone cheaply.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub nodes: HashMap<NodeId, RoadNode>,
    pub segments: Arc<HashMap<NodeId, Vec<Segment>>>,
}

impl RoadNetwork {
    /// Lookup a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&RoadNode> {
        self.nodes.get(&id)
    }

    /// Number of nodes in the network.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed segments in the network.
    pub fn segment_count(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }
}

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::network::{NodeId, RoadNetwork};

/// Minimum Jaro-Winkler similarity before a name is offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.84;

/// Maximum number of suggestions attached to a resolution failure.
const MAX_SUGGESTIONS: usize = 3;

/// Bidirectional lookup between node identifiers and display names.
///
/// Every node of the source network has exactly one entry. Nodes without a
/// name tag receive the synthesized label `Unnamed Node {id}`. When several
/// nodes share a display name, the name resolves to the lowest node id.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    names: HashMap<NodeId, String>,
    ids: HashMap<String, NodeId>,
}

impl PlaceCatalog {
    /// Derive a catalog from a road network.
    pub fn build(network: &RoadNetwork) -> Self {
        let mut ordered: Vec<NodeId> = network.nodes.keys().copied().collect();
        ordered.sort_unstable();

        let mut names = HashMap::with_capacity(ordered.len());
        let mut ids = HashMap::with_capacity(ordered.len());
        for id in ordered {
            let name = network.nodes[&id]
                .name
                .clone()
                .unwrap_or_else(|| format!("Unnamed Node {id}"));
            // Ascending id order, so duplicates are claimed by the lowest id.
            ids.entry(name.clone()).or_insert(id);
            names.insert(id, name);
        }

        Self { names, ids }
    }

    /// Resolve a display name to a node identifier.
    ///
    /// Blank input and unknown names fail with [`Error::PlaceNotFound`]; the
    /// latter carries up to three close names as suggestions.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::PlaceNotFound {
                name: name.to_string(),
                suggestions: Vec::new(),
            });
        }

        self.ids
            .get(trimmed)
            .copied()
            .ok_or_else(|| Error::PlaceNotFound {
                name: trimmed.to_string(),
                suggestions: self.suggestions(trimmed, MAX_SUGGESTIONS),
            })
    }

    /// Display name for a node identifier.
    pub fn display_name(&self, id: NodeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// All resolvable display names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self.ids.keys().map(String::as_str).collect();
        all.sort_unstable();
        all
    }

    /// Number of catalogued nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rank catalogued names by similarity to `name` and keep the closest.
    fn suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .ids
            .keys()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.truncate(limit);
        scored
            .into_iter()
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rusqlite::{params, Connection};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::{NodeId, NodePosition, RoadNetwork, RoadNode, Segment};

const NODES_TABLE: &str = "Nodes";
const SEGMENTS_TABLE: &str = "Segments";

/// Persist a road network into a SQLite database at `path`.
///
/// Any previously stored network in the same database is replaced.
pub fn save_network(path: &Path, network: &RoadNetwork) -> Result<()> {
    let mut connection = Connection::open(path)?;
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS Nodes (
             nodeId INTEGER PRIMARY KEY,
             name TEXT,
             lat REAL,
             lon REAL
         );
         CREATE TABLE IF NOT EXISTS Segments (
             fromNodeId INTEGER NOT NULL,
             toNodeId INTEGER NOT NULL,
             length REAL NOT NULL
         );
         DELETE FROM Nodes;
         DELETE FROM Segments;",
    )?;

    let tx = connection.transaction()?;
    {
        let mut insert_node =
            tx.prepare("INSERT INTO Nodes (nodeId, name, lat, lon) VALUES (?1, ?2, ?3, ?4)")?;
        for node in network.nodes.values() {
            insert_node.execute(params![
                node.id,
                node.name,
                node.position.map(|position| position.lat),
                node.position.map(|position| position.lon),
            ])?;
        }

        let mut insert_segment = tx
            .prepare("INSERT INTO Segments (fromNodeId, toNodeId, length) VALUES (?1, ?2, ?3)")?;
        for (&from, segments) in network.segments.iter() {
            for segment in segments {
                insert_segment.execute(params![from, segment.target, segment.length])?;
            }
        }
    }
    tx.commit()?;

    Ok(())
}

/// Load a cached road network from a SQLite database.
///
/// The loader validates the schema before reading and verifies that segment
/// endpoints exist in the node table, so a corrupt cache cannot propagate
/// dangling edges into the in-memory network.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let connection = Connection::open(path)?;
    validate_schema(&connection)?;
    debug!(path = %path.display(), "loading road network");

    let mut stmt = connection.prepare("SELECT nodeId, name, lat, lon FROM Nodes")?;
    let rows = stmt.query_map([], |row| {
        let position = match (
            row.get::<_, Option<f64>>(2)?,
            row.get::<_, Option<f64>>(3)?,
        ) {
            (Some(lat), Some(lon)) => Some(NodePosition { lat, lon }),
            _ => None,
        };
        Ok(RoadNode {
            id: row.get(0)?,
            name: row.get(1)?,
            position,
        })
    })?;

    let mut nodes = HashMap::new();
    for entry in rows {
        let node = entry?;
        nodes.insert(node.id, node);
    }

    let mut stmt = connection.prepare("SELECT fromNodeId, toNodeId, length FROM Segments")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut segments: HashMap<NodeId, Vec<Segment>> = HashMap::new();
    let mut skipped = 0usize;
    for entry in rows {
        let (from, to, length): (NodeId, NodeId, f64) = entry?;
        if !nodes.contains_key(&from) || !nodes.contains_key(&to) {
            skipped += 1;
            continue;
        }
        segments.entry(from).or_default().push(Segment { target: to, length });
    }

    for &id in nodes.keys() {
        segments.entry(id).or_default();
    }

    if skipped > 0 {
        warn!(skipped, "ignored segments referencing unknown nodes");
    }

    Ok(RoadNetwork {
        nodes,
        segments: Arc::new(segments),
    })
}

fn validate_schema(connection: &Connection) -> Result<()> {
    if !table_exists(connection, NODES_TABLE)? || !table_exists(connection, SEGMENTS_TABLE)? {
        return Err(Error::UnsupportedSchema);
    }
    if !table_has_columns(connection, NODES_TABLE, &["nodeId", "name", "lat", "lon"])? {
        return Err(Error::UnsupportedSchema);
    }
    if !table_has_columns(
        connection,
        SEGMENTS_TABLE,
        &["fromNodeId", "toNodeId", "length"],
    )? {
        return Err(Error::UnsupportedSchema);
    }
    Ok(())
}

fn table_exists(connection: &Connection, table: &str) -> Result<bool> {
    let mut stmt = connection
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}

fn table_has_columns(connection: &Connection, table: &str, required: &[&str]) -> Result<bool> {
    let pragma = format!("PRAGMA table_info('{table}')");
    let mut stmt = connection.prepare(&pragma)?;
    let mut rows = stmt.query([])?;

    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        columns.push(name);
    }

    Ok(required.iter().all(|required| {
        columns
            .iter()
            .any(|column| column.eq_ignore_ascii_case(required))
    }))
}

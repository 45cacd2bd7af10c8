//! Static catalog of sources, destinations, connections, and fan-outs.
//!
//! Catalog entries are created once at startup and never mutated; the
//! catalog is shared across the application as `Arc<Catalog>` and needs
//! no synchronization.

use serde::{Deserialize, Serialize};

/// A system data can be synced from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// A system data can be synced to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// A one-to-one link between a source and a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub source_id: String,
    pub destination_id: String,
    pub status: String,
}

/// An intentional one-to-many routing policy: one source, an ordered
/// list of destinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fanout {
    pub id: String,
    pub source_id: String,
    pub destination_ids: Vec<String>,
    pub status: String,
}

/// Immutable reference data the resolution policy works against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sources: Vec<Source>,
    destinations: Vec<Destination>,
    connections: Vec<Connection>,
    fanouts: Vec<Fanout>,
}

impl Catalog {
    pub fn new(
        sources: Vec<Source>,
        destinations: Vec<Destination>,
        connections: Vec<Connection>,
        fanouts: Vec<Fanout>,
    ) -> Self {
        Self {
            sources,
            destinations,
            connections,
            fanouts,
        }
    }

    /// The built-in demo catalog served when no external data is wired up.
    pub fn seed() -> Self {
        Self::new(
            vec![
                Source {
                    id: "src-1".into(),
                    name: "Postgres".into(),
                    status: "ready".into(),
                },
                Source {
                    id: "src-2".into(),
                    name: "Stripe".into(),
                    status: "ready".into(),
                },
            ],
            vec![
                Destination {
                    id: "dst-1".into(),
                    name: "BigQuery".into(),
                    status: "ready".into(),
                },
                Destination {
                    id: "dst-2".into(),
                    name: "Snowflake".into(),
                    status: "ready".into(),
                },
            ],
            vec![
                Connection {
                    id: "con-1".into(),
                    source_id: "src-1".into(),
                    destination_id: "dst-1".into(),
                    status: "scheduled".into(),
                },
                Connection {
                    id: "con-2".into(),
                    source_id: "src-2".into(),
                    destination_id: "dst-2".into(),
                    status: "running".into(),
                },
            ],
            vec![
                Fanout {
                    id: "fan-1".into(),
                    source_id: "src-1".into(),
                    destination_ids: vec!["dst-1".into(), "dst-2".into()],
                    status: "ready".into(),
                },
                Fanout {
                    id: "fan-2".into(),
                    source_id: "src-2".into(),
                    destination_ids: vec!["dst-2".into()],
                    status: "ready".into(),
                },
            ],
        )
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn fanouts(&self) -> &[Fanout] {
        &self.fanouts
    }
}

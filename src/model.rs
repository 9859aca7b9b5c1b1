//! Wire types for the cross-cluster WAL-replication topology.
//!
//! These mirror the shape the surrounding system already serializes on the
//! wire (see the crate-level docs); field names and optionality are load
//! bearing and must not change independently of that format.

use serde::{Deserialize, Serialize};

/// Connection details for a single cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParam {
    /// Absolute request URI, e.g. `http://localhost:19530`.
    pub uri: String,
    /// Opaque authentication token; never interpreted by the validator.
    #[serde(default)]
    pub token: String,
}

/// A single participant cluster in the replication topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub cluster_id: String,
    #[serde(default)]
    pub connection_param: Option<ConnectionParam>,
    #[serde(default)]
    pub pchannels: Vec<String>,
}

/// A directed replication relationship from `source_cluster_id` to `target_cluster_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossClusterEdge {
    pub source_cluster_id: String,
    pub target_cluster_id: String,
}

/// A full replication topology: the declared clusters plus the directed edges between them.
///
/// Slots are `Option`-wrapped because the wire format allows a `null` entry inside either
/// array (a degenerate/partially-constructed topology handed down from an upstream bug);
/// the validator treats such a slot as its own distinct failure rather than panicking on it.
/// Unknown fields are tolerated on deserialize so this type round-trips forward-compatibly
/// with newer producers of the same wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicateConfiguration {
    #[serde(default)]
    pub clusters: Vec<Option<Cluster>>,
    #[serde(default)]
    pub cross_cluster_topology: Vec<Option<CrossClusterEdge>>,
}

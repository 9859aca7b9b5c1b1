//! Shared builders for the scenario and property suites.

use crate::model::{Cluster, ConnectionParam, CrossClusterEdge, ReplicateConfiguration};

pub(crate) fn cluster(id: &str, uri: &str, token: &str, pchannels: &[&str]) -> Option<Cluster> {
    Some(Cluster {
        cluster_id: id.to_owned(),
        connection_param: Some(ConnectionParam {
            uri: uri.to_owned(),
            token: token.to_owned(),
        }),
        pchannels: pchannels.iter().map(|s| s.to_string()).collect(),
    })
}

pub(crate) fn edge(source: &str, target: &str) -> Option<CrossClusterEdge> {
    Some(CrossClusterEdge {
        source_cluster_id: source.to_owned(),
        target_cluster_id: target.to_owned(),
    })
}

pub(crate) fn config(
    clusters: Vec<Option<Cluster>>,
    edges: Vec<Option<CrossClusterEdge>>,
) -> ReplicateConfiguration {
    ReplicateConfiguration {
        clusters,
        cross_cluster_topology: edges,
    }
}

pub(crate) fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

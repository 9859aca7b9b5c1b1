//! Cluster-basic check: structural sanity of every declared cluster, in isolation
//! and for mutual uniqueness, executed as a single pass over the incoming cluster list.

use std::collections::HashMap;

use super::Validator;
use crate::error::{Result, ValidationError};

const WHITESPACE_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

impl<'a> Validator<'a> {
    pub(crate) fn check_clusters_basic(&mut self) -> Result<()> {
        let mut uri_owners: HashMap<&str, &str> = HashMap::new();
        let mut expected_slot_count: Option<usize> = None;
        let mut first_cluster_id: Option<&str> = None;

        for (index, slot) in self.incoming.clusters.iter().enumerate() {
            let cluster = slot
                .as_ref()
                .ok_or_else(|| self.fail(ValidationError::NilCluster { index }))?;

            if cluster.cluster_id.is_empty() {
                return Err(self.fail(ValidationError::EmptyClusterId { index }));
            }
            if cluster.cluster_id.chars().any(|c| WHITESPACE_CHARS.contains(&c)) {
                return Err(self.fail(ValidationError::ClusterIdWhitespace {
                    index,
                    cluster_id: cluster.cluster_id.clone(),
                }));
            }

            let connection_param = cluster.connection_param.as_ref().ok_or_else(|| {
                self.fail(ValidationError::NilConnectionParam {
                    cluster_id: cluster.cluster_id.clone(),
                })
            })?;

            if connection_param.uri.is_empty() {
                return Err(self.fail(ValidationError::EmptyUri {
                    cluster_id: cluster.cluster_id.clone(),
                }));
            }
            url::Url::parse(&connection_param.uri).map_err(|source| {
                self.fail(ValidationError::InvalidUri {
                    cluster_id: cluster.cluster_id.clone(),
                    source: source.into(),
                })
            })?;

            if let Some(&owner) = uri_owners.get(connection_param.uri.as_str()) {
                return Err(self.fail(ValidationError::DuplicateUri {
                    uri: connection_param.uri.clone(),
                    first_cluster_id: owner.to_owned(),
                    second_cluster_id: cluster.cluster_id.clone(),
                }));
            }
            uri_owners.insert(connection_param.uri.as_str(), cluster.cluster_id.as_str());

            if cluster.pchannels.is_empty() {
                return Err(self.fail(ValidationError::EmptyPChannels {
                    cluster_id: cluster.cluster_id.clone(),
                }));
            }

            let mut seen_pchannels: HashMap<&str, ()> = HashMap::new();
            for (j, pchannel) in cluster.pchannels.iter().enumerate() {
                if pchannel.is_empty() {
                    return Err(self.fail(ValidationError::EmptyPChannel {
                        cluster_id: cluster.cluster_id.clone(),
                        index: j,
                    }));
                }
                if seen_pchannels.insert(pchannel.as_str(), ()).is_some() {
                    return Err(self.fail(ValidationError::DuplicatePChannel {
                        cluster_id: cluster.cluster_id.clone(),
                        pchannel: pchannel.clone(),
                    }));
                }
            }

            match expected_slot_count {
                None => {
                    expected_slot_count = Some(cluster.pchannels.len());
                    first_cluster_id = Some(cluster.cluster_id.as_str());
                }
                Some(expected) if expected != cluster.pchannels.len() => {
                    return Err(self.fail(ValidationError::InconsistentSlotCount {
                        cluster_id: cluster.cluster_id.clone(),
                        actual: cluster.pchannels.len(),
                        expected,
                        first_cluster_id: first_cluster_id.unwrap_or_default().to_owned(),
                    }));
                }
                Some(_) => {}
            }

            if self
                .cluster_index
                .insert(cluster.cluster_id.as_str(), cluster)
                .is_some()
            {
                return Err(self.fail(ValidationError::DuplicateClusterId {
                    cluster_id: cluster.cluster_id.clone(),
                }));
            }
        }

        self.slot_count = expected_slot_count.unwrap_or(0);
        Ok(())
    }
}

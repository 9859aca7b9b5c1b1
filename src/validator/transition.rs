//! Transition check: per-cluster consistency against a currently installed
//! configuration, followed by growth-mode tightening when slot counts increased.

use std::collections::HashMap;
use std::collections::HashSet;

use super::Validator;
use crate::error::{Result, ValidationError};
use crate::model::{Cluster, ReplicateConfiguration};

impl<'a> Validator<'a> {
    pub(crate) fn check_transition(&mut self, current: &'a ReplicateConfiguration) -> Result<()> {
        let current_index: HashMap<&str, &Cluster> = current
            .clusters
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|c| (c.cluster_id.as_str(), c))
            .collect();

        for (&cluster_id, incoming) in &self.cluster_index {
            let Some(&prior) = current_index.get(cluster_id) else {
                continue; // new member, permitted outside of growth-mode
            };

            if incoming.pchannels.len() < prior.pchannels.len() {
                return Err(self.fail(ValidationError::PChannelsDecreased {
                    cluster_id: cluster_id.to_owned(),
                }));
            }
            if incoming.pchannels[..prior.pchannels.len()] != prior.pchannels[..] {
                return Err(self.fail(ValidationError::PChannelPrefixAltered {
                    cluster_id: cluster_id.to_owned(),
                }));
            }
            if incoming.pchannels.len() > prior.pchannels.len() {
                self.growth_detected = true;
            }

            let (incoming_param, prior_param) =
                (incoming.connection_param.as_ref(), prior.connection_param.as_ref());
            let incoming_uri = incoming_param.map(|p| p.uri.as_str()).unwrap_or_default();
            let prior_uri = prior_param.map(|p| p.uri.as_str()).unwrap_or_default();
            if incoming_uri != prior_uri {
                return Err(self.fail(ValidationError::UriChanged {
                    cluster_id: cluster_id.to_owned(),
                }));
            }

            let incoming_token = incoming_param.map(|p| p.token.as_str()).unwrap_or_default();
            let prior_token = prior_param.map(|p| p.token.as_str()).unwrap_or_default();
            if incoming_token != prior_token {
                return Err(self.fail(ValidationError::TokenChanged {
                    cluster_id: cluster_id.to_owned(),
                }));
            }
        }

        if self.growth_detected {
            self.check_growth_mode(&current_index, current)?;
        }

        Ok(())
    }

    fn check_growth_mode(
        &self,
        current_index: &HashMap<&str, &Cluster>,
        current: &ReplicateConfiguration,
    ) -> Result<()> {
        if current_index.len() != self.cluster_index.len()
            || !current_index
                .keys()
                .all(|cluster_id| self.cluster_index.contains_key(cluster_id))
        {
            let mut current_ids: Vec<&str> = current_index.keys().copied().collect();
            current_ids.sort_unstable();
            let mut incoming_ids: Vec<&str> = self.cluster_index.keys().copied().collect();
            incoming_ids.sort_unstable();

            return Err(self.fail(ValidationError::GrowthClusterSetChanged {
                detail: format!("current={current_ids:?}, incoming={incoming_ids:?}"),
            }));
        }

        let current_edges: HashSet<(&str, &str)> = current
            .cross_cluster_topology
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|e| (e.source_cluster_id.as_str(), e.target_cluster_id.as_str()))
            .collect();

        let incoming_edges: Vec<(&str, &str)> = self
            .incoming
            .cross_cluster_topology
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|e| (e.source_cluster_id.as_str(), e.target_cluster_id.as_str()))
            .collect();

        let edges_match = incoming_edges.len() == current_edges.len()
            && incoming_edges.iter().all(|edge| current_edges.contains(edge));

        if !edges_match {
            return Err(self.fail(ValidationError::GrowthTopologyChanged {
                detail: format!(
                    "current edge count={}, incoming edge count={}",
                    current_edges.len(),
                    incoming_edges.len()
                ),
            }));
        }

        Ok(())
    }
}

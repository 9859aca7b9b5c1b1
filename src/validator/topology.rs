//! Topology-edge-uniqueness and topology-shape (star) checks.

use std::collections::{HashMap, HashSet};

use super::Validator;
use crate::error::{Result, ValidationError};

impl<'a> Validator<'a> {
    pub(crate) fn check_topology_edges(&mut self) -> Result<()> {
        let mut seen_edges: HashSet<(&str, &str)> = HashSet::new();

        for (index, slot) in self.incoming.cross_cluster_topology.iter().enumerate() {
            let edge = slot
                .as_ref()
                .ok_or_else(|| self.fail(ValidationError::NilEdge { index }))?;

            if !self.cluster_index.contains_key(edge.source_cluster_id.as_str()) {
                return Err(self.fail(ValidationError::UnknownSourceCluster {
                    index,
                    cluster_id: edge.source_cluster_id.clone(),
                }));
            }
            if !self.cluster_index.contains_key(edge.target_cluster_id.as_str()) {
                return Err(self.fail(ValidationError::UnknownTargetCluster {
                    index,
                    cluster_id: edge.target_cluster_id.clone(),
                }));
            }

            let key = (edge.source_cluster_id.as_str(), edge.target_cluster_id.as_str());
            if !seen_edges.insert(key) {
                return Err(self.fail(ValidationError::DuplicateEdge {
                    source: edge.source_cluster_id.clone(),
                    target: edge.target_cluster_id.clone(),
                }));
            }
        }

        Ok(())
    }

    pub(crate) fn check_topology_shape(&mut self) -> Result<()> {
        if self.incoming.cross_cluster_topology.is_empty() {
            return Ok(());
        }

        let mut in_degree: HashMap<&str, usize> = HashMap::new();
        let mut out_degree: HashMap<&str, usize> = HashMap::new();
        for &cluster_id in self.cluster_index.keys() {
            in_degree.insert(cluster_id, 0);
            out_degree.insert(cluster_id, 0);
        }

        for slot in &self.incoming.cross_cluster_topology {
            // Already validated non-nil and referencing known clusters by check_topology_edges.
            let edge = slot.as_ref().expect("edge slot validated nil-free");
            *out_degree.get_mut(edge.source_cluster_id.as_str()).unwrap() += 1;
            *in_degree.get_mut(edge.target_cluster_id.as_str()).unwrap() += 1;
        }

        let cluster_count = self.cluster_index.len();
        let mut center: Option<&str> = None;

        for &cluster_id in self.cluster_index.keys() {
            let out = out_degree[cluster_id];
            let ind = in_degree[cluster_id];
            if out == cluster_count - 1 && ind == 0 {
                if center.is_some() {
                    return Err(self.fail(ValidationError::MultipleCenterNodes));
                }
                center = Some(cluster_id);
            }
        }

        let center = center.ok_or_else(|| self.fail(ValidationError::NoCenterNode))?;

        for &cluster_id in self.cluster_index.keys() {
            if cluster_id == center {
                continue;
            }
            let out = out_degree[cluster_id];
            let ind = in_degree[cluster_id];
            if ind != 1 || out != 0 {
                return Err(self.fail(ValidationError::NotStarShaped {
                    cluster_id: cluster_id.to_owned(),
                    in_degree: ind,
                    out_degree: out,
                }));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Cluster, ConnectionParam, CrossClusterEdge, ReplicateConfiguration};
    use crate::validator::validate_configuration;
    use crate::ValidationError;

    fn cluster(id: &str, uri: &str) -> Option<Cluster> {
        Some(Cluster {
            cluster_id: id.to_owned(),
            connection_param: Some(ConnectionParam {
                uri: uri.to_owned(),
                token: "tok".to_owned(),
            }),
            pchannels: vec!["ch-1".to_owned()],
        })
    }

    fn edge(source: &str, target: &str) -> Option<CrossClusterEdge> {
        Some(CrossClusterEdge {
            source_cluster_id: source.to_owned(),
            target_cluster_id: target.to_owned(),
        })
    }

    #[test]
    fn star_of_three_succeeds() {
        let config = ReplicateConfiguration {
            clusters: vec![
                cluster("center", "http://localhost:19530"),
                cluster("leaf1", "http://localhost:19531"),
                cluster("leaf2", "http://localhost:19532"),
            ],
            cross_cluster_topology: vec![edge("center", "leaf1"), edge("center", "leaf2")],
        };
        let local = vec!["ch-1".to_owned()];
        let outcome = validate_configuration(Some(&config), None, "center", &local).unwrap();
        assert!(!outcome.growth_detected);
    }

    #[test]
    fn extra_leaf_to_leaf_edge_breaks_star() {
        let config = ReplicateConfiguration {
            clusters: vec![
                cluster("center", "http://localhost:19530"),
                cluster("leaf1", "http://localhost:19531"),
                cluster("leaf2", "http://localhost:19532"),
            ],
            cross_cluster_topology: vec![
                edge("center", "leaf1"),
                edge("center", "leaf2"),
                edge("leaf1", "leaf2"),
            ],
        };
        let local = vec!["ch-1".to_owned()];
        let err = validate_configuration(Some(&config), None, "center", &local).unwrap_err();
        assert!(err.to_string().contains("does not follow star topology pattern"));
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let config = ReplicateConfiguration {
            clusters: vec![
                cluster("c1", "http://localhost:19530"),
                cluster("c2", "http://localhost:19531"),
            ],
            cross_cluster_topology: vec![edge("c1", "c2"), edge("c1", "c2")],
        };
        let local = vec!["ch-1".to_owned()];
        let err = validate_configuration(Some(&config), None, "c1", &local).unwrap_err();
        assert_eq!(
            ValidationError::DuplicateEdge {
                source: "c1".to_owned(),
                target: "c2".to_owned()
            },
            err
        );
    }

    #[test]
    fn unknown_target_cluster_is_rejected() {
        let config = ReplicateConfiguration {
            clusters: vec![cluster("c1", "http://localhost:19530")],
            cross_cluster_topology: vec![edge("c1", "ghost")],
        };
        let local = vec!["ch-1".to_owned()];
        let err = validate_configuration(Some(&config), None, "c1", &local).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownTargetCluster { .. }));
    }

    #[test]
    fn empty_edge_list_with_multiple_clusters_succeeds() {
        let config = ReplicateConfiguration {
            clusters: vec![
                cluster("c1", "http://localhost:19530"),
                cluster("c2", "http://localhost:19531"),
            ],
            cross_cluster_topology: vec![],
        };
        let local = vec!["ch-1".to_owned()];
        let outcome = validate_configuration(Some(&config), None, "c1", &local).unwrap();
        assert!(!outcome.growth_detected);
    }

    #[test]
    fn no_center_node_is_rejected() {
        let config = ReplicateConfiguration {
            clusters: vec![
                cluster("c1", "http://localhost:19530"),
                cluster("c2", "http://localhost:19531"),
                cluster("c3", "http://localhost:19532"),
            ],
            cross_cluster_topology: vec![edge("c1", "c2"), edge("c2", "c3")],
        };
        let local = vec!["ch-1".to_owned()];
        let err = validate_configuration(Some(&config), None, "c1", &local).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NoCenterNode | ValidationError::NotStarShaped { .. }
        ));
    }
}

//! Admission-control validator for cross-cluster WAL-replication topologies.
//!
//! A [`Validator`] is constructed fresh for each call and carries only
//! derived state (the cluster index, the growth flag); it is never reused
//! or shared across calls. See the crate-level docs for the four-phase
//! pipeline this module implements.

mod basic;
mod multiset;
mod relevance;
mod topology;
mod transition;

use std::collections::HashMap;

use crate::error::{Result, ValidationError};
use crate::model::{Cluster, ReplicateConfiguration};

/// The observable result of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    /// Set when any cluster's pchannel list grew relative to `current`.
    pub growth_detected: bool,
}

/// One validation call's working state.
///
/// Holds borrows of its inputs plus the derived `cluster_index`; both are
/// discarded when the instance is dropped at the end of [`validate_configuration`].
pub(crate) struct Validator<'a> {
    incoming: &'a ReplicateConfiguration,
    current: Option<&'a ReplicateConfiguration>,
    local_cluster_id: &'a str,
    local_pchannels: &'a [String],
    cluster_index: HashMap<&'a str, &'a Cluster>,
    slot_count: usize,
    growth_detected: bool,
}

impl<'a> Validator<'a> {
    fn new(
        incoming: &'a ReplicateConfiguration,
        current: Option<&'a ReplicateConfiguration>,
        local_cluster_id: &'a str,
        local_pchannels: &'a [String],
    ) -> Self {
        Self {
            incoming,
            current,
            local_cluster_id,
            local_pchannels,
            cluster_index: HashMap::new(),
            slot_count: 0,
            growth_detected: false,
        }
    }

    fn run(mut self) -> Result<ValidationOutcome> {
        log::debug!(
            "validating configuration: {} clusters, {} edges",
            self.incoming.clusters.len(),
            self.incoming.cross_cluster_topology.len()
        );

        self.check_clusters_basic()?;
        self.check_relevance()?;
        self.check_topology_edges()?;
        self.check_topology_shape()?;

        if let Some(current) = self.current {
            self.check_transition(current)?;
        }

        Ok(ValidationOutcome {
            growth_detected: self.growth_detected,
        })
    }

    fn fail(&self, err: ValidationError) -> ValidationError {
        log::warn!("configuration rejected: {err}");
        err
    }
}

/// Validate a proposed [`ReplicateConfiguration`], optionally as a transition from a
/// currently installed one.
///
/// `incoming` being absent and `incoming.clusters` being empty are both rejected up
/// front; see the crate-level docs for the full phase ordering.
pub fn validate_configuration(
    incoming: Option<&ReplicateConfiguration>,
    current: Option<&ReplicateConfiguration>,
    local_cluster_id: &str,
    local_pchannels: &[String],
) -> Result<ValidationOutcome> {
    let incoming = incoming.ok_or(ValidationError::NilConfig)?;
    if incoming.clusters.is_empty() {
        return Err(ValidationError::EmptyClusterList);
    }

    Validator::new(incoming, current, local_cluster_id, local_pchannels).run()
}

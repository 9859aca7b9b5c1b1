/*!
replicate-config-validator is the admission-control gate for cross-cluster
WAL-replication topologies.

# Philosophy
* Pure, synchronous, no I/O: one call in, one result out
* Fail fast on the first violated invariant, never partially accept
* Bit-compatible wire shape with the surrounding system, forward-tolerant of new fields

# What it checks
The validator runs four phases in fixed order over one call:
1. **Cluster-basic**: every declared cluster is well-formed and mutually unique.
2. **Relevance**: the local cluster actually belongs to the proposed topology.
3. **Topology**: edges reference known clusters, are unique, and form a star.
4. **Transition** (only when a prior configuration is supplied): the incoming
   configuration is a legal evolution of the current one, with stricter rules
   once a channel-count increase ("growth") is detected.

# Basic usage

```
use replicate_config_validator::{
    model::{Cluster, ConnectionParam, CrossClusterEdge, ReplicateConfiguration},
    validate_configuration,
};

let config = ReplicateConfiguration {
    clusters: vec![
        Some(Cluster {
            cluster_id: "c1".to_owned(),
            connection_param: Some(ConnectionParam {
                uri: "http://localhost:19530".to_owned(),
                token: "".to_owned(),
            }),
            pchannels: vec!["ch-1".to_owned(), "ch-2".to_owned()],
        }),
        Some(Cluster {
            cluster_id: "c2".to_owned(),
            connection_param: Some(ConnectionParam {
                uri: "http://localhost:19531".to_owned(),
                token: "".to_owned(),
            }),
            pchannels: vec!["ch-1".to_owned(), "ch-2".to_owned()],
        }),
    ],
    cross_cluster_topology: vec![Some(CrossClusterEdge {
        source_cluster_id: "c1".to_owned(),
        target_cluster_id: "c2".to_owned(),
    })],
};

let local_pchannels = vec!["ch-1".to_owned(), "ch-2".to_owned()];
let outcome = validate_configuration(Some(&config), None, "c1", &local_pchannels)?;
assert!(!outcome.growth_detected);
# Ok::<(), replicate_config_validator::ValidationError>(())
```

# Modules
See [`model`] for the wire types this crate accepts and [`error`] for the
taxonomy of validation failures, each formatting to a stable, testable
substring.
*/

pub mod error;
pub mod model;
mod validator;

pub use error::{Result, ValidationError};
pub use validator::{validate_configuration, ValidationOutcome};

#[cfg(test)]
mod tests;

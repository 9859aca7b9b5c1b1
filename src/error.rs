//! Error type returned by the [`validator`](crate::validator) module.

use thiserror::Error;

/// All ways a [`ReplicateConfiguration`](crate::model::ReplicateConfiguration) can fail
/// admission, plus the inputs needed to reproduce the substrings asserted by callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("config cannot be nil")]
    NilConfig,

    #[error("clusters list cannot be empty")]
    EmptyClusterList,

    #[error("cluster at index {index} is nil")]
    NilCluster { index: usize },

    #[error("cluster at index {index} has empty clusterID")]
    EmptyClusterId { index: usize },

    #[error("cluster at index {index} has clusterID '{cluster_id}' containing whitespace characters")]
    ClusterIdWhitespace { index: usize, cluster_id: String },

    #[error("cluster '{cluster_id}' has nil connection_param")]
    NilConnectionParam { cluster_id: String },

    #[error("cluster '{cluster_id}' has empty URI")]
    EmptyUri { cluster_id: String },

    #[error("cluster '{cluster_id}' has invalid URI format: {source}")]
    InvalidUri {
        cluster_id: String,
        #[source]
        source: UrlParseErrorWrapper,
    },

    #[error(
        "duplicate URI found: {uri} used by both cluster '{first_cluster_id}' and cluster '{second_cluster_id}'"
    )]
    DuplicateUri {
        uri: String,
        first_cluster_id: String,
        second_cluster_id: String,
    },

    #[error("cluster '{cluster_id}' has empty pchannels")]
    EmptyPChannels { cluster_id: String },

    #[error("cluster '{cluster_id}' has empty pchannel at index {index}")]
    EmptyPChannel { cluster_id: String, index: usize },

    #[error("cluster '{cluster_id}' has duplicate pchannel '{pchannel}'")]
    DuplicatePChannel { cluster_id: String, pchannel: String },

    #[error(
        "cluster '{cluster_id}' has {actual} pchannels, but expected {expected} (same as cluster '{first_cluster_id}')"
    )]
    InconsistentSlotCount {
        cluster_id: String,
        actual: usize,
        expected: usize,
        first_cluster_id: String,
    },

    #[error("duplicate clusterID found: '{cluster_id}'")]
    DuplicateClusterId { cluster_id: String },

    #[error("current Milvus cluster '{local_cluster_id}' must be included in the clusters list")]
    LocalClusterNotDeclared { local_cluster_id: String },

    #[error(
        "local pchannels {local:?} do not match declared pchannels {declared:?} for cluster '{local_cluster_id}'"
    )]
    LocalPChannelsMismatch {
        local_cluster_id: String,
        local: Vec<String>,
        declared: Vec<String>,
    },

    #[error("topology at index {index} is nil")]
    NilEdge { index: usize },

    #[error("topology at index {index} references non-existent source cluster '{cluster_id}'")]
    UnknownSourceCluster { index: usize, cluster_id: String },

    #[error("topology at index {index} references non-existent target cluster '{cluster_id}'")]
    UnknownTargetCluster { index: usize, cluster_id: String },

    #[error("duplicate topology relationship found: '{source}→{target}'")]
    DuplicateEdge { source: String, target: String },

    #[error("no center node found")]
    NoCenterNode,

    #[error("multiple center nodes found")]
    MultipleCenterNodes,

    #[error(
        "cluster '{cluster_id}' does not follow star topology pattern (in-degree={in_degree}, out-degree={out_degree})"
    )]
    NotStarShaped {
        cluster_id: String,
        in_degree: usize,
        out_degree: usize,
    },

    #[error("cluster '{cluster_id}' pchannels cannot decrease")]
    PChannelsDecreased { cluster_id: String },

    #[error("cluster '{cluster_id}' existing pchannels must be preserved at the same positions")]
    PChannelPrefixAltered { cluster_id: String },

    #[error("cluster '{cluster_id}' connection_param.uri cannot be changed")]
    UriChanged { cluster_id: String },

    #[error("cluster '{cluster_id}' connection_param.token cannot be changed")]
    TokenChanged { cluster_id: String },

    #[error("when pchannels are increasing, cluster set must remain identical: {detail}")]
    GrowthClusterSetChanged { detail: String },

    #[error("when pchannels are increasing, topology must remain identical: {detail}")]
    GrowthTopologyChanged { detail: String },
}

/// `url::ParseError` does not implement `PartialEq`/`Eq`, which this crate's tests rely on
/// to compare errors by value; this wraps it down to its `Display` rendering so the outer
/// enum can still derive the standard traits.
#[derive(Debug, Clone)]
pub struct UrlParseErrorWrapper(pub String);

impl std::fmt::Display for UrlParseErrorWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UrlParseErrorWrapper {}

impl PartialEq for UrlParseErrorWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for UrlParseErrorWrapper {}

impl From<url::ParseError> for UrlParseErrorWrapper {
    fn from(e: url::ParseError) -> Self {
        UrlParseErrorWrapper(e.to_string())
    }
}

/// Crate-wide result alias, mirroring the convention of returning the first
/// encountered [`ValidationError`] with no partial acceptance.
pub type Result<T> = std::result::Result<T, ValidationError>;

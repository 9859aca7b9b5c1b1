//! Relevance check: the local cluster must be a declared member, and its declared
//! pchannels must match the caller's view of them, as a multiset.

use super::multiset::multiset_eq;
use super::Validator;
use crate::error::{Result, ValidationError};

impl<'a> Validator<'a> {
    pub(crate) fn check_relevance(&mut self) -> Result<()> {
        let local = self
            .cluster_index
            .get(self.local_cluster_id)
            .copied()
            .ok_or_else(|| {
                self.fail(ValidationError::LocalClusterNotDeclared {
                    local_cluster_id: self.local_cluster_id.to_owned(),
                })
            })?;

        if !multiset_eq(self.local_pchannels, &local.pchannels) {
            return Err(self.fail(ValidationError::LocalPChannelsMismatch {
                local_cluster_id: self.local_cluster_id.to_owned(),
                local: self.local_pchannels.to_vec(),
                declared: local.pchannels.clone(),
            }));
        }

        Ok(())
    }
}

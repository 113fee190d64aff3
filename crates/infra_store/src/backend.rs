//! Storage backend abstraction
//!
//! The record store keeps everything in memory and hands the full state to a
//! backend after every mutation. Backends only need to load and save whole
//! collections.

use std::collections::BTreeMap;

use core_kernel::{ClaimId, PolicyholderId};
use domain_claims::Claim;
use domain_policyholder::Policyholder;

use crate::error::StorageError;

/// The two record collections, keyed and ordered by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    pub policyholders: BTreeMap<PolicyholderId, Policyholder>,
    pub claims: BTreeMap<ClaimId, Claim>,
}

impl Records {
    pub fn is_empty(&self) -> bool {
        self.policyholders.is_empty() && self.claims.is_empty()
    }
}

/// Persistence for the record collections
pub trait StorageBackend: Send + Sync {
    /// Loads both collections
    ///
    /// Absent data is an empty collection, not an error.
    fn load(&self) -> Result<Records, StorageError>;

    /// Replaces the stored collections with `records`
    fn save(&self, records: &Records) -> Result<(), StorageError>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn load(&self) -> Result<Records, StorageError> {
        (**self).load()
    }

    fn save(&self, records: &Records) -> Result<(), StorageError> {
        (**self).save(records)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

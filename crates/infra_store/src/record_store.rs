//! Record store
//!
//! Holds every policyholder and claim in memory, ordered by id, and writes
//! the full state through to a [`StorageBackend`] after each mutation.
//! Persistence is best effort: a failed save is logged and the in-memory
//! change stands.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};

use core_kernel::{ClaimId, PolicyholderId};
use domain_analytics::RecordSource;
use domain_claims::{Claim, ClaimError, ClaimStatus, NewClaim};
use domain_policyholder::{NewPolicyholder, Policyholder, PolicyholderError};

use crate::backend::{Records, StorageBackend};

/// In-memory record store with write-through persistence
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
    records: Records,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Opens the store, loading both collections from `backend`
    ///
    /// If loading fails the error is logged and the store starts empty.
    pub fn open(backend: B) -> Self {
        let records = match backend.load() {
            Ok(records) => {
                info!(
                    backend = %backend.describe(),
                    policyholders = records.policyholders.len(),
                    claims = records.claims.len(),
                    "Loaded records"
                );
                records
            }
            Err(e) => {
                error!(backend = %backend.describe(), error = %e, "Failed to load records, starting empty");
                Records::default()
            }
        };

        Self { backend, records }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Id the next registered policyholder will receive
    ///
    /// `None` once the highest stored id is the last in the sequence.
    pub fn next_policyholder_id(&self) -> Option<PolicyholderId> {
        match self.records.policyholders.keys().next_back() {
            Some(last) => last.next(),
            None => Some(PolicyholderId::first()),
        }
    }

    /// Id the next submitted claim will receive
    pub fn next_claim_id(&self) -> Option<ClaimId> {
        match self.records.claims.keys().next_back() {
            Some(last) => last.next(),
            None => Some(ClaimId::first()),
        }
    }

    /// Stores a policyholder under its own id, replacing any record with that id
    #[instrument(skip(self, policyholder), fields(policyholder_id = %policyholder.id()))]
    pub fn add_policyholder(&mut self, policyholder: Policyholder) -> PolicyholderId {
        let id = policyholder.id();
        if self.records.policyholders.insert(id, policyholder).is_some() {
            warn!("Replaced existing policyholder");
        }
        self.persist();
        id
    }

    /// Stores a claim under its own id, replacing any record with that id
    ///
    /// The policyholder reference is not checked.
    #[instrument(skip(self, claim), fields(claim_id = %claim.id()))]
    pub fn add_claim(&mut self, claim: Claim) -> ClaimId {
        let id = claim.id();
        if self.records.claims.insert(id, claim).is_some() {
            warn!("Replaced existing claim");
        }
        self.persist();
        id
    }

    /// Validates `input` and stores it under the next policyholder id
    #[instrument(skip(self, input))]
    pub fn register_policyholder(
        &mut self,
        input: NewPolicyholder,
        now: DateTime<Utc>,
    ) -> Result<Policyholder, PolicyholderError> {
        let id = self
            .next_policyholder_id()
            .ok_or(PolicyholderError::IdsExhausted)?;
        let policyholder = Policyholder::new(id, input, now)?;
        self.add_policyholder(policyholder.clone());
        info!(policyholder_id = %policyholder.id(), "Registered policyholder");
        Ok(policyholder)
    }

    /// Validates `input` and stores it as a Pending claim under the next claim id
    #[instrument(skip(self, input), fields(policyholder_id = %input.policyholder_id))]
    pub fn submit_claim(&mut self, input: NewClaim, now: DateTime<Utc>) -> Result<Claim, ClaimError> {
        let id = self.next_claim_id().ok_or(ClaimError::IdsExhausted)?;
        let claim = Claim::new(id, input, now)?;
        self.add_claim(claim.clone());
        info!(claim_id = %claim.id(), "Submitted claim");
        Ok(claim)
    }

    pub fn get_policyholder(&self, id: PolicyholderId) -> Option<&Policyholder> {
        self.records.policyholders.get(&id)
    }

    pub fn get_claim(&self, id: ClaimId) -> Option<&Claim> {
        self.records.claims.get(&id)
    }

    /// All policyholders in id order
    pub fn list_policyholders(&self) -> Vec<&Policyholder> {
        self.records.policyholders.values().collect()
    }

    /// All claims in id order
    pub fn list_claims(&self) -> Vec<&Claim> {
        self.records.claims.values().collect()
    }

    /// Claims filed by one policyholder, in id order
    pub fn claims_for_policyholder(&self, id: PolicyholderId) -> Vec<&Claim> {
        self.records
            .claims
            .values()
            .filter(|claim| claim.policyholder_id() == id)
            .collect()
    }

    /// Sets the status of a claim
    ///
    /// Returns false, without persisting, when no claim has `id`.
    #[instrument(skip_all, fields(claim_id = %id, status = %status))]
    pub fn update_claim_status(&mut self, id: ClaimId, status: ClaimStatus) -> bool {
        let Some(claim) = self.records.claims.get_mut(&id) else {
            warn!("Status update for unknown claim");
            return false;
        };

        let previous = claim.update_status(status);
        info!(previous = %previous, "Updated claim status");
        self.persist();
        true
    }

    pub fn policyholder_count(&self) -> usize {
        self.records.policyholders.len()
    }

    pub fn claim_count(&self) -> usize {
        self.records.claims.len()
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.records) {
            error!(backend = %self.backend.describe(), error = %e, "Failed to persist records");
        }
    }
}

impl<B: StorageBackend> RecordSource for RecordStore<B> {
    fn policyholders(&self) -> Vec<&Policyholder> {
        self.list_policyholders()
    }

    fn claims(&self) -> Vec<&Claim> {
        self.list_claims()
    }

    fn policyholder(&self, id: PolicyholderId) -> Option<&Policyholder> {
        self.get_policyholder(id)
    }

    fn claims_for_policyholder(&self, id: PolicyholderId) -> Vec<&Claim> {
        RecordStore::claims_for_policyholder(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryBackend;

    #[test]
    fn test_empty_store_starts_at_first_ids() {
        let store = RecordStore::open(InMemoryBackend::new());

        assert_eq!(store.next_policyholder_id(), Some(PolicyholderId::first()));
        assert_eq!(store.next_claim_id(), Some(ClaimId::first()));
    }

    #[test]
    fn test_update_unknown_claim_does_not_persist() {
        let mut store = RecordStore::open(InMemoryBackend::new());

        assert!(!store.update_claim_status(ClaimId::first(), ClaimStatus::Approved));
        assert_eq!(store.backend().save_count(), 0);
    }
}

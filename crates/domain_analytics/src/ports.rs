//! Read-side port for the analytics services
//!
//! The analyzer and report generator only ever read records. They receive a
//! `&dyn RecordSource`, so the record store (or any snapshot of it) can be
//! swapped without touching the aggregation code.
//!
//! ```text
//! RecordStore ──implements──▶ RecordSource ◀──reads── RiskAnalyzer / ReportGenerator
//! ```

use tracing::debug;

use core_kernel::PolicyholderId;
use domain_claims::Claim;
use domain_policyholder::Policyholder;

/// Read access to policyholder and claim records
///
/// Sequences are returned in the source's iteration order, which the
/// reports rely on for tie-breaking.
pub trait RecordSource {
    /// All policyholders
    fn policyholders(&self) -> Vec<&Policyholder>;

    /// All claims
    fn claims(&self) -> Vec<&Claim>;

    /// Looks up a single policyholder
    fn policyholder(&self, id: PolicyholderId) -> Option<&Policyholder>;

    /// Claims filed by one policyholder
    fn claims_for_policyholder(&self, id: PolicyholderId) -> Vec<&Claim> {
        self.claims()
            .into_iter()
            .filter(|claim| claim.policyholder_id() == id)
            .collect()
    }

    /// Inner join of claims to their policyholders
    ///
    /// Claims whose policyholder cannot be resolved are skipped.
    fn claims_with_policyholders(&self) -> Vec<(&Claim, &Policyholder)> {
        self.claims()
            .into_iter()
            .filter_map(|claim| match self.policyholder(claim.policyholder_id()) {
                Some(holder) => Some((claim, holder)),
                None => {
                    debug!(
                        claim_id = %claim.id(),
                        policyholder_id = %claim.policyholder_id(),
                        "Skipping claim with unknown policyholder"
                    );
                    None
                }
            })
            .collect()
    }
}

/// An owned, in-memory set of records
///
/// Useful for computing reports over data that does not live in a store,
/// and as a lightweight source in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    pub policyholders: Vec<Policyholder>,
    pub claims: Vec<Claim>,
}

impl RecordSnapshot {
    pub fn new(policyholders: Vec<Policyholder>, claims: Vec<Claim>) -> Self {
        Self { policyholders, claims }
    }
}

impl RecordSource for RecordSnapshot {
    fn policyholders(&self) -> Vec<&Policyholder> {
        self.policyholders.iter().collect()
    }

    fn claims(&self) -> Vec<&Claim> {
        self.claims.iter().collect()
    }

    fn policyholder(&self, id: PolicyholderId) -> Option<&Policyholder> {
        self.policyholders.iter().find(|holder| holder.id() == id)
    }
}

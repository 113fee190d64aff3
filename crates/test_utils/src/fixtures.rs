//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the dashboard records.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{ClaimId, FixedClock, PolicyholderId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for amount test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard sum insured for a policyholder
    pub fn sum_insured() -> Decimal {
        dec!(100000)
    }

    /// A small claim amount
    pub fn small_claim() -> Decimal {
        dec!(500)
    }

    /// A large claim amount
    pub fn large_claim() -> Decimal {
        dec!(5000)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant tests treat as "now" (Jul 1, 2024 12:00 UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }

    /// A clock frozen at [`TemporalFixtures::now`]
    pub fn clock() -> FixedClock {
        FixedClock(Self::now())
    }

    /// `days` before [`TemporalFixtures::now`]
    pub fn days_ago(days: i64) -> DateTime<Utc> {
        Self::now() - Duration::days(days)
    }

    /// Jan 1, 2024 midnight UTC
    pub fn new_year_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Jun 1, 2024 midnight UTC
    pub fn june_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn name() -> &'static str {
        "Jane Doe"
    }

    pub fn reason() -> &'static str {
        "Medical expenses for routine checkup"
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// `PH001`
    pub fn policyholder_id() -> PolicyholderId {
        PolicyholderId::first()
    }

    /// `PH<seq>`
    pub fn policyholder(sequence: u32) -> PolicyholderId {
        PolicyholderId::from_sequence(sequence)
    }

    /// `CL<seq>`
    pub fn claim(sequence: u32) -> ClaimId {
        ClaimId::from_sequence(sequence)
    }
}

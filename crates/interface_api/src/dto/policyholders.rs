//! Policyholder DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_currency, PolicyholderId};
use domain_policyholder::{NewPolicyholder, PolicyType, Policyholder, PolicyholderError};

#[derive(Debug, Deserialize)]
pub struct CreatePolicyholderRequest {
    pub name: String,
    pub age: u32,
    pub policy_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub sum_insured: Decimal,
}

impl TryFrom<CreatePolicyholderRequest> for NewPolicyholder {
    type Error = PolicyholderError;

    fn try_from(request: CreatePolicyholderRequest) -> Result<Self, Self::Error> {
        Ok(NewPolicyholder {
            name: request.name,
            age: request.age,
            policy_type: request.policy_type.parse()?,
            sum_insured: request.sum_insured,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PolicyholderResponse {
    pub policyholder_id: PolicyholderId,
    pub name: String,
    pub age: u32,
    pub policy_type: PolicyType,
    #[serde(with = "rust_decimal::serde::float")]
    pub sum_insured: Decimal,
    pub sum_insured_display: String,
    #[serde(with = "core_kernel::temporal::timestamp")]
    pub registration_date: DateTime<Utc>,
}

impl From<&Policyholder> for PolicyholderResponse {
    fn from(holder: &Policyholder) -> Self {
        Self {
            policyholder_id: holder.id(),
            name: holder.name().to_string(),
            age: holder.age(),
            policy_type: holder.policy_type(),
            sum_insured: holder.sum_insured(),
            sum_insured_display: format_currency(holder.sum_insured()),
            registration_date: holder.registered_at(),
        }
    }
}

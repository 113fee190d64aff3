//! Core Kernel - Foundational types and utilities for the insurance dashboard
//!
//! This crate provides the building blocks shared by every other crate:
//! - Sequence-based identifiers (`PH001`, `CL001`)
//! - Amount helpers with precise decimal arithmetic and display formatting
//! - Clock and timezone abstractions plus lenient timestamp serialization
//! - A validation result used by constructor-time entity validation

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod validation;
pub mod error;

pub use money::{format_currency, format_percent, mean, ratio, round_amount, MoneyError};
pub use temporal::{record_precision, Clock, FixedClock, SystemClock, TemporalError, Timezone};
pub use identifiers::{ClaimId, IdError, PolicyholderId};
pub use validation::ValidationResult;
pub use error::CoreError;

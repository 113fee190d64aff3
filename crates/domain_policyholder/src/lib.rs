//! Policyholder Domain
//!
//! This crate models the insured parties registered by the office: who they
//! are, which policy type they hold, and how much they are insured for.
//!
//! Records are validated when they are constructed. An invalid submission
//! never produces a `Policyholder` value, so nothing invalid can reach the
//! record store.
//!
//! # Examples
//!
//! ```rust
//! use chrono::Utc;
//! use core_kernel::PolicyholderId;
//! use domain_policyholder::{NewPolicyholder, Policyholder, PolicyType};
//! use rust_decimal::Decimal;
//!
//! let input = NewPolicyholder {
//!     name: "Jane Doe".to_string(),
//!     age: 42,
//!     policy_type: PolicyType::Health,
//!     sum_insured: Decimal::new(100_000, 0),
//! };
//!
//! let holder = Policyholder::new(PolicyholderId::first(), input, Utc::now()).unwrap();
//! assert_eq!(holder.id().to_string(), "PH001");
//! ```

pub mod policyholder;
pub mod validation;
pub mod error;

pub use policyholder::{NewPolicyholder, Policyholder, PolicyType};
pub use validation::PolicyholderValidator;
pub use error::PolicyholderError;

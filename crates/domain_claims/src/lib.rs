//! Claims Management Domain
//!
//! This crate models claims filed against a policyholder's coverage and
//! their review status.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted (Pending) -> Approved | Rejected
//! ```
//!
//! The status may be changed in place at any time; nothing else about a
//! claim changes after submission.

pub mod claim;
pub mod validation;
pub mod error;

pub use claim::{Claim, ClaimStatus, NewClaim};
pub use validation::ClaimValidator;
pub use error::ClaimError;

//! Infrastructure Storage Layer
//!
//! This crate provides the record store for the insurance dashboard: an
//! in-memory collection of policyholders and claims that is written through
//! to a pluggable storage backend after every change.
//!
//! # Backends
//!
//! - [`JsonFileBackend`]: `policyholders.json` and `claims.json` in a data directory
//! - [`InMemoryBackend`]: keeps saves in memory, for tests and demos
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use domain_policyholder::{NewPolicyholder, PolicyType};
//! use infra_store::{JsonFileBackend, RecordStore};
//! use rust_decimal::Decimal;
//!
//! let mut store = RecordStore::open(JsonFileBackend::new("data"));
//! let holder = store.register_policyholder(
//!     NewPolicyholder {
//!         name: "Jane Doe".to_string(),
//!         age: 42,
//!         policy_type: PolicyType::Life,
//!         sum_insured: Decimal::new(250_000, 0),
//!     },
//!     Utc::now(),
//! )?;
//! println!("registered {}", holder.id());
//! # Ok::<(), domain_policyholder::PolicyholderError>(())
//! ```

pub mod error;
pub mod backend;
pub mod json_file;
pub mod memory;
pub mod record_store;

pub use error::StorageError;
pub use backend::{Records, StorageBackend};
pub use json_file::{JsonFileBackend, CLAIMS_FILE, POLICYHOLDERS_FILE};
pub use memory::InMemoryBackend;
pub use record_store::RecordStore;

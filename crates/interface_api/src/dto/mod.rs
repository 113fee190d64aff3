//! Request and response bodies

pub mod policyholders;
pub mod claims;
pub mod analytics;

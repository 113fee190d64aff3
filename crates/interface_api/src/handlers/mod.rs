//! Request handlers

pub mod health;
pub mod policyholders;
pub mod claims;
pub mod risk;
pub mod reports;

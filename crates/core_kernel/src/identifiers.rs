//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are a fixed prefix followed by a sequence number, zero padded
//! to at least three digits (`PH001`, `CL042`, `PH1000`). Ordering follows the
//! sequence number, so ordered maps keyed by these ids iterate in creation
//! order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing an identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Identifier '{value}' must start with '{prefix}'")]
    MissingPrefix { value: String, prefix: &'static str },

    #[error("Identifier '{0}' has an invalid sequence number")]
    InvalidSequence(String),
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from a sequence number
            pub fn from_sequence(sequence: u32) -> Self {
                Self(sequence)
            }

            /// The first identifier handed out by an empty store
            pub fn first() -> Self {
                Self(1)
            }

            /// Returns the sequence number
            pub fn sequence(&self) -> u32 {
                self.0
            }

            /// Returns the identifier that follows this one, or `None` once
            /// the sequence is exhausted
            pub fn next(&self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:03}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.trim().strip_prefix($prefix).ok_or_else(|| IdError::MissingPrefix {
                    value: s.to_string(),
                    prefix: $prefix,
                })?;

                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(IdError::InvalidSequence(s.to_string()));
                }

                digits
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| IdError::InvalidSequence(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(PolicyholderId, "PH");
define_id!(ClaimId, "CL");

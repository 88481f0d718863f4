// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects
//!
//! CIDR ranges are carried as opaque strings. They are only ever checked for
//! presence; interpreting the ranges is left to the provisioning tool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CIDR range value object
///
/// Holds the range exactly as supplied (e.g. `"10.250.0.0/16"`).
///
/// # Examples
///
/// ```rust
/// use gcp_infrastructure::domain::Cidr;
///
/// let cidr = Cidr::from("10.1.0.0/16");
/// assert_eq!(cidr.as_str(), "10.1.0.0/16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cidr(String);

impl Cidr {
    /// Create a CIDR from any string-like value
    pub fn new(cidr: impl Into<String>) -> Self {
        Self(cidr.into())
    }

    /// Get the range as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cidr {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cidr {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Cidr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cluster-wide Kubernetes networks
///
/// Shared by every infrastructure of a cluster. Pod and service ranges are
/// taken from here, never from the per-infrastructure config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sNetworks {
    /// Pod range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pods: Option<Cidr>,
    /// Service range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Cidr>,
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure status record
//!
//! This is the externally persisted artifact. Field names and the type tag
//! are read back by other components and must stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::Vpc;

/// API group/version of the GCP provider types
pub const API_VERSION: &str = "gcp.provider.extensions.gardener.cloud/v1alpha1";

/// Kind of the status record
pub const STATUS_KIND: &str = "InfrastructureStatus";

/// Type/version tag of a persisted object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    pub api_version: String,
    pub kind: String,
}

impl TypeMeta {
    /// The tag carried by every [`InfrastructureStatus`]
    pub fn infrastructure_status() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: STATUS_KIND.to_string(),
        }
    }
}

/// Status of a provisioned GCP infrastructure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    /// VPC and subnets
    pub networks: NetworkStatus,
    /// Email of the service account used by the nodes
    pub service_account_email: String,
}

/// Network part of the status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub vpc: Vpc,
    /// Nodes subnet first, internal subnet second when present
    pub subnets: Vec<Subnet>,
}

/// A subnet and the role it plays
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subnet {
    pub purpose: SubnetPurpose,
    pub name: String,
}

impl Subnet {
    pub fn new(purpose: SubnetPurpose, name: impl Into<String>) -> Self {
        Self {
            purpose,
            name: name.into(),
        }
    }
}

/// Role of a subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubnetPurpose {
    /// Subnet the worker nodes live in
    Nodes,
    /// Subnet for internal load balancers
    Internal,
}

impl SubnetPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubnetPurpose::Nodes => "nodes",
            SubnetPurpose::Internal => "internal",
        }
    }
}

impl fmt::Display for SubnetPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfrastructureStatus {
    /// The subnet with the given purpose, if any
    pub fn subnet(&self, purpose: SubnetPurpose) -> Option<&Subnet> {
        self.networks.subnets.iter().find(|s| s.purpose == purpose)
    }
}

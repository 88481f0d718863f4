// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure request, cluster context and account identity
//!
//! These are the immutable inputs of a render call. The control plane builds
//! them; this crate only reads them.

use serde::{Deserialize, Serialize};

use super::network::K8sNetworks;
use crate::errors::{InfrastructureError, InfrastructureResult};

/// Desired-state object for one cluster's infrastructure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    /// Namespace of the object; doubles as the cluster name
    pub namespace: String,
    /// Object name
    pub name: String,
    /// Desired state
    pub spec: InfrastructureSpec,
}

/// Infrastructure desired state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSpec {
    /// Cloud region
    pub region: String,
    /// Where the cloud credentials live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretReference>,
    /// Raw provider config, decoded by
    /// [`InfrastructureConfig::from_provider_config`](super::InfrastructureConfig::from_provider_config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config: Option<serde_json::Value>,
}

/// Reference to a credentials secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretReference {
    pub namespace: String,
    pub name: String,
}

/// Cluster context shared by all infrastructures of a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Cluster-wide Kubernetes networks
    pub networks: K8sNetworks,
}

impl Cluster {
    /// Create a cluster context from its networks
    pub fn new(networks: K8sNetworks) -> Self {
        Self { networks }
    }
}

/// Cloud account identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccount {
    /// GCP project the account belongs to
    pub project_id: String,
    /// The service account JSON as supplied
    pub raw: Vec<u8>,
}

#[derive(Deserialize)]
struct ServiceAccountJson {
    #[serde(default)]
    project_id: Option<String>,
}

impl ServiceAccount {
    /// Read the project id from a service account JSON document
    ///
    /// The raw bytes are kept for handing on to the provisioning tool.
    pub fn from_json(data: impl Into<Vec<u8>>) -> InfrastructureResult<Self> {
        let raw = data.into();
        let parsed: ServiceAccountJson = serde_json::from_slice(&raw)?;

        match parsed.project_id {
            Some(project_id) if !project_id.is_empty() => Ok(Self { project_id, raw }),
            _ => Err(InfrastructureError::MissingProjectId),
        }
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-infrastructure provider configuration

use serde::{Deserialize, Serialize};

use super::infrastructure::Infrastructure;
use super::network::Cidr;
use crate::errors::{InfrastructureError, InfrastructureResult};

/// GCP infrastructure configuration
///
/// Embedded as provider config in an [`Infrastructure`] spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureConfig {
    /// Network layout
    pub networks: NetworkConfig,
}

/// Network layout of an infrastructure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Existing VPC to reuse; `None` means a new VPC is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,
    /// Range of the optional internal subnet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<Cidr>,
    /// Range of the worker (nodes) subnet
    pub worker: Cidr,
}

/// A VPC reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vpc {
    /// VPC name
    pub name: String,
}

impl Vpc {
    /// Create a VPC reference
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl InfrastructureConfig {
    /// Decode the provider config embedded in the given infrastructure
    ///
    /// Unknown fields such as `apiVersion` and `kind` are ignored.
    pub fn from_provider_config(infra: &Infrastructure) -> InfrastructureResult<Self> {
        let raw = infra.spec.provider_config.as_ref().ok_or_else(|| {
            InfrastructureError::MissingProviderConfig {
                namespace: infra.namespace.clone(),
                name: infra.name.clone(),
            }
        })?;

        Ok(Self::deserialize(raw)?)
    }

    /// Whether an internal network is declared
    ///
    /// Presence alone decides; an empty range still counts as declared.
    pub fn has_internal_network(&self) -> bool {
        self.networks.internal.is_some()
    }
}

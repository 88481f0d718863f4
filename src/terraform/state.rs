// Copyright (c) 2025 - Cowboy AI, Inc.
//! State Extractor and Status Deriver
//!
//! Extraction reads the terraform output variables in one batched call and is
//! all-or-nothing: a failing reader yields its error and no partial state.
//! Status derivation is a pure function of the extracted state.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::OutputKey;
use crate::domain::{
    InfrastructureConfig, InfrastructureStatus, NetworkStatus, Subnet, SubnetPurpose, TypeMeta,
    Vpc,
};

/// Reader for the output variables persisted by the provisioning tool
#[async_trait]
pub trait StateOutputReader: Send + Sync {
    /// Error produced when the state or a requested variable is unavailable
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the values of the named output variables
    async fn get_state_output_variables(
        &self,
        names: &[&str],
    ) -> Result<HashMap<String, String>, Self::Error>;
}

/// Terraform output values of one infrastructure
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TerraformState {
    /// Name of the VPC used by the infrastructure
    pub vpc_name: String,
    /// Service account email of the nodes
    pub service_account_email: String,
    /// Name of the nodes subnet
    pub subnet_nodes: String,
    /// Name of the internal subnet; only set when it was requested
    pub subnet_internal: Option<String>,
}

/// Output keys to request for `config`
///
/// The internal subnet is requested iff the config declares an internal
/// network.
pub fn requested_output_keys(config: &InfrastructureConfig) -> Vec<OutputKey> {
    let mut keys = vec![
        OutputKey::VpcName,
        OutputKey::SubnetNodes,
        OutputKey::ServiceAccountEmail,
    ];
    if config.has_internal_network() {
        keys.push(OutputKey::SubnetInternal);
    }
    keys
}

/// Extract the [`TerraformState`] for `config` from the reader
pub async fn extract_terraform_state<R>(
    reader: &R,
    config: &InfrastructureConfig,
) -> Result<TerraformState, R::Error>
where
    R: StateOutputReader + ?Sized,
{
    let keys = requested_output_keys(config);
    let names: Vec<&str> = keys.iter().map(OutputKey::as_str).collect();

    debug!("Reading terraform output variables: {:?}", names);

    let mut vars = reader
        .get_state_output_variables(&names)
        .await
        .map_err(|e| {
            warn!("Failed to read terraform output variables: {}", e);
            e
        })?;

    let mut take = |key: OutputKey| vars.remove(key.as_str()).unwrap_or_default();

    let mut state = TerraformState {
        vpc_name: take(OutputKey::VpcName),
        subnet_nodes: take(OutputKey::SubnetNodes),
        service_account_email: take(OutputKey::ServiceAccountEmail),
        subnet_internal: None,
    };
    if keys.contains(&OutputKey::SubnetInternal) {
        state.subnet_internal = Some(take(OutputKey::SubnetInternal));
    }

    Ok(state)
}

/// Compute the [`InfrastructureStatus`] from a terraform state
///
/// Values are passed through as they are, empty strings included.
pub fn status_from_terraform_state(state: &TerraformState) -> InfrastructureStatus {
    let mut subnets = vec![Subnet::new(SubnetPurpose::Nodes, state.subnet_nodes.clone())];

    if let Some(internal) = &state.subnet_internal {
        subnets.push(Subnet::new(SubnetPurpose::Internal, internal.clone()));
    }

    InfrastructureStatus {
        type_meta: TypeMeta::infrastructure_status(),
        networks: NetworkStatus {
            vpc: Vpc::new(state.vpc_name.clone()),
            subnets,
        },
        service_account_email: state.service_account_email.clone(),
    }
}

/// Extract the terraform state and derive the status from it
pub async fn compute_status<R>(
    reader: &R,
    config: &InfrastructureConfig,
) -> Result<InfrastructureStatus, R::Error>
where
    R: StateOutputReader + ?Sized,
{
    let state = extract_terraform_state(reader, config).await?;
    Ok(status_from_terraform_state(&state))
}

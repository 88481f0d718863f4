// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraformer chart values
//!
//! The values are built as a typed structure and only turned into a generic
//! JSON tree when handed to the chart renderer.

use serde::Serialize;
use serde_json::Value;

use super::{
    DEFAULT_VPC_NAME, TERRAFORMER_OUTPUT_KEY_SERVICE_ACCOUNT_EMAIL,
    TERRAFORMER_OUTPUT_KEY_SUBNET_INTERNAL, TERRAFORMER_OUTPUT_KEY_SUBNET_NODES,
    TERRAFORMER_OUTPUT_KEY_VPC_NAME,
};
use crate::domain::{Cidr, Cluster, Infrastructure, InfrastructureConfig, ServiceAccount};

/// Values for the gcp-infra chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerraformerChartValues {
    pub google: GoogleValues,
    pub create: CreateValues,
    pub vpc: VpcValues,
    pub cluster_name: String,
    pub networks: NetworkValues,
    pub output_keys: OutputKeyValues,
}

/// Cloud identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleValues {
    pub region: String,
    pub project: String,
}

/// Resources the chart has to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateValues {
    pub vpc: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VpcValues {
    pub name: String,
}

/// Subnet ranges; absent ranges render as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkValues {
    pub pods: Option<Cidr>,
    pub services: Option<Cidr>,
    pub worker: Cidr,
    pub internal: Option<Cidr>,
}

/// Names under which the chart has to expose its outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputKeyValues {
    pub vpc_name: String,
    pub service_account_email: String,
    pub subnet_nodes: String,
    pub subnet_internal: String,
}

impl Default for OutputKeyValues {
    fn default() -> Self {
        Self {
            vpc_name: TERRAFORMER_OUTPUT_KEY_VPC_NAME.to_string(),
            service_account_email: TERRAFORMER_OUTPUT_KEY_SERVICE_ACCOUNT_EMAIL.to_string(),
            subnet_nodes: TERRAFORMER_OUTPUT_KEY_SUBNET_NODES.to_string(),
            subnet_internal: TERRAFORMER_OUTPUT_KEY_SUBNET_INTERNAL.to_string(),
        }
    }
}

/// Compute the values for the gcp-infra terraformer chart
///
/// An existing VPC in `config` is reused; otherwise the chart is told to
/// create one and the VPC name is left to terraform interpolation
/// ([`DEFAULT_VPC_NAME`]). Pod and service ranges always come from the
/// cluster, worker and internal ranges from `config`.
pub fn compute_terraformer_chart_values(
    infra: &Infrastructure,
    account: &ServiceAccount,
    config: &InfrastructureConfig,
    cluster: &Cluster,
) -> TerraformerChartValues {
    let (create_vpc, vpc_name) = match &config.networks.vpc {
        Some(vpc) => (false, vpc.name.clone()),
        None => (true, DEFAULT_VPC_NAME.to_string()),
    };

    TerraformerChartValues {
        google: GoogleValues {
            region: infra.spec.region.clone(),
            project: account.project_id.clone(),
        },
        create: CreateValues { vpc: create_vpc },
        vpc: VpcValues { name: vpc_name },
        cluster_name: infra.namespace.clone(),
        networks: NetworkValues {
            pods: cluster.networks.pods.clone(),
            services: cluster.networks.services.clone(),
            worker: config.networks.worker.clone(),
            internal: config.networks.internal.clone(),
        },
        output_keys: OutputKeyValues::default(),
    }
}

impl TerraformerChartValues {
    /// The generic value tree handed to the chart renderer
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

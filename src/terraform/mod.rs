// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraformer adapter for GCP infrastructure
//!
//! Translates an infrastructure request into the inputs of the `gcp-infra`
//! terraformer chart, and translates the terraform output variables back into
//! an [`InfrastructureStatus`](crate::domain::InfrastructureStatus).
//!
//! # Flow
//!
//! ```text
//! (Infrastructure, ServiceAccount, InfrastructureConfig, Cluster)
//!      │
//!      ▼  compute_terraformer_chart_values      (pure)
//! TerraformerChartValues
//!      │
//!      ▼  render_terraformer_chart              (ChartRenderer I/O)
//! TerraformFiles ──> provisioning tool (external)
//!                          │
//!                          ▼  extract_terraform_state  (StateOutputReader I/O)
//!                    TerraformState
//!                          │
//!                          ▼  status_from_terraform_state (pure)
//!                    InfrastructureStatus
//! ```
//!
//! Ordering between the steps is the caller's responsibility.

pub mod chart;
pub mod state;
pub mod state_file;
pub mod values;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use chart::{
    render_terraformer_chart, render_terraformer_chart_with, ChartRenderer, InfraChartConfig,
    RenderedChart, TerraformFiles, MAIN_FILE, TFVARS_FILE, VARIABLES_FILE,
};
pub use state::{
    compute_status, extract_terraform_state, requested_output_keys, status_from_terraform_state,
    StateOutputReader, TerraformState,
};
pub use state_file::TerraformStateDocument;
pub use values::{
    compute_terraformer_chart_values, CreateValues, GoogleValues, NetworkValues, OutputKeyValues,
    TerraformerChartValues, VpcValues,
};

/// VPC name used when a new VPC is created
///
/// Terraform interpolates it to the name of the network resource it is about
/// to create.
pub const DEFAULT_VPC_NAME: &str = "${google_compute_network.network.name}";

/// Terraformer purpose of the infrastructure run
pub const TERRAFORMER_PURPOSE: &str = "infra";

/// Name of the `vpc_name` terraform output variable
pub const TERRAFORMER_OUTPUT_KEY_VPC_NAME: &str = "vpc_name";
/// Name of the `service_account_email` terraform output variable
pub const TERRAFORMER_OUTPUT_KEY_SERVICE_ACCOUNT_EMAIL: &str = "service_account_email";
/// Name of the `subnet_nodes` terraform output variable
pub const TERRAFORMER_OUTPUT_KEY_SUBNET_NODES: &str = "subnet_nodes";
/// Name of the `subnet_internal` terraform output variable
pub const TERRAFORMER_OUTPUT_KEY_SUBNET_INTERNAL: &str = "subnet_internal";

/// Name of the gcp-infra chart
pub const INFRA_CHART_NAME: &str = "gcp-infra";
/// Path to the provider charts
pub const CHARTS_PATH: &str = "controllers/provider-gcp/charts";
/// Path to the internal charts
pub const INTERNAL_CHARTS_PATH: &str = "controllers/provider-gcp/charts/internal";
/// Path to the gcp-infra chart
pub const INFRA_CHART_PATH: &str = "controllers/provider-gcp/charts/internal/gcp-infra";

/// Terraform output variables this adapter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKey {
    VpcName,
    ServiceAccountEmail,
    SubnetNodes,
    SubnetInternal,
}

impl OutputKey {
    /// Every known output variable
    pub const ALL: [OutputKey; 4] = [
        OutputKey::VpcName,
        OutputKey::ServiceAccountEmail,
        OutputKey::SubnetNodes,
        OutputKey::SubnetInternal,
    ];

    /// Terraform name of the output variable
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKey::VpcName => TERRAFORMER_OUTPUT_KEY_VPC_NAME,
            OutputKey::ServiceAccountEmail => TERRAFORMER_OUTPUT_KEY_SERVICE_ACCOUNT_EMAIL,
            OutputKey::SubnetNodes => TERRAFORMER_OUTPUT_KEY_SUBNET_NODES,
            OutputKey::SubnetInternal => TERRAFORMER_OUTPUT_KEY_SUBNET_INTERNAL,
        }
    }

    /// Look up a key by its terraform name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

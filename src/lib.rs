// Copyright (c) 2025 - Cowboy AI, Inc.
//! GCP infrastructure adapter for terraform-based provisioning
//!
//! Turns a declarative infrastructure request (region, VPC reuse or creation,
//! subnet ranges) into the inputs of the `gcp-infra` terraformer chart, and
//! turns the terraform output variables back into an infrastructure status.
//!
//! The chart renderer and the terraform state backend are external
//! collaborators, plugged in through [`ChartRenderer`] and
//! [`StateOutputReader`]. Their errors are returned unchanged.

pub mod domain;
pub mod errors;
pub mod terraform;

// Re-export commonly used types
pub use domain::{
    Cidr, Cluster, Infrastructure, InfrastructureConfig, InfrastructureStatus, ServiceAccount,
};
pub use errors::{InfrastructureError, InfrastructureResult};
pub use terraform::{
    compute_status, compute_terraformer_chart_values, extract_terraform_state,
    render_terraformer_chart, status_from_terraform_state, ChartRenderer, OutputKey,
    StateOutputReader, TerraformFiles, TerraformState, TerraformerChartValues,
};

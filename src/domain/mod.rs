// Copyright (c) 2025 - Cowboy AI, Inc.
//! GCP Infrastructure Domain Models
//!
//! Value objects describing what is requested (infrastructure spec, provider
//! config, cluster networks, account identity) and what is reported back
//! (infrastructure status).
//!
//! # Requested
//!
//! - [`Infrastructure`] - Region, namespace and raw provider config
//! - [`InfrastructureConfig`] - VPC reuse/creation intent and subnet ranges
//! - [`Cluster`] - Cluster-wide pod/service networks
//! - [`ServiceAccount`] - Project identity
//!
//! # Reported
//!
//! - [`InfrastructureStatus`] - VPC, subnets by purpose, service account email

pub mod config;
pub mod infrastructure;
pub mod network;
pub mod status;

pub use config::{InfrastructureConfig, NetworkConfig, Vpc};
pub use infrastructure::{
    Cluster, Infrastructure, InfrastructureSpec, SecretReference, ServiceAccount,
};
pub use network::{Cidr, K8sNetworks};
pub use status::{
    InfrastructureStatus, NetworkStatus, Subnet, SubnetPurpose, TypeMeta, API_VERSION,
    STATUS_KIND,
};

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for infrastructure operations
//!
//! Failures coming from the two external collaborators (chart renderer and
//! state output reader) are never wrapped here; they travel through the
//! adapter functions as the collaborator's own `Error` type. This enum only
//! covers failures raised by code in this crate.

use thiserror::Error;

/// Errors that can occur in infrastructure operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InfrastructureError {
    /// Malformed JSON in a provider config, service account or state document
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Infrastructure spec carries no provider config
    #[error("Infrastructure {namespace}/{name} has no provider config")]
    MissingProviderConfig { namespace: String, name: String },

    /// Service account JSON has no usable `project_id`
    #[error("Service account does not contain a project id")]
    MissingProjectId,

    /// One or more requested output variables are not in the state
    #[error("Could not find all requested outputs, missing: {}", .0.join(", "))]
    MissingOutputVariables(Vec<String>),

    /// Terraform state document uses a format this reader cannot interpret
    #[error("Unsupported terraform state version: {0}")]
    UnsupportedStateVersion(u64),
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::Deserialization(err.to_string())
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform state document reader
//!
//! A [`StateOutputReader`] over a persisted terraform state (`terraform.tfstate`).
//! Format version 3 keeps outputs under the root module, version 4 at the top
//! level:
//!
//! ```text
//! v3: { "version": 3, "modules": [ { "outputs": { "vpc_name": { "value": "..." } } } ] }
//! v4: { "version": 4, "outputs": { "vpc_name": { "value": "...", "type": "string" } } }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::state::StateOutputReader;
use crate::errors::{InfrastructureError, InfrastructureResult};

#[derive(Deserialize)]
struct RawState {
    version: u64,
    #[serde(default)]
    outputs: BTreeMap<String, RawOutput>,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Deserialize)]
struct RawModule {
    #[serde(default)]
    outputs: BTreeMap<String, RawOutput>,
}

#[derive(Deserialize)]
struct RawOutput {
    value: Value,
}

/// Output variables of a parsed terraform state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerraformStateDocument {
    version: u64,
    outputs: BTreeMap<String, String>,
}

impl TerraformStateDocument {
    /// Parse a terraform state document
    pub fn from_json(data: &[u8]) -> InfrastructureResult<Self> {
        let raw: RawState = serde_json::from_slice(data)?;

        let outputs = match raw.version {
            3 => raw
                .modules
                .into_iter()
                .next()
                .map(|module| module.outputs)
                .unwrap_or_default(),
            4 => raw.outputs,
            other => return Err(InfrastructureError::UnsupportedStateVersion(other)),
        };

        let outputs = outputs
            .into_iter()
            .map(|(name, output)| (name, output_to_string(output.value)))
            .collect();

        Ok(Self {
            version: raw.version,
            outputs,
        })
    }

    /// State format version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Value of a single output variable
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    /// Look up every name or fail listing all missing ones
    pub fn outputs_for(&self, names: &[&str]) -> InfrastructureResult<HashMap<String, String>> {
        let mut found = HashMap::with_capacity(names.len());
        let mut missing = Vec::new();

        for name in names {
            match self.outputs.get(*name) {
                Some(value) => {
                    found.insert((*name).to_string(), value.clone());
                }
                None => missing.push((*name).to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(InfrastructureError::MissingOutputVariables(missing));
        }
        Ok(found)
    }
}

/// Strings stay as they are; everything else is rendered as JSON
fn output_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl StateOutputReader for TerraformStateDocument {
    type Error = InfrastructureError;

    async fn get_state_output_variables(
        &self,
        names: &[&str],
    ) -> Result<HashMap<String, String>, Self::Error> {
        debug!(
            "Looking up {} output variables in terraform state v{}",
            names.len(),
            self.version
        );
        self.outputs_for(names)
    }
}

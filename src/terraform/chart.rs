// Copyright (c) 2025 - Cowboy AI, Inc.
//! Chart Renderer Adapter
//!
//! Renders the gcp-infra chart into the three terraform input files. The
//! rendering engine is an external collaborator behind [`ChartRenderer`];
//! its errors are returned to the caller untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::values::compute_terraformer_chart_values;
use super::{INFRA_CHART_NAME, INFRA_CHART_PATH};
use crate::domain::{Cluster, Infrastructure, InfrastructureConfig, ServiceAccount};

/// Primary terraform definition file
pub const MAIN_FILE: &str = "main.tf";
/// Terraform variable declarations
pub const VARIABLES_FILE: &str = "variables.tf";
/// Terraform variable values
pub const TFVARS_FILE: &str = "terraform.tfvars";

/// Templating engine that expands a chart into text files
///
/// Implementations own cancellation and timeouts; callers get whatever
/// error the engine produces. Values that cannot be turned into a value tree
/// surface through the same error type.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    /// Error produced by the engine
    type Error: std::error::Error + From<serde_json::Error> + Send + Sync + 'static;

    /// Render the chart at `chart_path` for `namespace` with `values`
    async fn render(
        &self,
        chart_path: &Path,
        chart_name: &str,
        namespace: &str,
        values: Value,
    ) -> Result<RenderedChart, Self::Error>;
}

/// Files produced by a chart render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedChart {
    /// Chart that was rendered
    pub chart_name: String,
    /// File name (or template path) to rendered content
    pub files: BTreeMap<String, String>,
}

impl RenderedChart {
    pub fn new(chart_name: impl Into<String>) -> Self {
        Self {
            chart_name: chart_name.into(),
            files: BTreeMap::new(),
        }
    }

    /// Add a rendered file
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    /// Content of the file called `name`
    ///
    /// Keys are either bare file names or template paths of this chart
    /// (`<chart_name>/templates/<name>`); a bare name wins. Subchart templates
    /// are never picked. A file the chart did not produce yields an empty
    /// string.
    pub fn file_content(&self, name: &str) -> String {
        self.files
            .get(name)
            .or_else(|| {
                self.files
                    .get(&format!("{}/templates/{}", self.chart_name, name))
            })
            .cloned()
            .unwrap_or_default()
    }
}

/// Terraform input files rendered from the infrastructure chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformFiles {
    /// Content of `main.tf`
    pub main: String,
    /// Content of `variables.tf`
    pub variables: String,
    /// Bytes of `terraform.tfvars`
    pub tf_vars: Vec<u8>,
}

impl TerraformFiles {
    fn from_rendered(rendered: &RenderedChart) -> Self {
        Self {
            main: rendered.file_content(MAIN_FILE),
            variables: rendered.file_content(VARIABLES_FILE),
            tf_vars: rendered.file_content(TFVARS_FILE).into_bytes(),
        }
    }
}

/// Location of the infrastructure chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraChartConfig {
    /// Directory holding the chart
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    /// Chart name
    #[serde(default = "default_chart_name")]
    pub chart_name: String,
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(INFRA_CHART_PATH)
}

fn default_chart_name() -> String {
    INFRA_CHART_NAME.to_string()
}

impl Default for InfraChartConfig {
    fn default() -> Self {
        Self {
            chart_path: default_chart_path(),
            chart_name: default_chart_name(),
        }
    }
}

/// Render the gcp-infra chart with values computed from the inputs
pub async fn render_terraformer_chart<R>(
    renderer: &R,
    infra: &Infrastructure,
    account: &ServiceAccount,
    config: &InfrastructureConfig,
    cluster: &Cluster,
) -> Result<TerraformFiles, R::Error>
where
    R: ChartRenderer + ?Sized,
{
    render_terraformer_chart_with(
        renderer,
        &InfraChartConfig::default(),
        infra,
        account,
        config,
        cluster,
    )
    .await
}

/// Render the chart described by `chart` with values computed from the inputs
pub async fn render_terraformer_chart_with<R>(
    renderer: &R,
    chart: &InfraChartConfig,
    infra: &Infrastructure,
    account: &ServiceAccount,
    config: &InfrastructureConfig,
    cluster: &Cluster,
) -> Result<TerraformFiles, R::Error>
where
    R: ChartRenderer + ?Sized,
{
    let values = compute_terraformer_chart_values(infra, account, config, cluster).to_value()?;

    debug!(
        "Rendering chart {} from {} for namespace {}",
        chart.chart_name,
        chart.chart_path.display(),
        infra.namespace
    );

    let rendered = renderer
        .render(
            &chart.chart_path,
            &chart.chart_name,
            &infra.namespace,
            values,
        )
        .await
        .map_err(|e| {
            warn!("Failed to render chart {}: {}", chart.chart_name, e);
            e
        })?;

    info!(
        "Rendered chart {} for namespace {}",
        chart.chart_name, infra.namespace
    );

    Ok(TerraformFiles::from_rendered(&rendered))
}

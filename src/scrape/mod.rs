//! Scrape orchestration: tool discovery, invocation, and normalization.
//!
//! The workflow is a three-step sequence against a remote automation server:
//!
//! ```text
//! tools/list → description match → tools/call → normalize
//! ```
//!
//! Any failure along the way degrades to the bundled fallback set after a
//! short delay, so [`ScrapeOrchestrator::trigger_scrape`] never fails and
//! never returns an empty sequence. Callers can still tell live data from
//! fallback data via [`ScrapeOutcome::data_source`].

mod normalize;
mod rpc;

pub use rpc::{HttpRpcClient, RpcClient};

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::app::{CurioError, Result};
use crate::config::ScrapeConfig;
use crate::domain::ContentItem;
use crate::samples;

/// Where a scrape's items actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// Result of a scrape: always a non-empty item sequence, tagged with its
/// provenance.
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    pub items: Vec<ContentItem>,
    pub data_source: DataSource,
    /// Why live data was unavailable; set only for fallback outcomes.
    pub degraded_reason: Option<String>,
}

/// A remote automation server's self-reported capability.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub struct ScrapeOrchestrator {
    client: Arc<dyn RpcClient>,
    target_description: String,
    fallback_match: String,
    fallback_delay: Duration,
}

impl ScrapeOrchestrator {
    pub fn new(client: Arc<dyn RpcClient>, cfg: &ScrapeConfig) -> Self {
        Self {
            client,
            target_description: cfg.target_description.clone(),
            fallback_match: cfg.fallback_match.clone(),
            fallback_delay: Duration::from_millis(cfg.fallback_delay_ms),
        }
    }

    /// Run the scrape workflow.
    ///
    /// Never fails: any error on the live path (transport, no matching tool,
    /// unusable payload) is logged, and the bundled fallback set is served
    /// after [`ScrapeConfig::fallback_delay_ms`] with the reason preserved.
    pub async fn trigger_scrape(&self) -> ScrapeOutcome {
        match self.scrape_live().await {
            Ok(items) => {
                info!(count = items.len(), "scrape returned live data");
                ScrapeOutcome {
                    items,
                    data_source: DataSource::Live,
                    degraded_reason: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "scrape failed, serving fallback data");
                sleep(self.fallback_delay).await;
                ScrapeOutcome {
                    items: samples::fallback_items(),
                    data_source: DataSource::Fallback,
                    degraded_reason: Some(e.to_string()),
                }
            }
        }
    }

    async fn scrape_live(&self) -> Result<Vec<ContentItem>> {
        let tools = self.list_tools().await?;
        debug!(count = tools.len(), "discovered tools");

        let tool = self.match_tool(&tools).ok_or_else(|| {
            CurioError::Rpc(format!(
                "no tool matches description {:?}",
                self.target_description
            ))
        })?;
        info!(tool = %tool.name, "invoking workflow tool");

        let result = self
            .client
            .call(
                "tools/call",
                Some(json!({"name": tool.name, "arguments": {}})),
            )
            .await?;

        normalize::items_from_call_result(&result).ok_or_else(|| {
            CurioError::PayloadParse("tool call returned no parsable item array".into())
        })
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>> {
        let result = self.client.call("tools/list", None).await?;
        // A response without a tools list is a normal zero-tool discovery
        let tools = result
            .get("tools")
            .cloned()
            .unwrap_or_else(|| json!([]));
        Ok(serde_json::from_value(tools)?)
    }

    /// First tool whose trimmed description equals the target phrase, or
    /// whose description contains the fallback substring.
    fn match_tool<'a>(&self, tools: &'a [ToolDescriptor]) -> Option<&'a ToolDescriptor> {
        tools.iter().find(|tool| {
            tool.description.as_deref().is_some_and(|d| {
                d.trim() == self.target_description || d.contains(&self.fallback_match)
            })
        })
    }
}

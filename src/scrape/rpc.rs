use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

use crate::app::{CurioError, Result};
use crate::config::ScrapeConfig;

/// Single-endpoint JSON-RPC 2.0 transport.
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// POST one request and return its `result` member.
    ///
    /// A non-2xx status or a JSON-RPC `error` member is an error.
    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value>;
}

pub struct HttpRpcClient {
    client: Client,
    endpoint: Option<Url>,
    auth_token: Option<String>,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Build a client from config. An invalid endpoint URL is rejected here;
    /// a missing endpoint is allowed and only surfaces when a call is made.
    pub fn from_config(cfg: &ScrapeConfig) -> Result<Self> {
        let endpoint = match cfg.endpoint.as_deref() {
            Some(raw) => Some(Url::parse(raw)?),
            None => None,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("curio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            auth_token: cfg.auth_token.clone(),
            next_id: AtomicU64::new(1),
        })
    }
}

#[async_trait]
impl RpcClient for HttpRpcClient {
    async fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let endpoint = self
            .endpoint
            .clone()
            .ok_or_else(|| CurioError::Config("scrape endpoint not configured".into()))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &self.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                CurioError::Config("bearer token contains invalid header characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut body = json!({
            "jsonrpc": "2.0",
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
            "method": method,
        });
        if let Some(params) = params {
            body["params"] = params;
        }

        tracing::debug!(method, %endpoint, "sending JSON-RPC request");

        let response = self
            .client
            .post(endpoint)
            .headers(headers)
            .json(&body)
            .send()
            .await?;
        response.error_for_status_ref()?;

        let envelope: Value = response.json().await?;
        if let Some(error) = envelope.get("error") {
            return Err(CurioError::Rpc(error.to_string()));
        }

        Ok(envelope.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_endpoint_is_a_config_error() {
        let client = HttpRpcClient::from_config(&ScrapeConfig::default()).unwrap();
        let err = client.call("tools/list", None).await.unwrap_err();
        assert!(matches!(err, CurioError::Config(_)));
    }

    #[test]
    fn test_invalid_endpoint_rejected_at_build_time() {
        let cfg = ScrapeConfig {
            endpoint: Some("not a url".into()),
            ..Default::default()
        };
        assert!(matches!(
            HttpRpcClient::from_config(&cfg),
            Err(CurioError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_valid_endpoint_accepted() {
        let cfg = ScrapeConfig {
            endpoint: Some("https://automation.example.com/rpc".into()),
            auth_token: Some("token".into()),
            ..Default::default()
        };
        assert!(HttpRpcClient::from_config(&cfg).is_ok());
    }
}

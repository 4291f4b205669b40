use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::{ProviderError, ProviderInitError};
use crate::{
    domain::{
        errors::{LookupError, LookupResult},
        models::LookupRecord,
        value_objects::MobileNumber,
    },
    ports::providers::LookupProvider,
};

pub const DEFAULT_ENDPOINT: &str = "https://hitackgrop.vercel.app/get_data";
pub const DEFAULT_ACCESS_KEY: &str = "Demo";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Where and how to reach the upstream lookup API
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Full URL of the lookup endpoint; `mobile` and `key` are appended as query parameters
    pub endpoint: String,
    pub access_key: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `{"data": {"data": {"result": [...]}}}`
#[derive(Debug, Deserialize)]
struct UpstreamEnvelope {
    data: UpstreamOuter,
}

#[derive(Debug, Deserialize)]
struct UpstreamOuter {
    data: UpstreamPayload,
}

#[derive(Debug, Deserialize)]
struct UpstreamPayload {
    result: Vec<Value>,
}

impl UpstreamEnvelope {
    fn into_first_record(self) -> Result<LookupRecord, ProviderError> {
        match self.data.data.result.into_iter().next() {
            Some(Value::Object(fields)) => Ok(LookupRecord::new(fields)),
            Some(other) => Err(ProviderError::UnexpectedRecord {
                kind: json_kind(&other),
            }),
            None => Err(ProviderError::EmptyResult),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// LookupProvider backed by the upstream HTTP API
pub struct HttpLookupProvider {
    client: Client,
    endpoint: Url,
    access_key: String,
}

impl HttpLookupProvider {
    /// Create a new provider; the endpoint is validated up front
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderInitError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| ProviderInitError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            access_key: config.access_key,
        })
    }

    /// Issue the GET and decode the envelope
    async fn request_envelope(
        &self,
        mobile: &MobileNumber,
    ) -> Result<UpstreamEnvelope, ProviderError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("mobile", mobile.as_str()), ("key", self.access_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "upstream responded");

        if status.is_client_error() || status.is_server_error() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
    async fn fetch_record(&self, mobile: &MobileNumber) -> LookupResult<LookupRecord> {
        self.request_envelope(mobile)
            .await
            .and_then(UpstreamEnvelope::into_first_record)
            .map_err(LookupError::from)
    }
}

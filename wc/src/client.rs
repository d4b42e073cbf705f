use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::environment::Document;
use crate::error::{Result, WcError};
use crate::origin::Origin;

/// Body the API sends alongside a failing status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Async client for the match API of a single origin.
///
/// Each call issues one GET with default headers, no body and no query
/// string. Only a 200 response is accepted; its body is decoded as JSON and
/// logged once at `info` level. There are no retries and no deduplication:
/// concurrent calls are independent requests.
#[derive(Debug, Clone)]
pub struct GroupStageClient {
    http_client: reqwest::Client,
    origin: Origin,
}

impl GroupStageClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::build(config.origin.clone(), config.timeout)
    }

    pub fn from_document<D: Document + ?Sized>(doc: &D, timeout: Option<Duration>) -> Result<Self> {
        Self::build(doc.origin().clone(), timeout)
    }

    fn build(origin: Origin, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| WcError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            origin,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Loads the matches of one group stage from `/api/match/group/{group}`.
    ///
    /// `group` is interpolated as-is; an empty or odd value simply produces a
    /// URL the server may reject.
    pub async fn load_group_stage(&self, group: &str) -> Result<Value> {
        let value = self.get_json(&self.origin.group_stage_url(group)).await?;
        log::info!("group stage {}: {}", group, value);
        Ok(value)
    }

    /// Same as [`load_group_stage`](Self::load_group_stage), decoding into `T`.
    pub async fn load_group_stage_as<T: DeserializeOwned>(&self, group: &str) -> Result<T> {
        let value = self.load_group_stage(group).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Loads the countries drawn into a group from `/api/country/group/{group}`.
    pub async fn load_country_group(&self, group: &str) -> Result<Value> {
        let value = self.get_json(&self.origin.country_group_url(group)).await?;
        log::info!("country group {}: {}", group, value);
        Ok(value)
    }

    pub async fn fetch_version(&self) -> Result<Value> {
        let value = self.get_json(&self.origin.version_url()).await?;
        log::info!("api version: {}", value);
        Ok(value)
    }

    /// Starts loading a group stage in the background and returns right away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_group_stage(&self, group: impl Into<String>) -> JoinHandle<Result<Value>> {
        let client = self.clone();
        let group = group.into();
        tokio::spawn(async move { client.load_group_stage(&group).await })
    }

    /// Loads several group stages concurrently. Results come back in input order.
    pub async fn load_group_stages<I, S>(&self, groups: I) -> Vec<(String, Result<Value>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let handles: Vec<(String, JoinHandle<Result<Value>>)> = groups
            .into_iter()
            .map(|group| {
                let group: String = group.into();
                let handle = self.spawn_group_stage(group.clone());
                (group, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (group, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(WcError::from(e)),
            };
            results.push((group, result));
        }
        results
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let detail = Self::extract_error_detail(&body);
            return Err(WcError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn extract_error_detail(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|parsed| parsed.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() -> Result<()> {
        let config = ClientConfig::default();
        let client = GroupStageClient::new(&config)?;

        assert_eq!(client.origin().as_str(), "http://localhost:8080");
        assert_eq!(config.timeout, None);
        Ok(())
    }

    #[test]
    fn test_client_rejects_zero_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(matches!(GroupStageClient::new(&config), Err(WcError::Config(_))));
    }

    #[test]
    fn test_client_from_document() -> Result<()> {
        let doc = crate::environment::StaticDocument::new(
            Origin::parse("http://127.0.0.1:1213/index.html")?,
            "",
        );
        let client = GroupStageClient::from_document(&doc, None)?;

        assert_eq!(client.origin().as_str(), "http://127.0.0.1:1213");
        Ok(())
    }

    #[test]
    fn test_extract_error_detail() {
        let detail = GroupStageClient::extract_error_detail(
            r#"{"error":"no matching items could be found"}"#,
        );
        assert_eq!(detail, Some("no matching items could be found".to_string()));
    }

    #[test]
    fn test_extract_error_detail_other_bodies() {
        assert_eq!(GroupStageClient::extract_error_detail("Not Found"), None);
        assert_eq!(GroupStageClient::extract_error_detail(""), None);
        assert_eq!(GroupStageClient::extract_error_detail(r#"{"data":[]}"#), None);
    }
}

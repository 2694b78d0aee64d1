pub mod render;

use crate::domain::DaRecord;
use crate::features::records::model::JsonDaRecord;
use anyhow::{Context, Result};
use reqwest::Client;

/// Result of the viewer's single fetch. The row collection is either
/// replaced wholesale or left empty, there is no partial state.
pub enum FetchOutcome {
    Loaded(Vec<DaRecord>),
    Failed(String),
}

/// Thin client for the gateway's one route.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One GET of /api/data. Non-2xx statuses are errors, the body is
    /// taken verbatim in response order.
    pub async fn fetch_records(&self) -> Result<Vec<DaRecord>> {
        let url = format!("{}/api/data", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach API gateway at {}", url))?
            .error_for_status()
            .context("API gateway returned an error status")?;

        let rows: Vec<JsonDaRecord> = response
            .json()
            .await
            .context("Failed to decode API gateway response")?;

        Ok(rows.into_iter().map(DaRecord::from).collect())
    }
}

/// Wraps the fetch into an outcome instead of propagating: a failed fetch
/// degrades to an empty table, it never aborts the viewer.
pub async fn fetch_once(client: ApiClient) -> FetchOutcome {
    match client.fetch_records().await {
        Ok(records) => FetchOutcome::Loaded(records),
        Err(e) => FetchOutcome::Failed(format!("{:#}", e)),
    }
}

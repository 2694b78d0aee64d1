use crate::database::RecordRepository;
use crate::domain::DaRecord;
use crate::features::records::model::DbDaRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Queries a hosted PostgREST-style endpoint for the record snapshot.
/// The service is an opaque collaborator: it enforces the schema and does
/// the ordering, we just issue one authenticated GET per request.
pub struct HostedRecordRepository {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl HostedRecordRepository {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table: "da_records".to_string(),
        }
    }
}

#[async_trait]
impl RecordRepository for HostedRecordRepository {
    async fn get_all_records(&self) -> Result<Vec<DaRecord>> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.table);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "da_number.desc")])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .with_context(|| format!("Failed to reach data service at {}", url))?;

        let response = response
            .error_for_status()
            .context("Data service rejected the query")?;

        let rows: Vec<DbDaRecord> = response
            .json()
            .await
            .context("Failed to decode data service response")?;

        Ok(rows.into_iter().map(DaRecord::from).collect())
    }
}

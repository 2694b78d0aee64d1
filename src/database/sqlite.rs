use crate::database::RecordRepository;
use crate::domain::DaRecord;
use crate::features::records::model::DbDaRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

/// Reads the SQLite snapshot database the scraper writes to.
pub struct SqliteRecordRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRecordRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    async fn get_all_records(&self) -> Result<Vec<DaRecord>> {
        let rows = sqlx::query_as::<_, DbDaRecord>(
            r#"
            SELECT
                da_number,
                detail_url,
                description,
                submitted_date,
                decision,
                categories,
                property_address,
                applicant,
                progress,
                fees,
                documents,
                contact_council
            FROM da_records
            ORDER BY da_number DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query da_records")?;

        Ok(rows.into_iter().map(DaRecord::from).collect())
    }
}

use crate::domain::DaRecord;
use anyhow::Result;
use async_trait::async_trait;

pub mod hosted;
pub mod sqlite;

// a RecordRepository can be shared between request handlers (Arc<dyn ...>)
// read-only by design: the scraper owns the write path, this service only
// reads a snapshot at request time.
// backend-specific implementations live in "sqlite.rs" and "hosted.rs"
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// All DA records, ordered by DA number descending.
    async fn get_all_records(&self) -> Result<Vec<DaRecord>>;
}

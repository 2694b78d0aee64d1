use crate::domain::DaRecord;
use serde::{Deserialize, Serialize};

/// Storage-shape row: snake_case column names as the scraper writes them.
/// Shared by both repository backends (sqlx row for SQLite, JSON object for
/// the hosted PostgREST endpoint, which also exposes raw column names).
#[derive(sqlx::FromRow, Deserialize, Clone)]
pub struct DbDaRecord {
    pub da_number: i64,
    pub detail_url: String,
    pub description: String,
    pub submitted_date: String,
    pub decision: String,
    pub categories: String,
    pub property_address: String,
    pub applicant: String,
    pub progress: String,
    pub fees: String,
    pub documents: String,
    pub contact_council: String,
}

/// Wire shape for `GET /api/data`: the original scraper header names,
/// exactly as they appear in the exported CSV.
#[derive(Serialize, Deserialize)]
pub struct JsonDaRecord {
    #[serde(rename = "DA_Number")]
    pub da_number: i64,
    #[serde(rename = "Detail_URL")]
    pub detail_url: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Submitted_Date")]
    pub submitted_date: String,
    #[serde(rename = "Decision")]
    pub decision: String,
    #[serde(rename = "Categories")]
    pub categories: String,
    #[serde(rename = "Property_Address")]
    pub property_address: String,
    #[serde(rename = "Applicant")]
    pub applicant: String,
    #[serde(rename = "Progress")]
    pub progress: String,
    #[serde(rename = "Fees")]
    pub fees: String,
    #[serde(rename = "Documents")]
    pub documents: String,
    #[serde(rename = "Contact_Council")]
    pub contact_council: String,
}

/// Error body for failed API calls: `{"error": "<message>"}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<DbDaRecord> for DaRecord {
    fn from(row: DbDaRecord) -> Self {
        DaRecord {
            da_number: row.da_number,
            detail_url: row.detail_url,
            description: row.description,
            submitted_date: row.submitted_date,
            decision: row.decision,
            categories: row.categories,
            property_address: row.property_address,
            applicant: row.applicant,
            progress: row.progress,
            fees: row.fees,
            documents: row.documents,
            contact_council: row.contact_council,
        }
    }
}

impl From<&DaRecord> for JsonDaRecord {
    fn from(record: &DaRecord) -> Self {
        JsonDaRecord {
            da_number: record.da_number,
            detail_url: record.detail_url.to_owned(),
            description: record.description.to_owned(),
            submitted_date: record.submitted_date.to_owned(),
            decision: record.decision.to_owned(),
            categories: record.categories.to_owned(),
            property_address: record.property_address.to_owned(),
            applicant: record.applicant.to_owned(),
            progress: record.progress.to_owned(),
            fees: record.fees.to_owned(),
            documents: record.documents.to_owned(),
            contact_council: record.contact_council.to_owned(),
        }
    }
}

impl From<JsonDaRecord> for DaRecord {
    fn from(json: JsonDaRecord) -> Self {
        DaRecord {
            da_number: json.da_number,
            detail_url: json.detail_url,
            description: json.description,
            submitted_date: json.submitted_date,
            decision: json.decision,
            categories: json.categories,
            property_address: json.property_address,
            applicant: json.applicant,
            progress: json.progress,
            fees: json.fees,
            documents: json.documents,
            contact_council: json.contact_council,
        }
    }
}

use derive_more::derive::Display;

/// Sentinel the upstream scraper stores when a DA has no document link.
/// Absence is signalled with this literal string, not with NULL.
pub const DOCUMENTS_NOT_AVAILABLE: &str = "Not available";

/// A single Development Application record, as scraped from the council
/// portal. Read-only from this system's perspective: records are created
/// and updated entirely by the external scraper.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("DA {}", da_number)]
pub struct DaRecord {
    pub da_number: i64,
    pub detail_url: String,
    pub description: String,
    // opaque date string, never parsed or validated here
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

impl DaRecord {
    /// The documents URL, if one exists. Empty strings and the
    /// "Not available" sentinel both count as absent.
    pub fn documents_link(&self) -> Option<&str> {
        let value = self.documents.trim();
        if value.is_empty() || value == DOCUMENTS_NOT_AVAILABLE {
            None
        } else {
            Some(value)
        }
    }
}

mod record;

pub use record::{DaRecord, DOCUMENTS_NOT_AVAILABLE};

pub mod record;

pub use record::{fields, is_truthy, AgentRecord, FILENAME_KEY};

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Listing,  // Primary directory index
    Fallback, // Repository contents API
    Unavailable,
}

impl CatalogSource {
    pub fn as_str(&self) -> &str {
        match self {
            CatalogSource::Listing => "listing",
            CatalogSource::Fallback => "fallback",
            CatalogSource::Unavailable => "unavailable",
        }
    }
}

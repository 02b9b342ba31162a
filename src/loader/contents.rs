use serde::Deserialize;

use super::listing::is_record_entry;

/// One entry of a repository contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDescriptor {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentDescriptor {
    pub fn is_record(&self) -> bool {
        is_record_entry(&self.name)
    }
}

pub fn parse_contents(body: &str) -> serde_json::Result<Vec<ContentDescriptor>> {
    serde_json::from_str(body)
}

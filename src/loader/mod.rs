//! Discovery and retrieval of agent records.
//!
//! The primary source is a static directory index whose `.json` links are
//! fetched one by one. When the index itself cannot be retrieved the loader
//! falls back to a repository contents API. Fetches are strictly sequential.

pub mod contents;
pub mod error;
pub mod listing;

pub use contents::ContentDescriptor;
pub use error::LoadError;
pub use listing::parse_listing;

use anyhow::Result;
use reqwest::{RequestBuilder, Url};

use crate::config::Config;
use crate::types::{AgentRecord, CatalogSource};

/// Records from one load cycle, in discovery order.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub records: Vec<AgentRecord>,
    pub source: CatalogSource,
}

pub struct CatalogLoader {
    client: reqwest::Client,
    agents_url: String,
    fallback_url: String,
    github_token: Option<String>,
}

impl CatalogLoader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(concat!("AgentHub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            agents_url: config.agents_url.clone(),
            fallback_url: config.fallback_url.clone(),
            github_token: config.github_token.clone(),
        })
    }

    /// Loads every reachable record. Never fails: total failure yields an
    /// empty collection.
    pub async fn load_agents(&self) -> Vec<AgentRecord> {
        self.load().await.records
    }

    pub async fn load(&self) -> LoadedCatalog {
        match self.load_from_listing().await {
            Ok(records) => {
                log::info!(
                    "Loaded {} agents from listing {}",
                    records.len(),
                    self.agents_url
                );
                LoadedCatalog {
                    records,
                    source: CatalogSource::Listing,
                }
            }
            Err(e) => {
                log::warn!("Failed to load agents from directory, using fallback: {}", e);
                match self.load_from_fallback().await {
                    Ok(records) => {
                        log::info!(
                            "Loaded {} agents from fallback {}",
                            records.len(),
                            self.fallback_url
                        );
                        LoadedCatalog {
                            records,
                            source: CatalogSource::Fallback,
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load agents: {}", e);
                        LoadedCatalog {
                            records: Vec::new(),
                            source: CatalogSource::Unavailable,
                        }
                    }
                }
            }
        }
    }

    /// Only a failure to retrieve the index is returned as an error; entry
    /// failures are logged and skipped.
    async fn load_from_listing(&self) -> Result<Vec<AgentRecord>, LoadError> {
        let base = listing_base(&self.agents_url)?;
        let html = self
            .fetch_text(self.client.get(base.clone()), base.as_str())
            .await?;

        let mut records = Vec::new();
        for entry in parse_listing(&html) {
            let url = match base.join(&entry) {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("Failed to load {}: {}", entry, e);
                    continue;
                }
            };

            match self.fetch_record(url.as_str()).await {
                Ok(record) => records.push(record.with_filename(entry)),
                Err(e) => log::warn!("Failed to load {}: {}", entry, e),
            }
        }

        Ok(records)
    }

    async fn load_from_fallback(&self) -> Result<Vec<AgentRecord>, LoadError> {
        let mut request = self
            .client
            .get(&self.fallback_url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.github_token {
            request = request.bearer_auth(token);
        }

        let body = self.fetch_text(request, &self.fallback_url).await?;
        let descriptors =
            contents::parse_contents(&body).map_err(|e| LoadError::parse(&self.fallback_url, e))?;

        let mut records = Vec::new();
        for descriptor in descriptors.into_iter().filter(ContentDescriptor::is_record) {
            let Some(download_url) = descriptor.download_url.as_deref() else {
                log::warn!("Failed to load {}: no download url", descriptor.name);
                continue;
            };

            match self.fetch_record(download_url).await {
                Ok(record) => records.push(record.with_filename(descriptor.name)),
                Err(e) => log::warn!("Failed to load {}: {}", descriptor.name, e),
            }
        }

        Ok(records)
    }

    async fn fetch_record(&self, url: &str) -> Result<AgentRecord, LoadError> {
        log::debug!("Fetching agent record {}", url);
        let body = self.fetch_text(self.client.get(url), url).await?;
        AgentRecord::from_json(&body).map_err(|e| LoadError::parse(url, e))
    }

    async fn fetch_text(&self, request: RequestBuilder, url: &str) -> Result<String, LoadError> {
        let response = request
            .send()
            .await
            .map_err(|e| LoadError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::transport(url, e))
    }
}

/// Entries are resolved relative to the index, so the base must name a
/// directory.
fn listing_base(agents_url: &str) -> Result<Url, LoadError> {
    let normalized = if agents_url.ends_with('/') {
        agents_url.to_string()
    } else {
        format!("{}/", agents_url)
    };

    Url::parse(&normalized).map_err(|e| LoadError::Url {
        url: agents_url.to_string(),
        reason: e.to_string(),
    })
}

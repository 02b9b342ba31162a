use thiserror::Error;

/// Failure while discovering or fetching agent records.
///
/// None of these reach the caller of [`super::CatalogLoader::load_agents`];
/// they are logged and recovered from at the lowest level that can.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{url} is not a valid agent record: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid url {url}: {reason}")]
    Url { url: String, reason: String },
}

impl LoadError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        LoadError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn parse(url: &str, source: serde_json::Error) -> Self {
        LoadError::Parse {
            url: url.to_string(),
            source,
        }
    }
}

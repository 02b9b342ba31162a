use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENTS_URL: &str = "https://mudler.github.io/agenthub/agents/";
pub const DEFAULT_FALLBACK_URL: &str = "https://api.github.com/repos/mudler/agenthub/contents/agents";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub agents_url: String,
    pub fallback_url: String,
    pub github_token: Option<String>,
    pub fetch_timeout_secs: u64,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agents_url: DEFAULT_AGENTS_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            github_token: None,
            fetch_timeout_secs: 30,
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            agents_url: std::env::var("AGENTHUB_AGENTS_URL").unwrap_or(defaults.agents_url),
            fallback_url: std::env::var("AGENTHUB_FALLBACK_URL").unwrap_or(defaults.fallback_url),
            github_token: std::env::var("AGENTHUB_GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            port: std::env::var("AGENTHUB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

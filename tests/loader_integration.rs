//! Loader behavior against mock HTTP sources:
//! - directory listing with per-entry failures
//! - fallback to the contents API
//! - total failure yielding an empty catalog

use agenthub::{CatalogLoader, CatalogSource, Config};
use serde_json::json;
use std::sync::{Mutex, OnceLock};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTENTS_PATH: &str = "/repos/mudler/agenthub/contents/agents";

/// Collects warnings and errors emitted by the loader.
struct CapturedLog {
    lines: Mutex<Vec<String>>,
}

impl log::Log for CapturedLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }
    }

    fn flush(&self) {}
}

fn captured_log() -> &'static CapturedLog {
    static LOG: OnceLock<&'static CapturedLog> = OnceLock::new();
    LOG.get_or_init(|| {
        let logger: &'static CapturedLog = Box::leak(Box::new(CapturedLog {
            lines: Mutex::new(Vec::new()),
        }));
        let _ = log::set_logger(logger);
        log::set_max_level(log::LevelFilter::Warn);
        logger
    })
}

fn logged_lines(needle: &str) -> Vec<String> {
    captured_log()
        .lines
        .lock()
        .map(|lines| lines.iter().filter(|l| l.contains(needle)).cloned().collect())
        .unwrap_or_default()
}

fn config_for(server: &MockServer) -> Config {
    Config {
        agents_url: format!("{}/agents/", server.uri()),
        fallback_url: format!("{}{}", server.uri(), CONTENTS_PATH),
        fetch_timeout_secs: 5,
        ..Config::default()
    }
}

async fn mount_json(server: &MockServer, at: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_text(server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_listing_skips_unparsable_entry() {
    let server = MockServer::start().await;

    let listing = r#"<html><body><ul>
        <li><a href="../">../</a></li>
        <li><a href="writer.json">writer.json</a></li>
        <li><a href="broken.json">broken.json</a></li>
        <li><a href="notes.txt">notes.txt</a></li>
        <li><a href="researcher.json">researcher.json</a></li>
    </ul></body></html>"#;
    mount_text(&server, "/agents/", 200, listing).await;
    mount_json(&server, "/agents/writer.json", json!({"name": "Writer"})).await;
    mount_text(&server, "/agents/broken.json", 200, "{ not json").await;
    mount_json(
        &server,
        "/agents/researcher.json",
        json!({"name": "Researcher", "model": "gpt-4"}),
    )
    .await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let catalog = loader.load().await;

    assert_eq!(catalog.source, CatalogSource::Listing);
    assert_eq!(catalog.records.len(), 2);
    assert_eq!(catalog.records[0].name().as_deref(), Some("Writer"));
    assert_eq!(catalog.records[0].filename().as_deref(), Some("writer.json"));
    assert_eq!(catalog.records[1].name().as_deref(), Some("Researcher"));
    assert_eq!(catalog.records[1].filename().as_deref(), Some("researcher.json"));
}

#[tokio::test]
async fn test_entry_failure_is_logged_as_warning() {
    captured_log();
    let server = MockServer::start().await;

    let listing = r#"<a href="corrupt-entry.json">x</a><a href="fine.json">y</a>"#;
    mount_text(&server, "/agents/", 200, listing).await;
    mount_text(&server, "/agents/corrupt-entry.json", 200, "{ nope").await;
    mount_json(&server, "/agents/fine.json", json!({"name": "Fine"})).await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let records = loader.load_agents().await;

    assert_eq!(records.len(), 1);
    let warnings = logged_lines("corrupt-entry.json");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("WARN Failed to load corrupt-entry.json"));
}

#[tokio::test]
async fn test_listing_skips_missing_and_non_object_entries() {
    let server = MockServer::start().await;

    let listing = r#"<a href="gone.json">gone</a><a href="list.json">list</a><a href="ok.json">ok</a>"#;
    mount_text(&server, "/agents/", 200, listing).await;
    mount_json(&server, "/agents/list.json", json!([1, 2, 3])).await;
    mount_json(&server, "/agents/ok.json", json!({"name": "Ok"})).await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let records = loader.load_agents().await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name().as_deref(), Some("Ok"));
}

#[tokio::test]
async fn test_falls_back_to_contents_api() {
    let server = MockServer::start().await;

    // No listing mounted: the index responds 404.
    mount_json(
        &server,
        CONTENTS_PATH,
        json!([
            {"name": "alpha.json", "download_url": format!("{}/raw/alpha.json", server.uri())},
            {"name": "README.md", "download_url": format!("{}/raw/README.md", server.uri())},
            {"name": "nested.json", "download_url": null},
            {"name": "failing.json", "download_url": format!("{}/raw/failing.json", server.uri())},
            {"name": "beta.json", "download_url": format!("{}/raw/beta.json", server.uri())}
        ]),
    )
    .await;
    mount_json(&server, "/raw/alpha.json", json!({"name": "Alpha"})).await;
    mount_text(&server, "/raw/failing.json", 500, "oops").await;
    mount_json(&server, "/raw/beta.json", json!({"name": "Beta"})).await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let catalog = loader.load().await;

    assert_eq!(catalog.source, CatalogSource::Fallback);
    let names: Vec<String> = catalog.records.iter().filter_map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert_eq!(catalog.records[1].filename().as_deref(), Some("beta.json"));
}

#[tokio::test]
async fn test_fallback_sends_github_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "bot.json", "download_url": format!("{}/raw/bot.json", server.uri())}
        ])))
        .mount(&server)
        .await;
    mount_json(&server, "/raw/bot.json", json!({"name": "Bot"})).await;

    let config = Config {
        github_token: Some("secret-token".to_string()),
        ..config_for(&server)
    };
    let loader = CatalogLoader::new(&config).unwrap();

    assert_eq!(loader.load_agents().await.len(), 1);
}

#[tokio::test]
async fn test_total_failure_returns_empty_catalog() {
    let server = MockServer::start().await;
    mount_text(&server, CONTENTS_PATH, 403, r#"{"message": "rate limited"}"#).await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let catalog = loader.load().await;

    assert!(catalog.records.is_empty());
    assert_eq!(catalog.source, CatalogSource::Unavailable);
}

#[tokio::test]
async fn test_empty_listing_does_not_trigger_fallback() {
    let server = MockServer::start().await;
    mount_text(&server, "/agents/", 200, "<html><body>empty</body></html>").await;
    mount_json(
        &server,
        CONTENTS_PATH,
        json!([{"name": "x.json", "download_url": format!("{}/raw/x.json", server.uri())}]),
    )
    .await;

    let loader = CatalogLoader::new(&config_for(&server)).unwrap();
    let catalog = loader.load().await;

    assert_eq!(catalog.source, CatalogSource::Listing);
    assert!(catalog.records.is_empty());
}

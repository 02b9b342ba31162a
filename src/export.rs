use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::types::AgentRecord;

pub const EXPORT_MIME: &str = "application/json";
pub const DEFAULT_EXPORT_NAME: &str = "agent.json";

/// A record prepared for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub body: String,
}

/// Exports the selected record. Nothing is selected, nothing is produced.
pub fn export(selected: Option<&AgentRecord>) -> Option<ExportArtifact> {
    let record = selected?;
    Some(ExportArtifact {
        filename: export_filename(record),
        mime: EXPORT_MIME,
        body: record.to_pretty_json(),
    })
}

/// `_filename`, else `<name>.json`, else `agent.json`. Only the last path
/// component of either is kept.
pub fn export_filename(record: &AgentRecord) -> String {
    record
        .filename()
        .and_then(|f| file_component(&f))
        .or_else(|| record.name().and_then(|n| file_component(&format!("{}.json", n))))
        .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string())
}

/// Control characters are dropped so the name stays valid in a header.
fn file_component(candidate: &str) -> Option<String> {
    let last: String = candidate
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    match last.trim() {
        "" | "." | ".." | ".json" => None,
        name => Some(name.to_string()),
    }
}

impl ExportArtifact {
    /// Writes the artifact into `dir` and returns the written path.
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, self.body.as_bytes()).await?;
        Ok(path)
    }

    pub fn content_disposition(&self) -> String {
        let quoted = self.filename.replace('\\', "\\\\").replace('"', "\\\"");
        format!("attachment; filename=\"{}\"", quoted)
    }
}

use crate::types::AgentRecord;

/// Records whose name, description, model or system prompt contains the
/// query, case-insensitively. An empty query keeps everything.
pub fn filter(records: &[AgentRecord], query: &str) -> Vec<AgentRecord> {
    filter_positions(records, query)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Same selection as [`filter`], as indices into `records`.
pub fn filter_positions(records: &[AgentRecord], query: &str) -> Vec<usize> {
    let query = normalize_query(query);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.is_empty() || matches(record, &query))
        .map(|(i, _)| i)
        .collect()
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `query` must already be normalized.
fn matches(record: &AgentRecord, query: &str) -> bool {
    [
        record.name(),
        record.description(),
        record.model(),
        record.system_prompt(),
    ]
    .into_iter()
    .any(|field| field.unwrap_or_default().to_lowercase().contains(query))
}

use serde::Serialize;

use super::escape::Html;
use crate::types::{fields, AgentRecord};

/// One labeled row of the detail summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Full view of a selected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub rows: Vec<SummaryRow>,
    /// The whole record as indented JSON.
    pub json: String,
}

enum RowKind {
    Text,
    Count,
    Toggle,
}

const SUMMARY_FIELDS: &[(&str, &str, RowKind)] = &[
    ("Name", fields::NAME, RowKind::Text),
    ("Model", fields::MODEL, RowKind::Text),
    ("Description", fields::DESCRIPTION, RowKind::Text),
    ("System Prompt", fields::SYSTEM_PROMPT, RowKind::Text),
    ("Periodic Runs", fields::PERIODIC_RUNS, RowKind::Text),
    ("Connectors", fields::CONNECTORS, RowKind::Count),
    ("Actions", fields::ACTIONS, RowKind::Count),
    ("MCP Servers", fields::MCP_SERVERS, RowKind::Count),
    ("Skills", fields::ENABLE_SKILLS, RowKind::Toggle),
    ("KB", fields::ENABLE_KB, RowKind::Toggle),
    ("Planning", fields::ENABLE_PLANNING, RowKind::Toggle),
    ("Reasoning", fields::ENABLE_REASONING, RowKind::Toggle),
];

pub fn present(record: &AgentRecord) -> DetailView {
    DetailView {
        title: record.display_name(),
        rows: summary(record),
        json: record.to_pretty_json(),
    }
}

/// Rows in fixed order. Fields that are absent, `null` or `""` have no row.
pub fn summary(record: &AgentRecord) -> Vec<SummaryRow> {
    SUMMARY_FIELDS
        .iter()
        .filter(|(_, key, _)| record.is_present(key))
        .filter_map(|(label, key, kind)| {
            let value = match kind {
                RowKind::Text => record.text(key)?,
                RowKind::Count => record.count(key).to_string(),
                RowKind::Toggle => enabled(record.flag(key)).to_string(),
            };
            Some(SummaryRow {
                label: *label,
                value,
            })
        })
        .collect()
}

fn enabled(on: bool) -> &'static str {
    if on {
        "Enabled"
    } else {
        "Disabled"
    }
}

impl DetailView {
    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }

    pub fn to_html(&self) -> Html {
        let mut html = Html::markup("<h2 class=\"modal-title\">");
        html.push_text(&self.title)
            .push_markup("</h2>\n<table class=\"summary-table\">\n");
        for row in &self.rows {
            html.push_markup("<tr><td><strong>")
                .push_text(row.label)
                .push_markup("</strong></td><td>")
                .push_text(&row.value)
                .push_markup("</td></tr>\n");
        }
        html.push_markup("</table>\n<h3>Full Configuration</h3>\n<pre>")
            .push_text(&self.json)
            .push_markup("</pre>\n");
        html
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let mut out = format!("{}\n\n", self.title);
        for row in &self.rows {
            out.push_str(&format!("{:<width$}  {}\n", row.label, row.value, width = width));
        }
        out.push_str("\nFull Configuration\n");
        out.push_str(&self.json);
        out.push('\n');
        out
    }
}

use serde::Serialize;

use super::escape::Html;
use crate::types::{fields, AgentRecord};

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_MODEL: &str = "N/A";

/// Summary of one record as shown in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Index in the rendered list; selection is keyed on it.
    pub position: usize,
    pub name: String,
    pub model: String,
    pub description: String,
    pub badges: Vec<String>,
}

/// The rendered grid: cards in display order plus the count shown above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    /// Query the cards were filtered with, carried into detail links.
    pub query: String,
    pub cards: Vec<CardView>,
}

impl CatalogView {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// An empty view renders the "no results" state instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn count_label(&self) -> String {
        let n = self.cards.len();
        format!("{} agent{}", n, if n == 1 { "" } else { "s" })
    }

    pub fn to_html(&self) -> Html {
        let mut html = Html::markup("<p class=\"agent-count\">");
        html.push_text(&self.count_label()).push_markup("</p>\n");

        if self.is_empty() {
            html.push_markup("<div class=\"no-results\">No agents found</div>\n");
            return html;
        }

        html.push_markup("<div class=\"agents-grid\">\n")
            .push(self.cards.iter().map(|c| c.to_html(&self.query)).collect())
            .push_markup("</div>\n");
        html
    }
}

pub fn render(records: &[AgentRecord]) -> CatalogView {
    render_for_query(records, "")
}

/// Renders records that were already filtered by `query`.
pub fn render_for_query(records: &[AgentRecord], query: &str) -> CatalogView {
    CatalogView {
        query: query.to_string(),
        cards: records
            .iter()
            .enumerate()
            .map(|(position, record)| card(position, record))
            .collect(),
    }
}

pub fn card(position: usize, record: &AgentRecord) -> CardView {
    CardView {
        position,
        name: record.display_name(),
        model: record.model().unwrap_or_else(|| NO_MODEL.to_string()),
        description: record
            .description()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        badges: badges(record),
    }
}

/// Capability badges in fixed order: standalone, planning, reasoning, KB,
/// periodic runs.
pub fn badges(record: &AgentRecord) -> Vec<String> {
    let mut badges = Vec::new();
    if record.flag(fields::STANDALONE_JOB) {
        badges.push("standalone".to_string());
    }
    if record.flag(fields::ENABLE_PLANNING) {
        badges.push("planning".to_string());
    }
    if record.flag(fields::ENABLE_REASONING) {
        badges.push("reasoning".to_string());
    }
    if record.flag(fields::ENABLE_KB) {
        badges.push("KB enabled".to_string());
    }
    if record.flag(fields::PERIODIC_RUNS) {
        if let Some(runs) = record.periodic_runs() {
            badges.push(format!("runs: {}", runs));
        }
    }
    badges
}

/// Link to the detail page of the card at `position` under `query`.
pub fn detail_href(position: usize, query: &str) -> String {
    if query.is_empty() {
        format!("/agents/{}", position)
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("/agents/{}?q={}", position, encoded)
    }
}

impl CardView {
    pub fn to_html(&self, query: &str) -> Html {
        let mut html = Html::markup("<a class=\"agent-card\" href=\"");
        html.push_attr(&detail_href(self.position, query))
            .push_markup("\">\n<h3>")
            .push_text(&self.name)
            .push_markup("</h3>\n<span class=\"model\">")
            .push_text(&self.model)
            .push_markup("</span>\n<p class=\"description\">")
            .push_text(&self.description)
            .push_markup("</p>\n<div class=\"details\">");
        for badge in &self.badges {
            html.push_markup("<span class=\"detail-item\">\u{2022} ")
                .push_text(badge)
                .push_markup("</span>");
        }
        html.push_markup("</div>\n</a>\n");
        html
    }
}

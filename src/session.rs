use crate::export::{self, ExportArtifact};
use crate::loader::CatalogLoader;
use crate::render::{self, CatalogView, DetailView};
use crate::search;
use crate::types::{AgentRecord, CatalogSource};

/// Browsing state for one session: the loaded collection, the positions of
/// the most recent view, and the selected record.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<AgentRecord>,
    source: CatalogSource,
    visible: Vec<usize>,
    selected: Option<usize>,
}

impl Session {
    /// Loads the catalog once and shows every record.
    pub async fn init(loader: &CatalogLoader) -> Self {
        let catalog = loader.load().await;
        Self::with_records(catalog.records, catalog.source)
    }

    pub fn with_records(records: Vec<AgentRecord>, source: CatalogSource) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            records,
            source,
            visible,
            selected: None,
        }
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Filters the collection and makes the result the current view.
    pub fn search(&mut self, query: &str) -> CatalogView {
        self.visible = search::filter_positions(&self.records, query);
        let shown: Vec<AgentRecord> = self
            .visible
            .iter()
            .map(|&i| self.records[i].clone())
            .collect();
        render::render_for_query(&shown, query.trim())
    }

    /// Selects the card at `position` in the current view. An unknown
    /// position leaves the previous selection untouched.
    pub fn select(&mut self, position: usize) -> Option<DetailView> {
        let index = *self.visible.get(position)?;
        self.selected = Some(index);
        Some(render::present(&self.records[index]))
    }

    pub fn selected(&self) -> Option<&AgentRecord> {
        self.selected.map(|i| &self.records[i])
    }

    pub fn export(&self) -> Option<ExportArtifact> {
        export::export(self.selected())
    }
}

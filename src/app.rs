//! Dashboard state
//!
//! [`Dashboard`] holds the loaded record set and the current filter criteria.
//! Every change to either recomputes the filtered view from the full record
//! set; every derived view (hierarchy, charts, overview, preview, activity,
//! summary sample) is computed from the filtered view on request.
//!
//! A failed load leaves the previously loaded records untouched.

use crate::analytics::{ActivityFeed, DashboardCharts, DataPreview, DatasetOverview};
use crate::config::SummaryConfig;
use crate::filter::{apply_filters, FilterCriteria, FilterSlot};
use crate::hierarchy::{build_hierarchy, GroupNode, NetworkGraph};
use crate::ingest::{self, ParseResult, RawInput};
use crate::summary::SummaryRequest;
use crate::types::Record;
use std::path::{Path, PathBuf};

/// Where the current record set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing loaded yet
    Empty,
    /// Records handed over already parsed (e.g. a bundled default data set)
    Provided,
    /// Pasted or in-memory text
    Pasted,
    /// A file on disk
    File(PathBuf),
}

/// Loaded records, filter criteria and the filtered view
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<Record>,
    criteria: FilterCriteria,
    filtered: Vec<Record>,
    source: DataSource,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            source: DataSource::Empty,
        }
    }

    // ==================== Loading ====================

    /// Replace the data set with already-parsed records
    pub fn load_records(&mut self, records: Vec<Record>) {
        self.replace(records, DataSource::Provided);
    }

    /// Parse pasted text and replace the data set on success
    pub fn load_text(&mut self, text: &str) -> ParseResult<usize> {
        let records = ingest::parse(RawInput::text(text))?;
        Ok(self.replace(records, DataSource::Pasted))
    }

    /// Parse a file and replace the data set on success
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ParseResult<usize> {
        let path = path.as_ref();
        let records = ingest::parse_file(path)?;
        Ok(self.replace(records, DataSource::File(path.to_path_buf())))
    }

    fn replace(&mut self, records: Vec<Record>, source: DataSource) -> usize {
        tracing::info!("Loaded {} record(s) from {:?}", records.len(), source);
        self.records = records;
        self.source = source;
        self.refresh();
        self.records.len()
    }

    // ==================== Filtering ====================

    /// Set one filter slot
    pub fn set_filter(&mut self, slot: FilterSlot, pattern: impl Into<String>) {
        self.criteria.set(slot, pattern);
        self.refresh();
    }

    /// Replace all criteria at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Empty every filter slot
    pub fn clear_filters(&mut self) {
        self.criteria.reset();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = apply_filters(&self.records, &self.criteria);
    }

    // ==================== Accessors ====================

    /// The full loaded record set
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records matching the current criteria
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    // ==================== Derived views ====================

    /// Grouping hierarchy of the filtered records
    pub fn hierarchy(&self) -> GroupNode {
        build_hierarchy(&self.filtered)
    }

    /// Node/link form of the hierarchy
    pub fn network_graph(&self) -> NetworkGraph {
        NetworkGraph::from_hierarchy(&self.hierarchy())
    }

    pub fn overview(&self) -> DatasetOverview {
        DatasetOverview::compute(&self.filtered)
    }

    pub fn charts(&self) -> DashboardCharts {
        DashboardCharts::compute(&self.filtered)
    }

    pub fn preview(&self, limit: usize) -> DataPreview {
        DataPreview::new(&self.filtered, limit)
    }

    /// Activity feed of the first `limit` filtered records
    pub fn activity(&self, limit: usize) -> ActivityFeed {
        ActivityFeed::new(&self.filtered, limit)
    }

    /// Summary request over the filtered records
    ///
    /// A blank `instruction` falls back to the configured one.
    pub fn summary_request(
        &self,
        instruction: &str,
        config: &SummaryConfig,
    ) -> Option<SummaryRequest> {
        let instruction = if instruction.trim().is_empty() {
            config.instruction.as_str()
        } else {
            instruction
        };
        SummaryRequest::new(&self.filtered, instruction, config.model, config.sample_limit)
    }
}

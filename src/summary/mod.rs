//! AI summary boundary
//!
//! The dashboard can ask a generative-text service for a free-form summary of
//! the filtered records. This module owns everything on our side of that call:
//!
//! - [`SummaryRequest`] - A bounded sample of the filtered records plus the user's instruction
//! - [`SummaryProvider`] - The seam a concrete text-generation client plugs into
//! - [`SummaryWorker`] - Runs a provider on a background thread and reports back over a channel
//!
//! The request is a snapshot: later filter changes or data loads never affect
//! a running summary, and a failed summary never affects the dashboard data.

pub mod worker;

pub use worker::{SummaryEvent, SummaryWorker};

use crate::types::Record;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of records sent along with a summary request
pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

/// Instruction used when the user leaves the prompt empty
pub const DEFAULT_INSTRUCTION: &str =
    "Please provide a comprehensive summary of this medical device distribution dataset.";

/// Errors reported by a summary provider
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Summary worker disconnected")]
    Disconnected,
}

/// Text generation models offered for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SummaryModel {
    #[default]
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3Flash,
    #[serde(rename = "gemini-3.1-pro-preview")]
    Gemini31Pro,
}

impl SummaryModel {
    /// Model identifier sent to the service
    pub fn id(&self) -> &'static str {
        match self {
            SummaryModel::Gemini3Flash => "gemini-3-flash-preview",
            SummaryModel::Gemini31Pro => "gemini-3.1-pro-preview",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SummaryModel::Gemini3Flash => "Gemini 3 Flash",
            SummaryModel::Gemini31Pro => "Gemini 3.1 Pro",
        }
    }

    pub fn all() -> &'static [SummaryModel] {
        &[SummaryModel::Gemini3Flash, SummaryModel::Gemini31Pro]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }
}

impl std::fmt::Display for SummaryModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A summary request: instruction, model and a sample of the records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRequest {
    pub instruction: String,
    pub model: SummaryModel,
    pub sample: Vec<Record>,
    /// Size of the record set the sample was drawn from
    pub total_records: usize,
}

impl SummaryRequest {
    /// Build a request from the first `limit` records
    ///
    /// Returns `None` when there is nothing to summarize. A blank instruction
    /// falls back to [`DEFAULT_INSTRUCTION`].
    pub fn new(
        records: &[Record],
        instruction: &str,
        model: SummaryModel,
        limit: usize,
    ) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let instruction = if instruction.trim().is_empty() {
            DEFAULT_INSTRUCTION.to_string()
        } else {
            instruction.to_string()
        };

        Some(Self {
            instruction,
            model,
            sample: records.iter().take(limit).cloned().collect(),
            total_records: records.len(),
        })
    }

    /// Full prompt text: the instruction followed by the sample as pretty JSON
    pub fn prompt(&self) -> Result<String, SummaryError> {
        let sample = serde_json::to_string_pretty(&self.sample)?;
        Ok(format!("{}\n\nDataset sample:\n{}", self.instruction, sample))
    }
}

/// A text-generation backend
#[cfg_attr(test, mockall::automock)]
pub trait SummaryProvider: Send + Sync {
    /// Generate a summary for `prompt` with `model`
    fn generate(&self, model: SummaryModel, prompt: &str) -> Result<String, SummaryError>;
}

//! # DistVis-RS: Medical Device Distribution Analyzer
//!
//! Loads tabular distribution records (CSV or JSON), filters them and derives
//! the summaries, chart series and supplier network hierarchy a dashboard
//! renders.
//!
//! ## Architecture
//!
//! - **Ingest**: Record parser for delimited text with a header row and JSON arrays
//! - **Filter**: Eight substring filter slots, case-insensitive, AND-combined
//! - **Hierarchy**: Supplier > Category > License > Model > Customer grouping tree
//! - **Analytics**: Overview numbers, chart series and a tabular preview
//! - **Summary**: Bounded record sample and background worker for AI summaries
//!
//! Parsing, filtering and grouping are pure functions of their inputs. The
//! [`Dashboard`] holds the loaded records and criteria and recomputes the
//! filtered view from scratch on every change.
//!
//! ## Configuration
//!
//! Configuration and display settings are stored in the platform-appropriate
//! data directory under `dev.distvis.distvis-rs`:
//!
//! - **Linux**: `~/.local/share/dev.distvis.distvis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.distvis.distvis-rs/`
//! - **Windows**: `%APPDATA%\dev.distvis.distvis-rs\`
//!
//! ## Example
//!
//! ```ignore
//! use distvis_rs::{filter::FilterSlot, Dashboard};
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.load_file("distribution.csv")?;
//! dashboard.set_filter(FilterSlot::SupplierId, "s1");
//!
//! let root = dashboard.hierarchy();
//! for supplier in root.children() {
//!     println!("{} ({} records)", supplier.display_label(), supplier.record_count());
//! }
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod analytics;
pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod i18n;
pub mod ingest;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use app::{Dashboard, DataSource};
pub use config::{AppConfig, DisplaySettings};
pub use error::{DistVisError, Result};
pub use filter::{apply_filters, FilterCriteria, FilterSlot};
pub use hierarchy::{build_hierarchy, GroupLevel, GroupNode};
pub use ingest::{parse, ParseError, RawInput};
pub use types::Record;

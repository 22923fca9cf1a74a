//! Pricescope Core — CSV ingestion and time-series enrichment for daily
//! closing prices.
//!
//! The pipeline: raw CSV text → [`ingest::parse_closes`] → sorted
//! [`domain::PriceObservation`] sequence → [`series::enrich`] → enriched
//! sequence consumed by reports and exports. Around the pipeline:
//! - User-supplied event markers ([`domain::MarkerSet`])
//! - Summary statistics ([`summary::SummaryStats`])
//! - CSV/JSON artifacts ([`export`])
//! - A caller-owned [`session::Session`] holding the current dataset

pub mod domain;
pub mod export;
pub mod format;
pub mod ingest;
pub mod series;
pub mod session;
pub mod summary;

pub use domain::{
    EnrichedObservation, EventMarker, MarkerError, MarkerId, MarkerSet, PriceObservation,
};
pub use ingest::{parse_closes, CsvError};
pub use series::enrich;
pub use session::{LoadOutcome, Session};
pub use summary::SummaryStats;

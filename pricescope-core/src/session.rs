//! Session state — the caller-owned container for a loaded dataset.
//!
//! The core keeps no globals: a [`Session`] value owns the current enriched
//! dataset and the marker set, and the caller owns the `Session`. Loading
//! replaces the dataset wholesale; markers are user annotations independent
//! of any dataset and survive a reload.

use crate::domain::{EnrichedObservation, MarkerSet};
use crate::ingest::{parse_closes, CsvError};
use crate::series::enrich;
use crate::summary::SummaryStats;

/// Result of loading a CSV blob into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dataset was replaced with this many observations.
    Loaded { observations: usize },
    /// The parse succeeded structurally but produced no usable rows; the
    /// session now holds an empty dataset. An advisory, not an error.
    NoValidData,
}

/// In-memory state for one exploration session.
#[derive(Debug, Default)]
pub struct Session {
    observations: Vec<EnrichedObservation>,
    markers: MarkerSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and enrich `raw`, replacing the current dataset wholesale.
    ///
    /// Runs to completion synchronously; there is no partial state to
    /// observe. A failed parse leaves the previous dataset untouched.
    pub fn load_csv(&mut self, raw: &str) -> Result<LoadOutcome, CsvError> {
        let parsed = parse_closes(raw)?;
        self.observations = enrich(&parsed);
        if self.observations.is_empty() {
            Ok(LoadOutcome::NoValidData)
        } else {
            Ok(LoadOutcome::Loaded {
                observations: self.observations.len(),
            })
        }
    }

    /// The current enriched dataset, in date order.
    pub fn observations(&self) -> &[EnrichedObservation] {
        &self.observations
    }

    pub fn is_loaded(&self) -> bool {
        !self.observations.is_empty()
    }

    /// Summary statistics for the current dataset, `None` when empty.
    pub fn summary(&self) -> Option<SummaryStats> {
        SummaryStats::compute(&self.observations)
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut MarkerSet {
        &mut self.markers
    }

    /// Drop the dataset. Markers are kept.
    pub fn clear(&mut self) {
        self.observations.clear();
    }
}

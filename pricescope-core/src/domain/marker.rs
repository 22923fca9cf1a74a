//! Event markers — user-supplied date-labeled annotations.
//!
//! Markers are unrelated to price derivation. Whether a marker falls inside
//! the loaded date range is the renderer's concern; the set enforces only
//! label validity and date ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum marker label length, in characters.
pub const MAX_LABEL_CHARS: usize = 40;

/// Marker identity, assigned by the owning [`MarkerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl From<u64> for MarkerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker label is empty")]
    EmptyLabel,

    #[error("marker label is {len} characters (max 40)")]
    LabelTooLong { len: usize },
}

/// A single annotation: a date with a short label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub id: MarkerId,
    pub date: NaiveDate,
    pub label: String,
}

/// Date-ordered marker collection with an add/remove lifecycle.
///
/// Insertion keeps the set sorted by date ascending; a marker with an
/// existing date lands after its equals. Ids are handed out from a
/// monotonically increasing counter and never reused within the set's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<EventMarker>,
    next_id: u64,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker, validating the trimmed label.
    pub fn add(&mut self, date: NaiveDate, label: &str) -> Result<MarkerId, MarkerError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(MarkerError::EmptyLabel);
        }
        let len = label.chars().count();
        if len > MAX_LABEL_CHARS {
            return Err(MarkerError::LabelTooLong { len });
        }

        let id = MarkerId(self.next_id);
        self.next_id += 1;

        let at = self.markers.partition_point(|m| m.date <= date);
        self.markers.insert(
            at,
            EventMarker {
                id,
                date,
                label: label.to_string(),
            },
        );
        Ok(id)
    }

    /// Remove a marker by id. Returns whether one was removed.
    pub fn remove(&mut self, id: MarkerId) -> bool {
        match self.markers.iter().position(|m| m.id == id) {
            Some(at) => {
                self.markers.remove(at);
                true
            }
            None => false,
        }
    }

    /// Markers in date order.
    pub fn iter(&self) -> impl Iterator<Item = &EventMarker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[EventMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

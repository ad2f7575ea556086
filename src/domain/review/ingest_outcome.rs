// ============================================================
// INGEST OUTCOME
// ============================================================
// Per-document status of a merge, and the merge result itself

use serde::{Deserialize, Serialize};

use super::ReviewCollection;

/// What happened to one input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestStatus {
    /// Not attempted yet
    Pending,

    /// Parsed and contributed its `reviews` array
    Merged { reviews: usize },

    /// Valid JSON without a `reviews` array
    NoReviews,

    /// Unreadable or malformed; contributed nothing
    Failed { error: String },
}

/// Progress entry for a single input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOutcome {
    /// Document name (file name for uploads)
    pub document: String,

    /// True once parsing was attempted, whatever the result
    pub processed: bool,

    pub status: IngestStatus,
}

impl IngestOutcome {
    pub fn pending(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            processed: false,
            status: IngestStatus::Pending,
        }
    }

    pub fn completed(document: impl Into<String>, status: IngestStatus) -> Self {
        Self {
            document: document.into(),
            processed: true,
            status,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, IngestStatus::Failed { .. })
    }

    /// Parsed as JSON, with or without reviews
    pub fn is_parsed(&self) -> bool {
        matches!(
            self.status,
            IngestStatus::Merged { .. } | IngestStatus::NoReviews
        )
    }

    pub fn reviews_contributed(&self) -> usize {
        match self.status {
            IngestStatus::Merged { reviews } => reviews,
            _ => 0,
        }
    }
}

/// Result of one ingest operation
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub collection: ReviewCollection,

    /// One entry per input document, in submission order
    pub outcomes: Vec<IngestOutcome>,
}

impl IngestReport {
    /// At least one document parsed. A batch where every document failed
    /// (or an empty batch) yields no usable data.
    pub fn is_successful(&self) -> bool {
        self.outcomes.iter().any(IngestOutcome::is_parsed)
    }

    pub fn review_count(&self) -> usize {
        self.collection.len()
    }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.processed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

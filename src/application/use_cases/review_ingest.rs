// ============================================================
// REVIEW INGEST USE CASE
// ============================================================
// Merge many review documents into one collection, tolerating bad ones

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::error::Result;
use crate::domain::review::{
    IngestOutcome, IngestReport, IngestStatus, MergeOrder, Review, ReviewCollection,
};
use crate::infrastructure::document_source::{DocumentSource, InMemoryDocument};
use crate::infrastructure::json::{decode_document, parse_document, ReviewDocument};

/// Parse result for one document, sent from its reader task to the accumulator
struct DocumentCompletion {
    index: usize,
    name: String,
    result: Result<ReviewDocument>,
}

/// Reads documents concurrently and merges their `reviews` arrays
pub struct IngestMerger {
    order: MergeOrder,
}

impl Default for IngestMerger {
    fn default() -> Self {
        Self::new(MergeOrder::default())
    }
}

impl IngestMerger {
    pub fn new(order: MergeOrder) -> Self {
        Self { order }
    }

    /// Merge every source into one collection.
    ///
    /// Each source is read on its own task; a source that fails to read or
    /// parse is recorded in the report and contributes nothing.
    pub async fn merge(&self, sources: Vec<Arc<dyn DocumentSource>>) -> IngestReport {
        if sources.is_empty() {
            debug!("No review documents to merge");
            return IngestReport::default();
        }

        let names: Vec<String> = sources.iter().map(|s| s.name().to_string()).collect();
        let (tx, rx) = mpsc::unbounded_channel();

        for (index, source) in sources.into_iter().enumerate() {
            let tx = tx.clone();
            tokio::spawn(async move {
                let completion = read_document(index, source.as_ref()).await;
                // The accumulator holds the receiver until every sender is gone.
                let _ = tx.send(completion);
            });
        }
        drop(tx);

        MergeAccumulator::new(names, self.order).run(rx).await
    }

    /// Merge documents already held as text
    pub async fn merge_texts<N, C>(&self, documents: Vec<(N, C)>) -> IngestReport
    where
        N: Into<String>,
        C: Into<String>,
    {
        let sources = documents
            .into_iter()
            .map(|(name, content)| {
                Arc::new(InMemoryDocument::new(name, content)) as Arc<dyn DocumentSource>
            })
            .collect();
        self.merge(sources).await
    }
}

async fn read_document(index: usize, source: &dyn DocumentSource) -> DocumentCompletion {
    let result = match source.read().await {
        Ok(bytes) => parse_document(&decode_document(&bytes)),
        Err(e) => Err(e),
    };

    DocumentCompletion {
        index,
        name: source.name().to_string(),
        result,
    }
}

/// Single writer for the merged collection
struct MergeAccumulator {
    order: MergeOrder,
    outcomes: Vec<IngestOutcome>,

    /// Completion order: appended as documents arrive
    merged: Vec<Review>,

    /// Submission order: held per document until all have arrived
    slots: Vec<Vec<Review>>,
}

impl MergeAccumulator {
    fn new(names: Vec<String>, order: MergeOrder) -> Self {
        let slots = vec![Vec::new(); names.len()];
        Self {
            order,
            outcomes: names.into_iter().map(IngestOutcome::pending).collect(),
            merged: Vec::new(),
            slots,
        }
    }

    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<DocumentCompletion>) -> IngestReport {
        while let Some(completion) = rx.recv().await {
            self.accept(completion);
        }
        self.finish()
    }

    fn accept(&mut self, completion: DocumentCompletion) {
        let DocumentCompletion {
            index,
            name,
            result,
        } = completion;

        let status = match result {
            Ok(document) => {
                let status = match &document {
                    ReviewDocument::Reviews(reviews) => IngestStatus::Merged {
                        reviews: reviews.len(),
                    },
                    ReviewDocument::NoReviews => IngestStatus::NoReviews,
                };
                debug!(
                    document = %name,
                    reviews = document.review_count(),
                    "Parsed review document"
                );

                let reviews = document.into_reviews();
                match self.order {
                    MergeOrder::Completion => self.merged.extend(reviews),
                    MergeOrder::Submission => self.slots[index] = reviews,
                }
                status
            }
            Err(e) => {
                warn!(document = %name, error = %e, "Skipping unreadable review document");
                IngestStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        self.outcomes[index] = IngestOutcome::completed(name, status);
    }

    fn finish(self) -> IngestReport {
        for outcome in self.outcomes.iter().filter(|o| !o.processed) {
            warn!(document = %outcome.document, "Review document task ended without a result");
        }

        let reviews = match self.order {
            MergeOrder::Completion => self.merged,
            MergeOrder::Submission => self.slots.into_iter().flatten().collect(),
        };

        let report = IngestReport {
            collection: ReviewCollection::new(reviews),
            outcomes: self.outcomes,
        };

        info!(
            documents = report.outcomes.len(),
            failed = report.failed_count(),
            reviews = report.review_count(),
            "Merged review documents"
        );
        report
    }
}

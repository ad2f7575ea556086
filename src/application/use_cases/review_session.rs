// ============================================================
// REVIEW SESSION
// ============================================================
// In-memory state for one import → filter → export session

use std::sync::Arc;

use tracing::info;

use crate::domain::review::{
    ExportArtifact, ExportError, ExportPreview, ExporterConfig, FieldSelection, IngestReport,
    RatingFilter, Review, ReviewCollection, ReviewField,
};
use crate::infrastructure::document_source::DocumentSource;

use super::review_export::ExportSerializer;
use super::review_ingest::IngestMerger;
use super::sample_data::sample_collection;

/// Current collection plus the user's filter and field choices.
///
/// Filter and selection are passed to the serializer on every call; the
/// collection itself is only ever replaced, never edited.
pub struct ReviewSession {
    config: ExporterConfig,
    merger: IngestMerger,
    serializer: ExportSerializer,
    collection: Option<ReviewCollection>,
    filter: RatingFilter,
    fields: FieldSelection,
    last_report: Option<IngestReport>,
    exported: bool,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new(ExporterConfig::default())
    }
}

impl ReviewSession {
    pub fn new(config: ExporterConfig) -> Self {
        Self {
            merger: IngestMerger::new(config.merge_order),
            serializer: ExportSerializer::new(config.date.clone()),
            filter: config.default_filter,
            fields: config.default_fields,
            collection: None,
            last_report: None,
            exported: false,
            config,
        }
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    /// Replace the collection with the built-in sample
    pub fn load_sample(&mut self) -> &ReviewCollection {
        self.exported = false;
        self.last_report = None;
        info!("Loaded sample reviews");
        self.collection.insert(sample_collection())
    }

    /// Merge `sources` and, if any of them parsed, make the result current.
    ///
    /// When every source fails the previous collection stays loaded; the
    /// report is kept either way for status display.
    pub async fn ingest(&mut self, sources: Vec<Arc<dyn DocumentSource>>) -> &IngestReport {
        self.exported = false;
        let report = self.merger.merge(sources).await;

        if report.is_successful() {
            self.collection = Some(report.collection.clone());
        } else {
            info!(
                documents = report.outcomes.len(),
                "No usable review data in this batch"
            );
        }

        self.last_report.insert(report)
    }

    pub fn last_report(&self) -> Option<&IngestReport> {
        self.last_report.as_ref()
    }

    pub fn collection(&self) -> Option<&ReviewCollection> {
        self.collection.as_ref()
    }

    pub fn filter(&self) -> RatingFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: RatingFilter) {
        self.filter = filter;
    }

    pub fn fields(&self) -> &FieldSelection {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: FieldSelection) {
        self.fields = fields;
    }

    pub fn toggle_field(&mut self, field: ReviewField) {
        self.fields.toggle(field);
    }

    /// Reviews passing the current filter
    pub fn filtered(&self) -> Vec<&Review> {
        match &self.collection {
            Some(collection) => collection.filtered(self.filter).collect(),
            None => Vec::new(),
        }
    }

    /// Preview limited to the configured row count
    pub fn preview(&self) -> ExportPreview {
        self.preview_with_limit(self.config.preview_limit)
    }

    pub fn preview_with_limit(&self, limit: usize) -> ExportPreview {
        let empty = ReviewCollection::default();
        let collection = self.collection.as_ref().unwrap_or(&empty);
        self.serializer
            .preview(collection, self.filter, &self.fields, limit)
    }

    /// Serialize the current view. Nothing is produced when there is nothing to export.
    pub fn export(&mut self) -> Result<ExportArtifact, ExportError> {
        let collection = self
            .collection
            .as_ref()
            .ok_or(ExportError::EmptyCollection)?;
        let artifact = self
            .serializer
            .export(collection, self.filter, &self.fields)?;

        self.exported = true;
        Ok(artifact)
    }

    /// Whether the current data has been exported since it was loaded
    pub fn has_exported(&self) -> bool {
        self.exported
    }

    /// Drop the loaded data and the last ingest report
    pub fn reset(&mut self) {
        self.collection = None;
        self.last_report = None;
        self.exported = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{DateStyle, StarRating};
    use crate::infrastructure::document_source::InMemoryDocument;

    fn session() -> ReviewSession {
        ReviewSession::new(ExporterConfig {
            date: DateStyle::utc(),
            ..Default::default()
        })
    }

    fn doc(name: &str, content: &str) -> Arc<dyn DocumentSource> {
        Arc::new(InMemoryDocument::new(name, content))
    }

    #[test]
    fn test_sample_export_with_all_fields() {
        let mut session = session();
        session.load_sample();
        session.set_fields(FieldSelection::all());

        let artifact = session.export().unwrap();
        assert_eq!(artifact.row_count, 3);
        assert_eq!(artifact.text().lines().count(), 4);
        assert!(session.has_exported());
    }

    #[test]
    fn test_export_without_data() {
        let mut session = session();
        assert_eq!(session.export(), Err(ExportError::EmptyCollection));
        assert!(!session.has_exported());
    }

    #[test]
    fn test_export_with_no_fields() {
        let mut session = session();
        session.load_sample();
        for field in ReviewField::ALL {
            if session.fields().is_selected(field) {
                session.toggle_field(field);
            }
        }

        assert_eq!(session.export(), Err(ExportError::NoFieldsSelected));
        assert!(!session.has_exported());
    }

    #[test]
    fn test_filter_recomputes_without_reingest() {
        let mut session = session();
        session.load_sample();
        assert_eq!(session.filtered().len(), 3);

        session.set_filter(RatingFilter::Only(StarRating::Five));
        assert_eq!(session.filtered().len(), 2);

        session.set_filter(RatingFilter::All);
        assert_eq!(session.filtered().len(), 3);
        assert_eq!(session.collection().map(ReviewCollection::len), Some(3));
    }

    #[tokio::test]
    async fn test_ingest_replaces_collection() {
        let mut session = session();
        session.load_sample();

        let report = session
            .ingest(vec![doc("a.json", r#"{"reviews":[{"starRating":"ONE"}]}"#)])
            .await;
        assert!(report.is_successful());
        assert_eq!(session.collection().map(ReviewCollection::len), Some(1));
    }

    #[tokio::test]
    async fn test_failed_batch_keeps_previous_collection() {
        let mut session = session();
        session.load_sample();

        let report = session.ingest(vec![doc("bad.json", "{oops")]).await;
        assert!(!report.is_successful());
        assert_eq!(session.collection().map(ReviewCollection::len), Some(3));
        assert_eq!(session.last_report().map(IngestReport::failed_count), Some(1));
    }

    #[tokio::test]
    async fn test_ingest_clears_export_flag() {
        let mut session = session();
        session.load_sample();
        session.export().unwrap();

        session
            .ingest(vec![doc("a.json", r#"{"reviews":[]}"#)])
            .await;
        assert!(!session.has_exported());
        assert_eq!(session.collection().map(ReviewCollection::len), Some(0));
        assert_eq!(session.export(), Err(ExportError::EmptyCollection));
    }

    #[test]
    fn test_preview_uses_configured_limit() {
        let mut session = ReviewSession::new(ExporterConfig {
            preview_limit: 2,
            ..Default::default()
        });
        session.load_sample();

        let preview = session.preview();
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.filtered_count, 3);
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.load_sample();
        session.reset();

        assert!(session.collection().is_none());
        assert!(session.filtered().is_empty());
        assert!(session.preview().rows.is_empty());
    }
}

// ============================================================
// REVIEW EXPORT USE CASE
// ============================================================
// Filter, project and serialize reviews as BOM-prefixed CSV

use std::borrow::Cow;

use tracing::{debug, info};

use crate::domain::review::{
    DateStyle, ExportArtifact, ExportError, ExportPreview, FieldSelection, RatingFilter, Review,
    ReviewCollection, ReviewField,
};
use crate::infrastructure::csv::{CsvCell, CsvWriter};

/// CSV export of a filtered, field-selected view of a collection
pub struct ExportSerializer {
    date_style: DateStyle,
}

impl Default for ExportSerializer {
    fn default() -> Self {
        Self::new(DateStyle::default())
    }
}

impl ExportSerializer {
    pub fn new(date_style: DateStyle) -> Self {
        Self { date_style }
    }

    /// Serialize the reviews matching `filter` into CSV text.
    ///
    /// Fails with [`ExportError`] when there is nothing to export; in that
    /// case no output is produced at all.
    pub fn serialize(
        &self,
        collection: &ReviewCollection,
        filter: RatingFilter,
        fields: &FieldSelection,
    ) -> Result<String, ExportError> {
        self.write_csv(collection, filter, fields)
            .map(|(csv, _rows)| csv)
    }

    /// Serialize into a downloadable artifact
    pub fn export(
        &self,
        collection: &ReviewCollection,
        filter: RatingFilter,
        fields: &FieldSelection,
    ) -> Result<ExportArtifact, ExportError> {
        let (csv, rows) = self.write_csv(collection, filter, fields)?;
        info!(rows, filter = %filter, bytes = csv.len(), "Exported reviews to CSV");
        Ok(ExportArtifact::new(csv, rows))
    }

    /// First `limit` filtered rows, rendered but unquoted
    pub fn preview(
        &self,
        collection: &ReviewCollection,
        filter: RatingFilter,
        fields: &FieldSelection,
        limit: usize,
    ) -> ExportPreview {
        let selected = fields.selected();
        let rows = collection
            .filtered(filter)
            .take(limit)
            .map(|review| {
                selected
                    .iter()
                    .map(|field| self.cell(review, *field).value().to_string())
                    .collect::<Vec<String>>()
            })
            .collect();

        ExportPreview {
            headers: fields.headers(),
            rows,
            filtered_count: collection.filtered(filter).count(),
            total_count: collection.len(),
        }
    }

    /// Cells for one review, in column order
    pub fn render_row<'a>(&self, review: &'a Review, fields: &FieldSelection) -> Vec<CsvCell<'a>> {
        fields
            .selected()
            .into_iter()
            .map(|field| self.cell(review, field))
            .collect()
    }

    fn write_csv(
        &self,
        collection: &ReviewCollection,
        filter: RatingFilter,
        fields: &FieldSelection,
    ) -> Result<(String, usize), ExportError> {
        if collection.is_empty() {
            debug!("Export requested with no reviews loaded");
            return Err(ExportError::EmptyCollection);
        }
        if fields.is_empty() {
            debug!("Export requested with no fields selected");
            return Err(ExportError::NoFieldsSelected);
        }

        let mut writer = CsvWriter::new();
        writer.write_header(&fields.headers());
        for review in collection.filtered(filter) {
            writer.write_row(&self.render_row(review, fields));
        }

        let rows = writer.rows_written();
        Ok((writer.finish(), rows))
    }

    fn cell<'a>(&self, review: &'a Review, field: ReviewField) -> CsvCell<'a> {
        match field {
            ReviewField::StarRating => CsvCell::plain(review.rating_cell()),
            ReviewField::Comment => CsvCell::quoted(review.comment().unwrap_or("")),
            ReviewField::Reviewer => CsvCell::quoted(review.display_name().unwrap_or("")),
            ReviewField::CreateTime => {
                let date = review
                    .create_time()
                    .and_then(|raw| self.date_style.render(raw))
                    .unwrap_or_default();
                CsvCell::plain(Cow::Owned(date))
            }
        }
    }
}

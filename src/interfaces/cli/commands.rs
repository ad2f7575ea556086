//! Subcommand handlers
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr.

use clap::ArgMatches;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ReviewSession;
use crate::domain::error::{AppError, Result};
use crate::domain::review::{
    ExportPreview, ExporterConfig, FieldSelection, IngestReport, IngestStatus, RatingFilter,
};
use crate::infrastructure::document_source::{DocumentSource, FileDocument};
use crate::infrastructure::storage::{resolve_output_path, write_artifact};

pub async fn handle_export(config: ExporterConfig, matches: &ArgMatches) -> Result<()> {
    let mut session = open_session(config, matches).await?;
    let artifact = session.export()?;

    let target = output_target(&session, matches);
    let path = resolve_output_path(&target, &artifact);
    let written = write_artifact(&path, &artifact).await.map_err(|e| {
        AppError::IoError(format!("Failed to write {}: {}", path.display(), e))
    })?;

    println!(
        "Exported {} reviews to {}",
        artifact.row_count,
        written.display()
    );
    Ok(())
}

pub async fn handle_preview(config: ExporterConfig, matches: &ArgMatches) -> Result<()> {
    let session = open_session(config, matches).await?;
    let limit = matches
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(session.config().preview_limit);

    print!("{}", render_preview(&session.preview_with_limit(limit)));
    Ok(())
}

pub async fn handle_sample(config: ExporterConfig, matches: &ArgMatches) -> Result<()> {
    let mut session = ReviewSession::new(config);
    session.load_sample();
    session.set_fields(FieldSelection::all());
    let artifact = session.export()?;

    let target = output_target(&session, matches);
    let path = resolve_output_path(&target, &artifact);
    let written = write_artifact(&path, &artifact).await?;

    println!("Exported sample reviews to {}", written.display());
    Ok(())
}

/// Build a session from `--sample` or the given files, then apply view options
async fn open_session(config: ExporterConfig, matches: &ArgMatches) -> Result<ReviewSession> {
    let mut session = ReviewSession::new(config);

    if let Some(filter) = matches.get_one::<RatingFilter>("filter") {
        session.set_filter(*filter);
    }
    if let Some(fields) = matches.get_one::<FieldSelection>("fields") {
        session.set_fields(*fields);
    }

    if matches.get_flag("sample") {
        let sample = session.load_sample();
        println!("Loaded {} sample reviews", sample.len());
        return Ok(session);
    }

    let sources: Vec<Arc<dyn DocumentSource>> = matches
        .get_many::<PathBuf>("files")
        .into_iter()
        .flatten()
        .map(|path| Arc::new(FileDocument::new(path)) as Arc<dyn DocumentSource>)
        .collect();

    let report = session.ingest(sources).await;
    print!("{}", render_report(report));

    if !report.is_successful() {
        return Err(AppError::ParseError(
            "none of the given files contained usable review data".to_string(),
        ));
    }
    Ok(session)
}

fn output_target(session: &ReviewSession, matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| session.config().output_path.clone())
}

/// Per-document status lines followed by the total
fn render_report(report: &IngestReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let line = match &outcome.status {
            IngestStatus::Merged { reviews } => {
                format!("  ok      {} ({} reviews)\n", outcome.document, reviews)
            }
            IngestStatus::NoReviews => {
                format!("  empty   {} (no reviews array)\n", outcome.document)
            }
            IngestStatus::Failed { error } => {
                format!("  failed  {}: {}\n", outcome.document, error)
            }
            IngestStatus::Pending => format!("  pending {}\n", outcome.document),
        };
        out.push_str(&line);
    }
    out.push_str(&format!(
        "Imported {} reviews from {} of {} files\n",
        report.review_count(),
        report.outcomes.len() - report.failed_count(),
        report.outcomes.len()
    ));
    out
}

fn render_preview(preview: &ExportPreview) -> String {
    if preview.headers.is_empty() {
        return "No fields selected\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&preview.headers.join(" | "));
    out.push('\n');
    for row in &preview.rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.replace('\n', " ")).collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out.push_str(&preview.summary());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{DateStyle, IngestOutcome};
    use crate::interfaces::cli::build_cli;

    fn utc_config(output: PathBuf) -> ExporterConfig {
        ExporterConfig {
            output_path: output,
            date: DateStyle::utc(),
            ..Default::default()
        }
    }

    fn sub_matches(args: &[&str]) -> ArgMatches {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[tokio::test]
    async fn test_export_writes_merged_csv() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&a, r#"{"reviews":[{"starRating":"FIVE","comment":"Top"}]}"#).unwrap();
        std::fs::write(&b, r#"{"reviews":[{"starRating":"TWO","comment":"Meh"}]}"#).unwrap();
        std::fs::write(&bad, "{ nope").unwrap();
        let out = dir.path().join("out.csv");

        let matches = sub_matches(&[
            "review-exporter",
            "export",
            a.to_str().unwrap(),
            bad.to_str().unwrap(),
            b.to_str().unwrap(),
        ]);
        handle_export(utc_config(out.clone()), &matches).await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "\u{feff}Star Rating,Comment\n5,\"Top\"\n2,\"Meh\"\n"
        );
    }

    #[tokio::test]
    async fn test_export_with_no_fields_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let matches = sub_matches(&["review-exporter", "export", "--sample", "--fields", ""]);

        let err = handle_export(utc_config(out.clone()), &matches)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EmptyExport(_)));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_export_fails_when_every_file_is_bad() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[").unwrap();
        let out = dir.path().join("out.csv");

        let matches = sub_matches(&["review-exporter", "export", bad.to_str().unwrap()]);
        let err = handle_export(utc_config(out.clone()), &matches)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_sample_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let matches = sub_matches(&[
            "review-exporter",
            "sample",
            "--output",
            dir.path().to_str().unwrap(),
        ]);

        handle_sample(utc_config(PathBuf::from("unused.csv")), &matches)
            .await
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("reviews-export.csv")).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(written.contains("5,\"\",\"Sample User 3\",2/13/2025"));
    }

    #[test]
    fn test_render_report() {
        let report = IngestReport {
            collection: Default::default(),
            outcomes: vec![
                IngestOutcome::completed("a.json", IngestStatus::Merged { reviews: 0 }),
                IngestOutcome::completed(
                    "b.json",
                    IngestStatus::Failed {
                        error: "Parse error: bad".to_string(),
                    },
                ),
            ],
        };

        let text = render_report(&report);
        assert!(text.contains("ok      a.json (0 reviews)"));
        assert!(text.contains("failed  b.json: Parse error: bad"));
        assert!(text.ends_with("Imported 0 reviews from 1 of 2 files\n"));
    }

    #[test]
    fn test_render_preview_flattens_newlines() {
        let preview = ExportPreview {
            headers: vec!["Comment".to_string()],
            rows: vec![vec!["two\nlines".to_string()]],
            filtered_count: 1,
            total_count: 1,
        };
        assert_eq!(
            render_preview(&preview),
            "Comment\ntwo lines\nShowing 1 of 1 reviews (1 total)\n"
        );
    }
}

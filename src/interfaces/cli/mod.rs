//! Command-line interface for the review exporter
//!
//! Usage:
//!   review-exporter export `<files>...` [--filter `<rating>`] [--fields `<list>`] [--output `<path>`]
//!   review-exporter preview `<files>...` [--filter `<rating>`] [--fields `<list>`] [--limit `<n>`]
//!   review-exporter sample [--output `<path>`]
//!
//! `--sample` can stand in for `<files>` on `export` and `preview`.

mod commands;

use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};
use crate::domain::review::{FieldSelection, RatingFilter};
use crate::infrastructure::config::ConfigService;

pub fn build_cli() -> Command {
    Command::new("review-exporter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merge JSON review exports and write them out as UTF-8 CSV")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file (default: ./review-exporter.toml if present)"),
        )
        .subcommand(
            with_view_args(with_input_args(
                Command::new("export").about("Merge review files and export them as CSV"),
            ))
            .arg(output_arg()),
        )
        .subcommand(
            with_view_args(with_input_args(
                Command::new("preview").about("Show the first rows of the filtered reviews"),
            ))
            .arg(
                Arg::new("limit")
                    .long("limit")
                    .short('n')
                    .value_parser(value_parser!(usize))
                    .help("Number of rows to show (default from config: 5)"),
            ),
        )
        .subcommand(
            Command::new("sample")
                .about("Export the built-in sample reviews with every field")
                .arg(output_arg()),
        )
}

fn with_input_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("files")
                .help("JSON files containing a `reviews` array")
                .num_args(1..)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .action(ArgAction::SetTrue)
                .help("Use the built-in sample reviews instead of files"),
        )
        .group(
            ArgGroup::new("input")
                .args(["files", "sample"])
                .required(true)
                .multiple(false),
        )
}

fn with_view_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("filter")
                .long("filter")
                .short('r')
                .value_parser(|s: &str| s.parse::<RatingFilter>())
                .help("Star rating to keep: all, ONE..FIVE or 1..5"),
        )
        .arg(
            Arg::new("fields")
                .long("fields")
                .short('f')
                .value_parser(|s: &str| s.parse::<FieldSelection>())
                .help("Comma-separated columns: starRating,comment,reviewer,createTime (or all)"),
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_parser(value_parser!(PathBuf))
        .help("Output file or directory (default: reviews-export.csv)")
}

/// Load config and run the selected subcommand
pub async fn dispatch(matches: ArgMatches) -> Result<()> {
    let config_service = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    let config = config_service.load()?;

    match matches.subcommand() {
        Some(("export", sub)) => commands::handle_export(config, sub).await,
        Some(("preview", sub)) => commands::handle_preview(config, sub).await,
        Some(("sample", sub)) => commands::handle_sample(config, sub).await,
        Some((other, _)) => Err(AppError::Internal(format!("unknown subcommand '{}'", other))),
        None => Err(AppError::ValidationError("no subcommand given".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{ReviewField, StarRating};

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_export_args() {
        let matches = build_cli()
            .try_get_matches_from([
                "review-exporter",
                "export",
                "a.json",
                "b.json",
                "--filter",
                "5",
                "--fields",
                "comment,reviewer",
                "-o",
                "out.csv",
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "export");
        assert_eq!(sub.get_many::<PathBuf>("files").unwrap().count(), 2);
        assert_eq!(
            sub.get_one::<RatingFilter>("filter"),
            Some(&RatingFilter::Only(StarRating::Five))
        );
        let fields = sub.get_one::<FieldSelection>("fields").unwrap();
        assert_eq!(
            fields.selected(),
            vec![ReviewField::Comment, ReviewField::Reviewer]
        );
        assert_eq!(
            sub.get_one::<PathBuf>("output"),
            Some(&PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_input_is_required() {
        assert!(build_cli()
            .try_get_matches_from(["review-exporter", "export"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["review-exporter", "preview", "--sample"])
            .is_ok());
    }

    #[test]
    fn test_sample_conflicts_with_files() {
        assert!(build_cli()
            .try_get_matches_from(["review-exporter", "export", "a.json", "--sample"])
            .is_err());
    }

    #[test]
    fn test_bad_filter_rejected() {
        assert!(build_cli()
            .try_get_matches_from(["review-exporter", "preview", "--sample", "--filter", "SIX"])
            .is_err());
    }
}

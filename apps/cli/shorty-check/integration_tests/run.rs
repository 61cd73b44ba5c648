use shorty_check::cli::Args;
use shorty_check::error::CheckError;
use shorty_check::run;

use form_core::{Rejection, ValidationOutcome};
use models::{Field, Validity};

use std::path::Path;

use clap::Parser;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(config_dir: &Path, base_url: &str, extra: &[&str]) -> Args {
    let mut argv = vec![
        "shorty-check".to_string(),
        "--config-dir".to_string(),
        config_dir.display().to_string(),
        "--base-url".to_string(),
        base_url.to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

/// **VALUE**: A full run checks both fields and reports each verdict.
///
/// **WHY THIS MATTERS**: This is the whole user-facing path: config, client,
/// controller and report wired together.
#[tokio::test]
async fn given_free_long_and_taken_slug_when_run_then_report_reflects_both() {
    // GIVEN: A service accepting the long URL and refusing the slug
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("long", "http://x.com"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("short", "abc"))
        .respond_with(ResponseTemplate::new(406))
        .mount(&server)
        .await;
    let config_dir = tempfile::tempdir().unwrap();

    // WHEN: Running with both values
    let report = run(args(
        config_dir.path(),
        &server.uri(),
        &["--long", "http://x.com", "--short", "abc"],
    ))
    .await
    .unwrap();

    // THEN: Long is valid, slug is taken, exit status 1
    assert_eq!(report.fields.len(), 2);
    assert_eq!(report.fields[0].field, Field::Long);
    assert_eq!(report.fields[0].outcome, ValidationOutcome::Valid);
    assert_eq!(report.fields[1].field, Field::Short);
    assert_eq!(
        report.fields[1].outcome,
        ValidationOutcome::Invalid(Rejection::AlreadyUsed)
    );
    assert_eq!(report.fields[1].state.validity(), Validity::Invalid);
    assert_eq!(report.exit_status(), 1);
}

/// **VALUE**: `--save-config` persists the effective base URL.
#[tokio::test]
async fn given_save_flag_when_run_then_config_written_with_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let config_dir = tempfile::tempdir().unwrap();

    let report = run(args(
        config_dir.path(),
        &server.uri(),
        &["--long", "http://x.com", "--save-config"],
    ))
    .await
    .unwrap();

    assert_eq!(report.exit_status(), 0);
    let saved = std::fs::read_to_string(config_dir.path().join("config.json")).unwrap();
    assert!(saved.contains(&server.uri()));
}

/// **VALUE**: Running without values is a usage error, not an empty success.
#[tokio::test]
async fn given_no_values_when_run_then_usage_error() {
    let config_dir = tempfile::tempdir().unwrap();

    let result = run(args(config_dir.path(), "http://127.0.0.1:7070", &[])).await;

    assert!(matches!(result, Err(CheckError::Usage { .. })));
}

/// **VALUE**: An unusable base URL stops the run before any check.
#[tokio::test]
async fn given_ftp_base_url_when_run_then_config_error() {
    let config_dir = tempfile::tempdir().unwrap();

    let result = run(args(config_dir.path(), "ftp://sho.rt", &["--short", "abc"])).await;

    assert!(matches!(result, Err(CheckError::Config { .. })));
}

/// **VALUE**: `--base-url` rescues a run whose config file holds an unusable base URL.
///
/// **BUG THIS CATCHES**: Would catch the file being validated before the overrides
/// are merged, which would make the flag useless for fixing a bad config.
#[tokio::test]
async fn given_bad_base_url_in_file_when_run_with_flag_then_flag_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("config.json"),
        r#"{ "service": { "base_url": "ftp://sho.rt" } }"#,
    )
    .unwrap();

    let report = run(args(
        config_dir.path(),
        &server.uri(),
        &["--long", "http://x.com"],
    ))
    .await
    .unwrap();

    assert_eq!(report.fields[0].outcome, ValidationOutcome::Valid);
    assert_eq!(report.exit_status(), 0);
}

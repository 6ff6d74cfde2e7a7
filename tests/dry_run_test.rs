//! Integration tests for dry-run mode
//!
//! A dry run builds and prints the job but never contacts the service.

use gemtractor_client::cli::commands::execute::ExecuteArgs;
use gemtractor_client::config::ClientConfig;
use gemtractor_client::core::JobSubmitter;
use gemtractor_client::domain::Job;
use mockito::Server;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_dry_run_flag_sets_config() {
    let args = ExecuteArgs {
        dry_run: true,
        ..ExecuteArgs::default()
    };
    let config = args.resolve_config(None).unwrap();
    assert!(config.application.dry_run);
}

#[test]
fn test_dry_run_disabled_by_default() {
    assert!(!ClientConfig::default().application.dry_run);
}

#[tokio::test]
async fn test_dry_run_never_contacts_service() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/execute")
        .expect(0)
        .create_async()
        .await;

    let mut model = NamedTempFile::new().unwrap();
    model.write_all(b"<model/>").unwrap();
    model.flush().unwrap();

    let mut config = ClientConfig::default();
    config.application.dry_run = true;
    config.job.input_path = model.path().to_string_lossy().to_string();
    config.job.endpoint_url = format!("{}/api/execute", server.url());

    let submitter = JobSubmitter::from_config(config).unwrap();
    let mut out = Vec::new();
    let outcome = submitter.run(&mut out).await.unwrap();

    assert!(outcome.is_dry_run());
    assert_eq!(outcome.bytes_written, out.len());

    let job: Job = serde_json::from_slice(&out).unwrap();
    assert_eq!(job.file, "<model/>");
    assert_eq!(job.filter.reactions, vec!["r2"]);
    mock.assert_async().await;
}

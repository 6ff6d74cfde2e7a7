//! Integration tests for the `execute` command's exit codes and output file

use gemtractor_client::cli::commands::execute::ExecuteArgs;
use mockito::Server;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn model_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<model/>").unwrap();
    file.flush().unwrap();
    file
}

fn args_for(model: &NamedTempFile, url: String) -> ExecuteArgs {
    ExecuteArgs {
        input: Some(model.path().to_string_lossy().to_string()),
        url: Some(url),
        timeout: Some(10),
        ..ExecuteArgs::default()
    }
}

#[tokio::test]
async fn test_missing_input_exits_with_file_access_code() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/execute")
        .expect(0)
        .create_async()
        .await;

    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("network.dot");
    let args = ExecuteArgs {
        input: Some("/nonexistent/gene-filter-example-2.xml".to_string()),
        url: Some(format!("{}/api/execute", server.url())),
        output: Some(output.clone()),
        ..ExecuteArgs::default()
    };

    let code = args.execute(None).await.unwrap();

    assert_eq!(code, 3);
    assert!(!output.exists());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_response_written_to_output_file() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/execute")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body("digraph G { a -> b }")
        .create_async()
        .await;

    let model = model_file();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("network.dot");
    let args = ExecuteArgs {
        output: Some(output.clone()),
        ..args_for(&model, format!("{}/api/execute", server.url()))
    };

    let code = args.execute(None).await.unwrap();

    assert_eq!(code, 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "digraph G { a -> b }");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_with_fail_flag_keeps_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/execute")
        .with_status(500)
        .with_body("couldn't generate the dot file")
        .create_async()
        .await;

    let model = model_file();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("network.dot");
    let args = ExecuteArgs {
        output: Some(output.clone()),
        fail_on_http_error: true,
        ..args_for(&model, format!("{}/api/execute", server.url()))
    };

    let code = args.execute(None).await.unwrap();

    assert_eq!(code, 4);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "couldn't generate the dot file"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_without_fail_flag_succeeds() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/execute")
        .with_status(400)
        .with_body("job is missing the desired network_type (en|rn|mn)")
        .create_async()
        .await;

    let model = model_file();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("network.dot");
    let args = ExecuteArgs {
        output: Some(output.clone()),
        ..args_for(&model, format!("{}/api/execute", server.url()))
    };

    assert_eq!(args.execute(None).await.unwrap(), 0);
    assert!(std::fs::read_to_string(&output).unwrap().contains("network_type"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_leaves_no_output_file() {
    let model = model_file();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("network.dot");
    let args = ExecuteArgs {
        output: Some(output.clone()),
        ..args_for(&model, "http://127.0.0.1:9/api/execute".to_string())
    };

    let code = args.execute(None).await.unwrap();

    assert_eq!(code, 4);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_invalid_url_exits_with_config_code() {
    let model = model_file();
    let args = args_for(&model, "ftp://example.org/api/execute".to_string());

    assert_eq!(args.execute(None).await.unwrap(), 2);
}

use assert_cmd::Command;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".status-panel").join("config.json")
}

const BINARY_NAME: &str = "status-panel";

fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("STATUS_PANEL_URL");
    cmd
}

/// Serves the four status endpoints; `/docker` answers 500 when `docker_down`.
async fn spawn_status_server(docker_down: bool) -> String {
    let docker = if docker_down {
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "daemon unreachable") })
    } else {
        get(|| async { axum::Json(serde_json::json!({"containers": 3})) })
    };
    let app = Router::new()
        .route(
            "/health",
            get(|| async { axum::Json(serde_json::json!({"status": "ok"})) }),
        )
        .route(
            "/version",
            get(|| async { axum::Json(serde_json::json!({"version": "1.4.2"})) }),
        )
        .route(
            "/system",
            get(|| async { axum::Json(serde_json::json!({"cpu": 0.25, "memory": [1, 2]})) }),
        )
        .route("/docker", docker);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// set-server should persist the URL without a trailing slash.
fn set_server_writes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    command(&tmp)
        .args(["set-server", "--url", "http://status.internal:9000/"])
        .assert()
        .success()
        .stdout(contains("Saved status server"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("\"server_url\": \"http://status.internal:9000\""));
}

#[test]
fn set_server_rejects_non_http_urls() {
    let tmp = temp_config_dir();
    command(&tmp)
        .args(["set-server", "--url", "ftp://status.internal"])
        .assert()
        .failure()
        .stderr(contains("Invalid server URL"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// clear-config should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    command(&tmp)
        .arg("clear-config")
        .assert()
        .success()
        .stdout(contains("Clearing configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn check_succeeds_when_every_endpoint_is_healthy() {
    let server = spawn_status_server(false).await;
    let tmp = temp_config_dir();
    let mut cmd = command(&tmp);
    cmd.args(["check", "--server", &server]);

    let assert = tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap();
    assert
        .success()
        .stdout(contains("== HEALTH (/health) =="))
        .stdout(contains("\"status\": \"ok\""))
        .stdout(contains("== DOCKER (/docker) =="))
        .stdout(contains("\"containers\": 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_fails_when_one_endpoint_errors() {
    let server = spawn_status_server(true).await;
    let tmp = temp_config_dir();
    let mut cmd = command(&tmp);
    cmd.args(["check", "--concurrent", "--server", &server]);

    let assert = tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap();
    assert
        .failure()
        .stdout(contains("\"version\": \"1.4.2\""))
        .stdout(contains("Error: /docker -> 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_uses_the_saved_server() {
    let server = spawn_status_server(false).await;
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, format!("{{\"server_url\": \"{}\"}}", server)).unwrap();

    let mut cmd = command(&tmp);
    cmd.arg("check");
    let assert = tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap();
    assert.success().stdout(contains("== SYSTEM (/system) =="));
}

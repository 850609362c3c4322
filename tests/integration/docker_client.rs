//! Docker client integration tests

// These tests require Docker to be running
// Use `cargo test --test integration -- --ignored` to run them

use dockhand::docker::DockerClient;

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_client_from_env() {
    let client = DockerClient::from_env().await;
    assert!(client.is_ok());

    let client = client.unwrap();
    assert!(!client.connection_info().version.is_empty());
    assert!(!client.connection_info().api_version.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_client_ping() {
    let client = DockerClient::from_env().await.unwrap();
    let result = client.ping().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_client_with_bad_host() {
    // Connecting to an unroutable host fails at version fetch
    let client = DockerClient::with_host("tcp://127.0.0.1:1").await;
    assert!(client.is_err());
}

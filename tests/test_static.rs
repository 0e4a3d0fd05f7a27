use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use minihttpd::http::connection::Connection;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn fixture_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("minihttpd-static-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Drives one full connection pipeline over an in-memory stream and
/// returns everything the server wrote back.
async fn run_request(root: PathBuf, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let handle = tokio::spawn(Connection::new(server, root).run());

    client.write_all(request).await.unwrap();
    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    handle.await.unwrap().unwrap();
    response
}

#[tokio::test]
async fn test_serves_file_bytes_after_200_header_block() {
    let root = fixture_root("ok");
    let content = b"<html><body>hello from disk</body></html>\n";
    std::fs::write(root.join("index.html"), content).unwrap();
    std::fs::set_permissions(root.join("index.html"), Permissions::from_mode(0o644)).unwrap();

    let response = run_request(
        root,
        b"GET /index.html HTTP/1.0\r\nHost: localhost\r\n\r\n",
    )
    .await;
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.ends_with(std::str::from_utf8(content).unwrap()));
    assert!(!text.to_ascii_lowercase().contains("content-length"));
}

#[tokio::test]
async fn test_streams_files_larger_than_one_chunk() {
    let root = fixture_root("large");
    let content: Vec<u8> = (0..4096u32).map(|i| b'a' + (i % 26) as u8).collect();
    std::fs::write(root.join("big.html"), &content).unwrap();
    std::fs::set_permissions(root.join("big.html"), Permissions::from_mode(0o644)).unwrap();

    let response = run_request(root, b"GET /big.html HTTP/1.0\r\n\r\n").await;

    assert!(response.ends_with(&content));
}

#[tokio::test]
async fn test_missing_file_yields_single_not_found_response() {
    let root = fixture_root("missing");

    // Extra header lines must be drained before the 404 goes out; the
    // response below is only complete because the drain finished.
    let response = run_request(
        root,
        b"GET /nope.html HTTP/1.0\r\nHost: localhost\r\nAccept: */*\r\nX-Filler: 1\r\n\r\n",
    )
    .await;
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.0 404 Not Found\r\n"));
    assert_eq!(text.matches("HTTP/1.0").count(), 1);
    assert!(text.contains("unavailable or nonexistent"));
}

#[tokio::test]
async fn test_connection_closed_before_request_gets_no_response() {
    let root = fixture_root("silent");

    let (mut client, server) = tokio::io::duplex(8 * 1024);
    let handle = tokio::spawn(Connection::new(server, root).run());

    client.shutdown().await.unwrap();
    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    handle.await.unwrap().unwrap();
    assert!(response.is_empty());
}

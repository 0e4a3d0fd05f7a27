use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use minihttpd::handler::{RouteDecision, route};

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("minihttpd-router-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &PathBuf, mode: u32) {
    std::fs::write(path, b"content").unwrap();
    std::fs::set_permissions(path, Permissions::from_mode(mode)).unwrap();
}

#[tokio::test]
async fn test_missing_path_is_not_found() {
    let dir = fixture_dir("missing");
    let decision = route(&dir.join("nope.html"), false).await;
    assert_eq!(decision, RouteDecision::NotFound);
}

#[tokio::test]
async fn test_plain_file_is_served_statically() {
    let dir = fixture_dir("static");
    let file = dir.join("page.html");
    write_file(&file, 0o644);

    let decision = route(&file, false).await;
    assert_eq!(decision, RouteDecision::StaticFile(file));
}

#[tokio::test]
async fn test_any_execute_bit_selects_cgi() {
    let dir = fixture_dir("exec");
    for (name, mode) in [("owner", 0o744), ("group", 0o654), ("other", 0o645)] {
        let file = dir.join(name);
        write_file(&file, mode);

        let decision = route(&file, false).await;
        assert_eq!(
            decision,
            RouteDecision::ExecuteProgram(file),
            "mode {:o}",
            mode
        );
    }
}

#[tokio::test]
async fn test_forced_execution_overrides_permission_bits() {
    let dir = fixture_dir("forced");
    let file = dir.join("plain.html");
    write_file(&file, 0o644);

    let decision = route(&file, true).await;
    assert_eq!(decision, RouteDecision::ExecuteProgram(file));
}

#[tokio::test]
async fn test_directory_hit_appends_index_html_without_restat() {
    let dir = fixture_dir("dir");
    let sub = dir.join("site");
    std::fs::create_dir(&sub).unwrap();
    std::fs::set_permissions(&sub, Permissions::from_mode(0o755)).unwrap();
    write_file(&sub.join("index.html"), 0o644);

    // The permission check uses the directory's own metadata, and a
    // directory's execute bits are search bits, so the decision is CGI
    // even though index.html itself is not executable.
    let decision = route(&sub, false).await;
    assert_eq!(decision, RouteDecision::ExecuteProgram(sub.join("index.html")));
}

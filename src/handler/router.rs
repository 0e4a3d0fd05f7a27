use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Outcome of inspecting the resolved filesystem path. The two serving
/// variants carry the final path, which may differ from the resolved one
/// when a directory was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    NotFound,
    StaticFile(PathBuf),
    ExecuteProgram(PathBuf),
}

/// Decides how to serve the resolved path.
///
/// A missing path is `NotFound`. A directory gets `/index.html` appended,
/// but the permission check still uses the metadata of the entry as first
/// stat'ed; a directory hit is not re-stat'ed (and directories normally
/// carry execute bits). Any execute bit, or execution forced by the
/// request, selects `ExecuteProgram`.
pub async fn route(resolved_path: &Path, forced_exec: bool) -> RouteDecision {
    let meta = match tokio::fs::metadata(resolved_path).await {
        Ok(m) => m,
        Err(_) => return RouteDecision::NotFound,
    };

    let mut path = resolved_path.to_path_buf();
    if meta.is_dir() {
        path.push("index.html");
    }

    let executable = meta.permissions().mode() & 0o111 != 0;
    if executable || forced_exec {
        RouteDecision::ExecuteProgram(path)
    } else {
        RouteDecision::StaticFile(path)
    }
}

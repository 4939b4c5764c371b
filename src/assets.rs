//! Static frontend assets with a built-in fallback page.

use crate::server::AppState;
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{Html, IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Page served for any path with no matching asset.
pub const DEFAULT_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Tic-Tac-Toe Oracle</title></head>
<body>
<h1>Tic-Tac-Toe Oracle</h1>
<p>The engine is running. POST a board to <code>/api/move</code>:</p>
<pre>{"boardState": [null, null, null, null, "X", null, null, null, null]}</pre>
</body>
</html>
"#;

/// Maps a request path onto a file under `root`.
///
/// Only plain path segments are accepted, so `..` can never escape `root`.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        "index.html"
    } else {
        relative
    };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            _ => return None,
        }
    }
    Some(resolved)
}

/// Content type for a file, from its extension.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Fallback handler: serve the asset if it exists, otherwise the default page.
#[instrument(skip(state), fields(path = %uri.path()))]
pub async fn static_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if let Some(path) = state
        .static_dir()
        .and_then(|root| resolve(root, uri.path()))
    {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(file = %path.display(), "Serving asset");
                return ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response();
            }
            Err(e) => debug!(file = %path.display(), error = %e, "Asset unavailable"),
        }
    }
    Html(DEFAULT_PAGE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_index() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve(root, "/"), Some(PathBuf::from("/srv/www/index.html")));
        assert_eq!(
            resolve(root, "/js/app.js"),
            Some(PathBuf::from("/srv/www/js/app.js"))
        );
    }

    #[test]
    fn test_traversal_is_rejected() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve(root, "/../etc/passwd"), None);
        assert_eq!(resolve(root, "/js/../../secret"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("a.bin")), "application/octet-stream");
    }
}

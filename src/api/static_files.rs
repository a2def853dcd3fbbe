use axum::{
    body::Body,
    http::{header, StatusCode, Uri},
    response::Response,
};
use mime_guess::from_path;
use std::path::PathBuf;

use crate::config::FrontendConfig;

/// Serve the frontend from the configured static directory.
///
/// Extensionless paths that don't match a file fall back to the index
/// document so client-side routes resolve.
pub async fn serve_static(uri: Uri, frontend: FrontendConfig) -> Response {
    let Some(dir) = frontend.static_dir else {
        return not_found();
    };

    let path = uri.path().trim_start_matches('/');
    if path.split('/').any(|segment| segment == "..") {
        return not_found();
    }

    let path = if path.is_empty() {
        frontend.index.as_str()
    } else {
        path
    };

    let file_path = PathBuf::from(&dir).join(path);
    if let Ok(content) = tokio::fs::read(&file_path).await {
        let mime_type = from_path(&file_path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_type.as_ref())
            .body(Body::from(content))
            .unwrap();
    }

    // For SPA routing, serve the index document for non-file paths
    if !path.contains('.') {
        let index_path = PathBuf::from(&dir).join(&frontend.index);
        if let Ok(index) = tokio::fs::read(&index_path).await {
            return Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .body(Body::from(index))
                .unwrap();
        }
    }

    not_found()
}

fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("404 Not Found"))
        .unwrap()
}

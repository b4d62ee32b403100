use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use tokio_util::io::ReaderStream;
use tracing::{error, info};

use crate::api::errors::ApiError;
use crate::application::ports::ArtifactStore;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /download/{filename}
/// Stream a generated document
#[utoipa::path(
    get,
    path = "/download/{filename}",
    tag = "labels",
    params(
        ("filename" = String, Path, description = "Name of a generated document")
    ),
    responses(
        (status = 200, description = "Document stream", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 404, description = "Unknown or unsafe file name")
    )
)]
pub async fn download_handler(
    State(store): State<Arc<dyn ArtifactStore>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let path = store.resolve_download(&filename)?;
    info!("Serving download: {}", filename);
    attachment_response(&path, &filename).await
}

/// Stream `path` back as an attachment named `file_name`
pub async fn attachment_response(path: &FsPath, file_name: &str) -> Result<Response, ApiError> {
    let file = tokio::fs::File::open(path).await.map_err(|e| {
        error!("Failed to open {:?} for download: {}", path, e);
        ApiError::not_found("File not found")
    })?;
    let size = file.metadata().await.map(|m| m.len()).map_err(|e| {
        error!("Failed to stat {:?} for download: {}", path, e);
        ApiError::internal_error("Failed to read file")
    })?;

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, size.to_string())
        .header(header::CONTENT_DISPOSITION, content_disposition(file_name))
        .body(body)
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}

/// `attachment` disposition with an ASCII fallback name and an RFC 5987
/// `filename*` carrying the UTF-8 name
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}

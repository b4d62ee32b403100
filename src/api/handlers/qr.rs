use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{IntoResponse, Json, Response},
};

use crate::api::errors::ApiError;
use crate::application::dto::{QrBase64Request, QrBase64Response};
use crate::application::use_cases::QrPreviewUseCase;

const PNG_MIME_TYPE: &str = "image/png";

/// GET /api/qr_image/{text}
/// PNG of the QR symbol for `text`
#[utoipa::path(
    get,
    path = "/api/qr_image/{text}",
    tag = "qr",
    params(
        ("text" = String, Path, description = "Text to encode; may contain slashes")
    ),
    responses(
        (status = 200, description = "QR symbol", content_type = "image/png"),
        (status = 500, description = "Text cannot be encoded")
    )
)]
pub async fn qr_image_handler(
    State(use_case): State<Arc<QrPreviewUseCase>>,
    Path(text): Path<String>,
) -> Result<Response, ApiError> {
    let png = use_case.png(&text)?;
    Ok(([(header::CONTENT_TYPE, PNG_MIME_TYPE)], png).into_response())
}

/// POST /api/qr_image_base64
/// Base64 PNG of the QR symbol for an inline preview
#[utoipa::path(
    post,
    path = "/api/qr_image_base64",
    tag = "qr",
    request_body = QrBase64Request,
    responses(
        (status = 200, description = "Encoded QR symbol", body = QrBase64Response),
        (status = 400, description = "Missing or empty text"),
        (status = 500, description = "Text cannot be encoded")
    )
)]
pub async fn qr_base64_handler(
    State(use_case): State<Arc<QrPreviewUseCase>>,
    body: Result<Json<QrBase64Request>, JsonRejection>,
) -> Result<Json<QrBase64Response>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    let text = request.text.unwrap_or_default();

    let image_base64 = use_case.base64(&text)?;
    Ok(Json(QrBase64Response {
        success: true,
        image_base64,
        mime_type: PNG_MIME_TYPE.to_string(),
    }))
}

use axum::Json;
use utoipa::OpenApi;

use crate::api::handlers::health::HealthResponse;
use crate::application::dto::{CreateLabelResponse, QrBase64Request, QrBase64Response};

/// OpenAPI specification for the label service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spine Labels API",
        version = "1.0.0",
        description = "Binder spine label generation with per-copy QR codes"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::labels::create_label_api_handler,
        crate::api::handlers::labels::create_label_form_handler,
        crate::api::handlers::qr::qr_image_handler,
        crate::api::handlers::qr::qr_base64_handler,
        crate::api::handlers::download::download_handler,
    ),
    components(
        schemas(
            HealthResponse,
            CreateLabelResponse,
            QrBase64Request,
            QrBase64Response,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "labels", description = "Label document generation and download"),
        (name = "qr", description = "QR code previews")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_label_api_handler, create_label_form_handler, download_handler, health_handler,
    qr_base64_handler, qr_image_handler, LabelState,
};
use crate::api::middleware::metrics;
use crate::api::openapi::openapi_handler;
use crate::application::cleanup::FileReaper;
use crate::application::ports::ArtifactStore;
use crate::application::use_cases::{CreateLabelUseCase, QrPreviewUseCase};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub config: Config,
    pub create_label_use_case: Arc<CreateLabelUseCase>,
    pub qr_preview_use_case: Arc<QrPreviewUseCase>,
    pub store: Arc<dyn ArtifactStore>,
    pub reaper: FileReaper,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let label_state = LabelState {
        use_case: Arc::clone(&state.create_label_use_case),
        reaper: state.reaper,
    };
    let qr_state = Arc::clone(&state.qr_preview_use_case);
    let body_limit = state.config.max_content_length;

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        // Label generation
        .route(
            "/api/create_label",
            post(create_label_api_handler).with_state(label_state.clone()),
        )
        .route(
            "/create_label",
            post(create_label_form_handler).with_state(label_state),
        )
        .route(
            "/download/{filename}",
            get(download_handler).with_state(state.store),
        )
        // QR previews
        .route(
            "/api/qr_image/{*text}",
            get(qr_image_handler).with_state(Arc::clone(&qr_state)),
        )
        .route(
            "/api/qr_image_base64",
            post(qr_base64_handler).with_state(qr_state),
        )
        // Body limits + metrics
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}

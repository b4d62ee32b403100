use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Json, Response},
    Form,
};
use serde_json::Value;
use tracing::{error, info};

use crate::api::errors::ApiError;
use crate::api::handlers::download::attachment_response;
use crate::application::cleanup::FileReaper;
use crate::application::dto::{CreateLabelResponse, CreatedLabel, RawLabelInput};
use crate::application::use_cases::CreateLabelUseCase;

/// Marks a finished form download for the browser page that started it
pub const DOWNLOAD_COOKIE: &str = "download_complete=true; Max-Age=10";

/// State shared by the label creation routes
#[derive(Clone)]
pub struct LabelState {
    pub use_case: Arc<CreateLabelUseCase>,
    pub reaper: FileReaper,
}

impl LabelState {
    /// Run the blocking build on a worker thread, then schedule the
    /// document's deletion
    async fn create(&self, raw: RawLabelInput) -> Result<CreatedLabel, ApiError> {
        let use_case = Arc::clone(&self.use_case);
        let created = tokio::task::spawn_blocking(move || use_case.execute(&raw))
            .await
            .map_err(|e| {
                error!("Label build task failed: {}", e);
                ApiError::internal_error("Label generation was interrupted")
            })??;

        self.reaper.schedule_default(created.file_path.clone());
        Ok(created)
    }
}

/// POST /api/create_label
/// Create a label document from a JSON field map
#[utoipa::path(
    post,
    path = "/api/create_label",
    tag = "labels",
    responses(
        (status = 200, description = "Label document created", body = CreateLabelResponse),
        (status = 400, description = "Invalid or incomplete label fields"),
        (status = 500, description = "Label generation failed")
    )
)]
pub async fn create_label_api_handler(
    State(state): State<LabelState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateLabelResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    let raw = RawLabelInput::from_json(body)
        .ok_or_else(|| ApiError::bad_request("Request body must be a JSON object"))?;

    let created = state.create(raw).await?;
    info!(
        "API label created: {} ({} bytes)",
        created.file_name, created.file_size
    );

    Ok(Json(CreateLabelResponse {
        success: true,
        message: "Label generated successfully".to_string(),
        download_url: format!("/download/{}", created.file_name),
        filename: created.file_name,
    }))
}

/// POST /create_label
/// Create a label document from a submitted form and return it directly
#[utoipa::path(
    post,
    path = "/create_label",
    tag = "labels",
    responses(
        (status = 200, description = "Label document", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "Invalid or incomplete label fields"),
        (status = 500, description = "Label generation failed")
    )
)]
pub async fn create_label_form_handler(
    State(state): State<LabelState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|e| ApiError::new(e.status(), e.body_text()))?;

    let created = state.create(RawLabelInput::from_form(form)).await?;
    info!("Form label created: {}", created.file_name);

    let response = attachment_response(&created.file_path, &created.file_name).await?;
    Ok(([(header::SET_COOKIE, DOWNLOAD_COOKIE)], response).into_response())
}

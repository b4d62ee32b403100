use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Unvalidated label fields as submitted by a client.
///
/// Every value is kept as text; numeric coercion happens during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLabelInput {
    fields: HashMap<String, String>,
}

impl RawLabelInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Build from an urlencoded form
    pub fn from_form(form: HashMap<String, String>) -> Self {
        Self { fields: form }
    }

    /// Build from a JSON object. Strings are taken as-is and numbers and
    /// booleans are rendered as text; nulls and nested values are dropped.
    /// Returns `None` when `body` is not an object.
    pub fn from_json(body: Value) -> Option<Self> {
        let Value::Object(map) = body else {
            return None;
        };

        let fields = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((key, text))
            })
            .collect();

        Some(Self { fields })
    }
}

impl<K, V> FromIterator<(K, V)> for RawLabelInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// What the document assembler hands back once a document is on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelArtifact {
    pub file_path: PathBuf,
    pub file_name: String,
    /// QR rasters referenced while saving; safe to delete now
    pub temp_artifacts: Vec<PathBuf>,
    pub sheet_count: usize,
}

/// Result of the create-label use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLabel {
    pub file_path: PathBuf,
    pub file_name: String,
    pub sheet_count: usize,
    pub file_size: u64,
    /// Number of temporary QR images removed after saving
    pub deleted_images: usize,
}

/// DTO for a successful JSON label request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLabelResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub download_url: String,
}

/// DTO for an inline QR preview request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QrBase64Request {
    #[serde(default)]
    pub text: Option<String>,
}

/// DTO for an inline QR preview
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QrBase64Response {
    pub success: bool,
    pub image_base64: String,
    pub mime_type: String,
}

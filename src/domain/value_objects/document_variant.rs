use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::BinderSize;

/// Kind of binder label, selected by the `doc_type` code on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentVariant {
    /// Equipment documents (`doc_type = "1"`)
    Equipment,
    /// Project documents (`doc_type = "2"`)
    Project,
}

impl DocumentVariant {
    pub const ALL: [DocumentVariant; 2] = [DocumentVariant::Equipment, DocumentVariant::Project];

    /// Request code for this variant
    pub fn code(&self) -> &'static str {
        match self {
            DocumentVariant::Equipment => "1",
            DocumentVariant::Project => "2",
        }
    }

    /// Thinnest binder this variant may be printed for
    pub fn min_binder_size(&self) -> BinderSize {
        match self {
            DocumentVariant::Equipment => BinderSize::OneCm,
            DocumentVariant::Project => BinderSize::ThreeCm,
        }
    }

    pub fn accepts(&self, binder_size: BinderSize) -> bool {
        binder_size >= self.min_binder_size()
    }
}

impl std::fmt::Display for DocumentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentVariant::Equipment => write!(f, "equipment"),
            DocumentVariant::Project => write!(f, "project"),
        }
    }
}

impl std::str::FromStr for DocumentVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(DocumentVariant::Equipment),
            "2" => Ok(DocumentVariant::Project),
            other => Err(DomainError::InvalidVariant(other.to_string())),
        }
    }
}

//! Error type shared by the label use cases
//!
//! Validation kinds are kept flat so callers can tell user mistakes apart
//! from build failures without digging through nested domain errors.

use thiserror::Error;

use crate::application::ports::{QrEncodingError, SerializationError, StorageError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{BinderSize, DocumentVariant};

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Invalid document type: {0}")]
    InvalidVariant(String),

    #[error("Invalid binder size: {0}")]
    InvalidBinderSize(String),

    #[error("{variant} labels require at least a {min} binder, got {binder_size}")]
    IncompatibleBinderSize {
        variant: DocumentVariant,
        binder_size: BinderSize,
        min: BinderSize,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("QR encoding error: {0}")]
    QrEncoding(#[from] QrEncodingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LabelError {
    /// True for errors caused by the request itself
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LabelError::InvalidVariant(_)
                | LabelError::InvalidBinderSize(_)
                | LabelError::IncompatibleBinderSize { .. }
                | LabelError::MissingField(_)
        )
    }
}

impl From<DomainError> for LabelError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidVariant(v) => LabelError::InvalidVariant(v),
            DomainError::InvalidBinderSize(v) => LabelError::InvalidBinderSize(v),
            DomainError::IncompatibleBinderSize {
                variant,
                binder_size,
                min,
            } => LabelError::IncompatibleBinderSize {
                variant,
                binder_size,
                min,
            },
            DomainError::MissingField(field) => LabelError::MissingField(field),
            other @ (DomainError::InvalidCellReference(_)
            | DomainError::InvalidStateTransition { .. }) => {
                LabelError::Internal(other.to_string())
            }
        }
    }
}

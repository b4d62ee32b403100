use thiserror::Error;

use super::value_objects::{BinderSize, BuildState, DocumentVariant};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
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

    #[error("Invalid cell reference: {0}")]
    InvalidCellReference(String),

    #[error("Invalid build state transition from {from:?} to {to:?}")]
    InvalidStateTransition { from: BuildState, to: BuildState },
}

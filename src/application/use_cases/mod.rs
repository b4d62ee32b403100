mod create_label;
mod qr_preview;

pub use create_label::{CreateLabelUseCase, DEFAULT_MAX_COPIES};
pub use qr_preview::{PreviewError, QrPreviewUseCase};

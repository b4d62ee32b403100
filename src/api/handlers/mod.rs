pub mod download;
pub mod health;
pub mod labels;
pub mod qr;

pub use download::download_handler;
pub use health::health_handler;
pub use labels::{create_label_api_handler, create_label_form_handler, LabelState};
pub use qr::{qr_base64_handler, qr_image_handler};

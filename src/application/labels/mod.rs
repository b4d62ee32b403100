//! Label document generation: sheet building, payloads and assembly

mod assembler;
pub mod file_names;
mod payload;
mod sheet_builder;

pub use assembler::DocumentAssembler;
pub use payload::{QrPayload, PAYLOAD_SEPARATOR};
pub use sheet_builder::SheetBuilder;
